use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::matching::suggestions::SuggestionEngine;
use crate::matching::taxonomy::Vocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skills taxonomy + stopwords, built once at startup.
    pub vocabulary: Arc<Vocabulary>,
    pub suggestions: Arc<SuggestionEngine>,
    /// Pluggable document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
