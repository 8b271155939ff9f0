mod config;
mod errors;
mod extraction;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::matching::suggestions::SuggestionEngine;
use crate::matching::taxonomy::Vocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = Vocabulary::default();
    info!(
        "Vocabulary loaded: {} skills, {} stopwords",
        vocabulary.taxonomy.len(),
        vocabulary.stopwords.len()
    );
    info!("Score basis: {:?}", config.score_basis);

    let state = AppState {
        config: config.clone(),
        vocabulary: Arc::new(vocabulary),
        suggestions: Arc::new(SuggestionEngine::default()),
        extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
