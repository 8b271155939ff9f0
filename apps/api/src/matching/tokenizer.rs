//! Tokenizer: raw text -> deduplicated lowercase keywords.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::taxonomy::StopwordSet;

/// Unique keywords of one text. Membership only, no counts.
pub type TokenSet = HashSet<String>;

// Unicode-aware word class: letters, digits, underscore.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Lowercases `text`, splits it on non-word characters and drops stopwords.
pub fn extract_keywords(text: &str, stopwords: &StopwordSet) -> TokenSet {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !stopwords.contains(w))
        .map(String::from)
        .collect()
}
