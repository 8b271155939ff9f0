// Keyword matching core: tokenizer, taxonomy, matcher, suggestion rules.
// Pure and synchronous. HTTP and document handling live in handlers/extraction.

pub mod handlers;
pub mod matcher;
pub mod report;
pub mod suggestions;
pub mod taxonomy;
pub mod tokenizer;
