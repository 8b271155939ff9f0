//! Document text extraction: turns an uploaded resume into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`. Default: `PdfTextExtractor`.
//! A page with no extractable text contributes nothing; a document that
//! cannot be parsed at all is an `ExtractionError`.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("Document is empty")]
    Empty,

    #[error("Could not read document: {0}")]
    Unreadable(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// PDF extractor backed by `pdf-extract`. Parsing runs on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, bytes: Bytes) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }
        let size = bytes.len();

        // pdf-extract may panic on malformed input; a panicked task surfaces as a JoinError.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                warn!("PDF extraction task failed: {e}");
                ExtractionError::Unreadable("parser aborted".to_string())
            })?
            .map_err(|e| {
                warn!("PDF extraction failed: {e}");
                ExtractionError::Unreadable(e.to_string())
            })?;

        debug!(bytes = size, chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}

/// Accepts an upload when either its content type or its file name says PDF.
pub fn ensure_pdf(file_name: Option<&str>, content_type: Option<&str>) -> Result<(), ExtractionError> {
    let type_ok = content_type
        .map(|ct| media_type(ct).eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);
    let name_ok = file_name
        .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);

    if type_ok || name_ok {
        Ok(())
    } else {
        Err(ExtractionError::UnsupportedType(
            content_type
                .or(file_name)
                .unwrap_or("unknown")
                .to_string(),
        ))
    }
}

/// Media type without parameters: `application/pdf; name=cv.pdf` -> `application/pdf`.
fn media_type(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or_default().trim()
}

/// Joins extracted and typed resume text with a single space, trimmed.
pub fn combine_resume_text(extracted: &str, manual: &str) -> String {
    format!("{extracted} {manual}").trim().to_string()
}
