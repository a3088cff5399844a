//! Text extraction — turns an uploaded PDF into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; `PdfTextExtractor` is the
//! production backend. Handlers never call `pdf_extract` directly.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("PDF extraction worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// The extraction trait. Implement this to swap backends without touching
/// the handler.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the full-document text of `data`, untrimmed.
    async fn extract(&self, data: Bytes) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor.
///
/// Parsing is CPU-bound and synchronous, so it runs on the blocking pool.
/// A panic inside the PDF library surfaces as `ExtractionError::Worker`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Bytes) -> Result<String, ExtractionError> {
        let size = data.len();
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data)
                .map_err(|e| ExtractionError::Parse(e.to_string()))
        })
        .await??;

        debug!("Extracted {} chars from {} byte PDF", text.chars().count(), size);
        Ok(text)
    }
}

/// Strips leading and trailing whitespace; interior formatting is kept verbatim.
pub fn normalize_extracted_text(raw: &str) -> &str {
    raw.trim()
}
