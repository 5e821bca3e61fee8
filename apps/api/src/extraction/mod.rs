//! Document-to-text conversion.
//!
//! The PDF decoder is treated as an opaque collaborator behind `DocumentExtractor`.
//! `AppState` carries an `Arc<dyn DocumentExtractor>` so the upload handler never
//! depends on a concrete decoder.

use std::sync::Arc;

use thiserror::Error;

/// Plain text pulled out of an uploaded document. Request-scoped, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("the uploaded document is empty")]
    EmptyDocument,

    #[error("{0}")]
    Pdf(String),

    #[error("the document contains no extractable text")]
    NoText,

    #[error("document extraction aborted: {0}")]
    Aborted(String),
}

pub trait DocumentExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<DocumentText, ExtractionError>;
}

/// Default extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl DocumentExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<DocumentText, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        // Image-only scans decode without error but carry no text layer.
        if text.trim().is_empty() {
            return Err(ExtractionError::NoText);
        }
        Ok(DocumentText::new(text))
    }
}

/// Runs the extractor on the blocking pool. The PDF decoder can panic on
/// malformed input; the panic surfaces here as `ExtractionError::Aborted`.
pub async fn extract_blocking(
    extractor: Arc<dyn DocumentExtractor>,
    bytes: bytes::Bytes,
) -> Result<DocumentText, ExtractionError> {
    tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
}
