//! Document analysis: collaborator seams and the batch analyzer.

mod analyzer;

pub use analyzer::DocumentAnalyzer;

use crate::error::{ExtractionError, UploadError};
use crate::models::analysis::DocumentFile;

/// A document staged with the storage collaborator.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Publicly reachable URL for URL-based extraction.
    pub public_url: String,
}

/// External text-extraction service.
///
/// Two independent strategies; the analyzer tries the URL-based strategy
/// first and falls back to content-based extraction.
#[allow(async_fn_in_trait)]
pub trait TextExtraction {
    /// Extract raw text from a staged document URL.
    async fn extract_from_url(&self, url: &str) -> Result<String, ExtractionError>;

    /// Extract raw text directly from the file content.
    async fn extract_from_blob(&self, file: &DocumentFile) -> Result<String, ExtractionError>;
}

/// External document storage used to stage files before URL-based
/// extraction.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn upload(
        &self,
        file: &DocumentFile,
        path: &str,
        overwrite: bool,
    ) -> Result<StoredDocument, UploadError>;
}
