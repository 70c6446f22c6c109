//! Error types for the fincross-core library.

use thiserror::Error;

/// Main error type for the fincross library.
#[derive(Error, Debug)]
pub enum FincrossError {
    /// File validation error (rejected before upload).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Document staging/upload error.
    #[error("upload error: {0}")]
    Upload(#[from] UploadError),

    /// Text extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Report export error.
    #[error("export error: {0}")]
    Export(#[from] csv::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while validating an uploaded file.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The file has no content.
    #[error("{0} is empty")]
    Empty(String),

    /// The file exceeds the size limit.
    #[error("{name} is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge { name: String, size: u64, limit: u64 },

    /// The file extension is not a supported document type.
    #[error("{name}: unsupported file type \"{extension}\"")]
    UnsupportedType { name: String, extension: String },
}

/// Errors raised while staging a document with the storage collaborator.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The storage service rejected or failed the upload.
    #[error("upload failed: {0}")]
    Service(String),
}

/// Errors raised while extracting text from a document.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A single extraction strategy failed.
    #[error("extraction service failed: {0}")]
    Service(String),

    /// Extraction succeeded but produced no usable text.
    #[error("no text content could be extracted from the document")]
    EmptyText,

    /// Both the URL-based and content-based strategies failed.
    #[error("all extraction strategies failed (url: {url_error}; content: {content_error})")]
    AllStrategiesFailed {
        url_error: String,
        content_error: String,
    },
}

/// Result type for the fincross library.
pub type Result<T> = std::result::Result<T, FincrossError>;
