//! Uploaded document and per-document analysis models.

use serde::{Deserialize, Serialize};

use super::figure::ExtractedFigure;

/// A document handed to the pipeline for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    /// File name, unique per upload within a session.
    pub name: String,

    /// Raw file content.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Size of the file content in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercased file extension, empty when there is none.
    pub fn extension(&self) -> String {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }

    /// Document kind derived from the extension.
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_name(&self.name)
    }
}

/// Supported document types, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Xlsx,
    Other,
}

impl DocumentKind {
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            "xlsx" => DocumentKind::Xlsx,
            _ => DocumentKind::Other,
        }
    }

    pub fn from_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }
}

/// Outcome classification for one document's extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// Extraction ran and produced at least one figure.
    Success,
    /// Extraction ran but no figures matched.
    Partial,
    /// Validation, upload, or extraction raised an error.
    Failed,
}

/// One document's extraction outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Name of the analyzed document.
    pub file_name: String,

    /// Figures extracted from the document.
    pub figures: Vec<ExtractedFigure>,

    /// Outcome classification.
    pub status: ExtractionStatus,

    /// Error description when the document failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DocumentAnalysis {
    /// Classify a completed extraction: Success iff any figures matched.
    pub fn completed(file_name: impl Into<String>, figures: Vec<ExtractedFigure>) -> Self {
        let status = if figures.is_empty() {
            ExtractionStatus::Partial
        } else {
            ExtractionStatus::Success
        };
        Self {
            file_name: file_name.into(),
            figures,
            status,
            error_message: None,
        }
    }

    /// Record a per-document failure.
    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            figures: Vec::new(),
            status: ExtractionStatus::Failed,
            error_message: Some(error.into()),
        }
    }
}

/// Batch-level counts for the end-of-run notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub partial: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_analyses(analyses: &[DocumentAnalysis]) -> Self {
        let mut summary = BatchSummary {
            total: analyses.len(),
            ..BatchSummary::default()
        };
        for analysis in analyses {
            match analysis.status {
                ExtractionStatus::Success => summary.succeeded += 1,
                ExtractionStatus::Partial => summary.partial += 1,
                ExtractionStatus::Failed => summary.failed += 1,
            }
        }
        summary
    }
}
