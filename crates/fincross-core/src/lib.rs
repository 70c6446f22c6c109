//! Core library for cross-document financial figure reconciliation.
//!
//! This crate provides:
//! - Regex-driven extraction of financial figures from document text
//! - Fiscal year attribution by textual proximity
//! - Sequential per-document analysis over an uploaded file set
//! - Cross-document comparison flagging numeric discrepancies
//! - Plain-text and CSV report export

pub mod analyze;
pub mod compare;
pub mod error;
pub mod figures;
pub mod models;
pub mod report;
pub mod session;

pub use analyze::{DocumentAnalyzer, DocumentStore, StoredDocument, TextExtraction};
pub use compare::compare;
pub use error::{
    ExtractionError, FincrossError, Result, UploadError, ValidationError,
};
pub use figures::{FigureExtractor, PatternFigureExtractor};
pub use models::{
    BatchSummary, ComparisonResult, CrossCheckReport, DocumentAnalysis, DocumentFile,
    ExtractedFigure, ExtractionStatus, FigureField, FincrossConfig, PatternProfile,
    ReportSummary, StatementCategory,
};
pub use report::{render_csv, render_text};
pub use session::CrossCheckSession;
