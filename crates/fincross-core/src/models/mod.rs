//! Data models for documents, figures, comparisons, and configuration.

pub mod analysis;
pub mod config;
pub mod figure;
pub mod report;

pub use analysis::{
    BatchSummary, DocumentAnalysis, DocumentFile, DocumentKind, ExtractionStatus,
};
pub use config::{ExtractionConfig, FincrossConfig, LimitsConfig, PatternProfile};
pub use figure::{ExtractedFigure, FigureField, StatementCategory};
pub use report::{ComparisonEntry, ComparisonResult, CrossCheckReport, ReportSummary};
