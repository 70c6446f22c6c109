//! Cross-document comparison and report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::analysis::DocumentAnalysis;
use super::figure::{FigureField, StatementCategory};

/// One document's contribution to a single comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Document name, in analysis order.
    pub document: String,

    /// The document's value for this (field, year), absent when the
    /// document reported nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    /// Provenance of the contributing figure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Cross-document comparison for one (field, year) pair.
///
/// Only constructed when at least two documents carry a value for the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Fiscal year under comparison.
    pub year: String,

    /// Line item under comparison.
    pub field: FigureField,

    /// Statement the line item belongs to.
    pub category: StatementCategory,

    /// Per-document values, one entry per analyzed document.
    pub entries: Vec<ComparisonEntry>,

    /// True iff all present values are numerically identical.
    pub consistent: bool,

    /// Numeric spread of the present values (max - min); zero when
    /// consistent.
    pub variance: Decimal,

    /// Human-readable follow-up naming the value range, set for
    /// discrepancies only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Derived counts over all comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of (field, year) pairs compared.
    pub total_comparisons: usize,

    /// Comparisons where every present value agreed.
    pub consistent_count: usize,

    /// Comparisons with at least one disagreeing value.
    pub discrepancy_count: usize,

    /// Percentage of discrepancy-free comparisons; `None` when nothing was
    /// comparable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency_score: Option<f64>,

    /// Leading discrepancy summaries in discovery order, capped.
    pub key_discrepancies: Vec<String>,

    /// Categories containing at least one consistent comparison.
    pub consistent_sections: Vec<StatementCategory>,
}

/// Aggregate of all analyses plus all cross-document comparisons.
///
/// A disposable view: rebuilt from the analysis list whenever it changes,
/// never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossCheckReport {
    /// Per-document extraction outcomes the report was derived from.
    pub analyses: Vec<DocumentAnalysis>,

    /// All (field, year) comparisons with at least two present values.
    pub comparisons: Vec<ComparisonResult>,

    /// Derived counts.
    pub summary: ReportSummary,
}

impl CrossCheckReport {
    /// Names of the compared documents, in analysis order.
    pub fn document_names(&self) -> Vec<&str> {
        self.analyses.iter().map(|a| a.file_name.as_str()).collect()
    }
}
