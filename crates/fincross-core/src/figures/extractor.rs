//! Pattern-driven financial figure extraction.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::models::analysis::DocumentKind;
use crate::models::config::{ExtractionConfig, PatternProfile};
use crate::models::figure::ExtractedFigure;

use super::patterns::patterns_for;
use super::years::YearIndex;

/// Trait for figure extractors.
pub trait FigureExtractor {
    /// Extract all financial figures from a document's text.
    fn extract(&self, text: &str, document_name: &str) -> Vec<ExtractedFigure>;
}

/// Regex-table extractor configured by a pattern profile.
pub struct PatternFigureExtractor {
    config: ExtractionConfig,
}

impl PatternFigureExtractor {
    /// Create an extractor with the default (enhanced) profile.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the pattern profile.
    pub fn with_profile(mut self, profile: PatternProfile) -> Self {
        self.config.profile = profile;
        self
    }

    /// Set the maximum year attribution distance in characters.
    pub fn with_year_max_distance(mut self, distance: usize) -> Self {
        self.config.year_max_distance = distance;
        self
    }

    /// Human-readable provenance for a match at `offset`.
    fn location(&self, kind: DocumentKind, offset: usize) -> String {
        match kind {
            DocumentKind::Pdf => format!("Page ~{}", offset / self.config.pdf_page_chars + 1),
            DocumentKind::Xlsx => "Excel worksheet".to_string(),
            DocumentKind::Docx => "Word document".to_string(),
            DocumentKind::Other => "Document content".to_string(),
        }
    }
}

impl Default for PatternFigureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureExtractor for PatternFigureExtractor {
    fn extract(&self, text: &str, document_name: &str) -> Vec<ExtractedFigure> {
        let years = YearIndex::build(text);
        let kind = DocumentKind::from_name(document_name);
        let confidence = self.config.profile.confidence();

        let mut figures = Vec::new();

        for field_patterns in patterns_for(self.config.profile) {
            for pattern in &field_patterns.patterns {
                for caps in pattern.captures_iter(text) {
                    let Some(value) = parse_amount(&caps[1]) else {
                        continue;
                    };

                    let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
                    let year = years.attribute(offset, self.config.year_max_distance);

                    figures.push(ExtractedFigure {
                        category: field_patterns.field.category(),
                        field: field_patterns.field,
                        year: year.to_string(),
                        value,
                        document_name: document_name.to_string(),
                        location: self.location(kind, offset),
                        confidence,
                    });
                }
            }
        }

        debug!(
            "extracted {} figures from {} ({} chars)",
            figures.len(),
            document_name,
            text.len()
        );

        figures
    }
}

/// Parse a captured amount, stripping thousands separators. Returns `None`
/// for unparsable or non-positive values.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw.replace(',', "");
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|value| value.is_sign_positive() && !value.is_zero())
}
