//! Cross-document comparison of extracted figures.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::analysis::DocumentAnalysis;
use crate::models::figure::{FigureField, StatementCategory};
use crate::models::report::{
    ComparisonEntry, ComparisonResult, CrossCheckReport, ReportSummary,
};

/// Cap on the summary's leading discrepancy list.
const KEY_DISCREPANCY_LIMIT: usize = 5;

/// Compare figures across all analyzed documents.
///
/// A pure function over the analysis list: the same input always yields the
/// same report. Only (field, year) pairs where at least two documents carry
/// a value produce a comparison.
pub fn compare(analyses: &[DocumentAnalysis]) -> CrossCheckReport {
    let figures = || analyses.iter().flat_map(|a| a.figures.iter());

    let years: BTreeSet<&str> = figures().map(|f| f.year.as_str()).collect();
    let observed: BTreeSet<FigureField> = figures().map(|f| f.field).collect();
    let fields: Vec<FigureField> = FigureField::ALL
        .into_iter()
        .filter(|f| observed.contains(f))
        .collect();

    let mut comparisons = Vec::new();

    for year in &years {
        for field in &fields {
            // First match wins when a document repeats a (field, year).
            let entries: Vec<ComparisonEntry> = analyses
                .iter()
                .map(|analysis| {
                    let figure = analysis
                        .figures
                        .iter()
                        .find(|f| f.field == *field && f.year == *year);
                    ComparisonEntry {
                        document: analysis.file_name.clone(),
                        value: figure.map(|f| f.value),
                        location: figure.map(|f| f.location.clone()),
                    }
                })
                .collect();

            let present: Vec<Decimal> = entries.iter().filter_map(|e| e.value).collect();
            if present.len() < 2 {
                continue;
            }

            let consistent = present.iter().all(|v| *v == present[0]);
            let (variance, suggestion) = if consistent {
                (Decimal::ZERO, None)
            } else {
                let min = present.iter().min().copied().unwrap_or_default();
                let max = present.iter().max().copied().unwrap_or_default();
                (
                    max - min,
                    Some(format!(
                        "{field} for {year} ranges from {min} to {max}; verify against the source statements"
                    )),
                )
            };

            comparisons.push(ComparisonResult {
                year: (*year).to_string(),
                field: *field,
                category: field.category(),
                entries,
                consistent,
                variance,
                suggestion,
            });
        }
    }

    let summary = summarize(&comparisons);
    debug!(
        "compared {} documents: {} comparisons, {} discrepancies",
        analyses.len(),
        summary.total_comparisons,
        summary.discrepancy_count
    );

    CrossCheckReport {
        analyses: analyses.to_vec(),
        comparisons,
        summary,
    }
}

fn summarize(comparisons: &[ComparisonResult]) -> ReportSummary {
    let total_comparisons = comparisons.len();
    let consistent_count = comparisons.iter().filter(|c| c.consistent).count();
    let discrepancy_count = total_comparisons - consistent_count;

    let consistency_score = (total_comparisons > 0)
        .then(|| consistent_count as f64 / total_comparisons as f64 * 100.0);

    let key_discrepancies: Vec<String> = comparisons
        .iter()
        .filter(|c| !c.consistent)
        .take(KEY_DISCREPANCY_LIMIT)
        .map(|c| {
            format!(
                "{} ({}) differs across documents by {}",
                c.field, c.year, c.variance
            )
        })
        .collect();

    let consistent_sections: Vec<StatementCategory> = StatementCategory::ALL
        .into_iter()
        .filter(|category| {
            comparisons
                .iter()
                .any(|c| c.consistent && c.category == *category)
        })
        .collect();

    ReportSummary {
        total_comparisons,
        consistent_count,
        discrepancy_count,
        consistency_score,
        key_discrepancies,
        consistent_sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::figure::ExtractedFigure;
    use pretty_assertions::assert_eq;

    fn figure(document: &str, field: FigureField, year: &str, value: i64) -> ExtractedFigure {
        ExtractedFigure {
            category: field.category(),
            field,
            year: year.to_string(),
            value: Decimal::from(value),
            document_name: document.to_string(),
            location: "Page ~1".to_string(),
            confidence: 0.9,
        }
    }

    fn analysis(document: &str, figures: Vec<ExtractedFigure>) -> DocumentAnalysis {
        DocumentAnalysis::completed(document, figures)
    }

    #[test]
    fn test_matching_values_are_consistent() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![figure("a.pdf", FigureField::Revenue, "2024", 1_000_000)],
            ),
            analysis(
                "b.pdf",
                vec![figure("b.pdf", FigureField::Revenue, "2024", 1_000_000)],
            ),
        ];

        let report = compare(&analyses);
        assert_eq!(report.comparisons.len(), 1);

        let comparison = &report.comparisons[0];
        assert!(comparison.consistent);
        assert_eq!(comparison.variance, Decimal::ZERO);
        assert!(comparison.suggestion.is_none());
        assert_eq!(report.summary.consistency_score, Some(100.0));
        assert_eq!(
            report.summary.consistent_sections,
            vec![StatementCategory::IncomeStatement]
        );
    }

    #[test]
    fn test_discrepancy_variance_is_the_spread() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![figure("a.pdf", FigureField::Revenue, "2024", 1_000_000)],
            ),
            analysis(
                "b.pdf",
                vec![figure("b.pdf", FigureField::Revenue, "2024", 1_200_000)],
            ),
        ];

        let report = compare(&analyses);
        let comparison = &report.comparisons[0];
        assert!(!comparison.consistent);
        assert_eq!(comparison.variance, Decimal::from(200_000));
        assert!(comparison.suggestion.as_ref().unwrap().contains("1000000"));
        assert_eq!(report.summary.discrepancy_count, 1);
        assert_eq!(report.summary.consistency_score, Some(0.0));
        assert_eq!(report.summary.key_discrepancies.len(), 1);
    }

    #[test]
    fn test_single_document_yields_no_comparisons() {
        let analyses = vec![analysis(
            "a.pdf",
            vec![figure("a.pdf", FigureField::Revenue, "2024", 1_000_000)],
        )];

        let report = compare(&analyses);
        assert!(report.comparisons.is_empty());
        assert_eq!(report.summary.total_comparisons, 0);
        assert_eq!(report.summary.consistency_score, None);
    }

    #[test]
    fn test_partial_documents_contribute_nothing() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![figure("a.pdf", FigureField::Revenue, "2024", 1_000_000)],
            ),
            analysis("empty.pdf", Vec::new()),
        ];

        let report = compare(&analyses);
        assert!(report.comparisons.is_empty());
        assert_eq!(report.analyses.len(), 2);
    }

    #[test]
    fn test_absent_values_do_not_block_the_pair() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![figure("a.pdf", FigureField::Revenue, "2024", 500)],
            ),
            analysis(
                "b.pdf",
                vec![figure("b.pdf", FigureField::Revenue, "2024", 500)],
            ),
            analysis(
                "c.pdf",
                vec![figure("c.pdf", FigureField::NetIncome, "2024", 100)],
            ),
        ];

        let report = compare(&analyses);
        // Revenue has two present values; Net Income only one.
        assert_eq!(report.comparisons.len(), 1);
        let comparison = &report.comparisons[0];
        assert_eq!(comparison.field, FigureField::Revenue);
        assert_eq!(comparison.entries.len(), 3);
        assert_eq!(comparison.entries[2].value, None);
    }

    #[test]
    fn test_first_match_wins_within_a_document() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![
                    figure("a.pdf", FigureField::Revenue, "2024", 1_000_000),
                    figure("a.pdf", FigureField::Revenue, "2024", 999_999),
                ],
            ),
            analysis(
                "b.pdf",
                vec![figure("b.pdf", FigureField::Revenue, "2024", 1_000_000)],
            ),
        ];

        let report = compare(&analyses);
        assert!(report.comparisons[0].consistent);
    }

    #[test]
    fn test_count_arithmetic_holds() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![
                    figure("a.pdf", FigureField::Revenue, "2024", 100),
                    figure("a.pdf", FigureField::NetIncome, "2024", 10),
                    figure("a.pdf", FigureField::TotalAssets, "2023", 900),
                ],
            ),
            analysis(
                "b.pdf",
                vec![
                    figure("b.pdf", FigureField::Revenue, "2024", 100),
                    figure("b.pdf", FigureField::NetIncome, "2024", 12),
                    figure("b.pdf", FigureField::TotalAssets, "2023", 900),
                ],
            ),
        ];

        let report = compare(&analyses);
        let summary = &report.summary;
        assert_eq!(
            summary.consistent_count + summary.discrepancy_count,
            summary.total_comparisons
        );
        assert_eq!(summary.total_comparisons, 3);
        assert_eq!(summary.discrepancy_count, 1);
        assert_eq!(
            summary.consistent_sections,
            vec![
                StatementCategory::IncomeStatement,
                StatementCategory::BalanceSheet
            ]
        );
    }

    #[test]
    fn test_key_discrepancies_are_capped() {
        let fields = [
            FigureField::Revenue,
            FigureField::GrossProfit,
            FigureField::OperatingIncome,
            FigureField::Ebitda,
            FigureField::NetIncome,
            FigureField::TotalAssets,
        ];

        let doc = |name: &str, base: i64| {
            analysis(
                name,
                fields
                    .iter()
                    .map(|f| figure(name, *f, "2024", base))
                    .collect(),
            )
        };

        let report = compare(&[doc("a.pdf", 100), doc("b.pdf", 200)]);
        assert_eq!(report.summary.discrepancy_count, 6);
        assert_eq!(report.summary.key_discrepancies.len(), 5);
    }

    #[test]
    fn test_comparator_is_idempotent() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![
                    figure("a.pdf", FigureField::Revenue, "2023", 90),
                    figure("a.pdf", FigureField::Revenue, "2024", 100),
                ],
            ),
            analysis(
                "b.pdf",
                vec![
                    figure("b.pdf", FigureField::Revenue, "2023", 95),
                    figure("b.pdf", FigureField::Revenue, "2024", 100),
                ],
            ),
        ];

        let first = compare(&analyses);
        let second = compare(&analyses);
        assert_eq!(first.comparisons, second.comparisons);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_rows_are_ordered_by_year_then_field() {
        let analyses = vec![
            analysis(
                "a.pdf",
                vec![
                    figure("a.pdf", FigureField::NetIncome, "2024", 10),
                    figure("a.pdf", FigureField::Revenue, "2024", 100),
                    figure("a.pdf", FigureField::Revenue, "2023", 90),
                ],
            ),
            analysis(
                "b.pdf",
                vec![
                    figure("b.pdf", FigureField::NetIncome, "2024", 10),
                    figure("b.pdf", FigureField::Revenue, "2024", 100),
                    figure("b.pdf", FigureField::Revenue, "2023", 90),
                ],
            ),
        ];

        let report = compare(&analyses);
        let rows: Vec<(String, FigureField)> = report
            .comparisons
            .iter()
            .map(|c| (c.year.clone(), c.field))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2023".to_string(), FigureField::Revenue),
                ("2024".to_string(), FigureField::Revenue),
                ("2024".to_string(), FigureField::NetIncome),
            ]
        );
    }
}
