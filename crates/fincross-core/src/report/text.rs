//! Plain-text export of a cross-check report.

use crate::models::analysis::ExtractionStatus;
use crate::models::figure::StatementCategory;
use crate::models::report::CrossCheckReport;

/// Render the report as sectioned plain text: header, executive summary,
/// per-category detailed comparisons.
pub fn render_text(report: &CrossCheckReport) -> String {
    let mut output = String::new();

    output.push_str("FINANCIAL CROSS-CHECK REPORT\n");
    output.push_str("============================\n\n");

    output.push_str("Documents:\n");
    for analysis in &report.analyses {
        let status = match analysis.status {
            ExtractionStatus::Success => "ok",
            ExtractionStatus::Partial => "no figures",
            ExtractionStatus::Failed => "failed",
        };
        output.push_str(&format!(
            "  - {} [{}] ({} figures)\n",
            analysis.file_name,
            status,
            analysis.figures.len()
        ));
        if let Some(error) = &analysis.error_message {
            output.push_str(&format!("    {}\n", error));
        }
    }
    output.push('\n');

    let summary = &report.summary;
    output.push_str("EXECUTIVE SUMMARY\n");
    output.push_str("-----------------\n");
    output.push_str(&format!("Comparisons:   {}\n", summary.total_comparisons));
    output.push_str(&format!("Consistent:    {}\n", summary.consistent_count));
    output.push_str(&format!("Discrepancies: {}\n", summary.discrepancy_count));
    match summary.consistency_score {
        Some(score) => output.push_str(&format!("Consistency:   {:.1}%\n", score)),
        None => output.push_str("Consistency:   n/a (nothing to compare)\n"),
    }

    if !summary.key_discrepancies.is_empty() {
        output.push_str("\nKey discrepancies:\n");
        for line in &summary.key_discrepancies {
            output.push_str(&format!("  - {}\n", line));
        }
    }
    output.push('\n');

    for category in StatementCategory::ALL {
        let rows: Vec<_> = report
            .comparisons
            .iter()
            .filter(|c| c.category == category)
            .collect();
        if rows.is_empty() {
            continue;
        }

        output.push_str(&format!("{}\n", category.to_string().to_uppercase()));
        output.push_str(&format!("{}\n", "-".repeat(category.to_string().len())));

        for comparison in rows {
            let verdict = if comparison.consistent {
                "consistent".to_string()
            } else {
                format!("variance {}", comparison.variance)
            };
            output.push_str(&format!(
                "{} ({}): {}\n",
                comparison.field, comparison.year, verdict
            ));

            for entry in &comparison.entries {
                let value = entry
                    .value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string());
                match &entry.location {
                    Some(location) => output.push_str(&format!(
                        "  {}: {} ({})\n",
                        entry.document, value, location
                    )),
                    None => output.push_str(&format!("  {}: {}\n", entry.document, value)),
                }
            }

            if let Some(suggestion) = &comparison.suggestion {
                output.push_str(&format!("  Suggestion: {}\n", suggestion));
            }
            output.push('\n');
        }
    }

    output
}
