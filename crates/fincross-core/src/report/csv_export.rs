//! CSV export of a cross-check report.

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{FincrossError, Result};
use crate::models::report::CrossCheckReport;

/// Render the report as CSV: `Year,Field,Category,<doc...>,Consistent`,
/// one row per comparison, every value quoted, absent values empty.
pub fn render_csv(report: &CrossCheckReport) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(vec![]);

    let mut header = vec!["Year".to_string(), "Field".to_string(), "Category".to_string()];
    header.extend(report.document_names().iter().map(|n| n.to_string()));
    header.push("Consistent".to_string());
    wtr.write_record(&header)?;

    for comparison in &report.comparisons {
        let mut record = vec![
            comparison.year.clone(),
            comparison.field.to_string(),
            comparison.category.to_string(),
        ];
        record.extend(
            comparison
                .entries
                .iter()
                .map(|e| e.value.map(|v| v.to_string()).unwrap_or_default()),
        );
        record.push(if comparison.consistent { "Yes" } else { "No" }.to_string());
        wtr.write_record(&record)?;
    }

    let buffer = wtr
        .into_inner()
        .map_err(|e| FincrossError::Export(csv::Error::from(e.into_error())))?;
    String::from_utf8(buffer).map_err(|e| FincrossError::Config(e.to_string()))
}
