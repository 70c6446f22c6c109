//! Session state: the files, analyses, and derived report of one run.

use crate::analyze::{DocumentAnalyzer, DocumentStore, TextExtraction};
use crate::compare::compare;
use crate::models::analysis::{BatchSummary, DocumentAnalysis, DocumentFile};
use crate::models::report::CrossCheckReport;

/// Explicit session state passed between the pipeline stages.
///
/// The report is a derived view: it is recomputed from scratch whenever the
/// analysis set changes and never mutated in place. Nothing here is shared
/// or persisted beyond the session.
#[derive(Debug, Default)]
pub struct CrossCheckSession {
    files: Vec<DocumentFile>,
    analyses: Vec<DocumentAnalysis>,
    report: Option<CrossCheckReport>,
}

impl CrossCheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[DocumentFile] {
        &self.files
    }

    pub fn analyses(&self) -> &[DocumentAnalysis] {
        &self.analyses
    }

    /// The current report, present once at least one document was analyzed.
    pub fn report(&self) -> Option<&CrossCheckReport> {
        self.report.as_ref()
    }

    /// Queue a file for the next run. A file with the same name replaces
    /// the earlier upload.
    pub fn add_file(&mut self, file: DocumentFile) {
        self.files.retain(|f| f.name != file.name);
        self.files.push(file);
    }

    /// Analyze every queued file and rebuild the report.
    pub async fn run<S, X>(
        &mut self,
        analyzer: &DocumentAnalyzer<S, X>,
        on_progress: impl FnMut(usize, usize, &str),
    ) -> BatchSummary
    where
        S: DocumentStore,
        X: TextExtraction,
    {
        let analyses = analyzer.analyze_batch(&self.files, on_progress).await;
        self.set_analyses(analyses)
    }

    /// Replace the analysis set and rebuild the report.
    pub fn set_analyses(&mut self, analyses: Vec<DocumentAnalysis>) -> BatchSummary {
        self.analyses = analyses;
        self.recompute();
        BatchSummary::from_analyses(&self.analyses)
    }

    /// Drop one document and rebuild the report from the remainder.
    pub fn remove_document(&mut self, name: &str) {
        self.files.retain(|f| f.name != name);
        self.analyses.retain(|a| a.file_name != name);
        self.recompute();
    }

    /// Discard all session state.
    pub fn clear(&mut self) {
        self.files.clear();
        self.analyses.clear();
        self.report = None;
    }

    fn recompute(&mut self) {
        self.report = (!self.analyses.is_empty()).then(|| compare(&self.analyses));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::figure::{ExtractedFigure, FigureField};
    use rust_decimal::Decimal;

    fn revenue(document: &str, value: i64) -> DocumentAnalysis {
        DocumentAnalysis::completed(
            document,
            vec![ExtractedFigure {
                category: FigureField::Revenue.category(),
                field: FigureField::Revenue,
                year: "2024".to_string(),
                value: Decimal::from(value),
                document_name: document.to_string(),
                location: "Page ~1".to_string(),
                confidence: 0.9,
            }],
        )
    }

    #[test]
    fn test_report_is_rebuilt_when_analyses_change() {
        let mut session = CrossCheckSession::new();
        assert!(session.report().is_none());

        let summary =
            session.set_analyses(vec![revenue("a.pdf", 100), revenue("b.pdf", 120)]);
        assert_eq!(summary.succeeded, 2);

        let report = session.report().unwrap();
        assert_eq!(report.summary.discrepancy_count, 1);

        session.remove_document("b.pdf");
        let report = session.report().unwrap();
        assert_eq!(report.summary.total_comparisons, 0);
        assert_eq!(report.analyses.len(), 1);
    }

    #[test]
    fn test_adding_a_file_twice_replaces_it() {
        let mut session = CrossCheckSession::new();
        session.add_file(DocumentFile::new("a.pdf", vec![1]));
        session.add_file(DocumentFile::new("a.pdf", vec![2, 3]));

        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].size(), 2);
    }

    #[tokio::test]
    async fn test_run_analyzes_queued_files_and_derives_the_report() {
        use crate::analyze::{DocumentStore, StoredDocument, TextExtraction};
        use crate::error::{ExtractionError, UploadError};

        struct Store;

        impl DocumentStore for Store {
            async fn upload(
                &self,
                _file: &DocumentFile,
                path: &str,
                _overwrite: bool,
            ) -> Result<StoredDocument, UploadError> {
                Ok(StoredDocument {
                    public_url: format!("https://storage.test/{path}"),
                })
            }
        }

        struct Extraction;

        impl TextExtraction for Extraction {
            async fn extract_from_url(&self, url: &str) -> Result<String, ExtractionError> {
                // Same line item, different values per document.
                if url.ends_with("a.pdf") {
                    Ok("FY 2024. Revenue: $1,000,000.".to_string())
                } else {
                    Ok("FY 2024. Revenue: $1,200,000.".to_string())
                }
            }

            async fn extract_from_blob(
                &self,
                _file: &DocumentFile,
            ) -> Result<String, ExtractionError> {
                Err(ExtractionError::Service("unused".to_string()))
            }
        }

        let mut session = CrossCheckSession::new();
        session.add_file(DocumentFile::new("a.pdf", vec![0u8; 16]));
        session.add_file(DocumentFile::new("b.pdf", vec![0u8; 16]));

        let analyzer = DocumentAnalyzer::new(Store, Extraction);
        let summary = session.run(&analyzer, |_, _, _| {}).await;

        assert_eq!(summary.succeeded, 2);
        let report = session.report().unwrap();
        assert_eq!(report.summary.total_comparisons, 1);
        assert_eq!(report.summary.discrepancy_count, 1);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut session = CrossCheckSession::new();
        session.add_file(DocumentFile::new("a.pdf", vec![1]));
        session.set_analyses(vec![revenue("a.pdf", 100), revenue("b.pdf", 100)]);

        session.clear();
        assert!(session.files().is_empty());
        assert!(session.analyses().is_empty());
        assert!(session.report().is_none());
    }
}
