//! Sequential per-document analysis over the uploaded file set.

use tracing::{debug, info, warn};

use crate::error::{ExtractionError, FincrossError, ValidationError};
use crate::figures::{FigureExtractor, PatternFigureExtractor};
use crate::models::analysis::{BatchSummary, DocumentAnalysis, DocumentFile};
use crate::models::config::{FincrossConfig, LimitsConfig};

use super::{DocumentStore, TextExtraction};

/// Runs the figure extractor over every uploaded document.
///
/// Failures are per-document: a document that cannot be validated, staged,
/// or extracted is recorded as failed and the batch moves on.
pub struct DocumentAnalyzer<S, X> {
    store: S,
    extraction: X,
    extractor: PatternFigureExtractor,
    limits: LimitsConfig,
}

impl<S: DocumentStore, X: TextExtraction> DocumentAnalyzer<S, X> {
    /// Create an analyzer with the default configuration.
    pub fn new(store: S, extraction: X) -> Self {
        Self {
            store,
            extraction,
            extractor: PatternFigureExtractor::new(),
            limits: LimitsConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FincrossConfig) -> Self {
        self.extractor = PatternFigureExtractor::new().with_config(config.extraction);
        self.limits = config.limits;
        self
    }

    /// Validate a file before staging it.
    fn validate(&self, file: &DocumentFile) -> Result<(), ValidationError> {
        if file.bytes.is_empty() {
            return Err(ValidationError::Empty(file.name.clone()));
        }

        if file.size() > self.limits.max_file_size {
            return Err(ValidationError::TooLarge {
                name: file.name.clone(),
                size: file.size(),
                limit: self.limits.max_file_size,
            });
        }

        let extension = file.extension();
        if !self.limits.allowed_extensions.contains(&extension) {
            return Err(ValidationError::UnsupportedType {
                name: file.name.clone(),
                extension,
            });
        }

        Ok(())
    }

    /// Stage the document and extract its text, URL strategy first.
    async fn extract_text(&self, file: &DocumentFile) -> Result<String, FincrossError> {
        let path = format!("uploads/{}", file.name);
        let stored = self.store.upload(file, &path, true).await?;

        let text = match self.extraction.extract_from_url(&stored.public_url).await {
            Ok(text) if !text.trim().is_empty() => text,
            url_outcome => {
                let url_error = match url_outcome {
                    Ok(_) => "returned no usable text".to_string(),
                    Err(e) => e.to_string(),
                };
                debug!(
                    "URL extraction unusable for {} ({}), falling back to content",
                    file.name, url_error
                );

                self.extraction.extract_from_blob(file).await.map_err(
                    |content_error| ExtractionError::AllStrategiesFailed {
                        url_error,
                        content_error: content_error.to_string(),
                    },
                )?
            }
        };

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyText.into());
        }

        Ok(text)
    }

    /// Analyze one document. Errors become a failed analysis, never a
    /// batch-level failure.
    pub async fn analyze_document(&self, file: &DocumentFile) -> DocumentAnalysis {
        let outcome = async {
            self.validate(file)?;
            let text = self.extract_text(file).await?;
            Ok::<_, FincrossError>(self.extractor.extract(&text, &file.name))
        }
        .await;

        match outcome {
            Ok(figures) => DocumentAnalysis::completed(&file.name, figures),
            Err(e) => {
                warn!("analysis of {} failed: {}", file.name, e);
                DocumentAnalysis::failed(&file.name, e.to_string())
            }
        }
    }

    /// Analyze every file strictly in order, reporting per-file progress as
    /// (1-based index, total, file name).
    pub async fn analyze_batch(
        &self,
        files: &[DocumentFile],
        mut on_progress: impl FnMut(usize, usize, &str),
    ) -> Vec<DocumentAnalysis> {
        info!("analyzing {} documents", files.len());

        let mut analyses = Vec::with_capacity(files.len());
        for (i, file) in files.iter().enumerate() {
            on_progress(i + 1, files.len(), &file.name);
            analyses.push(self.analyze_document(file).await);
        }

        let summary = BatchSummary::from_analyses(&analyses);
        info!(
            "batch complete: {} succeeded, {} partial, {} failed",
            summary.succeeded, summary.partial, summary.failed
        );

        analyses
    }
}
