//! WASM bindings for cross-document financial figure reconciliation.
//!
//! This crate provides WebAssembly bindings for use in browsers. Text
//! extraction and storage stay browser-side; extracted text and the
//! upload/extraction callbacks are handed into the module.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use fincross_core::analyze::{DocumentAnalyzer, DocumentStore, StoredDocument, TextExtraction};
use fincross_core::error::{ExtractionError, UploadError};
use fincross_core::figures::{FigureExtractor, PatternFigureExtractor};
use fincross_core::models::analysis::{DocumentAnalysis, DocumentFile};
use fincross_core::models::config::PatternProfile;
use fincross_core::models::report::CrossCheckReport;
use fincross_core::{compare, render_csv, render_text};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn js_value_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Extract financial figures from document text.
///
/// Returns an array of figures with category, field, year, value, location,
/// and confidence.
#[wasm_bindgen]
pub fn extract_figures_from_text(text: &str, file_name: &str) -> Result<JsValue, JsValue> {
    let extractor = PatternFigureExtractor::new();
    let figures = extractor.extract(text, file_name);
    serde_wasm_bindgen::to_value(&figures).map_err(|e| js_error(e))
}

/// Compare a set of document analyses and return the cross-check report.
#[wasm_bindgen]
pub fn compare_documents(analyses: JsValue) -> Result<JsValue, JsValue> {
    let analyses: Vec<DocumentAnalysis> =
        serde_wasm_bindgen::from_value(analyses).map_err(|e| js_error(e))?;
    serde_wasm_bindgen::to_value(&compare(&analyses)).map_err(|e| js_error(e))
}

/// Render a report as sectioned plain text.
#[wasm_bindgen]
pub fn report_to_text(report: JsValue) -> Result<String, JsValue> {
    let report: CrossCheckReport =
        serde_wasm_bindgen::from_value(report).map_err(|e| js_error(e))?;
    Ok(render_text(&report))
}

/// Render a report as CSV.
#[wasm_bindgen]
pub fn report_to_csv(report: JsValue) -> Result<String, JsValue> {
    let report: CrossCheckReport =
        serde_wasm_bindgen::from_value(report).map_err(|e| js_error(e))?;
    render_csv(&report).map_err(|e| js_error(e))
}

/// Cross-check session for browser use.
///
/// Documents are added as (name, text) pairs after browser-side extraction;
/// the report is derived on demand.
#[wasm_bindgen]
pub struct CrossChecker {
    extractor: PatternFigureExtractor,
    analyses: Vec<DocumentAnalysis>,
}

#[wasm_bindgen]
impl CrossChecker {
    /// Create a new cross-checker with the enhanced pattern profile.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: PatternFigureExtractor::new(),
            analyses: Vec::new(),
        }
    }

    /// Switch between the simple and enhanced pattern profiles.
    #[wasm_bindgen]
    pub fn use_simple_patterns(&mut self, simple: bool) {
        let profile = if simple {
            PatternProfile::Simple
        } else {
            PatternProfile::Enhanced
        };
        self.extractor = PatternFigureExtractor::new().with_profile(profile);
    }

    /// Extract figures from one document's text and record the analysis.
    #[wasm_bindgen]
    pub fn add_document(&mut self, name: &str, text: &str) {
        let figures = self.extractor.extract(text, name);
        self.analyses.retain(|a| a.file_name != name);
        self.analyses.push(DocumentAnalysis::completed(name, figures));
    }

    /// Record a document whose browser-side extraction failed.
    #[wasm_bindgen]
    pub fn add_failed_document(&mut self, name: &str, error: &str) {
        self.analyses.retain(|a| a.file_name != name);
        self.analyses.push(DocumentAnalysis::failed(name, error));
    }

    /// Drop one document from the session.
    #[wasm_bindgen]
    pub fn remove_document(&mut self, name: &str) {
        self.analyses.retain(|a| a.file_name != name);
    }

    /// Number of documents in the session.
    #[wasm_bindgen]
    pub fn document_count(&self) -> usize {
        self.analyses.len()
    }

    /// Derive the cross-check report for the current document set.
    #[wasm_bindgen]
    pub fn report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&compare(&self.analyses)).map_err(|e| js_error(e))
    }

    /// Derive the report and render it as plain text.
    #[wasm_bindgen]
    pub fn report_text(&self) -> String {
        render_text(&compare(&self.analyses))
    }

    /// Derive the report and render it as CSV.
    #[wasm_bindgen]
    pub fn report_csv(&self) -> Result<String, JsValue> {
        render_csv(&compare(&self.analyses)).map_err(|e| js_error(e))
    }

    /// Discard all documents.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.analyses.clear();
    }
}

impl Default for CrossChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage collaborator backed by a JS callback.
///
/// The callback receives (name, path, overwrite) and resolves to the public
/// URL of the staged document.
struct JsDocumentStore {
    upload: js_sys::Function,
}

impl DocumentStore for JsDocumentStore {
    async fn upload(
        &self,
        file: &DocumentFile,
        path: &str,
        overwrite: bool,
    ) -> Result<StoredDocument, UploadError> {
        let promise = self
            .upload
            .call3(
                &JsValue::NULL,
                &JsValue::from_str(&file.name),
                &JsValue::from_str(path),
                &JsValue::from_bool(overwrite),
            )
            .map_err(|e| UploadError::Service(js_value_error(&e)))?;

        let resolved = JsFuture::from(js_sys::Promise::resolve(&promise))
            .await
            .map_err(|e| UploadError::Service(js_value_error(&e)))?;

        resolved
            .as_string()
            .map(|public_url| StoredDocument { public_url })
            .ok_or_else(|| {
                UploadError::Service("upload callback must resolve to a URL string".to_string())
            })
    }
}

/// Text extraction collaborator backed by JS callbacks.
///
/// `from_url` receives the staged URL; `from_blob` receives the document
/// name (the browser keeps the file content). Both resolve to text.
struct JsTextExtraction {
    from_url: js_sys::Function,
    from_blob: js_sys::Function,
}

impl JsTextExtraction {
    async fn call_text(
        callback: &js_sys::Function,
        argument: &str,
    ) -> Result<String, ExtractionError> {
        let promise = callback
            .call1(&JsValue::NULL, &JsValue::from_str(argument))
            .map_err(|e| ExtractionError::Service(js_value_error(&e)))?;

        let resolved = JsFuture::from(js_sys::Promise::resolve(&promise))
            .await
            .map_err(|e| ExtractionError::Service(js_value_error(&e)))?;

        resolved.as_string().ok_or_else(|| {
            ExtractionError::Service("extraction callback must resolve to text".to_string())
        })
    }
}

impl TextExtraction for JsTextExtraction {
    async fn extract_from_url(&self, url: &str) -> Result<String, ExtractionError> {
        Self::call_text(&self.from_url, url).await
    }

    async fn extract_from_blob(&self, file: &DocumentFile) -> Result<String, ExtractionError> {
        Self::call_text(&self.from_blob, &file.name).await
    }
}

#[derive(serde::Deserialize)]
struct FilePayload {
    name: String,
    #[serde(default)]
    bytes: Vec<u8>,
}

/// Run the full pipeline over browser-held files.
///
/// `files` is an array of `{name, bytes}` objects; the three callbacks
/// stage a document, extract text from its URL, and extract text from its
/// content. `on_progress`, when given, receives (current, total, name)
/// before each document. Resolves to the cross-check report.
#[wasm_bindgen]
pub async fn analyze_and_compare(
    files: JsValue,
    upload: js_sys::Function,
    extract_from_url: js_sys::Function,
    extract_from_blob: js_sys::Function,
    on_progress: Option<js_sys::Function>,
) -> Result<JsValue, JsValue> {
    let payloads: Vec<FilePayload> =
        serde_wasm_bindgen::from_value(files).map_err(|e| js_error(e))?;
    let files: Vec<DocumentFile> = payloads
        .into_iter()
        .map(|p| DocumentFile::new(p.name, p.bytes))
        .collect();

    let analyzer = DocumentAnalyzer::new(
        JsDocumentStore { upload },
        JsTextExtraction {
            from_url: extract_from_url,
            from_blob: extract_from_blob,
        },
    );

    let analyses = analyzer
        .analyze_batch(&files, |current, total, name| {
            if let Some(callback) = &on_progress {
                let _ = callback.call3(
                    &JsValue::NULL,
                    &JsValue::from_f64(current as f64),
                    &JsValue::from_f64(total as f64),
                    &JsValue::from_str(name),
                );
            }
        })
        .await;

    serde_wasm_bindgen::to_value(&compare(&analyses)).map_err(|e| js_error(e))
}
