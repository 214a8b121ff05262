//! Transport-free upload handler.
//!
//! Produces the status code and JSON body an HTTP endpoint would return for
//! a staged upload. Routing, auth and multipart parsing live elsewhere.

use qbank_ingest::{SourceFormat, import_file};
use qbank_persistence::{QuestionStore, StagedUpload, persist_batch, remove_upload};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, error, info_span};

use crate::logging::redact_value;

pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please upload CSV or Excel files.";

/// Status code and JSON body for one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadResponse {
    pub status: u16,
    pub body: Value,
}

impl UploadResponse {
    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Imports staged uploads into a question store.
#[derive(Debug)]
pub struct UploadService<S> {
    store: S,
}

impl<S: QuestionStore> UploadService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Imports one staged file. The staged file is gone when this returns.
    pub fn handle(&mut self, staged: &StagedUpload) -> UploadResponse {
        let span = info_span!("upload", file = %staged.original_name);
        let _guard = span.enter();

        let Ok(format) = SourceFormat::from_path(&staged.path) else {
            remove_upload(&staged.path);
            return UploadResponse::error(400, UNSUPPORTED_FORMAT_MESSAGE);
        };

        let outcome = match import_file(&staged.path) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "import failed");
                remove_upload(&staged.path);
                return UploadResponse::error(
                    500,
                    format!("Failed to process {} file: {e}", format.label()),
                );
            }
        };
        for record in &outcome.records {
            debug!(text = redact_value(&record.text), "record normalized");
        }

        let summary = match persist_batch(&mut self.store, &outcome, &staged.path) {
            Ok(summary) => summary,
            Err(e) => {
                error!(error = %e, "persist failed");
                return UploadResponse::error(500, format!("Failed to save questions: {e}"));
            }
        };

        match serde_json::to_value(&summary) {
            Ok(body) => UploadResponse { status: 200, body },
            Err(e) => UploadResponse::error(500, format!("Failed to save questions: {e}")),
        }
    }
}
