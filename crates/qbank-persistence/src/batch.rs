//! Batch persistence of one import and the summary returned to the uploader.

use std::path::Path;

use qbank_ingest::{ImportOutcome, RowFailure};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::staging::remove_upload;
use crate::store::QuestionStore;

/// Summary message for a completed upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Questions uploaded successfully";

/// Counts and row errors for one persisted upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub message: String,
    /// Rows read from the file, normalized or not.
    pub uploaded: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<RowFailure>,
}

impl UploadSummary {
    pub fn from_outcome(outcome: &ImportOutcome) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            uploaded: outcome.total_rows(),
            success_count: outcome.records.len(),
            error_count: outcome.errors.len(),
            errors: outcome.errors.clone(),
        }
    }
}

/// Inserts an import's records in one call and removes the uploaded file.
///
/// The store sees a single `insert_many` with every normalized record, or no
/// call at all when nothing normalized. The upload at `upload_path` is
/// deleted whether or not the insert succeeds.
pub fn persist_batch<S>(
    store: &mut S,
    outcome: &ImportOutcome,
    upload_path: &Path,
) -> Result<UploadSummary>
where
    S: QuestionStore + ?Sized,
{
    let inserted = if outcome.records.is_empty() {
        Ok(0)
    } else {
        store.insert_many(&outcome.records)
    };
    remove_upload(upload_path);

    match inserted {
        Ok(count) => {
            info!(
                inserted = count,
                row_errors = outcome.errors.len(),
                "batch persisted"
            );
            Ok(UploadSummary::from_outcome(outcome))
        }
        Err(e) => {
            warn!(error = %e, records = outcome.records.len(), "batch rejected");
            Err(e)
        }
    }
}
