//! Storage for imported questions.
//!
//! Provides the [`QuestionStore`] seam with a JSON-lines implementation and
//! an in-memory one, the batch persister that turns an import into an
//! upload summary, and the staging directory uploads land in before import.
//!
//! Stores validate whole batches before writing; a batch with one bad
//! record is rejected without touching the store.

pub mod batch;
pub mod error;
mod io;
pub mod staging;
pub mod store;
pub mod validate;

pub use batch::{UPLOAD_SUCCESS_MESSAGE, UploadSummary, persist_batch};
pub use error::{PersistenceError, Result};
pub use staging::{
    ALLOWED_EXTENSIONS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_STALE_AFTER, StagedUpload,
    UploadStaging, remove_upload, sweep_stale,
};
pub use store::{JsonlQuestionStore, MemoryQuestionStore, QuestionStore};
pub use validate::{validate_batch, validate_record};
