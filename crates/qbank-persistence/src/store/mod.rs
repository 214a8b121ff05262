//! Question stores.

mod jsonl;
mod memory;

pub use jsonl::JsonlQuestionStore;
pub use memory::MemoryQuestionStore;

use qbank_model::QuestionRecord;

use crate::error::Result;

/// Destination for normalized question records.
///
/// `insert_many` is all-or-nothing: implementations validate the whole batch
/// before writing, and a rejected batch leaves the store unchanged.
pub trait QuestionStore {
    /// Inserts every record or none. Returns the number inserted.
    fn insert_many(&mut self, records: &[QuestionRecord]) -> Result<usize>;

    /// Number of stored records.
    fn count(&self) -> Result<usize>;
}
