use qbank_model::QuestionRecord;

use super::QuestionStore;
use crate::error::Result;
use crate::validate::validate_batch;

/// Vec-backed store used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuestionStore {
    records: Vec<QuestionRecord>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }
}

impl QuestionStore for MemoryQuestionStore {
    fn insert_many(&mut self, records: &[QuestionRecord]) -> Result<usize> {
        validate_batch(records)?;
        self.records.extend_from_slice(records);
        Ok(records.len())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::fixtures::record;

    #[test]
    fn test_rejected_batch_leaves_store_unchanged() {
        let mut store = MemoryQuestionStore::new();
        store.insert_many(&[record("first")]).unwrap();

        let result = store.insert_many(&[record("second"), record("")]);
        assert!(result.is_err());
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.records()[0].text, "first");
    }
}
