//! Store schema checks applied before any write.

use qbank_model::QuestionRecord;

use crate::error::{PersistenceError, Result};

/// Checks one record against the store schema.
///
/// `index` is the record's position in its batch and is carried into the error.
pub fn validate_record(index: usize, record: &QuestionRecord) -> Result<()> {
    let fail = |reason: &str| {
        Err(PersistenceError::Validation {
            index,
            reason: reason.to_string(),
        })
    };

    if record.text.trim().is_empty() {
        return fail("text is blank");
    }
    if record.answer.trim().is_empty() {
        return fail("answer is blank");
    }
    if record.options.is_empty() {
        return fail("no options");
    }
    if record.options.iter().any(|option| option.trim().is_empty()) {
        return fail("blank option");
    }
    if record.marks < 0 {
        return fail("marks is negative");
    }
    if record.time_limit <= 0 {
        return fail("time limit must be positive");
    }
    Ok(())
}

/// Validates a whole batch, stopping at the first bad record.
pub fn validate_batch(records: &[QuestionRecord]) -> Result<()> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| validate_record(index, record))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use qbank_model::{PublishStatus, QuestionRecord};

    pub fn record(text: &str) -> QuestionRecord {
        QuestionRecord {
            text: text.to_string(),
            options: vec!["3".to_string(), "4".to_string()],
            answer: "4".to_string(),
            subject: "Math".to_string(),
            exam: "general".to_string(),
            difficulty: "medium".to_string(),
            tags: Vec::new(),
            marks: 1,
            time_limit: 60,
            blooms: "remember".to_string(),
            category: String::new(),
            topic: String::new(),
            solution: String::new(),
            publish_status: PublishStatus::Draft,
        }
    }
}
