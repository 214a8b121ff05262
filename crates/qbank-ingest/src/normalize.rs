//! Row normalization: one raw row in, one canonical draft record out.

use qbank_model::{PublishStatus, QuestionRecord, RawRow, RecordDefaults};

use crate::error::RowError;
use crate::extract::{
    ExtractionContext, extract_answer, extract_blooms, extract_category, extract_difficulty,
    extract_exam, extract_marks, extract_options, extract_solution, extract_subject,
    extract_tags, extract_text, extract_time_limit, extract_topic,
};
use crate::resolve::HeaderResolution;

/// Normalizes a row with the standard defaults.
pub fn normalize_row(
    row: &RawRow,
    headers: &[String],
    resolution: &HeaderResolution,
) -> Result<QuestionRecord, RowError> {
    normalize_row_with(row, headers, resolution, &RecordDefaults::STANDARD)
}

/// Normalizes a row into a draft [`QuestionRecord`].
///
/// Missing or ambiguous data never fails; each field falls back to its
/// default. The only error is a row carrying cells the header row cannot
/// name.
pub fn normalize_row_with(
    row: &RawRow,
    headers: &[String],
    resolution: &HeaderResolution,
    defaults: &RecordDefaults,
) -> Result<QuestionRecord, RowError> {
    if !row.overflow().is_empty() {
        return Err(RowError::UnindexedCells {
            cells: row.overflow().len(),
            headers: headers.len(),
        });
    }

    let ctx = ExtractionContext::new(row, headers, resolution, defaults);
    Ok(QuestionRecord {
        text: extract_text(&ctx),
        options: extract_options(&ctx),
        answer: extract_answer(&ctx),
        subject: extract_subject(&ctx),
        exam: extract_exam(&ctx),
        difficulty: extract_difficulty(&ctx),
        tags: extract_tags(&ctx),
        marks: extract_marks(&ctx),
        time_limit: extract_time_limit(&ctx),
        blooms: extract_blooms(&ctx),
        category: extract_category(&ctx),
        topic: extract_topic(&ctx),
        solution: extract_solution(&ctx),
        publish_status: PublishStatus::Draft,
    })
}
