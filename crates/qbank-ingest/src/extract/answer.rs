use qbank_model::CanonicalField;

use super::{ExtractionContext, is_long};

const ANSWER_KEYWORDS: &[&str] = &["answer", "correct", "key", "ans", "right"];

/// Correct answer text.
///
/// Long values are literal answers. Short values naming an option
/// (`"Option B"`, `"choice 3"`) are looked up in the individual option
/// columns; anything else is returned trimmed.
pub fn extract_answer(ctx: &ExtractionContext<'_>) -> String {
    let Some(raw) = ctx.resolved_or_scan(CanonicalField::Answer, ANSWER_KEYWORDS) else {
        return ctx.defaults.answer.to_string();
    };
    let trimmed = raw.trim();
    if is_long(trimmed) {
        return trimmed.to_string();
    }
    let lower = trimmed.to_lowercase();
    if !(lower.contains("option") || lower.contains("choice")) {
        return trimmed.to_string();
    }
    option_reference_index(&lower)
        .and_then(|index| ctx.option_columns().get(index).copied())
        .map(|header| ctx.row.get(header))
        .filter(|cell| !cell.is_blank())
        .map_or_else(
            || trimmed.to_string(),
            |cell| cell.to_text().trim().to_string(),
        )
}

/// Index named by an option reference, e.g. `"option b"` or `"choice 2"` -> 1.
///
/// The words `option` and `choice` are removed first; the remainder is
/// checked for a/1, b/2, c/3, d/4 in that order.
///
/// Checking the whole lowercased answer would match the `c` inside `choice`
/// and send every `"Choice D"` to the third option. Stripping the words
/// first makes it resolve to the fourth.
fn option_reference_index(lower: &str) -> Option<usize> {
    let remainder = lower.replace("option", "").replace("choice", "");
    [('a', '1'), ('b', '2'), ('c', '3'), ('d', '4')]
        .iter()
        .position(|(letter, digit)| remainder.contains(*letter) || remainder.contains(*digit))
}
