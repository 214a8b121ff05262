use qbank_model::CanonicalField;

use super::{ExtractionContext, is_long};

const TEXT_KEYWORDS: &[&str] = &["question", "text", "problem", "content", "q", "desc"];

/// Question text, trimmed.
///
/// After the resolved header and the keyword scan, any column holding a
/// value longer than ten characters is taken as the likely question.
pub fn extract_text(ctx: &ExtractionContext<'_>) -> String {
    if let Some(cell) = ctx.resolved(CanonicalField::Text) {
        return cell.to_text().trim().to_string();
    }
    ctx.scan(TEXT_KEYWORDS, is_long)
        .or_else(|| ctx.scan_any(is_long))
        .map_or_else(
            || ctx.defaults.text.to_string(),
            |value| value.trim().to_string(),
        )
}
