use qbank_model::CanonicalField;

use super::ExtractionContext;

const MARKS_KEYWORDS: &[&str] = &["mark", "score", "point"];
const TIME_LIMIT_KEYWORDS: &[&str] = &["time", "duration", "second"];

/// Parses the leading integer of a value.
///
/// Leading whitespace and one sign are allowed; parsing stops at the first
/// non-digit, so `"60s"` is 60 and `"1.5"` is 1. Returns `None` when no digit
/// leads the value or the integer does not fit in an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    format!("{sign}{digits}").parse().ok()
}

pub fn extract_marks(ctx: &ExtractionContext<'_>) -> i64 {
    extract_integer(ctx, CanonicalField::Marks, MARKS_KEYWORDS).unwrap_or(ctx.defaults.marks)
}

/// Time limit in seconds.
pub fn extract_time_limit(ctx: &ExtractionContext<'_>) -> i64 {
    extract_integer(ctx, CanonicalField::TimeLimit, TIME_LIMIT_KEYWORDS)
        .unwrap_or(ctx.defaults.time_limit)
}

fn extract_integer(
    ctx: &ExtractionContext<'_>,
    field: CanonicalField,
    keywords: &[&str],
) -> Option<i64> {
    ctx.resolved_or_scan(field, keywords)
        .and_then(|raw| parse_leading_int(&raw))
}
