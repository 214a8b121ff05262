//! CSV header normalization.

/// Normalizes a header cell: strips a BOM, trims, and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
