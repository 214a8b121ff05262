use qbank_model::CanonicalField;
use serde_json::Value;

use super::ExtractionContext;

/// Splits one cell into a list.
///
/// Tries a JSON array first, then commas, semicolons, and pipes, and finally
/// treats the whole value as a single entry. Each piece is trimmed and
/// stripped of surrounding quotes; empty pieces are dropped.
///
/// A malformed array such as `[1,2,3` is not valid JSON and falls through to
/// the comma split, yielding `["[1", "2", "3"]`.
pub fn parse_delimited_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let pieces: Vec<String> = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => items.iter().map(json_item_text).collect(),
        _ => split_on_first_delimiter(trimmed),
    };
    pieces
        .iter()
        .map(|piece| clean_piece(piece))
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Tags from the resolved header only; no keyword scan.
pub fn extract_tags(ctx: &ExtractionContext<'_>) -> Vec<String> {
    ctx.resolved(CanonicalField::Tags)
        .map(|cell| parse_delimited_list(&cell.to_text()))
        .unwrap_or_else(|| ctx.defaults.tags_vec())
}

fn split_on_first_delimiter(value: &str) -> Vec<String> {
    [',', ';', '|']
        .into_iter()
        .find(|delimiter| value.contains(*delimiter))
        .map_or_else(
            || vec![value.to_string()],
            |delimiter| value.split(delimiter).map(str::to_string).collect(),
        )
}

fn json_item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn clean_piece(piece: &str) -> String {
    piece
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
