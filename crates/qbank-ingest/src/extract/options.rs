use qbank_model::CanonicalField;

use super::{ExtractionContext, parse_delimited_list};

const OPTIONS_KEYWORDS: &[&str] = &["options", "choices", "alternatives", "distractors"];

/// True for a header naming one option (`optionA`, `Choice 2`).
///
/// Plural list headers (`Options`, `Choices`) and answer columns
/// (`Correct Option`) are not individual option columns.
pub fn is_option_column(header: &str) -> bool {
    let lower = header.to_lowercase();
    (lower.contains("option") || lower.contains("choice"))
        && !lower.contains("options")
        && !lower.contains("choices")
        && !lower.contains("correct")
        && !lower.contains("answer")
}

/// Answer options in display order.
///
/// Individual option columns win outright when the file has any: their
/// non-blank values are returned in lexical header order. Otherwise a single
/// cell is parsed as a delimited list.
pub fn extract_options(ctx: &ExtractionContext<'_>) -> Vec<String> {
    let columns = ctx.option_columns();
    let options: Vec<String> = if columns.is_empty() {
        ctx.resolved_or_scan(CanonicalField::Options, OPTIONS_KEYWORDS)
            .map(|raw| parse_delimited_list(&raw))
            .unwrap_or_default()
    } else {
        columns
            .iter()
            .map(|header| ctx.row.get(header))
            .filter(|cell| !cell.is_blank())
            .map(|cell| cell.to_text().trim().to_string())
            .collect()
    };
    if options.is_empty() {
        ctx.defaults.options_vec()
    } else {
        options
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;

    #[test]
    fn test_option_column_detection() {
        assert!(is_option_column("optionA"));
        assert!(is_option_column("Choice 2"));
        assert!(!is_option_column("Options"));
        assert!(!is_option_column("Choices"));
        assert!(!is_option_column("Correct Option"));
        assert!(!is_option_column("Question"));
    }

    #[test]
    fn test_individual_columns_sorted_by_header() {
        let fixture = Fixture::new(&[
            ("optionC", "3"),
            ("optionA", "1"),
            ("optionD", "4"),
            ("optionB", "2"),
        ]);
        assert_eq!(extract_options(&fixture.ctx()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_individual_columns_ignore_list_column() {
        let fixture = Fixture::new(&[
            ("Options", "w,x,y,z"),
            ("Option 1", "red"),
            ("Option 2", ""),
            ("Option 3", "blue"),
        ]);
        assert_eq!(extract_options(&fixture.ctx()), vec!["red", "blue"]);
    }

    #[test]
    fn test_single_cell_list() {
        let fixture = Fixture::new(&[("Choices", "4,5,6,7")]);
        assert_eq!(extract_options(&fixture.ctx()), vec!["4", "5", "6", "7"]);
    }

    #[test]
    fn test_default_options() {
        let fixture = Fixture::new(&[("Question", "What is 2+2?")]);
        assert_eq!(
            extract_options(&fixture.ctx()),
            vec!["Option A", "Option B", "Option C", "Option D"]
        );
    }

    #[test]
    fn test_blank_individual_columns_yield_default() {
        let fixture = Fixture::new(&[("Options", "a,b"), ("optionA", ""), ("optionB", " ")]);
        assert_eq!(
            extract_options(&fixture.ctx()),
            vec!["Option A", "Option B", "Option C", "Option D"]
        );
    }
}
