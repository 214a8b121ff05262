use qbank_model::CanonicalField;

use super::ExtractionContext;

const SUBJECT_KEYWORDS: &[&str] = &["subject", "topic", "sub", "course", "area"];
const EXAM_KEYWORDS: &[&str] = &["exam", "test", "paper", "board"];
const DIFFICULTY_KEYWORDS: &[&str] = &["difficulty", "level", "diff", "complexity", "hardness"];
const BLOOMS_KEYWORDS: &[&str] = &["bloom", "taxonomy", "cognitive"];
const CATEGORY_KEYWORDS: &[&str] = &["category", "section", "group", "domain"];
const TOPIC_KEYWORDS: &[&str] = &["topic", "chapter", "unit", "concept"];
const SOLUTION_KEYWORDS: &[&str] = &["solution", "explanation", "rationale", "reasoning"];

pub fn extract_subject(ctx: &ExtractionContext<'_>) -> String {
    resolved_or_scan(ctx, CanonicalField::Subject, SUBJECT_KEYWORDS, ctx.defaults.subject)
}

pub fn extract_exam(ctx: &ExtractionContext<'_>) -> String {
    resolved_or_scan(ctx, CanonicalField::Exam, EXAM_KEYWORDS, ctx.defaults.exam)
}

pub fn extract_difficulty(ctx: &ExtractionContext<'_>) -> String {
    resolved_or_scan(
        ctx,
        CanonicalField::Difficulty,
        DIFFICULTY_KEYWORDS,
        ctx.defaults.difficulty,
    )
}

pub fn extract_blooms(ctx: &ExtractionContext<'_>) -> String {
    resolved_or_scan(ctx, CanonicalField::Blooms, BLOOMS_KEYWORDS, ctx.defaults.blooms)
}

// Category, topic and solution never consult the header resolution.

pub fn extract_category(ctx: &ExtractionContext<'_>) -> String {
    scan_only(ctx, CATEGORY_KEYWORDS, ctx.defaults.category)
}

pub fn extract_topic(ctx: &ExtractionContext<'_>) -> String {
    scan_only(ctx, TOPIC_KEYWORDS, ctx.defaults.topic)
}

pub fn extract_solution(ctx: &ExtractionContext<'_>) -> String {
    scan_only(ctx, SOLUTION_KEYWORDS, ctx.defaults.solution)
}

fn resolved_or_scan(
    ctx: &ExtractionContext<'_>,
    field: CanonicalField,
    keywords: &[&str],
    default: &str,
) -> String {
    ctx.resolved_or_scan(field, keywords)
        .map_or_else(|| default.to_string(), |value| value.trim().to_string())
}

fn scan_only(ctx: &ExtractionContext<'_>, keywords: &[&str], default: &str) -> String {
    ctx.scan(keywords, |_| true)
        .map_or_else(|| default.to_string(), |value| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Fixture;
    use super::*;

    #[test]
    fn test_topic_column_feeds_subject_and_topic() {
        let fixture = Fixture::new(&[("Topic", " Math ")]);
        let ctx = fixture.ctx();
        assert_eq!(extract_subject(&ctx), "Math");
        assert_eq!(extract_topic(&ctx), "Math");
    }

    #[test]
    fn test_scan_fallback_for_exam() {
        let fixture = Fixture::new(&[("Board", "CBSE")]);
        assert_eq!(extract_exam(&fixture.ctx()), "CBSE");
    }

    #[test]
    fn test_defaults() {
        let fixture = Fixture::new(&[("Question", "What is 2+2?")]);
        let ctx = fixture.ctx();
        assert_eq!(extract_subject(&ctx), "general");
        assert_eq!(extract_exam(&ctx), "general");
        assert_eq!(extract_difficulty(&ctx), "medium");
        assert_eq!(extract_blooms(&ctx), "remember");
        assert_eq!(extract_category(&ctx), "");
        assert_eq!(extract_topic(&ctx), "");
        assert_eq!(extract_solution(&ctx), "");
    }

    #[test]
    fn test_solution_bound_to_answer_still_scanned() {
        let fixture = Fixture::new(&[("Solution", "Add the two numbers")]);
        assert_eq!(extract_solution(&fixture.ctx()), "Add the two numbers");
    }

    #[test]
    fn test_category_ignores_resolution() {
        let fixture = Fixture::new(&[("Category", ""), ("Section", "Part B")]);
        assert_eq!(extract_category(&fixture.ctx()), "Part B");
    }
}
