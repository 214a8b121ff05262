//! Header-name variants recognised for each canonical field.

use qbank_model::CanonicalField;

/// Lower-cased header variants per field, in resolution order.
///
/// A header binds to the first field whose variant list has an entry the
/// header contains, so entries early in the table shadow later ones: a
/// `Topic` column binds to `subject`, and `bloom_level` binds to `difficulty`.
pub const SYNONYMS: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Text,
        &[
            "question",
            "question_text",
            "questiontext",
            "text",
            "problem",
            "stem",
            "prompt",
        ],
    ),
    (
        CanonicalField::Options,
        &["options", "option", "choices", "choice", "alternatives"],
    ),
    (
        CanonicalField::Answer,
        &[
            "answer",
            "correct_answer",
            "correctanswer",
            "correct",
            "solution",
            "key",
            "ans",
        ],
    ),
    (
        CanonicalField::Subject,
        &["subject", "topic", "sub", "course"],
    ),
    (CanonicalField::Category, &["category", "section", "group"]),
    (CanonicalField::Topic, &["topic", "chapter", "unit"]),
    (
        CanonicalField::Exam,
        &["exam", "test", "examination", "paper"],
    ),
    (
        CanonicalField::Difficulty,
        &["difficulty", "level", "diff", "complexity"],
    ),
    (CanonicalField::Tags, &["tags", "tag", "labels", "hashtags"]),
    (
        CanonicalField::Marks,
        &["marks", "mark", "score", "points", "weight"],
    ),
    (
        CanonicalField::TimeLimit,
        &[
            "timelimit",
            "time_limit",
            "time limit",
            "time",
            "duration",
            "seconds",
        ],
    ),
    (
        CanonicalField::Blooms,
        &["blooms", "bloom", "taxonomy", "cognitive"],
    ),
];

/// Variants for one field.
pub fn variants(field: CanonicalField) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map_or(&[], |(_, variants)| *variants)
}
