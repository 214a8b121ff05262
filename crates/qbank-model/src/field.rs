//! Canonical question fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the twelve normalized question attributes.
///
/// Variant order is significant: header resolution walks fields in this
/// order and binds a header to the first field that matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    Text,
    Options,
    Answer,
    Subject,
    Category,
    Topic,
    Exam,
    Difficulty,
    Tags,
    Marks,
    TimeLimit,
    Blooms,
}

impl CanonicalField {
    /// All fields in synonym-table order.
    pub const ALL: [CanonicalField; 12] = [
        Self::Text,
        Self::Options,
        Self::Answer,
        Self::Subject,
        Self::Category,
        Self::Topic,
        Self::Exam,
        Self::Difficulty,
        Self::Tags,
        Self::Marks,
        Self::TimeLimit,
        Self::Blooms,
    ];

    /// Field name as it appears on records and in responses.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Options => "options",
            Self::Answer => "answer",
            Self::Subject => "subject",
            Self::Category => "category",
            Self::Topic => "topic",
            Self::Exam => "exam",
            Self::Difficulty => "difficulty",
            Self::Tags => "tags",
            Self::Marks => "marks",
            Self::TimeLimit => "timeLimit",
            Self::Blooms => "blooms",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
