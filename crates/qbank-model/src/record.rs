//! Canonical question records.

use serde::{Deserialize, Serialize};

/// Publication state of a stored question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    /// Every imported record starts here.
    #[default]
    Draft,
    Published,
    Archived,
}

impl PublishStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

/// The normalized form of one imported row.
///
/// `options` is variable length. Callers that assume exactly four options
/// must pad or truncate themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
    pub subject: String,
    pub exam: String,
    pub difficulty: String,
    /// Kept in source order; duplicates are not removed.
    pub tags: Vec<String>,
    pub marks: i64,
    /// Seconds.
    pub time_limit: i64,
    pub blooms: String,
    pub category: String,
    pub topic: String,
    pub solution: String,
    pub publish_status: PublishStatus,
}
