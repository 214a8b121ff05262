//! Placeholder values substituted for anything an import cannot resolve.

/// Immutable defaults shared by every field extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDefaults {
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
    pub subject: &'static str,
    pub exam: &'static str,
    pub difficulty: &'static str,
    pub tags: &'static [&'static str],
    pub marks: i64,
    /// Seconds.
    pub time_limit: i64,
    pub blooms: &'static str,
    pub category: &'static str,
    pub topic: &'static str,
    pub solution: &'static str,
}

impl RecordDefaults {
    pub const STANDARD: RecordDefaults = RecordDefaults {
        text: "Question text not found",
        options: &["Option A", "Option B", "Option C", "Option D"],
        answer: "Answer not found",
        subject: "general",
        exam: "general",
        difficulty: "medium",
        tags: &[],
        marks: 1,
        time_limit: 60,
        blooms: "remember",
        category: "",
        topic: "",
        solution: "",
    };

    /// Owned copy of the placeholder option list.
    #[must_use]
    pub fn options_vec(&self) -> Vec<String> {
        self.options.iter().map(|o| (*o).to_string()).collect()
    }

    /// Owned copy of the default tag list.
    #[must_use]
    pub fn tags_vec(&self) -> Vec<String> {
        self.tags.iter().map(|t| (*t).to_string()).collect()
    }
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}
