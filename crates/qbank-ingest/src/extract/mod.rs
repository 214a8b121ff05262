//! Per-field extractors.
//!
//! Every extractor is total: it walks the fallback chain
//!
//! 1. the resolved header, when its cell is non-blank,
//! 2. a keyword scan over all headers in file order,
//! 3. the field default,
//!
//! and returns the first success. Field-specific coercion lives in the
//! submodules.

mod answer;
mod list;
mod numeric;
mod options;
mod scalar;
mod text;

pub use answer::extract_answer;
pub use list::{extract_tags, parse_delimited_list};
pub use numeric::{extract_marks, extract_time_limit, parse_leading_int};
pub use options::{extract_options, is_option_column};
pub use scalar::{
    extract_blooms, extract_category, extract_difficulty, extract_exam, extract_solution,
    extract_subject, extract_topic,
};
pub use text::extract_text;

use qbank_model::{CanonicalField, CellValue, RawRow, RecordDefaults};

use crate::resolve::HeaderResolution;

/// Values longer than this many characters count as prose rather than a label.
pub const LONG_VALUE_CHARS: usize = 10;

/// Everything an extractor may look at for one row.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    pub row: &'a RawRow,
    pub headers: &'a [String],
    pub resolution: &'a HeaderResolution,
    pub defaults: &'a RecordDefaults,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(
        row: &'a RawRow,
        headers: &'a [String],
        resolution: &'a HeaderResolution,
        defaults: &'a RecordDefaults,
    ) -> Self {
        Self {
            row,
            headers,
            resolution,
            defaults,
        }
    }

    /// Cell under the header resolved for `field`, if that cell is non-blank.
    pub fn resolved(&self, field: CanonicalField) -> Option<&'a CellValue> {
        let header = self.resolution.binding(field)?;
        let cell = self.row.get(header);
        (!cell.is_blank()).then_some(cell)
    }

    /// First header whose lower-cased name contains any keyword and whose
    /// value is non-blank and passes `accept`. Returns the coerced text.
    pub fn scan<F>(&self, keywords: &[&str], accept: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        self.headers.iter().find_map(|header| {
            let lower = header.to_lowercase();
            if !keywords.iter().any(|keyword| lower.contains(keyword)) {
                return None;
            }
            self.accepted_text(header, &accept)
        })
    }

    /// First header, of any name, whose value is non-blank and passes `accept`.
    pub fn scan_any<F>(&self, accept: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        self.headers
            .iter()
            .find_map(|header| self.accepted_text(header, &accept))
    }

    /// Raw text for `field` from the resolved header, else the keyword scan.
    pub fn resolved_or_scan(&self, field: CanonicalField, keywords: &[&str]) -> Option<String> {
        self.resolved(field)
            .map(CellValue::to_text)
            .or_else(|| self.scan(keywords, |_| true))
    }

    /// Individual option columns, sorted lexically by header name.
    pub fn option_columns(&self) -> Vec<&'a str> {
        let mut columns: Vec<&str> = self
            .headers
            .iter()
            .map(String::as_str)
            .filter(|header| is_option_column(header))
            .collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }

    fn accepted_text<F>(&self, header: &str, accept: &F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        let cell = self.row.get(header);
        if cell.is_blank() {
            return None;
        }
        let text = cell.to_text();
        accept(&text).then_some(text)
    }
}

/// True when the trimmed value is longer than [`LONG_VALUE_CHARS`].
pub fn is_long(value: &str) -> bool {
    value.trim().chars().count() > LONG_VALUE_CHARS
}

#[cfg(test)]
pub(crate) mod test_support {
    use qbank_model::{CellValue, RawRow, RecordDefaults};

    use super::ExtractionContext;
    use crate::resolve::HeaderResolution;

    /// Row fixture: headers in order plus the resolution they produce.
    pub struct Fixture {
        pub headers: Vec<String>,
        pub row: RawRow,
        pub resolution: HeaderResolution,
    }

    impl Fixture {
        pub fn new(pairs: &[(&str, &str)]) -> Self {
            let headers: Vec<String> = pairs.iter().map(|(h, _)| (*h).to_string()).collect();
            let cells: Vec<CellValue> = pairs.iter().map(|(_, v)| CellValue::from(*v)).collect();
            let row = RawRow::from_cells(&headers, cells);
            let resolution = HeaderResolution::resolve(&headers);
            Self {
                headers,
                row,
                resolution,
            }
        }

        pub fn ctx(&self) -> ExtractionContext<'_> {
            ExtractionContext::new(
                &self.row,
                &self.headers,
                &self.resolution,
                &RecordDefaults::STANDARD,
            )
        }
    }
}
