//! Import entry point and per-file accumulation.

use std::path::Path;

use qbank_model::{QuestionRecord, RawRow};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::csv::read_csv_questions;
use crate::error::Result;
use crate::format::SourceFormat;
use crate::normalize::normalize_row;
use crate::resolve::HeaderResolution;
use crate::spreadsheet::read_spreadsheet_questions;

/// A row that could not be normalized, echoed back with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFailure {
    pub row: RawRow,
    pub error: String,
}

/// Everything one file produced: normalized records plus per-row failures.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub format: SourceFormat,
    pub headers: Vec<String>,
    pub resolution: HeaderResolution,
    pub records: Vec<QuestionRecord>,
    pub errors: Vec<RowFailure>,
}

impl ImportOutcome {
    /// Starts an import for a file with the given header row.
    pub fn new(format: SourceFormat, headers: Vec<String>) -> Self {
        let resolution = HeaderResolution::resolve(&headers);
        Self {
            format,
            headers,
            resolution,
            records: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Normalizes one row and files it under records or errors.
    pub fn push_row(&mut self, row: RawRow) {
        match normalize_row(&row, &self.headers, &self.resolution) {
            Ok(record) => self.records.push(record),
            Err(error) => {
                warn!(
                    row_index = self.total_rows(),
                    error = %error,
                    "row skipped"
                );
                self.errors.push(RowFailure {
                    row,
                    error: error.to_string(),
                });
            }
        }
    }

    /// Rows seen so far, normalized or not.
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.errors.len()
    }
}

/// Reads and normalizes every row of `path`, choosing the reader by extension.
pub fn import_file(path: &Path) -> Result<ImportOutcome> {
    let format = SourceFormat::from_path(path)?;
    let span = info_span!("import", format = %format, path = %path.display());
    let _guard = span.enter();

    debug!("reader selected");
    let outcome = match format {
        SourceFormat::Csv => read_csv_questions(path)?,
        SourceFormat::Spreadsheet => read_spreadsheet_questions(path)?,
    };
    info!(
        rows = outcome.total_rows(),
        records = outcome.records.len(),
        errors = outcome.errors.len(),
        "import complete"
    );
    Ok(outcome)
}
