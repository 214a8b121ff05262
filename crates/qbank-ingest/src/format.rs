//! Reader selection by file extension.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{IngestError, Result};

/// Tabular formats the importer can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// `.csv`, streamed row by row.
    Csv,
    /// `.xlsx` or `.xls`, read whole into memory.
    Spreadsheet,
}

impl SourceFormat {
    /// Picks the reader for `path` from its lower-cased extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xls" => Ok(Self::Spreadsheet),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    /// Name used in user-facing messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Spreadsheet => "Excel",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
