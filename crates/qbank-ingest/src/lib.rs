//! Question import from loosely structured tabular files.
//!
//! Uploaded CSV and spreadsheet files may name their columns almost
//! anything. This crate works out which column holds which question field
//! and turns every row into a canonical draft record.
//!
//! # Pipeline
//!
//! - **Format dispatch**: the file extension picks the CSV or spreadsheet reader
//! - **Header resolution**: headers are matched once per file against a synonym table
//! - **Field extraction**: per field, resolved header, then keyword scan, then default
//! - **Row normalization**: all extractors applied to one row; row-shape problems
//!   are collected per row instead of aborting the file
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use qbank_ingest::import_file;
//!
//! let outcome = import_file(Path::new("uploads/physics.csv"))?;
//! println!("{} records, {} row errors", outcome.records.len(), outcome.errors.len());
//! ```

mod csv;
mod error;
mod extract;
mod format;
mod import;
mod normalize;
mod resolve;
mod spreadsheet;
mod synonyms;

// === Error Types ===
pub use error::{IngestError, Result, RowError};

// === Readers ===
pub use csv::{normalize_header, read_csv_questions, read_csv_questions_from_reader};
pub use format::SourceFormat;
pub use import::{ImportOutcome, RowFailure, import_file};
pub use spreadsheet::{outcome_from_range, read_spreadsheet_questions};

// === Resolution and Extraction ===
pub use extract::{
    ExtractionContext, LONG_VALUE_CHARS, extract_answer, extract_blooms, extract_category,
    extract_difficulty, extract_exam, extract_marks, extract_options, extract_solution,
    extract_subject, extract_tags, extract_text, extract_time_limit, extract_topic, is_long,
    is_option_column, parse_delimited_list, parse_leading_int,
};
pub use normalize::{normalize_row, normalize_row_with};
pub use resolve::HeaderResolution;
pub use synonyms::{SYNONYMS, variants};
