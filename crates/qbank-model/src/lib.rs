//! Core types for the question bank importer.
//!
//! This crate holds the shapes every other crate agrees on:
//!
//! - **Canonical fields**: the twelve question attributes an import always produces
//! - **Cell values**: weakly typed spreadsheet/CSV cells at the reader boundary
//! - **Raw rows**: one uploaded row keyed by its header strings
//! - **Question records**: the normalized, draft-only output of an import
//! - **Defaults**: the single immutable record of placeholder values
//!
//! # Example
//!
//! ```ignore
//! use qbank_model::{CellValue, RawRow, RecordDefaults};
//!
//! let headers = vec!["Question".to_string(), "Answer".to_string()];
//! let row = RawRow::from_cells(&headers, vec![
//!     CellValue::from("What is 2+2?"),
//!     CellValue::Number(4.0),
//! ]);
//! assert_eq!(row.get("Answer").to_text(), "4");
//! assert_eq!(RecordDefaults::STANDARD.marks, 1);
//! ```

mod cell;
mod defaults;
mod field;
mod record;
mod row;

pub use cell::CellValue;
pub use defaults::RecordDefaults;
pub use field::CanonicalField;
pub use record::{PublishStatus, QuestionRecord};
pub use row::RawRow;
