//! CSV reading.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{read_csv_questions, read_csv_questions_from_reader};
