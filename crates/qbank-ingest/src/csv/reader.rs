//! Streaming CSV question reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use qbank_model::{CellValue, RawRow};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::import::ImportOutcome;

use super::header::normalize_header;

/// Reads a CSV file, normalizing each row as it is parsed.
pub fn read_csv_questions(path: &Path) -> Result<ImportOutcome> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    read_csv_questions_from_reader(file, path)
}

/// Reads CSV data from any reader. `path` is used for error reporting only.
///
/// The first record is the header row. Short rows are padded with empty
/// cells; blank rows are skipped. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD. Only a failure of the underlying stream aborts the
/// whole read.
pub fn read_csv_questions_from_reader<R: Read>(source: R, path: &Path) -> Result<ImportOutcome> {
    let csv_error = |source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(csv_error)?
        .iter()
        .map(|raw| normalize_header(&String::from_utf8_lossy(raw)))
        .collect();
    debug!(columns = headers.len(), "csv headers read");

    let mut outcome = ImportOutcome::new(SourceFormat::Csv, headers);
    for result in reader.byte_records() {
        let record = result.map_err(csv_error)?;
        let cells: Vec<CellValue> = record
            .iter()
            .map(|raw| CellValue::from(String::from_utf8_lossy(raw).into_owned()))
            .collect();
        let row = RawRow::from_cells(&outcome.headers, cells);
        if row.is_blank() {
            continue;
        }
        outcome.push_row(row);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_reads_headers_and_rows() {
        let file = create_temp_csv(
            "Question,Answer\nWhat is the capital of France?,Paris\nWhat is 2+2?,4\n",
        );
        let outcome = read_csv_questions(file.path()).unwrap();

        assert_eq!(outcome.headers, vec!["Question", "Answer"]);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].answer, "Paris");
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_blank_rows_skipped() {
        let file = create_temp_csv("Question,Answer\n,\nWhat is 2+2?,4\n");
        let outcome = read_csv_questions(file.path()).unwrap();
        assert_eq!(outcome.total_rows(), 1);
    }

    #[test]
    fn test_wide_row_is_row_error_not_fatal() {
        let file = create_temp_csv("Question,Answer\nWhat is 2+2?,4,extra\nWhat is 3+3?,6\n");
        let outcome = read_csv_questions(file.path()).unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].row.get("Question").to_text(), "What is 2+2?");
        assert!(outcome.errors[0].error.contains("beyond the 2 header"));
    }

    #[test]
    fn test_header_only_file() {
        let file = create_temp_csv("Question,Answer\n");
        let outcome = read_csv_questions(file.path()).unwrap();
        assert_eq!(outcome.headers.len(), 2);
        assert_eq!(outcome.total_rows(), 0);
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_questions(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let bytes: &[u8] = b"Question,Answer\nWhat is the caf\xe9 called?,Bistro\nWhat is 2+2?,4\n";
        let outcome = read_csv_questions_from_reader(bytes, Path::new("cp1252.csv")).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.records[0].text, "What is the caf\u{fffd} called?");
        assert_eq!(outcome.records[0].answer, "Bistro");
        assert_eq!(outcome.records[1].answer, "4");
    }

    #[test]
    fn test_invalid_utf8_header_is_replaced() {
        let bytes: &[u8] = b"Qu\xe9stion,Answer\nWhat is 2+2?,4\n";
        let outcome = read_csv_questions_from_reader(bytes, Path::new("cp1252.csv")).unwrap();
        assert_eq!(outcome.headers[0], "Qu\u{fffd}stion");
        assert_eq!(outcome.records[0].answer, "4");
    }

    /// Yields an I/O error on every read.
    struct BrokenStream;

    impl Read for BrokenStream {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("connection reset"))
        }
    }

    #[test]
    fn test_stream_failure_aborts() {
        let result = read_csv_questions_from_reader(BrokenStream, Path::new("upload.csv"));
        assert!(matches!(result, Err(IngestError::CsvRead { .. })));
    }

    #[test]
    fn test_stream_failure_mid_file_aborts() {
        let source = (&b"Question,Answer\nWhat is 2+2?,4\n"[..]).chain(BrokenStream);
        let result = read_csv_questions_from_reader(source, Path::new("upload.csv"));
        assert!(matches!(result, Err(IngestError::CsvRead { .. })));
    }
}
