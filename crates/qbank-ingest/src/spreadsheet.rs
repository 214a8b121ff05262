//! Spreadsheet (XLSX/XLS) question reader.
//!
//! The workbook is read whole; only the first sheet is imported. The first
//! row of the sheet names the columns. Each later row becomes a keyed row
//! holding only its non-empty cells, so the header list used for resolution
//! is the key order of the first data row.

use std::collections::BTreeMap;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use qbank_model::{CellValue, RawRow};
use tracing::debug;

use crate::csv::normalize_header;
use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::import::ImportOutcome;

/// Column name given to header cells that are empty.
const EMPTY_HEADER: &str = "__EMPTY";

/// Reads the first sheet of a workbook and normalizes every row.
pub fn read_spreadsheet_questions(path: &Path) -> Result<ImportOutcome> {
    std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    debug!(
        rows = range.height(),
        columns = range.width(),
        "first sheet loaded"
    );
    Ok(outcome_from_range(&range))
}

/// Converts a loaded sheet into normalized rows.
pub fn outcome_from_range(range: &Range<Data>) -> ImportOutcome {
    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        return ImportOutcome::new(SourceFormat::Spreadsheet, Vec::new());
    };
    let columns = column_names(header_cells);

    let mut outcome: Option<ImportOutcome> = None;
    for cells in rows {
        let mut row = RawRow::new();
        for (column, cell) in columns.iter().zip(cells) {
            if let Some(value) = cell_value(cell) {
                row.insert(column.clone(), value);
            }
        }
        if row.is_empty() {
            continue;
        }
        let outcome = outcome.get_or_insert_with(|| {
            let headers = row.keys().map(str::to_string).collect();
            ImportOutcome::new(SourceFormat::Spreadsheet, headers)
        });
        outcome.push_row(row);
    }
    outcome.unwrap_or_else(|| ImportOutcome::new(SourceFormat::Spreadsheet, Vec::new()))
}

/// Header names for the sheet, made unique.
///
/// Empty header cells become `__EMPTY`; repeats get a `_1`, `_2`, ... suffix.
fn column_names(cells: &[Data]) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    cells
        .iter()
        .map(|cell| {
            let name = cell_value(cell)
                .map(|value| normalize_header(&value.to_text()))
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| EMPTY_HEADER.to_string());
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{name}_{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    let value = match cell {
        Data::Empty => return None,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[&[Data]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn test_rows_normalized_with_numbers_coerced() {
        let range = sheet(&[
            &[text("Question"), text("Answer"), text("Marks")],
            &[text("What is 2+2?"), Data::Float(4.0), Data::Int(2)],
        ]);
        let outcome = outcome_from_range(&range);

        assert_eq!(outcome.format, SourceFormat::Spreadsheet);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].answer, "4");
        assert_eq!(outcome.records[0].marks, 2);
    }

    #[test]
    fn test_headers_come_from_first_data_row_keys() {
        let range = sheet(&[
            &[text("Question"), text("Subject"), text("Answer")],
            &[text("What is 2+2?"), Data::Empty, text("4")],
            &[text("What is 3+3?"), text("Math"), text("6")],
        ]);
        let outcome = outcome_from_range(&range);

        assert_eq!(outcome.headers, vec!["Question", "Answer"]);
        assert_eq!(outcome.records.len(), 2);
        // Subject was not among the first row's keys, so it never resolves.
        assert_eq!(outcome.records[1].subject, "general");
    }

    #[test]
    fn test_blank_rows_skipped() {
        let range = sheet(&[
            &[text("Question"), text("Answer")],
            &[Data::Empty, Data::Empty],
            &[text("What is 2+2?"), text("4")],
        ]);
        let outcome = outcome_from_range(&range);
        assert_eq!(outcome.total_rows(), 1);
    }

    #[test]
    fn test_column_names_made_unique() {
        let names = column_names(&[text("Option"), Data::Empty, text("Option"), Data::Empty]);
        assert_eq!(names, vec!["Option", "__EMPTY", "Option_1", "__EMPTY_1"]);
    }

    #[test]
    fn test_header_only_sheet() {
        let range = sheet(&[&[text("Question"), text("Answer")]]);
        let outcome = outcome_from_range(&range);
        assert!(outcome.headers.is_empty());
        assert_eq!(outcome.total_rows(), 0);
    }

    #[test]
    fn test_corrupt_workbook_is_fatal() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"not a zip archive").unwrap();
        let result = read_spreadsheet_questions(file.path());
        assert!(matches!(result, Err(IngestError::Workbook { .. })));
    }
}
