//! Raw uploaded rows keyed by header.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::cell::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One row of an uploaded file, keyed by the file's header strings.
///
/// Keys keep the order in which they were inserted. Inserting an existing
/// header replaces its value, so a file with duplicate headers keeps the
/// rightmost cell. Cells with no header to attach to are kept as overflow,
/// tagged with their zero-based column index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
    overflow: Vec<(usize, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs cells with headers positionally.
    ///
    /// Missing trailing cells become [`CellValue::Empty`]; cells past the last
    /// header become overflow.
    pub fn from_cells(headers: &[String], cells: Vec<CellValue>) -> Self {
        let mut row = Self::new();
        let mut cells = cells.into_iter();
        for header in headers {
            row.insert(header.clone(), cells.next().unwrap_or_default());
        }
        for (offset, cell) in cells.enumerate() {
            row.overflow.push((headers.len() + offset, cell));
        }
        row
    }

    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        let header = header.into();
        match self.cells.iter_mut().find(|(key, _)| *key == header) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((header, value)),
        }
    }

    /// Value under `header`, or [`CellValue::Empty`] when the row has no such key.
    pub fn get(&self, header: &str) -> &CellValue {
        self.cells
            .iter()
            .find(|(key, _)| key == header)
            .map_or(&EMPTY_CELL, |(_, value)| value)
    }

    /// Header keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn overflow(&self) -> &[(usize, CellValue)] {
        &self.overflow
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.overflow.is_empty()
    }

    /// True when every cell, overflow included, is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, value)| value.is_blank())
            && self.overflow.iter().all(|(_, value)| value.is_blank())
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len() + self.overflow.len()))?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        for (index, value) in &self.overflow {
            map.serialize_entry(&format!("_{index}"), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_from_cells_pads_missing_cells() {
        let row = RawRow::from_cells(&headers(&["A", "B", "C"]), vec!["1".into()]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("A"), &CellValue::from("1"));
        assert_eq!(row.get("C"), &CellValue::Empty);
        assert!(row.overflow().is_empty());
    }

    #[test]
    fn test_from_cells_keeps_overflow() {
        let row = RawRow::from_cells(
            &headers(&["A"]),
            vec!["1".into(), "2".into(), CellValue::Number(3.0)],
        );
        assert_eq!(row.overflow().len(), 2);
        assert_eq!(row.overflow()[0].0, 1);
        assert_eq!(row.overflow()[1], (2, CellValue::Number(3.0)));
    }

    #[test]
    fn test_duplicate_header_keeps_rightmost() {
        let row = RawRow::from_cells(&headers(&["A", "A"]), vec!["x".into(), "y".into()]);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("A").to_text(), "y");
    }

    #[test]
    fn test_missing_header_reads_as_empty() {
        let row = RawRow::new();
        assert_eq!(row.get("nope"), &CellValue::Empty);
        assert_eq!(row.keys().count(), 0);
    }

    #[test]
    fn test_serializes_as_object_with_overflow_keys() {
        let row = RawRow::from_cells(&headers(&["Q"]), vec!["hi".into(), "extra".into()]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Q":"hi","_1":"extra"}"#);
    }
}
