// src/input/mod.rs
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EnrichError, Result};

pub mod key;

pub use key::{extract_identifiers, normalize_identifier, row_identifier, KEY_COLUMN};

/// A single input cell. Only numbers and text carry over to the output.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Numeric(f64),
    Text(String),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Formula cells come through as their cached result, so a formula that
/// evaluated to a number or string is copied like a literal.
impl From<&Data> for CellValue {
    fn from(d: &Data) -> Self {
        match d {
            Data::Float(f) => CellValue::Numeric(*f),
            Data::Int(i) => CellValue::Numeric(*i as f64),
            // Excel stores dates as serial numbers
            Data::DateTime(dt) => CellValue::Numeric(dt.as_f64()),
            Data::String(s) => CellValue::Text(s.clone()),
            _ => CellValue::Empty,
        }
    }
}

/// One sheet row, indexed by zero-based column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// `None` when the column lies past the last cell or the cell is blank.
    pub fn get(&self, col: usize) -> Option<&CellValue> {
        self.cells.get(col).filter(|c| !c.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }
}

/// Read the first sheet of the workbook at `path` into memory, in row order.
///
/// Column positions are absolute: if the used range starts at column C, the
/// first two cells of every row are `Empty`. Rows with no value at all are
/// dropped, so the remaining rows are packed.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|e| EnrichError::spreadsheet(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| EnrichError::spreadsheet(path, "workbook has no sheets"))?
        .map_err(|e| EnrichError::spreadsheet(path, e))?;

    let col_offset = range.start().map(|(_, c)| c as usize).unwrap_or(0);
    debug!(col_offset, size = ?range.get_size(), "first sheet range");

    let rows: Vec<Row> = range
        .rows()
        .map(|cells| {
            let mut row = Vec::with_capacity(col_offset + cells.len());
            row.resize(col_offset, CellValue::Empty);
            row.extend(cells.iter().map(CellValue::from));
            Row::new(row)
        })
        .filter(|row| !row.is_blank())
        .collect();

    let dropped = range.height() - rows.len();
    if dropped > 0 {
        debug!(dropped, "skipped blank rows");
    }
    info!(rows = rows.len(), "read input sheet");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_row_get_skips_blanks() {
        let row = Row::new(vec![
            CellValue::Text("a".into()),
            CellValue::Empty,
            CellValue::Numeric(3.0),
        ]);
        assert_eq!(row.get(0), Some(&CellValue::Text("a".into())));
        assert_eq!(row.get(1), None);
        assert_eq!(row.get(2), Some(&CellValue::Numeric(3.0)));
        assert_eq!(row.get(9), None);
        assert!(!row.is_blank());
        assert!(Row::new(vec![CellValue::Empty]).is_blank());
    }

    #[test]
    fn test_read_input_keeps_types_and_offsets() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("in.xlsx");

        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        // used range starts at column B
        sheet.get_cell_mut("B1").set_value_string("name");
        sheet.get_cell_mut("C1").set_value_number(42.5);
        sheet.get_cell_mut("B2").set_value_string("other");
        umya_spreadsheet::writer::xlsx::write(&book, &path)?;

        let rows = read_input(&path)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), None);
        assert_eq!(rows[0].get(1), Some(&CellValue::Text("name".into())));
        assert_eq!(rows[0].get(2), Some(&CellValue::Numeric(42.5)));
        assert_eq!(rows[1].get(1), Some(&CellValue::Text("other".into())));
        assert_eq!(rows[1].get(2), None);
        Ok(())
    }

    #[test]
    fn test_read_input_drops_blank_rows() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("in.xlsx");

        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut("A1").set_value_string("r1");
        sheet.get_cell_mut("A3").set_value_string("r3");
        umya_spreadsheet::writer::xlsx::write(&book, &path)?;

        let rows = read_input(&path)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), Some(&CellValue::Text("r1".into())));
        assert_eq!(rows[1].get(0), Some(&CellValue::Text("r3".into())));
        assert!(rows.iter().all(|r| !r.is_blank()));
        Ok(())
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_input(dir.path().join("nope.xlsx")).unwrap_err();
        assert!(matches!(err, EnrichError::Spreadsheet { .. }));
    }
}
