// src/output/write.rs
use std::path::Path;
use tracing::info;
use umya_spreadsheet::Worksheet;

use super::EnrichedRow;
use crate::error::{EnrichError, Result};
use crate::input::CellValue;

/// Write `rows` to a fresh single-sheet workbook at `path`.
///
/// Input row `i` lands on sheet row `i`. Mirrored columns are always
/// created (blank when empty); activity columns only when they matched,
/// and those wrap their text.
#[tracing::instrument(level = "info", skip(path, rows), fields(path = %path.as_ref().display(), rows = rows.len()))]
pub fn write_output<P: AsRef<Path>>(path: P, rows: &[EnrichedRow]) -> Result<()> {
    let path = path.as_ref();
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| EnrichError::spreadsheet(path, "new workbook has no sheet"))?;

    for (i, row) in rows.iter().enumerate() {
        fill_row(sheet, i, row);
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| EnrichError::spreadsheet(path, e))?;
    info!("wrote output workbook");
    Ok(())
}

// umya addresses cells as (col, row), both 1-based
fn coordinate(row: usize, col: usize) -> (u32, u32) {
    (col as u32 + 1, row as u32 + 1)
}

fn fill_row(sheet: &mut Worksheet, i: usize, row: &EnrichedRow) {
    for (j, value) in row.copied.iter().enumerate() {
        let cell = sheet.get_cell_mut(coordinate(i, j));
        match value {
            CellValue::Numeric(n) => {
                cell.set_value_number(*n);
            }
            CellValue::Text(s) => {
                cell.set_value_string(s.as_str());
            }
            CellValue::Empty => {}
        }
    }

    for (&j, text) in &row.activities {
        let cell = sheet.get_cell_mut(coordinate(i, j));
        cell.set_value_string(text.as_str());
        cell.get_style_mut()
            .get_alignment_mut()
            .set_wrap_text(true);
    }
}
