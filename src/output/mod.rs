// src/output/mod.rs
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::{debug, info};

use crate::input::{row_identifier, CellValue, Row};
use crate::reference::{ActivityTables, CodeLabels, Language, NaceLabels};

pub mod write;

pub use write::write_output;

/// Columns 0..COPIED_COLUMNS are mirrored from the input.
pub const COPIED_COLUMNS: usize = 9;
/// First activity column; column 9 stays blank.
pub const FIRST_ACTIVITY_COLUMN: usize = 10;
/// Label shown for a code that `code.csv` does not know.
pub const MISSING_LABEL: &str = "missing";

/// An output row: the mirrored cells plus the activity columns that matched.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRow {
    /// Always `COPIED_COLUMNS` long.
    pub copied: Vec<CellValue>,
    /// Column index → multi-line text. Only matched columns are present.
    pub activities: BTreeMap<usize, String>,
}

impl EnrichedRow {
    pub fn is_enriched(&self) -> bool {
        !self.activities.is_empty()
    }

    /// Value of any output column, `None` when the column is not written.
    pub fn cell(&self, col: usize) -> Option<CellValue> {
        if col < COPIED_COLUMNS {
            return self.copied.get(col).cloned();
        }
        self.activities.get(&col).cloned().map(CellValue::Text)
    }
}

/// `"{code} - {label}\n"` per code, in set order.
pub fn format_codes(codes: &[String], labels: &CodeLabels) -> String {
    let mut buf = String::new();
    for code in codes {
        let label = labels.get(code).map(String::as_str).unwrap_or(MISSING_LABEL);
        let _ = writeln!(buf, "{} - {}", code, label);
    }
    buf
}

/// Join every input row against the activity tables.
pub fn enrich_rows(
    rows: &[Row],
    labels: &NaceLabels,
    activities: &ActivityTables,
) -> Vec<EnrichedRow> {
    let fr = labels.for_language(Language::French);
    let nl = labels.for_language(Language::Dutch);

    let out: Vec<EnrichedRow> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let copied = (0..COPIED_COLUMNS)
                .map(|j| row.get(j).cloned().unwrap_or(CellValue::Empty))
                .collect();

            let mut cols = BTreeMap::new();
            if let Some(nr) = row_identifier(row) {
                for (slot, map) in activities.iter() {
                    if let Some(codes) = map.get(&nr) {
                        let col = FIRST_ACTIVITY_COLUMN + 2 * slot;
                        cols.insert(col, format_codes(codes, fr));
                        cols.insert(col + 1, format_codes(codes, nl));
                    }
                }
                if cols.is_empty() {
                    debug!(row = i, nr = %nr, "no activities found");
                }
            }

            EnrichedRow {
                copied,
                activities: cols,
            }
        })
        .collect();

    info!(
        rows = out.len(),
        enriched = out.iter().filter(|r| r.is_enriched()).count(),
        "joined activities"
    );
    out
}
