// src/input/key.rs
use std::collections::HashSet;
use tracing::{debug, info};

use super::{CellValue, Row};

/// Zero-based column holding the enterprise number.
pub const KEY_COLUMN: usize = 4;

/// Enterprise numbers are sometimes typed as `0.123456789`; KBO stores `0123456789`.
pub fn normalize_identifier(raw: &str) -> String {
    match raw.strip_prefix("0.") {
        Some(rest) => format!("0{}", rest),
        None => raw.to_string(),
    }
}

/// The normalized key of a row, if its key cell holds text.
pub fn row_identifier(row: &Row) -> Option<String> {
    match row.get(KEY_COLUMN)? {
        CellValue::Text(s) => Some(normalize_identifier(s)),
        other => {
            debug!(cell = ?other, "key column is not text, skipping row");
            None
        }
    }
}

/// Collect the distinct identifiers the reference tables must be filtered on.
pub fn extract_identifiers(rows: &[Row]) -> HashSet<String> {
    let mut nrs = HashSet::with_capacity(2048);
    for row in rows {
        if let Some(nr) = row_identifier(row) {
            nrs.insert(nr);
        }
    }
    info!(identifiers = nrs.len(), "extracted enterprise numbers");
    nrs
}
