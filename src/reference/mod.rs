// src/reference/mod.rs
//! Loaders for the KBO open data tables.
//!
//! Both tables are plain CSV without a meaningful header: the header line,
//! if present, never matches the filters and is dropped like any other
//! non-matching record. Every record must still have enough fields for the
//! columns the loaders look at; a short record aborts the run.

use csv::{Reader, ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use std::{fs::File, path::Path};
use tracing::{info, trace};

use crate::error::{EnrichError, Result};

pub mod activity;
pub mod codes;

pub use activity::{read_activities, ActivityMap, ActivityTables, ACTIVITY_SLOTS};
pub use codes::{read_codes, CodeLabels, NaceLabels};

/// Category of the NACE 2008 revision in `code.csv`.
pub const NACE_CATEGORY: &str = "Nace2008";
/// NACE version column value in `activity.csv`.
pub const NACE_VERSION: &str = "2008";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    French,
    Dutch,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::French => "FR",
            Language::Dutch => "NL",
        }
    }
}

/// Registering authority of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// VAT administration
    Vat,
    /// National Social Security Office
    Nsso,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Vat => "BTW001",
            Scheme::Nsso => "RSZ001",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Main,
    Secondary,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Main => "MAIN",
            Rank::Secondary => "SECO",
        }
    }
}

fn open_reader(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|source| EnrichError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}

/// Stream every record of `path` into `visit`, after checking it has at
/// least `width` fields. Returns the number of records seen.
pub(crate) fn read_records<T, F>(path: &Path, width: usize, mut visit: F) -> Result<u64>
where
    T: DeserializeOwned,
    F: FnMut(T),
{
    let mut rdr = open_reader(path)?;
    let mut record = StringRecord::new();
    let mut seen = 0u64;

    loop {
        let more = rdr.read_record(&mut record).map_err(|source| EnrichError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if !more {
            break;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(seen + 1);
        if record.len() < width {
            return Err(EnrichError::MalformedRecord {
                path: path.to_path_buf(),
                line,
                expected: width,
                found: record.len(),
            });
        }
        let row: T = record.deserialize(None).map_err(|source| EnrichError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(line, "record");
        visit(row);
        seen += 1;
    }

    info!(path = %path.display(), records = seen, "scanned reference file");
    Ok(seen)
}
