// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort an enrichment run.
///
/// Apart from `Usage`, every variant belongs to the I/O class: missing files,
/// unreadable workbooks, bad CSV and failed writes. None of them is
/// recoverable and the run stops at the first one.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("usage: input-file directory-kbo-csv output-file")]
    Usage,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed record in {path} at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("spreadsheet error on {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },
}

impl EnrichError {
    pub fn is_usage(&self) -> bool {
        matches!(self, EnrichError::Usage)
    }

    pub(crate) fn spreadsheet(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        EnrichError::Spreadsheet {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;
