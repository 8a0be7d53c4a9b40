// src/reference/codes.rs
use serde::Deserialize;
use std::{collections::HashMap, path::Path};
use tracing::info;

use super::{read_records, Language, NACE_CATEGORY};
use crate::error::Result;

/// NACE code → label, for one language.
pub type CodeLabels = HashMap<String, String>;

/// One line of `code.csv`.
#[derive(Debug, Deserialize)]
struct CodeRecord {
    category: String,
    code: String,
    language: String,
    description: String,
}

const CODE_FIELDS: usize = 4;

/// Read the NACE 2008 labels for `language` from `code.csv`.
/// A code listed twice keeps its last label.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_codes<P: AsRef<Path>>(path: P, language: Language) -> Result<CodeLabels> {
    let mut codes = HashMap::with_capacity(2048);
    read_records(path.as_ref(), CODE_FIELDS, |rec: CodeRecord| {
        if rec.category == NACE_CATEGORY && rec.language == language.as_str() {
            codes.insert(rec.code, rec.description);
        }
    })?;
    info!(labels = codes.len(), "loaded NACE labels");
    Ok(codes)
}

/// French and Dutch labels side by side.
#[derive(Debug, Default, Clone)]
pub struct NaceLabels {
    pub french: CodeLabels,
    pub dutch: CodeLabels,
}

impl NaceLabels {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dutch = read_codes(path, Language::Dutch)?;
        let french = read_codes(path, Language::French)?;
        Ok(Self { french, dutch })
    }

    pub fn for_language(&self, language: Language) -> &CodeLabels {
        match language {
            Language::French => &self.french,
            Language::Dutch => &self.dutch,
        }
    }
}
