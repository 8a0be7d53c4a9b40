// src/pipeline.rs
use std::time::Instant;
use tracing::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::input::{extract_identifiers, read_input};
use crate::output::{enrich_rows, write_output};
use crate::reference::{ActivityTables, NaceLabels};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub identifiers: usize,
    pub enriched_rows: usize,
}

/// Read, join and write. Nothing is written unless every stage succeeds.
pub fn run(cfg: &RunConfig) -> Result<RunSummary> {
    let start = Instant::now();

    // ─── 1) input sheet ──────────────────────────────────────────────
    let rows = read_input(&cfg.input)?;
    let nrs = extract_identifiers(&rows);

    // ─── 2) reference tables ─────────────────────────────────────────
    let labels = NaceLabels::load(cfg.code_path())?;
    let activities = ActivityTables::load(cfg.activity_path(), &nrs)?;

    // ─── 3) join + write ─────────────────────────────────────────────
    let enriched = enrich_rows(&rows, &labels, &activities);
    let output = cfg.output_path();
    write_output(&output, &enriched)?;

    let summary = RunSummary {
        rows: rows.len(),
        identifiers: nrs.len(),
        enriched_rows: enriched.iter().filter(|r| r.is_enriched()).count(),
    };
    info!(
        output = %output.display(),
        elapsed = ?start.elapsed(),
        ?summary,
        "run complete"
    );
    Ok(summary)
}
