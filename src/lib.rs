//! Enrich a spreadsheet of Belgian enterprise numbers with the NACE 2008
//! activities registered for them in the KBO open data tables.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod reference;

#[cfg(test)]
mod test_util;

pub use config::RunConfig;
pub use error::EnrichError;
pub use pipeline::{run, RunSummary};
