// src/reference/activity.rs
use serde::Deserialize;
use std::{
    collections::{HashMap, HashSet},
    path::Path,
};
use tracing::info;

use super::{read_records, Rank, Scheme, NACE_VERSION};
use crate::error::Result;

/// Enterprise number → NACE codes.
///
/// Codes of one enterprise are deduplicated and iterate in the order they
/// first appeared in `activity.csv`, so output is reproducible run to run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActivityMap {
    inner: HashMap<String, Vec<String>>,
}

impl ActivityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the code was already recorded for `nr`.
    pub fn insert(&mut self, nr: impl Into<String>, code: impl Into<String>) -> bool {
        let code = code.into();
        let codes = self.inner.entry(nr.into()).or_default();
        // an enterprise has a handful of codes at most
        if codes.contains(&code) {
            return false;
        }
        codes.push(code);
        true
    }

    pub fn get(&self, nr: &str) -> Option<&[String]> {
        self.inner.get(nr).map(Vec::as_slice)
    }

    pub fn contains_key(&self, nr: &str) -> bool {
        self.inner.contains_key(nr)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Number of enterprises.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// One line of `activity.csv`.
#[derive(Debug, Deserialize)]
struct ActivityRecord {
    entity_number: String,
    activity_group: String,
    nace_version: String,
    nace_code: String,
    classification: String,
}

const ACTIVITY_FIELDS: usize = 5;

/// Read the NACE 2008 activities of rank `rank` registered under `scheme`,
/// keeping only the enterprises in `nrs`.
#[tracing::instrument(level = "info", skip(path, nrs), fields(path = %path.as_ref().display()))]
pub fn read_activities<P: AsRef<Path>>(
    path: P,
    nrs: &HashSet<String>,
    scheme: Scheme,
    rank: Rank,
) -> Result<ActivityMap> {
    let mut multi = ActivityMap::new();
    read_records(path.as_ref(), ACTIVITY_FIELDS, |rec: ActivityRecord| {
        if rec.activity_group == scheme.as_str()
            && rec.nace_version == NACE_VERSION
            && rec.classification == rank.as_str()
            && nrs.contains(&rec.entity_number)
        {
            multi.insert(rec.entity_number, rec.nace_code);
        }
    })?;
    info!(enterprises = multi.len(), "loaded activities");
    Ok(multi)
}

/// The (scheme, rank) combinations, in output column order.
pub const ACTIVITY_SLOTS: [(Scheme, Rank); 4] = [
    (Scheme::Vat, Rank::Main),
    (Scheme::Vat, Rank::Secondary),
    (Scheme::Nsso, Rank::Main),
    (Scheme::Nsso, Rank::Secondary),
];

/// One `ActivityMap` per entry of `ACTIVITY_SLOTS`, same order.
#[derive(Debug, Default, Clone)]
pub struct ActivityTables {
    maps: [ActivityMap; 4],
}

impl ActivityTables {
    pub fn new(maps: [ActivityMap; 4]) -> Self {
        Self { maps }
    }

    /// Build all four maps, reading `path` once per combination.
    pub fn load<P: AsRef<Path>>(path: P, nrs: &HashSet<String>) -> Result<Self> {
        let path = path.as_ref();
        let mut maps: [ActivityMap; 4] = Default::default();
        for (slot, (scheme, rank)) in ACTIVITY_SLOTS.iter().enumerate() {
            maps[slot] = read_activities(path, nrs, *scheme, *rank)?;
        }
        Ok(Self { maps })
    }

    pub fn get(&self, scheme: Scheme, rank: Rank) -> &ActivityMap {
        let slot = match (scheme, rank) {
            (Scheme::Vat, Rank::Main) => 0,
            (Scheme::Vat, Rank::Secondary) => 1,
            (Scheme::Nsso, Rank::Main) => 2,
            (Scheme::Nsso, Rank::Secondary) => 3,
        };
        &self.maps[slot]
    }

    /// Iterate `(slot, map)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ActivityMap)> {
        self.maps.iter().enumerate()
    }
}
