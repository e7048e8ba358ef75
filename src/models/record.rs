//! Raw viewing-history records.

use serde::{Deserialize, Serialize};

/// One row of the viewing-history export.
///
/// `date` is kept exactly as exported; it is only parsed when a sort key
/// is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Title as exported, e.g. `"Show: Season 1: Pilot"`.
    pub title: String,
    /// Watch date, expected as `M/D/YY`.
    pub date: String,
}

impl RawRecord {
    /// Create a record from anything string-like.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
        }
    }
}

/// Records loaded from a source plus how many rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Records in source row order.
    pub records: Vec<RawRecord>,
    /// Rows skipped because they had no title.
    pub skipped_rows: usize,
}

impl LoadReport {
    /// Total rows seen in the source.
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.skipped_rows
    }
}
