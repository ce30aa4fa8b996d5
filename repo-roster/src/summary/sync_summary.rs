//! Sync summary.

use crate::reconcile::ChangeCounts;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    /// Artifact that was read and rewritten.
    pub output: PathBuf,

    /// Number of records found in the previous artifact.
    pub existing: usize,

    /// Number of records returned by the search.
    pub fetched: usize,

    /// Records new to the artifact.
    pub added: usize,

    /// Records whose stars, owner, URL or push date changed.
    pub updated: usize,

    /// Fetched records identical to what the artifact already held.
    pub unchanged: usize,

    /// Number of records in the rendered artifact.
    pub total: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl SyncSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(output: PathBuf, dry_run: bool) -> Self {
        Self {
            output,
            dry_run,
            ..Default::default()
        }
    }

    /// Records the outcome of reconciliation.
    pub fn record_changes(&mut self, changes: &ChangeCounts) {
        self.added = changes.added;
        self.updated = changes.updated;
        self.unchanged = changes.unchanged;
    }

    /// Number of records that were added or changed.
    #[must_use]
    pub fn changed(&self) -> usize {
        self.added + self.updated
    }
}
