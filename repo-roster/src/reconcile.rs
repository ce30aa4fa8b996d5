//! Merging fresh search results into the existing record set.

use crate::record::{Record, RecordSet};
use std::collections::HashMap;

/// How a reconciliation changed the base set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    /// Fresh records whose key was not in the base set.
    pub added: usize,
    /// Fresh records that replaced a differing base record.
    pub updated: usize,
    /// Fresh records identical to the base record they replaced.
    pub unchanged: usize,
}

impl ChangeCounts {
    /// Number of records that were added or changed.
    #[must_use]
    pub fn changed(&self) -> usize {
        self.added + self.updated
    }
}

/// Result of [`reconcile`].
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub records: RecordSet,
    pub changes: ChangeCounts,
}

/// Merges `fresh` records into `base`.
///
/// A fresh record always overwrites the base record with the same key.
/// When several fresh records share a key, the one processed last wins.
/// Base records with no fresh counterpart are kept as they are.
pub fn reconcile(base: RecordSet, fresh: impl IntoIterator<Item = Record>) -> Reconciliation {
    let mut latest: HashMap<String, Record> = HashMap::new();
    for record in fresh {
        latest.insert(record.key.clone(), record);
    }

    let mut records = base;
    let mut changes = ChangeCounts::default();

    for record in latest.into_values() {
        match records.get(&record.key) {
            None => changes.added += 1,
            Some(existing) if *existing == record => changes.unchanged += 1,
            Some(_) => changes.updated += 1,
        }
        records.insert(record);
    }

    Reconciliation { records, changes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_record;

    #[test]
    fn fresh_record_replaces_base() {
        let base: RecordSet = [sample_record("alpha-portfolio", 3, "2026-01-05")]
            .into_iter()
            .collect();
        let fresh = vec![
            sample_record("alpha-portfolio", 7, "2026-03-01"),
            sample_record("beta-portfolio", 1, "2026-02-10"),
        ];

        let result = reconcile(base, fresh);

        assert_eq!(result.records.len(), 2);
        let alpha = result.records.get("alpha-portfolio").unwrap();
        assert_eq!(alpha.popularity, 7);
        assert_eq!(alpha.last_activity.to_string(), "2026-03-01");
        assert_eq!(
            result.changes,
            ChangeCounts {
                added: 1,
                updated: 1,
                unchanged: 0
            }
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let fresh = vec![
            sample_record("site", 1, "2026-04-01"),
            sample_record("other", 2, "2026-04-01"),
            sample_record("site", 9, "2026-01-01"),
        ];

        let result = reconcile(RecordSet::new(), fresh);

        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records.get("site").unwrap().popularity, 9);
        assert_eq!(result.changes.added, 2);
    }

    #[test]
    fn base_records_are_never_removed() {
        let kept = sample_record("old-portfolio", 4, "2025-12-30");
        let base: RecordSet = [kept.clone()].into_iter().collect();

        let result = reconcile(base, vec![sample_record("new-portfolio", 0, "2026-06-01")]);

        assert_eq!(result.records.get("old-portfolio"), Some(&kept));
        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn identical_records_count_as_unchanged() {
        let record = sample_record("same", 2, "2026-02-02");
        let base: RecordSet = [record.clone()].into_iter().collect();

        let result = reconcile(base.clone(), vec![record]);

        assert_eq!(result.records, base);
        assert_eq!(result.changes.unchanged, 1);
        assert_eq!(result.changes.changed(), 0);
    }

    #[test]
    fn key_match_is_case_sensitive() {
        let base: RecordSet = [sample_record("Portfolio", 1, "2026-01-01")]
            .into_iter()
            .collect();

        let result = reconcile(base, vec![sample_record("portfolio", 2, "2026-01-02")]);

        assert_eq!(result.records.len(), 2);
        assert_eq!(result.changes.added, 1);
    }
}
