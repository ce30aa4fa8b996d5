//! Tracked repository records.
//!
//! A [`Record`] is one row of the artifact table. A [`RecordSet`] holds the
//! records keyed by repository name; it has no meaningful order of its own,
//! [`RecordSet::sorted`] provides the order used for rendering.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use url::Url;

/// One tracked repository.
///
/// Records are replaced wholesale on update, never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Repository name. Identity is case-sensitive.
    pub key: String,

    /// Canonical repository URL.
    pub location: Url,

    /// Login of the owning account.
    pub owner: String,

    /// Star count.
    pub popularity: u32,

    /// Date of the last push.
    pub last_activity: NaiveDate,
}

impl Record {
    /// Orders records by key ignoring case and accents, then by the exact key.
    ///
    /// The second step only matters for keys that differ purely in case or
    /// accents, which are distinct records but must still render in a fixed order.
    #[must_use]
    pub fn display_order(&self, other: &Self) -> Ordering {
        base_form(&self.key)
            .cmp(&base_form(&other.key))
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// Folds a key to its base letters: decomposed, combining marks dropped, lowercased.
fn base_form(key: &str) -> String {
    key.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Records keyed by [`Record::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: HashMap<String, Record>,
}

impl RecordSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the one it replaced.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.key.clone(), record)
    }

    /// Looks up a record by its exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in display order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by(|a, b| a.display_order(b));
        records
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

#[cfg(test)]
pub(crate) fn sample_record(key: &str, popularity: u32, date: &str) -> Record {
    Record {
        key: key.to_string(),
        location: Url::parse(&format!("https://github.com/someone/{key}")).unwrap(),
        owner: "someone".to_string(),
        popularity,
        last_activity: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_ignores_case() {
        let set: RecordSet = ["beta", "Alpha", "gamma", "DELTA"]
            .into_iter()
            .map(|key| sample_record(key, 0, "2026-01-01"))
            .collect();

        let keys: Vec<&str> = set.sorted().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["Alpha", "beta", "DELTA", "gamma"]);
    }

    #[test]
    fn sorted_ignores_accents() {
        let set: RecordSet = ["zeta-portfolio", "éclair-portfolio", "Zebra", "eclair"]
            .into_iter()
            .map(|key| sample_record(key, 0, "2026-01-01"))
            .collect();

        let keys: Vec<&str> = set.sorted().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["eclair", "éclair-portfolio", "Zebra", "zeta-portfolio"]);
    }

    #[test]
    fn accented_twins_keep_a_fixed_order() {
        let set: RecordSet = ["résumé", "resume", "Resume"]
            .into_iter()
            .map(|key| sample_record(key, 0, "2026-01-01"))
            .collect();

        assert_eq!(set.len(), 3);
        let keys: Vec<&str> = set.sorted().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["Resume", "resume", "résumé"]);
    }

    #[test]
    fn keys_differing_in_case_are_distinct() {
        let set: RecordSet = ["portfolio", "Portfolio"]
            .into_iter()
            .map(|key| sample_record(key, 0, "2026-01-01"))
            .collect();

        assert_eq!(set.len(), 2);
        let keys: Vec<&str> = set.sorted().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["Portfolio", "portfolio"]);
    }

    #[test]
    fn insert_replaces_whole_record() {
        let mut set = RecordSet::new();
        set.insert(sample_record("site", 1, "2026-01-01"));
        let previous = set.insert(sample_record("site", 5, "2026-02-01"));

        assert_eq!(previous.map(|r| r.popularity), Some(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("site").map(|r| r.popularity), Some(5));
    }
}
