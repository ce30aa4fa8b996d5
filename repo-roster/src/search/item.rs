//! Raw search result items.

use crate::record::Record;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

/// One page of the `/search/repositories` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Total matches reported by the API, which may exceed what is served.
    #[serde(default)]
    pub total_count: u64,

    /// Set when the search timed out before covering the whole index.
    #[serde(default)]
    pub incomplete_results: bool,

    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A repository as returned by the search API, reduced to the used fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchItem {
    pub name: String,

    pub html_url: Option<String>,

    pub owner: Option<SearchOwner>,

    #[serde(default)]
    pub stargazers_count: u32,

    /// Null for repositories that never received a push.
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Owner account of a search item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchOwner {
    pub login: String,
}

impl SearchItem {
    /// Converts the item into a [`Record`], dropping the time of day.
    ///
    /// Returns `None` when the owner, URL or push date is missing or the URL
    /// does not parse.
    #[must_use]
    pub fn to_record(&self) -> Option<Record> {
        let location = Url::parse(self.html_url.as_deref()?).ok()?;
        Some(Record {
            key: self.name.clone(),
            location,
            owner: self.owner.as_ref()?.login.clone(),
            popularity: self.stargazers_count,
            last_activity: self.pushed_at?.date_naive(),
        })
    }
}
