//! Search query settings.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Largest page size the search API accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Page-count ceiling; the search API stops serving results after 1000 hits.
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Parameters of the repository search, fixed for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Substring that must appear in the repository name.
    pub name_filter: String,

    /// First day of the push-date window (inclusive).
    pub pushed_from: NaiveDate,

    /// Last day of the push-date window (inclusive).
    pub pushed_to: NaiveDate,

    /// Whether forks are searched as well.
    pub include_forks: bool,

    /// Results requested per page.
    pub per_page: u8,

    /// Maximum number of pages requested per run.
    pub max_pages: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            name_filter: "portfolio".to_string(),
            pushed_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or(NaiveDate::MIN),
            pushed_to: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or(NaiveDate::MIN),
            include_forks: false,
            per_page: MAX_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl SearchConfig {
    /// Builds the search query expression.
    ///
    /// Format: `{name_filter} in:name pushed:{from}..{to} fork:{forks}`
    #[must_use]
    pub fn query(&self) -> String {
        format!(
            "{} in:name pushed:{}..{} fork:{}",
            self.name_filter,
            self.pushed_from.format("%Y-%m-%d"),
            self.pushed_to.format("%Y-%m-%d"),
            self.include_forks
        )
    }

    /// Title used when the configuration does not name one,
    /// e.g. `Portfolio Repositories (2026)`.
    #[must_use]
    pub fn default_title(&self) -> String {
        let mut chars = self.name_filter.chars();
        let subject: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };

        let (from, to) = (self.pushed_from.year(), self.pushed_to.year());
        if from == to {
            format!("{subject} Repositories ({from})")
        } else {
            format!("{subject} Repositories ({from}-{to})")
        }
    }

    /// Explanatory note rendered below the title.
    #[must_use]
    pub fn note(&self) -> String {
        let forks = if self.include_forks {
            "including forks"
        } else {
            "excluding forks"
        };
        format!(
            "Repositories with `{}` in their name, pushed between {} and {} ({forks}). \
             This file is regenerated automatically; rows are only ever added or refreshed.",
            self.name_filter,
            self.pushed_from.format("%Y-%m-%d"),
            self.pushed_to.format("%Y-%m-%d"),
        )
    }

    /// Checks the settings, returning a description of the first problem found.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.name_filter.trim().is_empty() {
            return Err("name-filter must not be empty".to_string());
        }
        if self.pushed_from > self.pushed_to {
            return Err(format!(
                "pushed-from ({}) is after pushed-to ({})",
                self.pushed_from, self.pushed_to
            ));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(format!(
                "per-page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.per_page
            ));
        }
        if self.max_pages == 0 {
            return Err("max-pages must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let config = SearchConfig::default();
        assert_eq!(
            config.query(),
            "portfolio in:name pushed:2026-01-01..2026-12-31 fork:false"
        );
    }

    #[test]
    fn test_query_with_forks() {
        let config = SearchConfig {
            include_forks: true,
            ..SearchConfig::default()
        };
        assert!(config.query().ends_with("fork:true"));
    }

    #[test]
    fn test_default_title() {
        assert_eq!(
            SearchConfig::default().default_title(),
            "Portfolio Repositories (2026)"
        );

        let config = SearchConfig {
            name_filter: "dotfiles".to_string(),
            pushed_from: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            ..SearchConfig::default()
        };
        assert_eq!(config.default_title(), "Dotfiles Repositories (2025-2026)");
    }

    #[test]
    fn check_rejects_inverted_window() {
        let config = SearchConfig {
            pushed_from: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            ..SearchConfig::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn check_rejects_page_size_out_of_range() {
        let zero = SearchConfig {
            per_page: 0,
            ..SearchConfig::default()
        };
        let too_big = SearchConfig {
            per_page: 101,
            ..SearchConfig::default()
        };
        assert!(zero.check().is_err());
        assert!(too_big.check().is_err());
        assert!(SearchConfig::default().check().is_ok());
    }
}
