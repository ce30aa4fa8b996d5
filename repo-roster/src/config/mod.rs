//! Sync configuration loading.
//!
//! The configuration file is optional; every key has a default matching the
//! original portfolio listing. Example:
//!
//! ```toml
//! name-filter = "portfolio"
//! pushed-from = "2026-01-01"
//! pushed-to = "2026-12-31"
//! include-forks = false
//! per-page = 100
//! max-pages = 10
//! output = "README.md"
//! title = "Portfolio Repositories (2026)"
//! ```

mod error;
mod search;

pub use error::ConfigError;
pub use search::{SearchConfig, DEFAULT_MAX_PAGES, MAX_PER_PAGE};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default artifact location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Top-level keys understood in the config file.
const KNOWN_KEYS: &[&str] = &[
    "name-filter",
    "pushed-from",
    "pushed-to",
    "include-forks",
    "per-page",
    "max-pages",
    "output",
    "title",
];

/// Settings for a synchronization run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SyncConfig {
    /// Search query parameters.
    #[serde(flatten)]
    pub search: SearchConfig,

    /// Path of the artifact that is read and rewritten.
    pub output: PathBuf,

    /// Title line of the artifact; derived from the search when absent.
    pub title: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: None,
        }
    }
}

impl SyncConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation. Unknown keys are logged and otherwise ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading sync config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        if let Ok(table) = toml::from_str::<toml::Table>(&content) {
            for key in unknown_keys(&table) {
                warn!(path = %path.display(), key, "Ignoring unknown config key");
            }
        }

        config.validate(path)?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first invalid setting.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        self.search.check().map_err(fail)?;

        if self.output.as_os_str().is_empty() {
            return Err(fail("output must not be empty".to_string()));
        }
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Err(fail("title must not be blank".to_string()));
        }

        Ok(())
    }

    /// Returns the artifact title.
    #[must_use]
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.search.default_title())
    }
}

/// Returns the top-level keys of `table` that no setting reads, in file order.
fn unknown_keys(table: &toml::Table) -> Vec<&str> {
    table
        .keys()
        .map(String::as_str)
        .filter(|key| !KNOWN_KEYS.contains(key))
        .collect()
}
