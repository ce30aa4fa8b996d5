//! Runner configuration.

use super::error::RunnerError;
use crate::config::SyncConfig;
use std::path::{Path, PathBuf};

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Configuration for a sync run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Search and artifact settings.
    sync: SyncConfig,
    /// GitHub token; falls back to [`TOKEN_ENV`] when absent.
    token: Option<String>,
    /// Whether to print the artifact instead of writing it.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(sync: SyncConfig, token: Option<String>, dry_run: bool) -> Self {
        Self {
            sync,
            token,
            dry_run,
        }
    }

    /// Builds a configuration from command-line style inputs.
    ///
    /// The token is resolved before the config file is read, so a missing
    /// token is reported even when the config file is also unusable. When
    /// `config_path` is `None`, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingToken`] if no token is available, or
    /// [`RunnerError::Config`] if the config file cannot be loaded.
    pub fn load(
        config_path: Option<&Path>,
        token: Option<String>,
        dry_run: bool,
    ) -> Result<Self, RunnerError> {
        let token = resolve_token(token)?;
        let sync = match config_path {
            Some(path) => SyncConfig::load(path)?,
            None => SyncConfig::default(),
        };
        Ok(Self::new(sync, Some(token), dry_run))
    }

    /// Overrides the artifact path from the sync config.
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.sync.output = output;
        self
    }

    /// Returns the search and artifact settings.
    pub fn sync(&self) -> &SyncConfig {
        &self.sync
    }

    /// Returns the artifact path.
    pub fn output(&self) -> &Path {
        &self.sync.output
    }

    /// Returns the explicitly configured token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Resolves the token to use, preferring the explicit one.
    ///
    /// Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingToken`] if neither source has a token.
    pub fn resolve_token(&self) -> Result<String, RunnerError> {
        resolve_token(self.token.clone())
    }
}

/// Returns `explicit` or else the [`TOKEN_ENV`] value, treating empty as missing.
fn resolve_token(explicit: Option<String>) -> Result<String, RunnerError> {
    explicit
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .filter(|token| !token.trim().is_empty())
        .ok_or(RunnerError::MissingToken)
}
