//! Orchestrates a single synchronization pass.
//!
//! extract → fetch → reconcile → render → write. The artifact is only
//! written once the complete output is in memory, so any failure leaves the
//! previous artifact untouched.

mod config;
mod error;

pub use config::{RunnerConfig, TOKEN_ENV};
pub use error::RunnerError;

use crate::artifact::{read_artifact, write_artifact, Heading, TableRenderer};
use crate::reconcile::reconcile;
use crate::search::{fetch_records, GitHubSearch, SearchClient};
use crate::summary::SyncSummary;
use tracing::info;

/// Runs sync passes for one configuration.
pub struct Runner {
    config: RunnerConfig,
    renderer: TableRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            renderer: TableRenderer::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Executes a full run against the GitHub API.
    ///
    /// The token is checked before anything else is touched.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingToken`] without any I/O if no token is
    /// available, otherwise the first error of any stage.
    pub async fn run(&self) -> Result<SyncSummary, RunnerError> {
        let token = self.config.resolve_token()?;
        let client = GitHubSearch::new(&token)?;
        self.run_with(&client).await
    }

    /// Executes a full run using `client` for the search.
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage; the artifact is then unchanged.
    pub async fn run_with<C: SearchClient>(&self, client: &C) -> Result<SyncSummary, RunnerError> {
        let sync = self.config.sync();
        let output = self.config.output();
        let mut summary = SyncSummary::new(output.to_path_buf(), self.config.dry_run());

        info!(path = %output.display(), "Reading existing artifact");
        let existing = read_artifact(output)?;
        summary.existing = existing.len();

        let fetched = fetch_records(client, &sync.search).await?;
        summary.fetched = fetched.len();

        let reconciliation = reconcile(existing, fetched);
        summary.record_changes(&reconciliation.changes);
        summary.total = reconciliation.records.len();
        info!(
            added = summary.added,
            updated = summary.updated,
            unchanged = summary.unchanged,
            total = summary.total,
            "Reconciled records"
        );

        let heading = Heading {
            title: sync.title(),
            note: sync.search.note(),
        };
        let rendered = self.renderer.render(&reconciliation.records, &heading)?;

        if self.config.dry_run() {
            println!("\n[DRY RUN] Would write {}:\n", output.display());
            print!("{rendered}");
            return Ok(summary);
        }

        write_artifact(output, &rendered)?;
        info!(path = %output.display(), total = summary.total, "Artifact updated");
        Ok(summary)
    }
}
