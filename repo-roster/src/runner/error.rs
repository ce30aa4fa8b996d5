//! Runner error types.

/// Errors that can occur during a sync run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No GitHub token was supplied.
    #[error("GITHUB_TOKEN is missing.")]
    MissingToken,

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Search request errors.
    #[error(transparent)]
    Fetch(#[from] crate::search::FetchError),

    /// Artifact read, render or write errors.
    #[error(transparent)]
    Artifact(#[from] crate::artifact::ArtifactError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
