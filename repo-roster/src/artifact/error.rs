//! Artifact error types.

/// Errors that can occur while reading, rendering or writing the artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Failed to read or write the artifact file.
    #[error("Failed to access artifact '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars rendering error.
    #[error("Artifact rendering error: {0}")]
    Render(#[from] handlebars::RenderError),
}
