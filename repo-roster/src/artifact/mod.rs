//! The persisted markdown table.
//!
//! The artifact is both the output of a run and the input of the next one:
//! [`read_artifact`] scrapes the rows written by [`TableRenderer`] back into
//! a [`RecordSet`](crate::record::RecordSet).

mod error;
mod extract;
mod render;
mod row;

pub use error::ArtifactError;
pub use extract::{extract_records, read_artifact};
pub use render::{create_handlebars_registry, Heading, TableRenderer};
pub use row::{format_row, parse_row, TABLE_HEADER, TABLE_SEPARATOR};

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Replaces the artifact at `path` with `content`.
///
/// The content is written to a temporary file next to the target and then
/// renamed over it, so readers never observe a partially written artifact.
/// Permissions of an existing artifact are carried over.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`] if the temporary file cannot be written or
/// moved into place.
pub fn write_artifact(path: &Path, content: &str) -> Result<(), ArtifactError> {
    let io_error = |source: std::io::Error| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;

    if let Ok(metadata) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_error)?;
    }

    file.persist(path).map_err(|e| io_error(e.error))?;
    debug!(path = %path.display(), bytes = content.len(), "Artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn write_creates_and_replaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");

        write_artifact(&path, "first\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        write_artifact(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");

        // Only the artifact remains; no stray temp files.
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/README.md");

        let result = write_artifact(&path, "content");
        assert!(matches!(result, Err(ArtifactError::Io { .. })));
    }
}
