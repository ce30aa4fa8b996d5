//! Reading records back out of a rendered artifact.

use super::error::ArtifactError;
use super::row::parse_row;
use crate::record::RecordSet;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, trace};

/// Collects every well-formed table row in `text`.
///
/// Lines that are not rows are skipped silently. If a key occurs on several
/// rows, the last one wins.
#[must_use]
pub fn extract_records(text: &str) -> RecordSet {
    text.lines()
        .filter_map(|line| {
            let record = parse_row(line);
            if record.is_none() && line.trim_start().starts_with("| [") {
                trace!(line, "Skipping malformed row");
            }
            record
        })
        .collect()
}

/// Reads the artifact at `path` and extracts its records.
///
/// A missing file yields an empty set.
///
/// # Errors
///
/// Returns [`ArtifactError::Io`] if the file exists but cannot be read.
pub fn read_artifact(path: &Path) -> Result<RecordSet, ArtifactError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let records = extract_records(&text);
            debug!(path = %path.display(), count = records.len(), "Extracted existing records");
            Ok(records)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No existing artifact, starting empty");
            Ok(RecordSet::new())
        }
        Err(e) => Err(ArtifactError::Io {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
