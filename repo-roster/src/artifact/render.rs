//! Artifact rendering using Handlebars.

use super::error::ArtifactError;
use super::row::{format_row, TABLE_HEADER, TABLE_SEPARATOR};
use crate::record::RecordSet;
use handlebars::{no_escape, Handlebars};
use serde_json::json;

/// Document layout. Rows are pre-serialized so the row grammar lives in one place.
const DOCUMENT_TEMPLATE: &str = "# {{title}}

> {{note}}

{{header}}
{{separator}}
{{rows}}";

/// Heading shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub note: String,
}

/// Creates a Handlebars registry for markdown output.
///
/// HTML escaping is disabled and strict mode is on, so a missing variable
/// is an error rather than an empty string.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders record sets into the artifact format.
pub struct TableRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the full artifact with one row per record, sorted by key
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, records: &RecordSet, heading: &Heading) -> Result<String, ArtifactError> {
        let rows: String = records
            .sorted()
            .into_iter()
            .map(|record| format_row(record) + "\n")
            .collect();

        let data = json!({
            "title": heading.title,
            "note": heading.note,
            "header": TABLE_HEADER,
            "separator": TABLE_SEPARATOR,
            "rows": rows,
        });

        Ok(self.handlebars.render_template(DOCUMENT_TEMPLATE, &data)?)
    }
}
