//! Table row grammar.
//!
//! `| [<key>](<location>) | <owner> | <popularity> | <YYYY-MM-DD> |`
//!
//! [`format_row`] and [`parse_row`] are exact inverses for every record.

use crate::record::Record;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Column header line of the table.
pub const TABLE_HEADER: &str = "| Repository | Owner | Stars | Last Push |";

/// Separator line below [`TABLE_HEADER`].
pub const TABLE_SEPARATOR: &str = "|------------|-------|-------|-----------|";

/// Serializes a record as a table row, without line terminator.
#[must_use]
pub fn format_row(record: &Record) -> String {
    format!(
        "| [{}]({}) | {} | {} | {} |",
        record.key,
        record.location,
        record.owner,
        record.popularity,
        record.last_activity.format("%Y-%m-%d")
    )
}

/// Anchored row grammar; cells are validated further after matching.
static ROW_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"^\| \[([^\s|\[\]()]+)\]\((\S+)\) \| ([^\s|\[\]()]+) \| ([0-9]+) \| ([0-9]{4}-[0-9]{2}-[0-9]{2}) \|$",
    )
});

/// Parses a table row.
///
/// Returns `None` for anything that does not match the row grammar exactly,
/// including titles, headers, separators and hand-edited rows with missing
/// or malformed cells.
#[must_use]
pub fn parse_row(line: &str) -> Option<Record> {
    let pattern = ROW_PATTERN.as_ref().ok()?;
    let captures = pattern.captures(line.trim())?;

    Some(Record {
        key: captures[1].to_string(),
        location: Url::parse(&captures[2]).ok()?,
        owner: captures[3].to_string(),
        popularity: captures[4].parse().ok()?,
        last_activity: NaiveDate::parse_from_str(&captures[5], "%Y-%m-%d").ok()?,
    })
}
