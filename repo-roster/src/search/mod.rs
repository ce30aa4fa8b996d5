//! Repository discovery using the GitHub repository search API.
//!
//! Results are requested page by page, most recently updated first, and
//! converted into [`Record`]s in the order they were served.

mod client;
mod error;
mod item;

pub use client::{GitHubSearch, SearchClient};
pub use error::FetchError;
pub use item::{SearchItem, SearchOwner, SearchPage};

use crate::config::SearchConfig;
use crate::record::Record;
use tracing::{debug, info, info_span, warn, Instrument};

/// Fetches every record matching the configured query.
///
/// Pages are requested one at a time starting at page 1. Fetching stops
/// after an empty page, after a page shorter than `per_page`, or once
/// `max_pages` pages have been requested.
///
/// Items that cannot be turned into a record (no owner, URL or push date)
/// are skipped.
///
/// # Errors
///
/// Returns [`FetchError`] on the first failed page; records from earlier
/// pages are discarded.
pub async fn fetch_records<C: SearchClient>(
    client: &C,
    config: &SearchConfig,
) -> Result<Vec<Record>, FetchError> {
    let query = config.query();
    let span = info_span!("fetch", query = %query);

    async {
        info!("Starting repository search");

        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let response = client.search_page(&query, config.per_page, page).await?;
            let served = response.items.len();
            debug!(
                page,
                served,
                total_count = response.total_count,
                "Received search page"
            );

            if response.incomplete_results {
                warn!(page, "Search reported incomplete results");
            }
            if served == 0 {
                break;
            }

            records.extend(response.items.iter().filter_map(|item| {
                let record = item.to_record();
                if record.is_none() {
                    warn!(name = %item.name, "Skipping search result with missing fields");
                }
                record
            }));

            if served < usize::from(config.per_page) {
                break;
            }
            if page >= config.max_pages {
                warn!(
                    max_pages = config.max_pages,
                    "Reached maximum search page limit"
                );
                break;
            }
            page += 1;
        }

        info!(count = records.len(), pages = page, "Search complete");
        Ok(records)
    }
    .instrument(span)
    .await
}
