#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod artifact;
pub mod config;
pub mod rate_limit;
pub mod reconcile;
pub mod record;
pub mod runner;
pub mod search;
pub mod summary;

pub use artifact::{
    extract_records, format_row, parse_row, read_artifact, write_artifact, ArtifactError,
    Heading, TableRenderer,
};
pub use config::{ConfigError, SearchConfig, SyncConfig};
pub use rate_limit::{check_search_rate_limit, ensure_search_rate_limit, RateLimitInfo};
pub use reconcile::{reconcile, ChangeCounts, Reconciliation};
pub use record::{Record, RecordSet};
pub use runner::{Runner, RunnerConfig, RunnerError, TOKEN_ENV};
pub use search::{fetch_records, FetchError, GitHubSearch, SearchClient, SearchItem, SearchPage};
pub use summary::SyncSummary;
