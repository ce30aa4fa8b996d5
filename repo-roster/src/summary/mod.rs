//! Run summary types.

mod sync_summary;

pub use sync_summary::SyncSummary;
