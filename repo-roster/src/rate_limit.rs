//! Search API rate limit handling.
//!
//! The search API has its own, much smaller quota than the core API. Before
//! each page request the remaining quota is checked and, when it is nearly
//! exhausted, the run sleeps until the window resets.

use octocrab::Octocrab;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Rate limit information for the search resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns how long to sleep before the next request, if at all.
    ///
    /// `now` is the current Unix time in seconds. The wait is capped at one hour.
    #[must_use]
    pub fn wait_duration(&self, now: u64) -> Option<Duration> {
        if self.remaining >= MIN_REMAINING_THRESHOLD || self.reset <= now {
            return None;
        }

        let wait_secs = self.reset - now;
        if wait_secs > MAX_WAIT_SECS {
            warn!(
                wait_secs,
                max_wait = MAX_WAIT_SECS,
                "Rate limit reset too far in future, capping wait time"
            );
        }
        Some(Duration::from_secs(wait_secs.min(MAX_WAIT_SECS)))
    }
}

/// Checks the current rate limit status for the search API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_search_rate_limit(
    octocrab: &Octocrab,
) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let search = &rate_limit.resources.search;

    Ok(RateLimitInfo {
        remaining: search.remaining as u32,
        reset: search.reset,
        limit: search.limit as u32,
    })
}

/// Sleeps until the search quota resets when it is close to exhausted.
///
/// # Errors
///
/// Returns an error if the rate limit check fails.
pub async fn ensure_search_rate_limit(octocrab: &Octocrab) -> Result<(), octocrab::Error> {
    let info = check_search_rate_limit(octocrab).await?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    if let Some(wait) = info.wait_duration(now) {
        info!(
            remaining = info.remaining,
            limit = info.limit,
            wait_secs = wait.as_secs(),
            "Search rate limit low, waiting for reset"
        );
        tokio::time::sleep(wait).await;
    }
    Ok(())
}
