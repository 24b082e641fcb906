//! Configuration constants.
//!
//! This module defines the constants used throughout the engine, including
//! fetch timeouts, size limits and the scoring weights.

use std::time::Duration;

/// Bounded timeout for fetching a page in URL mode.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent string for page fetches.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger pages become a fetch failure instead of being analyzed
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Scoring
/// Points added per extracted item.
pub const ITEM_SCORE_WEIGHT: i64 = 20;
/// Points deducted per issue.
pub const ISSUE_SCORE_PENALTY: i64 = 10;
/// Starting value the issue penalty is deducted from.
pub const SCORE_BASELINE: i64 = 100;
/// Upper bound of the score range (lower bound is 0).
pub const MAX_SCORE: i64 = 100;

/// Default number of URL analyses in flight during a batch run.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
