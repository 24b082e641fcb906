//! Error handling and issue statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, fetch, input boundary)
//! - Categorization of `reqwest` errors into fetch failures
//! - Thread-safe per-kind issue counters for batch runs

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_fetch_error;
pub use stats::IssueStats;
pub use types::{FetchError, InitializationError, InputError};
