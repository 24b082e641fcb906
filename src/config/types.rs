//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT, FETCH_TIMEOUT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use schema_grader::Config;
///
/// let config = Config {
///     max_concurrency: 25,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Timeout for a single page fetch
    pub fetch_timeout: Duration,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum concurrent analyses in a batch run
    pub max_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fetch_timeout: FETCH_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}
