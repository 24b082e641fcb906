//! schema_grader library: structured-data extraction and scoring
//!
//! This library finds the structured-data annotations embedded in an HTML page
//! (JSON-LD, Microdata and RDFa), records syntax problems, scores the page's
//! markup on a 0-100 scale and suggests improvements.
//!
//! # Example
//!
//! ```
//! use schema_grader::analyze_html;
//!
//! let html = r#"<script type="application/ld+json">{"@type":"Product","name":"X"}</script>"#;
//! let result = analyze_html(html);
//! assert_eq!(result.items.len(), 1);
//! assert_eq!(result.items[0].schema_type(), "Product");
//! assert_eq!(result.score, 100);
//! ```
//!
//! # Requirements
//!
//! `analyze_html` is synchronous. URL analysis (`analyze_url`, `analyze`,
//! `analyze_batch`) needs a Tokio runtime.

#![warn(missing_docs)]

mod analyze;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod parse;
mod recommend;
mod score;
mod validate;

// Re-export public API
pub use analyze::{analyze, analyze_html, analyze_url};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError, InputError, IssueStats};
pub use fetch::{Fetcher, HttpFetcher};
pub use models::{
    AnalysisInput, AnalysisRequest, AnalysisResult, AnalysisSummary, ExtractedItem, Issue,
    IssueKind, SchemaFormat, Severity,
};
pub use recommend::{
    recommend, ADD_SCHEMA_MARKUP, ENSURE_URL_ACCESSIBLE, FIX_MALFORMED_JSON_LD, USE_JSON_LD,
};
pub use run::{analyze_batch, BatchEntry, BatchReport};
pub use score::score;
pub use validate::validate;

// Batch analysis of many URLs
mod run {
    use std::time::Instant;

    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};

    use crate::analyze::analyze_url;
    use crate::config::Config;
    use crate::error_handling::IssueStats;
    use crate::fetch::Fetcher;
    use crate::initialization::init_semaphore;
    use crate::models::{AnalysisResult, IssueKind};

    /// One analyzed URL of a batch.
    #[derive(Debug, Clone, PartialEq, serde::Serialize)]
    pub struct BatchEntry {
        /// The URL as given
        pub url: String,
        /// Its analysis
        #[serde(flatten)]
        pub result: AnalysisResult,
    }

    /// Results of a batch run.
    #[derive(Debug)]
    pub struct BatchReport {
        /// Per-URL results, in input order
        pub entries: Vec<BatchEntry>,
        /// Number of URLs analyzed
        pub total: usize,
        /// URLs whose page was fetched
        pub reachable: usize,
        /// URLs that ended in a fetch failure
        pub unreachable: usize,
        /// Issue counts by kind across all URLs
        pub issue_stats: IssueStats,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Analyzes many URLs concurrently.
    ///
    /// At most `config.max_concurrency` analyses are in flight at once. Calls
    /// are independent of each other; every URL yields exactly one entry, and
    /// entries come back in input order.
    pub async fn analyze_batch<F: Fetcher>(
        urls: Vec<String>,
        fetcher: &F,
        config: &Config,
    ) -> BatchReport {
        let start = Instant::now();
        let semaphore = init_semaphore(config.max_concurrency);
        let timeout = config.fetch_timeout;
        let total = urls.len();
        info!(
            "Analyzing {total} URL(s) with concurrency {}",
            config.max_concurrency
        );

        let mut tasks = FuturesUnordered::new();
        for (index, url) in urls.into_iter().enumerate() {
            let semaphore = semaphore.clone();
            tasks.push(async move {
                // The semaphore is never closed
                let _permit = semaphore.acquire_owned().await.ok();
                let result = analyze_url(&url, fetcher, timeout).await;
                (index, BatchEntry { url, result })
            });
        }

        let mut indexed = Vec::with_capacity(total);
        while let Some((index, entry)) = tasks.next().await {
            indexed.push((index, entry));
            if indexed.len() % 100 == 0 {
                info!("Completed {} of {total} URL(s)", indexed.len());
            }
        }
        indexed.sort_by_key(|(index, _)| *index);
        let entries: Vec<BatchEntry> = indexed.into_iter().map(|(_, entry)| entry).collect();

        let issue_stats = IssueStats::new();
        let mut unreachable = 0;
        for entry in &entries {
            for issue in &entry.result.issues {
                issue_stats.increment(issue.kind);
            }
            if entry.result.has_issue(IssueKind::FetchFailure) {
                unreachable += 1;
            }
        }
        if unreachable > 0 {
            warn!("{unreachable} of {total} URL(s) could not be fetched");
        }

        BatchReport {
            entries,
            total,
            reachable: total - unreachable,
            unreachable,
            issue_stats,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    }
}
