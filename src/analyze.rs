//! Analysis orchestration.
//!
//! Composes parsing, extraction, validation, scoring and recommendations into
//! one [`AnalysisResult`]. Stateless: every call depends only on its input
//! (and, in URL mode, on what the fetcher returns).

use std::time::Duration;

use log::{info, warn};

use crate::fetch::{validate_and_normalize_url, Fetcher};
use crate::error_handling::FetchError;
use crate::models::{AnalysisInput, AnalysisResult, Issue};
use crate::parse::{extract_all, Document};
use crate::recommend::{recommend, ENSURE_URL_ACCESSIBLE};
use crate::score::score;
use crate::validate::validate;

/// Analyzes raw HTML text.
///
/// Pure and infallible: malformed markup degrades to issues, never to an error.
pub fn analyze_html(html: &str) -> AnalysisResult {
    let document = Document::parse(html);
    let extraction = extract_all(&document);

    let items = extraction.items;
    let issues = validate(&items, extraction.issues);
    let score = score(items.len(), issues.len());
    let recommendations = recommend(&items, &issues);

    AnalysisResult {
        items,
        issues,
        score,
        recommendations,
    }
}

/// Fetches a URL and analyzes its body.
///
/// The fetch is bounded by `timeout`. Any failure (invalid URL, network error,
/// timeout, non-success status, oversized body) yields a zero-score result with
/// one `fetch-failure` issue instead of an error. Dropping the returned future
/// cancels the fetch.
pub async fn analyze_url<F: Fetcher>(url: &str, fetcher: &F, timeout: Duration) -> AnalysisResult {
    let html = match fetch_html(url, fetcher, timeout).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to fetch {url}: {e}");
            return fetch_failure_result(&e);
        }
    };

    let result = analyze_html(&html);
    info!(
        "Analyzed {url}: {} item(s), {} issue(s), score {}",
        result.items.len(),
        result.issues.len(),
        result.score
    );
    result
}

/// Analyzes either HTML text or a URL.
pub async fn analyze<F: Fetcher>(
    input: &AnalysisInput,
    fetcher: &F,
    timeout: Duration,
) -> AnalysisResult {
    match input {
        AnalysisInput::Html(html) => analyze_html(html),
        AnalysisInput::Url(url) => analyze_url(url, fetcher, timeout).await,
    }
}

async fn fetch_html<F: Fetcher>(
    url: &str,
    fetcher: &F,
    timeout: Duration,
) -> Result<String, FetchError> {
    let url = validate_and_normalize_url(url)?;
    match tokio::time::timeout(timeout, fetcher.fetch(&url, timeout)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(timeout)),
    }
}

fn fetch_failure_result(error: &FetchError) -> AnalysisResult {
    AnalysisResult {
        items: Vec::new(),
        issues: vec![Issue::fetch_failure(error)],
        score: 0,
        recommendations: vec![ENSURE_URL_ACCESSIBLE.to_string()],
    }
}
