//! Concurrent batch analysis.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use schema_grader::{analyze_batch, Config, HttpFetcher, IssueKind};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_batch_preserves_input_order_and_counts() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<script type="application/ld+json">{"@type": "Article"}</script>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let urls = vec![
        format!("{}/ok", mock_server.uri()),
        format!("{}/broken", mock_server.uri()),
        "ftp://not-http.example".to_string(),
        format!("{}/ok", mock_server.uri()),
    ];
    let config = Config {
        max_concurrency: 2,
        fetch_timeout: Duration::from_secs(5),
        ..Default::default()
    };
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");

    let report = analyze_batch(urls.clone(), &fetcher, &config).await;

    assert_eq!(report.total, 4);
    assert_eq!(report.reachable, 2);
    assert_eq!(report.unreachable, 2);
    let returned: Vec<_> = report.entries.iter().map(|e| e.url.clone()).collect();
    assert_eq!(returned, urls);
    assert_eq!(report.entries[0].result.items[0].schema_type(), "Article");
    assert_eq!(report.issue_stats.get_count(IssueKind::FetchFailure), 2);
    assert_eq!(report.issue_stats.get_count(IssueKind::MalformedJson), 0);
}

#[tokio::test]
async fn test_batch_respects_max_concurrency() {
    let concurrent = Arc::new(AtomicUsize::new(0));
    let max_observed = Arc::new(AtomicUsize::new(0));

    let mock_server = MockServer::start().await;
    let concurrent_clone = Arc::clone(&concurrent);
    let max_clone = Arc::clone(&max_observed);
    Mock::given(method("GET"))
        .and(path_regex(r"^/page/.*"))
        .respond_with(move |_req: &wiremock::Request| {
            let current = concurrent_clone.fetch_add(1, Ordering::SeqCst) + 1;
            max_clone.fetch_max(current, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(50));
            concurrent_clone.fetch_sub(1, Ordering::SeqCst);
            ResponseTemplate::new(200).set_body_string("<html></html>")
        })
        .mount(&mock_server)
        .await;

    let urls: Vec<String> = (0..12)
        .map(|i| format!("{}/page/{i}", mock_server.uri()))
        .collect();
    let config = Config {
        max_concurrency: 3,
        fetch_timeout: Duration::from_secs(10),
        ..Default::default()
    };
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");

    let report = analyze_batch(urls, &fetcher, &config).await;

    assert_eq!(report.total, 12);
    assert_eq!(report.unreachable, 0);
    assert!(max_observed.load(Ordering::SeqCst) <= 3);
}

#[tokio::test]
async fn test_batch_empty_input() {
    let config = Config::default();
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let report = analyze_batch(Vec::new(), &fetcher, &config).await;
    assert_eq!(report.total, 0);
    assert!(report.entries.is_empty());
    assert_eq!(report.issue_stats.total(), 0);
}
