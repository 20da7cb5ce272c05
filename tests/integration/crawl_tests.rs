//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch / collect / expand cycle end-to-end.

use svg_sweep::config::{Config, CrawlerConfig, FailurePolicy, OutputConfig, UserAgentConfig};
use svg_sweep::crawler::{sweep, Crawler, HttpFetcher};
use svg_sweep::storage::{FragmentStore, MemoryStore};
use svg_sweep::SweepError;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the given start URL
fn create_test_config(start_url: &str, max_depth: u32, report_path: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            start_url: start_url.to_string(),
            max_depth,
            ..CrawlerConfig::default()
        },
        user_agent: UserAgentConfig {
            value: "TestSweeper/1.0".to_string(),
        },
        output: OutputConfig {
            report_path: report_path.to_string(),
        },
    }
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_sweep_writes_deduplicated_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
            <svg class="logo"><circle r="1"/></svg>
            <a href="/page1">Page 1</a>
            <a href="page2">Page 2</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        &mock_server,
        "/page1",
        r#"<html><body>
            <svg class="icon" focusable="false" viewBox="0 0 24 24"><path d="M0 0"/></svg>
        </body></html>"#,
    )
    .await;

    mount_page(
        &mock_server,
        "/page2",
        "<html><body>\
            <svg class=\"other\" viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>\
            <svg><rect width=\"2\"/></svg>\
        </body></html>",
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = dir.path().join("all_svgs.html");
    let config = create_test_config(
        &format!("{}/", base_url),
        1,
        report_path.to_str().expect("Non UTF-8 temp path"),
    );

    let stats = sweep(&config).await.expect("Sweep failed");

    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.expansion_steps, 1);
    assert_eq!(stats.fragments_recorded, 2);
    assert_eq!(stats.duplicates_skipped, 1);

    let report = std::fs::read_to_string(&report_path).expect("Report not written");
    let expected = format!(
        "<!-- {base}/page1 -->\n<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"></path></svg>\n\n\
         <!-- {base}/page2 -->\n<svg><rect width=\"2\"></rect></svg>",
        base = base_url
    );
    assert_eq!(report, expected);

    // The start page's own logo is never collected
    assert!(!report.contains("circle"));
}

#[tokio::test]
async fn test_fetch_failure_aborts_without_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/gone">Gone</a><a href="/ok">Ok</a>"#,
    )
    .await;
    mount_page(&mock_server, "/ok", "<svg></svg>").await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = dir.path().join("all_svgs.html");
    let config = create_test_config(
        &format!("{}/", base_url),
        3,
        report_path.to_str().expect("Non UTF-8 temp path"),
    );

    let err = sweep(&config).await.expect_err("Sweep should abort");

    assert!(matches!(err, SweepError::Status { status: 500, .. }));
    assert!(!report_path.exists());
}

#[tokio::test]
async fn test_skip_policy_keeps_partial_results() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/missing">Missing</a><a href="/ok">Ok</a>"#,
    )
    .await;
    mount_page(&mock_server, "/ok", r#"<svg id="kept"></svg>"#).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = dir.path().join("all_svgs.html");
    let mut config = create_test_config(
        &format!("{}/", base_url),
        3,
        report_path.to_str().expect("Non UTF-8 temp path"),
    );
    config.crawler.on_fetch_error = FailurePolicy::Skip;

    let stats = sweep(&config).await.expect("Sweep failed");

    assert_eq!(stats.fetch_failures, 1);
    let report = std::fs::read_to_string(&report_path).expect("Report not written");
    assert_eq!(
        report,
        format!("<!-- {}/ok -->\n<svg id=\"kept\"></svg>", base_url)
    );
}

#[tokio::test]
async fn test_redirect_target_is_recorded_as_source() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/old">Old</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new"))
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/new", "<svg><g></g></svg>").await;

    let config = create_test_config(&format!("{}/", base_url), 1, "unused.html");
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut crawler = Crawler::new(fetcher, MemoryStore::new(), config.crawler.clone());

    crawler.run(&config.crawler.start_url).await.expect("Crawl failed");

    let records = crawler.store().snapshot();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_url, format!("{}/new", base_url));
}

#[tokio::test]
async fn test_same_page_anchors_refetch_the_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r##"<a href="/list">List</a>"##,
    )
    .await;

    // Both anchors collapse onto /list itself, which is fetched three times
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r##"<svg></svg><a href="#top">Top</a><a href="?page=2">Next</a>"##),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", base_url), 2, "unused.html");
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut crawler = Crawler::new(fetcher, MemoryStore::new(), config.crawler.clone());

    let stats = crawler.run(&config.crawler.start_url).await.expect("Crawl failed");

    assert_eq!(stats.pages_fetched, 4);
    assert_eq!(stats.fragments_recorded, 1);
    assert_eq!(stats.duplicates_skipped, 2);
    assert_eq!(crawler.store().len(), 1);
}

#[tokio::test]
async fn test_skip_visited_breaks_cycles() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/a">A</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<a href="/a">self</a><a href="/">home</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&format!("{}/", base_url), 10, "unused.html");
    config.crawler.skip_visited = true;
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut crawler = Crawler::new(fetcher, MemoryStore::new(), config.crawler.clone());

    let stats = crawler.run(&config.crawler.start_url).await.expect("Crawl failed");

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.expansion_steps, 2);
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestSweeper/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", base_url), 1, "unused.html");
    let fetcher = HttpFetcher::new(&config).expect("Failed to build fetcher");
    let mut crawler = Crawler::new(fetcher, MemoryStore::new(), config.crawler.clone());

    // A mismatched header would fall through to wiremock's 404 and abort.
    crawler.run(&config.crawler.start_url).await.expect("Crawl failed");
}
