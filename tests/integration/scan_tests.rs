//! Integration tests for the scanner
//!
//! These tests use wiremock to serve robots.txt and the target page, and
//! run the full pipeline (or the built binary) end-to-end.

use page_pulse::fetcher::build_http_client;
use page_pulse::robots::can_fetch_with;
use page_pulse::sentiment::Label;
use page_pulse::{LexiconScorer, RobotsParser, RobotsRules, ScanError, ScanOutcome, Scanner};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SIMPLE_PAGE: &str = "<title>Hi</title><p>Great news today</p>";

fn scanner(user_agent: &str) -> Scanner<LexiconScorer> {
    Scanner::new(
        build_http_client().expect("Failed to build client"),
        user_agent,
        LexiconScorer::new(),
    )
}

fn target(server: &MockServer, page: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), page)).expect("Failed to parse target URL")
}

async fn mount_robots(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, page: &str, status: u16, body: &str, hits: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(hits)
        .mount(server)
        .await;
}

fn stdout_of(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("Report is not UTF-8")
}

#[tokio::test]
async fn test_disallowed_page_is_not_fetched() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nDisallow: /").await;
    mount_page(&server, "/article", 200, SIMPLE_PAGE, 0).await;

    let mut out = Vec::new();
    let outcome = scanner("*")
        .run(&target(&server, "/article"), &mut out)
        .await
        .expect("Run failed");

    assert!(matches!(outcome, ScanOutcome::Blocked));
    assert_eq!(stdout_of(out), "Crawling is blocked by robots.txt\n");
}

#[tokio::test]
async fn test_robots_server_error_fails_open() {
    let server = MockServer::start().await;
    mount_robots(&server, 500, "internal error").await;
    mount_page(&server, "/", 200, SIMPLE_PAGE, 1).await;

    let mut out = Vec::new();
    let outcome = scanner("*")
        .run(&target(&server, "/"), &mut out)
        .await
        .expect("Run failed");

    assert!(matches!(outcome, ScanOutcome::Completed(_)));
}

#[tokio::test]
async fn test_missing_robots_fails_open() {
    let server = MockServer::start().await;
    mount_robots(&server, 404, "").await;
    mount_page(&server, "/", 200, SIMPLE_PAGE, 1).await;

    let mut out = Vec::new();
    let outcome = scanner("*")
        .run(&target(&server, "/"), &mut out)
        .await
        .expect("Run failed");

    assert!(matches!(outcome, ScanOutcome::Completed(_)));
}

#[tokio::test]
async fn test_unrelated_disallow_allows_target() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nDisallow: /admin").await;
    mount_page(&server, "/news", 200, SIMPLE_PAGE, 1).await;

    let mut out = Vec::new();
    let outcome = scanner("*")
        .run(&target(&server, "/news"), &mut out)
        .await
        .expect("Run failed");

    assert!(matches!(outcome, ScanOutcome::Completed(_)));
}

#[tokio::test]
async fn test_simple_page_report() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/", 200, SIMPLE_PAGE, 1).await;

    let mut out = Vec::new();
    let outcome = scanner("*")
        .run(&target(&server, "/"), &mut out)
        .await
        .expect("Run failed");

    let ScanOutcome::Completed(report) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(report.content.title, "Hi");
    assert_eq!(report.content.paragraphs, vec!["Great news today"]);
    assert!(report.content.h1.is_empty());
    assert!(report.content.h2.is_empty());
    assert!(report.content.h3.is_empty());
    assert_eq!(report.sentiment.paragraphs.label(), Label::Positive);
    assert_eq!(report.sentiment.title.label(), Label::Neutral);

    let stdout = stdout_of(out);
    assert!(stdout.starts_with("Crawling allowed. Fetching page...\n=== Crawled Data ===\n"));
    assert!(stdout.contains("Title: Hi\n"));
    assert!(stdout.contains("Paragraphs: [\"Great news today\"]\n"));
    assert!(stdout.contains("\n=== Sentiment Analysis ===\n"));
    assert!(stdout.contains(
        "Paragraphs: Positive { score: 3, comparative: 1.0000, calculation: [(\"great\", 3)], \
         tokens: [\"great\", \"news\", \"today\"], words: [\"great\"], \
         positive: [\"great\"], negative: [] }\n"
    ));
    assert!(stdout.contains(
        "Overall page: Positive { score: 3, comparative: 0.7500, calculation: [(\"great\", 3)], \
         tokens: [\"hi\", \"great\", \"news\", \"today\"], words: [\"great\"], \
         positive: [\"great\"], negative: [] }\n"
    ));
}

#[tokio::test]
async fn test_page_not_found_stops_run() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/gone", 404, "not here", 1).await;

    let mut out = Vec::new();
    let result = scanner("*").run(&target(&server, "/gone"), &mut out).await;

    match result {
        Err(ScanError::Fetch(err)) => {
            assert_eq!(err.status(), Some(404));
            assert!(err.to_string().contains("404"));
        }
        other => panic!("expected a fetch failure, got {:?}", other),
    }

    let stdout = stdout_of(out);
    assert_eq!(stdout, "Crawling allowed. Fetching page...\n");
    assert!(!stdout.contains("=== Crawled Data ==="));
}

#[tokio::test]
async fn test_named_user_agent_group() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("User-agent: PagePulse\nDisallow: /"),
        )
        .expect(2)
        .mount(&server)
        .await;
    mount_page(&server, "/", 200, SIMPLE_PAGE, 1).await;

    let target = target(&server, "/");

    let mut out = Vec::new();
    let outcome = scanner("PagePulse")
        .run(&target, &mut out)
        .await
        .expect("Run failed");
    assert!(matches!(outcome, ScanOutcome::Blocked));

    let mut out = Vec::new();
    let outcome = scanner("*").run(&target, &mut out).await.expect("Run failed");
    assert!(matches!(outcome, ScanOutcome::Completed(_)));
}

struct DenyAll;

impl RobotsRules for DenyAll {
    fn is_allowed(&self, _url: &str, _user_agent: &str) -> bool {
        false
    }
}

#[tokio::test]
async fn test_injected_robots_rules() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nAllow: /").await;

    let client = build_http_client().expect("Failed to build client");
    let allowed = can_fetch_with(&client, &target(&server, "/"), "*", |_| DenyAll).await;
    assert!(!allowed);
}

struct DenyAllParser;

impl RobotsParser for DenyAllParser {
    type Rules = DenyAll;

    fn parse(&self, _body: &str) -> DenyAll {
        DenyAll
    }
}

#[tokio::test]
async fn test_scanner_uses_injected_robots_parser() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/", 200, SIMPLE_PAGE, 0).await;

    let mut out = Vec::new();
    let outcome = scanner("*")
        .with_robots_parser(DenyAllParser)
        .run(&target(&server, "/"), &mut out)
        .await
        .expect("Run failed");

    assert!(matches!(outcome, ScanOutcome::Blocked));
    assert_eq!(stdout_of(out), "Crawling is blocked by robots.txt\n");
}

#[tokio::test]
async fn test_injected_rules_not_consulted_on_failure() {
    let server = MockServer::start().await;
    mount_robots(&server, 503, "").await;

    let client = build_http_client().expect("Failed to build client");
    let allowed = can_fetch_with(&client, &target(&server, "/"), "*", |_| DenyAll).await;
    assert!(allowed);
}

/// Serves `SIMPLE_PAGE` for every path except /robots.txt, whose
/// connections are closed without a response
async fn serve_without_robots(listener: TcpListener, page_hits: Arc<AtomicUsize>) {
    while let Ok((mut stream, _)) = listener.accept().await {
        let mut buf = vec![0u8; 4096];
        let mut len = 0;
        while !buf[..len].windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf[len..]).await {
                Ok(0) | Err(_) => break,
                Ok(n) => len += n,
            }
        }

        let request = String::from_utf8_lossy(&buf[..len]);
        if request.starts_with("GET /robots.txt ") {
            continue;
        }

        page_hits.fetch_add(1, Ordering::SeqCst);
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: text/html\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            SIMPLE_PAGE.len(),
            SIMPLE_PAGE
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    }
}

#[tokio::test]
async fn test_robots_connection_closed_fails_open() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("No local address");
    let page_hits = Arc::new(AtomicUsize::new(0));
    tokio::spawn(serve_without_robots(listener, Arc::clone(&page_hits)));

    let target = Url::parse(&format!("http://{}/story", addr)).expect("Failed to parse target URL");
    let mut out = Vec::new();
    let outcome = scanner("*").run(&target, &mut out).await.expect("Run failed");

    let ScanOutcome::Completed(report) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(report.content.title, "Hi");
    assert_eq!(page_hits.load(Ordering::SeqCst), 1);
    assert!(stdout_of(out).starts_with("Crawling allowed. Fetching page...\n=== Crawled Data ===\n"));
}

#[tokio::test]
async fn test_binary_without_url_exits_with_usage() {
    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_page-pulse"))
        .output()
        .await
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please provide a URL to crawl."));
    assert!(stderr.contains("Example: page-pulse https://example.com"));
}

#[tokio::test]
async fn test_binary_reports_status_code() {
    let server = MockServer::start().await;
    mount_robots(&server, 404, "").await;
    mount_page(&server, "/missing", 404, "", 1).await;

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_page-pulse"))
        .arg(target(&server, "/missing").as_str())
        .output()
        .await
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to fetch page: Request failed with status code 404"));
    assert!(stderr.contains("Status code: 404"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("=== Crawled Data ==="));
}

#[tokio::test]
async fn test_binary_blocked_run_succeeds() {
    let server = MockServer::start().await;
    mount_robots(&server, 200, "User-agent: *\nDisallow: /").await;
    mount_page(&server, "/", 200, SIMPLE_PAGE, 0).await;

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_page-pulse"))
        .arg(target(&server, "/").as_str())
        .output()
        .await
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Crawling is blocked by robots.txt\n");
}
