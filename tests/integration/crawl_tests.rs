//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a fake blog archive and run the full
//! crawl-and-write cycle end-to-end.

use archive_crawler::config::{Config, OutputConfig, SiteConfig};
use archive_crawler::crawler::run_crawl;
use archive_crawler::output::Listing;
use archive_crawler::{ArchiveError, StopReason};
use std::collections::HashSet;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(origin: &str, listing_path: &Path, max_pages: u32) -> Config {
    Config {
        site: SiteConfig {
            origin: origin.to_string(),
            start_path: "/archives/".to_string(),
            max_pages,
        },
        output: OutputConfig {
            listing_path: listing_path.to_string_lossy().into_owned(),
            label: "个人博客".to_string(),
        },
    }
}

/// Mounts an HTML page at `page_path`
async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Mounts a three-page archive
///
/// Page 1 links a post twice (once with different text) and to pages 2 and
/// 3; page 3 repeats a page-1 post under another title and has no next.
async fn mount_archive(server: &MockServer) {
    let base_url = server.uri();

    mount_page(
        server,
        "/archives/",
        format!(
            r#"<html><head><title>Archives</title></head><body>
            <nav><a href="/">Home</a> <a href="/archives/2021/03/">March 2021</a></nav>
            <article><a href="/2021/03/15/hello-world/">Hello World</a></article>
            <article><a href="/2021/03/15/hello-world/">Read more</a></article>
            <article><a href="2022/08/01/relative-link/">Relative Link</a></article>
            <article><a href="{}/2020/12/24/absolute-link/">  Absolute Link </a></article>
            <footer>
              <a href="/archives/page/2/">Next</a>
              <a href="/archives/page/3/">Last</a>
            </footer>
            </body></html>"#,
            base_url
        ),
    )
    .await;

    mount_page(
        server,
        "/archives/page/3/",
        r#"<html><body>
            <article><a href="/2019/01/05/oldest/">Oldest</a></article>
            <article><a href="/2021/03/15/hello-world/">Hello again</a></article>
            <article><a href="/2020/notes/">Undated Notes</a></article>
            </body></html>"#
            .to_string(),
    )
    .await;

    // Page 2 is skipped: the crawl follows the lexically longest link
    Mock::given(method("GET"))
        .and(path("/archives/page/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_writes_sorted_listing() {
    let mock_server = MockServer::start().await;
    mount_archive(&mock_server).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let listing_path = dir.path().join("posts.json");
    let config = create_test_config(&mock_server.uri(), &listing_path, 1000);

    let outcome = run_crawl(&config).await.expect("Crawl failed");

    // /archives/ then /archives/page/3/, which has no pagination links
    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(outcome.stop_reason, StopReason::NoNextPage);

    let written = std::fs::read_to_string(&listing_path).expect("Listing not written");
    let listing: Listing = serde_json::from_str(&written).expect("Listing is not valid JSON");

    assert_eq!(listing.blog.label, "个人博客");
    assert_eq!(listing.blog.posts, outcome.posts);

    let base_url = mock_server.uri();
    let urls: Vec<String> = listing.blog.posts.iter().map(|p| p.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/2022/08/01/relative-link/", base_url),
            format!("{}/2021/03/15/hello-world/", base_url),
            format!("{}/2020/12/24/absolute-link/", base_url),
            format!("{}/2019/01/05/oldest/", base_url),
            format!("{}/2020/notes/", base_url),
        ]
    );

    let hello = &listing.blog.posts[1];
    assert_eq!(hello.id, "hello-world");
    assert_eq!(hello.title, "Hello World");
    assert_eq!(listing.blog.posts[2].title, "Absolute Link");
    assert_eq!(listing.blog.posts[4].id, "notes");
}

#[tokio::test]
async fn test_listing_urls_are_unique() {
    let mock_server = MockServer::start().await;
    mount_archive(&mock_server).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let listing_path = dir.path().join("posts.json");
    let config = create_test_config(&mock_server.uri(), &listing_path, 1000);

    let outcome = run_crawl(&config).await.expect("Crawl failed");

    let unique: HashSet<&str> = outcome.posts.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(unique.len(), outcome.posts.len());
}

#[tokio::test]
async fn test_crawl_is_idempotent() {
    let mock_server = MockServer::start().await;
    mount_archive(&mock_server).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let listing_path = dir.path().join("posts.json");
    let config = create_test_config(&mock_server.uri(), &listing_path, 1000);

    run_crawl(&config).await.expect("First crawl failed");
    let first = std::fs::read(&listing_path).expect("Listing not written");

    run_crawl(&config).await.expect("Second crawl failed");
    let second = std::fs::read(&listing_path).expect("Listing not written");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_self_referencing_pagination_terminates() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/archives/",
        r#"<a href="/2021/01/01/only/">Only</a><a href="/archives/page/2/">Next</a>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/archives/page/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a href="/2020/01/01/second/">Second</a><a href="/archives/page/2/">Next</a>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let listing_path = dir.path().join("posts.json");
    let config = create_test_config(&mock_server.uri(), &listing_path, 1000);

    let outcome = run_crawl(&config).await.expect("Crawl failed");

    assert_eq!(outcome.stop_reason, StopReason::SelfReference);
    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(outcome.posts.len(), 2);
}

#[tokio::test]
async fn test_page_ceiling_stops_crawl() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/archives/",
        r#"<a href="/2021/01/01/first/">First</a><a href="/archives/page/2/">Next</a>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/archives/page/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a href="/2020/01/01/second/">Second</a><a href="/archives/page/3/">Next</a>"#,
        ))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let listing_path = dir.path().join("posts.json");
    let config = create_test_config(&mock_server.uri(), &listing_path, 1);

    let outcome = run_crawl(&config).await.expect("Crawl failed");

    assert_eq!(outcome.stop_reason, StopReason::PageLimit);
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.posts.len(), 1);
    assert!(listing_path.exists());
}

#[tokio::test]
async fn test_http_error_aborts_without_output() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/archives/",
        r#"<a href="/2021/01/01/first/">First</a><a href="/archives/page/2/">Next</a>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/archives/page/2/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let listing_path = dir.path().join("posts.json");
    std::fs::write(&listing_path, "previous run").expect("Failed to seed listing");
    let config = create_test_config(&mock_server.uri(), &listing_path, 1000);

    let err = run_crawl(&config).await.expect_err("Crawl should fail");

    match err {
        ArchiveError::Fetch(e) => {
            assert_eq!(e.status(), Some(500));
            assert_eq!(e.url(), format!("{}/archives/page/2/", mock_server.uri()));
        }
        other => panic!("Expected fetch error, got {:?}", other),
    }

    // The previous listing is left untouched
    let content = std::fs::read_to_string(&listing_path).expect("Listing vanished");
    assert_eq!(content, "previous run");
}

#[tokio::test]
async fn test_empty_archive_writes_empty_listing() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/archives/",
        "<html><body><p>No posts yet</p></body></html>".to_string(),
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let listing_path = dir.path().join("out").join("posts.json");
    let config = create_test_config(&mock_server.uri(), &listing_path, 1000);

    let outcome = run_crawl(&config).await.expect("Crawl failed");
    assert!(outcome.posts.is_empty());
    assert_eq!(outcome.stop_reason, StopReason::NoNextPage);

    let listing: Listing =
        serde_json::from_str(&std::fs::read_to_string(&listing_path).expect("Listing not written"))
            .expect("Listing is not valid JSON");
    assert!(listing.blog.posts.is_empty());
}
