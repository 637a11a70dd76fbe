//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - The `PageFetcher` seam the coordinator fetches through
//! - Building the HTTP client
//! - GET requests for archive pages, with non-2xx statuses mapped to errors
//!
//! There is no retry: the first failure is returned to the caller.

use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;

/// Source of raw page markup
///
/// The coordinator only needs "give me the body of this URL". Tests swap in
/// an in-memory implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns its body as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// `PageFetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client()?))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        fetch_page(&self.client, url).await
    }
}

/// Builds the HTTP client used for archive pages
///
/// Headers, redirects and timeouts are left at reqwest's defaults.
///
/// # Example
///
/// ```no_run
/// use archive_crawler::crawler::build_http_client;
///
/// let client = build_http_client().unwrap();
/// ```
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body
///
/// # Error Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | `Ok(body)` |
/// | Any other HTTP status | `FetchError::Status` |
/// | DNS, connect, timeout, reset, body read failure | `FetchError::Transport` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })
}
