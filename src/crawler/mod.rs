//! Crawler module for archive fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` trait
//! - HTML parsing and anchor extraction
//! - Post and pagination link classification
//! - The page-by-page crawl loop

mod classifier;
mod coordinator;
mod fetcher;
mod parser;

pub use classifier::{classify_anchors, classify_page, extract_page, PageResult, PostLink};
pub use coordinator::{crawl_and_write, run_crawl, Coordinator, CrawlOutcome};
pub use fetcher::{build_http_client, fetch_page, HttpFetcher, PageFetcher};
pub use parser::{extract_anchors, parse_page, Anchor};

use crate::config::Config;

/// Runs a complete crawl operation
///
/// This is the main entry point for a crawl. It will:
/// 1. Build the HTTP client
/// 2. Walk the archive from the start page
/// 3. Sort the collected posts newest first
/// 4. Write the listing
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Crawl completed and the listing was written
/// * `Err(ArchiveError)` - Crawl failed; no listing was written
pub async fn crawl(config: &Config) -> crate::Result<CrawlOutcome> {
    run_crawl(config).await
}
