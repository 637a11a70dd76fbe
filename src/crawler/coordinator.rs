//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that walks the archive page by page:
//! - Fetching the current archive page
//! - Classifying its anchors into posts and a next-page link
//! - Accumulating unique posts in the crawl session
//! - Stopping on a missing or self-referencing next link, or the page ceiling
//! - Writing the final listing

use crate::config::{Config, SiteConfig};
use crate::crawler::classifier::extract_page;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::output::{write_listing, Listing, Post};
use crate::state::{CrawlSession, StopReason};
use crate::Result;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Result of a finished crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    /// Unique posts
    pub posts: Vec<Post>,

    /// Number of archive pages fetched
    pub pages_fetched: u32,

    /// Why the crawl ended
    pub stop_reason: StopReason,
}

/// Main crawler coordinator structure
pub struct Coordinator<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    origin: String,
    start_url: String,
    max_pages: u32,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ArchiveError)` - The HTTP client could not be built
    pub fn new(site: &SiteConfig) -> Result<Self> {
        Ok(Self::with_fetcher(site, HttpFetcher::new()?))
    }
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator around any page fetcher
    pub fn with_fetcher(site: &SiteConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            origin: site.origin().to_string(),
            start_url: site.start_url(),
            max_pages: site.max_pages,
        }
    }

    /// Runs the crawl loop
    ///
    /// Each iteration:
    /// 1. Starts a page, stopping once the page ceiling is exceeded
    /// 2. Fetches and classifies the current archive page
    /// 3. Adds posts whose URL has not been seen yet
    /// 4. Follows the next-page link unless it is missing or points back at
    ///    the current page
    ///
    /// Posts are returned in discovery order. A fetch error aborts the whole
    /// crawl and nothing collected so far is returned.
    pub async fn run(&self) -> Result<CrawlOutcome> {
        let mut session = CrawlSession::new(self.start_url.clone(), self.max_pages);
        let start_time = Instant::now();

        let stop_reason = loop {
            let url = match session.begin_page() {
                Ok(url) => url,
                Err(reason) => break reason,
            };
            info!("[crawl] {}", url);

            let body = self.fetcher.fetch(&url).await?;
            let page = extract_page(&body, &self.origin);

            let found = page.posts.len();
            let added = session.absorb(page.posts);
            debug!(
                "Page {}: {} post links, {} new, next {:?}",
                session.page_count(),
                found,
                added,
                page.next
            );

            session.advance(page.next);
        };

        let pages_fetched = session.pages_fetched();
        let posts = session.into_posts();

        info!(
            "Crawl finished ({}): {} posts from {} pages in {:?}",
            stop_reason,
            posts.len(),
            pages_fetched,
            start_time.elapsed()
        );

        Ok(CrawlOutcome {
            posts,
            pages_fetched,
            stop_reason,
        })
    }
}

/// Crawls the archive and writes the listing
///
/// The listing is only written after the whole crawl succeeded. The returned
/// outcome holds the posts in listing order, newest first.
///
/// # Example
///
/// ```no_run
/// use archive_crawler::config::Config;
/// use archive_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = run_crawl(&Config::default()).await?;
/// println!("{} posts", outcome.posts.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlOutcome> {
    let coordinator = Coordinator::new(&config.site)?;
    crawl_and_write(&coordinator, config).await
}

/// Runs `coordinator` and writes its listing to the configured path
pub async fn crawl_and_write<F: PageFetcher>(
    coordinator: &Coordinator<F>,
    config: &Config,
) -> Result<CrawlOutcome> {
    let mut outcome = coordinator.run().await?;

    let path = Path::new(&config.output.listing_path);
    let listing = Listing::new(config.output.label.clone(), outcome.posts);
    write_listing(&listing, path)?;

    info!("done. {} = {}", path.display(), listing.blog.posts.len());

    outcome.posts = listing.blog.posts;
    Ok(outcome)
}
