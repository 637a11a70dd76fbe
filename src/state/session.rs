use crate::crawler::PostLink;
use crate::output::Post;
use crate::state::{CrawlPhase, StopReason};
use crate::url::derive_slug;
use std::collections::HashSet;

/// Mutable state of a single crawl run
///
/// The session owns everything that accumulates across pages: the URLs seen
/// so far, the posts collected in discovery order, the page to fetch next and
/// how many pages have been started. A coordinator drives it through one
/// `begin_page` / `absorb` / `advance` cycle per archive page.
#[derive(Debug)]
pub struct CrawlSession {
    seen: HashSet<String>,
    collected: Vec<Post>,
    current_url: Option<String>,
    page_count: u32,
    max_pages: u32,
    phase: CrawlPhase,
}

impl CrawlSession {
    /// Creates a session that will start at `start_url`
    pub fn new(start_url: impl Into<String>, max_pages: u32) -> Self {
        Self {
            seen: HashSet::new(),
            collected: Vec::new(),
            current_url: Some(start_url.into()),
            page_count: 0,
            max_pages,
            phase: CrawlPhase::Running,
        }
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Number of pages started, including one rejected by the ceiling
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Number of pages actually fetched
    pub fn pages_fetched(&self) -> u32 {
        self.page_count.min(self.max_pages)
    }

    /// Posts collected so far, in discovery order
    pub fn posts(&self) -> &[Post] {
        &self.collected
    }

    /// Starts the next page
    ///
    /// Returns the URL to fetch, or the reason the crawl ended. Exceeding the
    /// page ceiling ends the crawl here.
    pub fn begin_page(&mut self) -> Result<String, StopReason> {
        if let CrawlPhase::Done(reason) = self.phase {
            return Err(reason);
        }

        self.page_count += 1;
        if self.page_count > self.max_pages {
            tracing::info!(
                "Page limit of {} reached, stopping crawl",
                self.max_pages
            );
            self.finish(StopReason::PageLimit);
            return Err(StopReason::PageLimit);
        }

        self.current_url.clone().ok_or(StopReason::NoNextPage)
    }

    /// Records the post links found on the current page
    ///
    /// Links whose URL was already seen, on this page or an earlier one, are
    /// dropped so the first title wins. Returns how many posts were added.
    pub fn absorb(&mut self, links: Vec<PostLink>) -> usize {
        let before = self.collected.len();

        for link in links {
            if !self.seen.insert(link.url.clone()) {
                tracing::debug!("Skipping already seen post {}", link.url);
                continue;
            }

            let id = derive_slug(&link.url);
            self.collected.push(Post::new(id, link.title, link.url));
        }

        self.collected.len() - before
    }

    /// Moves to the next page, or ends the crawl
    ///
    /// A pagination link equal to the current page ends the crawl instead of
    /// looping on it.
    pub fn advance(&mut self, next: Option<String>) -> CrawlPhase {
        match next {
            None => self.finish(StopReason::NoNextPage),
            Some(next) if self.current_url.as_deref() == Some(next.as_str()) => {
                tracing::debug!("Pagination link {} points at itself", next);
                self.finish(StopReason::SelfReference);
            }
            Some(next) => self.current_url = Some(next),
        }

        self.phase
    }

    /// Consumes the session, returning the collected posts
    pub fn into_posts(self) -> Vec<Post> {
        self.collected
    }

    fn finish(&mut self, reason: StopReason) {
        self.current_url = None;
        self.phase = CrawlPhase::Done(reason);
    }
}
