//! Statistics for a finished crawl
//!
//! This module summarizes a crawl outcome for the terminal.

use crate::crawler::CrawlOutcome;
use crate::state::StopReason;

/// Crawl statistics summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of archive pages fetched
    pub pages_fetched: u32,

    /// Number of unique posts collected
    pub posts_collected: usize,

    /// Posts whose URL carries no `YYYY/MM/DD` date
    pub undated_posts: usize,

    /// Posts sharing their slug with an earlier post
    pub duplicate_ids: usize,

    /// Why the crawl ended
    pub stop_reason: StopReason,
}

impl CrawlStatistics {
    /// Computes statistics from a crawl outcome
    pub fn from_outcome(outcome: &CrawlOutcome) -> Self {
        let mut ids = std::collections::HashSet::new();
        let duplicate_ids = outcome
            .posts
            .iter()
            .filter(|post| !ids.insert(post.id.as_str()))
            .count();

        let undated_posts = outcome
            .posts
            .iter()
            .filter(|post| crate::url::extract_post_date(&post.url).is_none())
            .count();

        Self {
            pages_fetched: outcome.pages_fetched,
            posts_collected: outcome.posts.len(),
            undated_posts,
            duplicate_ids,
            stop_reason: outcome.stop_reason,
        }
    }
}

/// Prints statistics to stdout in a human-readable format
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Archive-Crawler Statistics ===\n");
    println!("Pages fetched:    {}", stats.pages_fetched);
    println!("Posts collected:  {}", stats.posts_collected);
    println!("Undated posts:    {}", stats.undated_posts);
    println!("Duplicate slugs:  {}", stats.duplicate_ids);
    println!("Stop reason:      {}", stats.stop_reason);
}
