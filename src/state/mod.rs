//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlPhase`: whether the crawl loop is still running, and why it stopped
//! - `CrawlSession`: the seen-set, collected posts, current page and page count
//!   owned by one crawl run

mod phase;
mod session;

// Re-export main types
pub use phase::{CrawlPhase, StopReason};
pub use session::CrawlSession;
