//! Output module for the post listing
//!
//! This module handles:
//! - The `Post` and `Listing` data model
//! - Ordering posts by the date embedded in their URLs
//! - Writing the listing as pretty-printed JSON
//! - Summarizing a finished crawl

mod json;
mod listing;
pub mod stats;

pub use json::{render_listing, write_listing};
pub use listing::{sort_by_date_desc, Blog, Listing, Post};
pub use stats::{print_statistics, CrawlStatistics};
