//! URL handling module for Archive-Crawler
//!
//! This module provides href resolution, the post and pagination heuristics,
//! date extraction and slug derivation. Everything here is a pure function
//! over strings so the heuristics can be tested without a network.

mod patterns;
mod resolve;
mod slug;

// Re-export main functions
pub use patterns::{extract_post_date, is_pagination_href, is_post_url};
pub use resolve::resolve_href;
pub use slug::{derive_slug, FALLBACK_SLUG};
