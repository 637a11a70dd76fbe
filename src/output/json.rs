//! JSON output for the post listing
//!
//! The listing is written as a single pretty-printed JSON document:
//!
//! ```text
//! {
//!   "blog": {
//!     "label": "个人博客",
//!     "posts": [
//!       { "id": "hello-world", "title": "Hello World", "url": "https://..." }
//!     ]
//!   }
//! }
//! ```
//!
//! Each run replaces the file completely.

use crate::output::listing::Listing;
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Serializes a listing as two-space indented JSON
pub fn render_listing(listing: &Listing) -> Result<String> {
    Ok(serde_json::to_string_pretty(listing)?)
}

/// Writes a listing to `path`, overwriting any previous file
///
/// Missing parent directories are created first.
///
/// # Arguments
///
/// * `listing` - The listing to write
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - The listing was written
/// * `Err(ArchiveError)` - Serialization or file IO failed
pub fn write_listing(listing: &Listing, path: &Path) -> Result<()> {
    let json = render_listing(listing)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring output directory {} exists", parent.display());
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, json)?;
    info!(
        "Wrote {} posts to {}",
        listing.blog.posts.len(),
        path.display()
    );

    Ok(())
}
