//! Link classification for archive pages
//!
//! Splits a page's anchors into post links and the single pagination link
//! to follow next. The URL heuristics themselves live in [`crate::url`].

use crate::crawler::parser::{extract_anchors, parse_page, Anchor};
use crate::url::{is_pagination_href, is_post_url, resolve_href};
use scraper::Html;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// A post link found on an archive page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostLink {
    pub url: String,
    pub title: String,
}

/// What one archive page contributes to the crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    /// Post links, unique by `(url, title)`, in document order
    pub posts: Vec<PostLink>,

    /// Absolute URL of the next archive page
    pub next: Option<String>,
}

/// Parses markup and classifies its anchors
///
/// The document is dropped before returning, so callers can hold the
/// result across `.await` points.
pub fn extract_page(html: &str, origin: &str) -> PageResult {
    classify_page(&parse_page(html), origin)
}

/// Classifies every anchor of a parsed document
pub fn classify_page(document: &Html, origin: &str) -> PageResult {
    classify_anchors(&extract_anchors(document), origin)
}

/// Classifies anchors into post links and a next-page link
///
/// # Classification Rules
///
/// **Post link:** the resolved URL contains a `/20YY/` segment and no
/// `/archives/` segment. The same URL with the same text is kept once; the
/// same URL with different text is kept once per text.
///
/// **Next page:** the trimmed raw `href` ends in `/archives/page/<n>` with an
/// optional trailing slash. When several match, the lexically longest
/// resolved URL wins: longer first, then lexicographically greater.
///
/// Anchors without `href`, and hrefs that do not resolve to a parseable
/// URL, are skipped.
///
/// # Arguments
///
/// * `anchors` - Anchors in document order
/// * `origin` - Site origin used for relative hrefs, without trailing slash
pub fn classify_anchors(anchors: &[Anchor], origin: &str) -> PageResult {
    let mut seen = HashSet::new();
    let mut posts = Vec::new();
    let mut next: Option<String> = None;

    for anchor in anchors {
        let Some(href) = anchor.href.as_deref() else {
            continue;
        };

        if let Some(url) = resolve_link(href, origin) {
            if is_post_url(&url) {
                let link = PostLink {
                    url,
                    title: anchor.text.clone(),
                };
                if seen.insert(link.clone()) {
                    posts.push(link);
                }
            }
        }

        if is_pagination_href(href) {
            if let Some(candidate) = resolve_link(href.trim(), origin) {
                if next.as_deref().map_or(true, |current| is_longer(&candidate, current)) {
                    next = Some(candidate);
                }
            }
        }
    }

    debug!(
        "Classified {} anchors: {} post links, next page {:?}",
        anchors.len(),
        posts.len(),
        next
    );

    PageResult { posts, next }
}

/// Resolves an href, keeping it only if the result parses as a URL
fn resolve_link(href: &str, origin: &str) -> Option<String> {
    let absolute = resolve_href(href, origin);
    match Url::parse(&absolute) {
        Ok(_) => Some(absolute),
        Err(e) => {
            debug!("Skipping unresolvable link {:?}: {}", href, e);
            None
        }
    }
}

fn is_longer(candidate: &str, current: &str) -> bool {
    (candidate.len(), candidate) > (current.len(), current)
}
