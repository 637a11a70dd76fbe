use crate::url::extract_post_date;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A blog post found in the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Slug derived from the URL; not guaranteed unique
    pub id: String,

    /// Anchor text, or the slug when the anchor had none
    pub title: String,

    /// Absolute post URL
    pub url: String,
}

impl Post {
    /// Creates a post, falling back to `id` for an empty title
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        let id = id.into();
        let title = title.into();
        let title = if title.is_empty() { id.clone() } else { title };

        Self {
            id,
            title,
            url: url.into(),
        }
    }

    /// Date embedded in the post URL, or the Unix epoch when there is none
    pub fn sort_date(&self) -> NaiveDate {
        extract_post_date(&self.url).unwrap_or(DateTime::UNIX_EPOCH.date_naive())
    }
}

/// The `blog` object of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub label: String,
    pub posts: Vec<Post>,
}

/// The document written at the end of a crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub blog: Blog,
}

impl Listing {
    /// Builds a listing, ordering `posts` newest first
    pub fn new(label: impl Into<String>, mut posts: Vec<Post>) -> Self {
        sort_by_date_desc(&mut posts);
        Self {
            blog: Blog {
                label: label.into(),
                posts,
            },
        }
    }
}

/// Sorts posts by URL date, most recent first
///
/// Undated posts count as the Unix epoch and sink to the end. The sort is
/// stable, so posts sharing a date keep their discovery order.
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by_key(|post| std::cmp::Reverse(post.sort_date()));
}
