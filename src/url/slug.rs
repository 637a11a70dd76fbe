use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Identifier used when nothing usable can be derived from a URL
pub const FALLBACK_SLUG: &str = "post";

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_-]+").expect("valid slug regex"));

/// Derives a lowercase, URL-safe identifier from a post URL
///
/// # Derivation Steps
///
/// 1. Parse the URL and split its path into non-empty segments
/// 2. Take the last segment
/// 3. Percent-decode it and lowercase it; a malformed escape is a failure
/// 4. Collapse every run of characters outside `[a-z0-9_-]` into one `-`
/// 5. Trim leading and trailing `-`
///
/// Any failure along the way, or an empty result, yields [`FALLBACK_SLUG`].
/// Slugs are not unique: two posts may share one.
///
/// # Examples
///
/// ```
/// use archive_crawler::url::derive_slug;
///
/// assert_eq!(derive_slug("https://blog.example.com/2021/03/15/hello-world/"), "hello-world");
/// assert_eq!(derive_slug("https://blog.example.com/"), "post");
/// assert_eq!(derive_slug("not a url"), "post");
/// ```
pub fn derive_slug(url: &str) -> String {
    slug_from_url(url).unwrap_or_else(|| FALLBACK_SLUG.to_string())
}

fn slug_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let last = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if has_malformed_escape(last) {
        return None;
    }

    let decoded = urlencoding::decode(last).ok()?.to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&decoded, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Returns true if some `%` is not followed by two hex digits
fn has_malformed_escape(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).map_or(false, u8::is_ascii_hexdigit)
                && bytes.get(i + 2).map_or(false, u8::is_ascii_hexdigit))
    })
}
