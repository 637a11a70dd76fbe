/// Resolves an anchor `href` against the site origin
///
/// Hrefs that already carry a scheme are returned untouched. Anything else
/// is treated as a path and appended to the origin, with a `/` inserted only
/// when the path does not already start with one. No normalization happens:
/// the result is a plain string concatenation so the same anchor always
/// yields the same string.
///
/// # Arguments
///
/// * `href` - The raw `href` attribute value
/// * `origin` - The site origin, without a trailing slash
///
/// # Examples
///
/// ```
/// use archive_crawler::url::resolve_href;
///
/// let origin = "https://blog.example.com";
/// assert_eq!(resolve_href("/2021/03/15/a/", origin), "https://blog.example.com/2021/03/15/a/");
/// assert_eq!(resolve_href("2021/03/15/a/", origin), "https://blog.example.com/2021/03/15/a/");
/// assert_eq!(resolve_href("https://other.com/x", origin), "https://other.com/x");
/// ```
pub fn resolve_href(href: &str, origin: &str) -> String {
    if has_scheme(href) {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}

/// Returns true if `href` starts with an RFC 3986 scheme followed by `:`
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
