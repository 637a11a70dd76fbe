//! URL heuristics for this archive layout
//!
//! Post permalinks embed their publication year (`/2021/...`), archive index
//! pages live under `/archives/`, and pagination links end in
//! `/archives/page/<n>/`. Each heuristic is a standalone predicate.

use chrono::{Duration, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static POST_YEAR_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/20[0-9]{2}/").expect("valid post year regex"));

static PAGINATION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/archives/page/[0-9]+/?$").expect("valid pagination regex"));

static PATH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})/([0-9]{2})/([0-9]{2})").expect("valid path date regex")
});

const ARCHIVES_SEGMENT: &str = "/archives/";

/// Returns true if an absolute URL looks like a post permalink
///
/// The URL must contain a `/20YY/` segment and must not contain `/archives/`.
///
/// # Examples
///
/// ```
/// use archive_crawler::url::is_post_url;
///
/// assert!(is_post_url("https://blog.example.com/2021/03/15/hello-world/"));
/// assert!(!is_post_url("https://blog.example.com/archives/2021/03/"));
/// assert!(!is_post_url("https://blog.example.com/about/"));
/// ```
pub fn is_post_url(url: &str) -> bool {
    POST_YEAR_SEGMENT.is_match(url) && !url.contains(ARCHIVES_SEGMENT)
}

/// Returns true if a raw `href` points at a numbered archive page
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use archive_crawler::url::is_pagination_href;
///
/// assert!(is_pagination_href("/archives/page/3/"));
/// assert!(is_pagination_href("https://blog.example.com/archives/page/12"));
/// assert!(!is_pagination_href("/archives/page/3/#comments"));
/// ```
pub fn is_pagination_href(href: &str) -> bool {
    PAGINATION_SUFFIX.is_match(href.trim())
}

/// Extracts the publication date embedded in a post URL
///
/// Looks for the first `YYYY/MM/DD` run anywhere in the string and returns
/// `None` only when there is none. Out-of-range months and days roll over
/// into the following months, so `2021/02/30` reads as 2021-03-02.
///
/// # Examples
///
/// ```
/// use archive_crawler::url::extract_post_date;
/// use chrono::{Duration, Months, NaiveDate};
///
/// assert_eq!(
///     extract_post_date("https://blog.example.com/2021/03/15/hello/"),
///     NaiveDate::from_ymd_opt(2021, 3, 15)
/// );
/// assert_eq!(extract_post_date("https://blog.example.com/about/"), None);
/// ```
pub fn extract_post_date(url: &str) -> Option<NaiveDate> {
    let caps = PATH_DATE.captures(url)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| roll_over(year, month, day))
}

/// Counts `month - 1` months and `day - 1` days on from January 1st of `year`
fn roll_over(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let january = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = match month {
        0 => january.checked_sub_months(Months::new(1))?,
        m => january.checked_add_months(Months::new(m - 1))?,
    };
    first_of_month.checked_add_signed(Duration::days(i64::from(day) - 1))
}
