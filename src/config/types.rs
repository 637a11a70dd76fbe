use crate::url::resolve_href;
use serde::Deserialize;

/// Site origin used when no config overrides it
pub const DEFAULT_ORIGIN: &str = "https://blog.luliang.website";

/// First archive page, relative to the origin
pub const DEFAULT_START_PATH: &str = "/archives/";

/// Hard cap on archive pages fetched in one run
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Where the listing is written
pub const DEFAULT_LISTING_PATH: &str = "posts.json";

/// Label stored alongside the posts in the listing
pub const DEFAULT_LABEL: &str = "个人博客";

/// Main configuration structure for Archive-Crawler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which archive to crawl and how far
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL used to resolve relative links
    #[serde(default = "default_origin")]
    pub origin: String,

    /// First archive page to fetch
    #[serde(rename = "start-path", default = "default_start_path")]
    pub start_path: String,

    /// Maximum number of archive pages fetched before the crawl stops
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,
}

impl SiteConfig {
    /// The origin without any trailing slash
    pub fn origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }

    /// Absolute URL of the first archive page
    pub fn start_url(&self) -> String {
        resolve_href(&self.start_path, self.origin())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            start_path: default_start_path(),
            max_pages: default_max_pages(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON listing file
    #[serde(rename = "listing-path", default = "default_listing_path")]
    pub listing_path: String,

    /// Label written into the listing's `blog` object
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            listing_path: default_listing_path(),
            label: default_label(),
        }
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_start_path() -> String {
    DEFAULT_START_PATH.to_string()
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_listing_path() -> String {
    DEFAULT_LISTING_PATH.to_string()
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}
