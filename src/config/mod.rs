//! Configuration module for Archive-Crawler
//!
//! Every setting has a built-in default, so a config file is optional. When
//! one is given it is a TOML document whose tables override the defaults.
//!
//! # Example
//!
//! ```no_run
//! use archive_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawl will start at: {}", config.site.start_url());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, SiteConfig, DEFAULT_LABEL, DEFAULT_LISTING_PATH, DEFAULT_MAX_PAGES,
    DEFAULT_ORIGIN, DEFAULT_START_PATH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
