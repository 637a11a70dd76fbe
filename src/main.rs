//! Archive-Crawler main entry point
//!
//! This is the command-line interface for the Archive-Crawler blog indexer.

use anyhow::Context;
use archive_crawler::config::{load_config_with_hash, validate, Config};
use archive_crawler::crawler::crawl;
use archive_crawler::output::{print_statistics, CrawlStatistics};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Archive-Crawler: a paginated blog archive indexer
///
/// Archive-Crawler walks a blog's archive pages, collects every post link,
/// and writes a JSON listing ordered newest first.
#[derive(Parser, Debug)]
#[command(name = "archive-crawler")]
#[command(version)]
#[command(about = "A paginated blog archive indexer", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write the listing here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Override the maximum number of archive pages to fetch
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match load_effective_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(&config, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("archive_crawler=info,warn"),
            1 => EnvFilter::new("archive_crawler=debug,info"),
            2 => EnvFilter::new("archive_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("reading {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.listing_path = output.to_string_lossy().into_owned();
    }
    if let Some(max_pages) = cli.max_pages {
        config.site.max_pages = max_pages;
    }

    validate(&config).context("invalid command-line override")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Archive-Crawler Dry Run ===\n");

    println!("Site:");
    println!("  Origin: {}", config.site.origin());
    println!("  Start URL: {}", config.site.start_url());
    println!("  Max pages: {}", config.site.max_pages);

    println!("\nOutput:");
    println!("  Listing: {}", config.output.listing_path);
    println!("  Label: {}", config.output.label);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Crawling {} (at most {} pages)",
        config.site.start_url(),
        config.site.max_pages
    );

    match crawl(config).await {
        Ok(outcome) => {
            tracing::info!("Crawl completed successfully");
            if !quiet {
                println!();
                print_statistics(&CrawlStatistics::from_outcome(&outcome));
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
