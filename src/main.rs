//! Directory-Sweep main entry point
//!
//! This is the command-line interface for the Directory-Sweep business
//! directory crawler.

use clap::Parser;
use directory_sweep::config::{load_config_or_default, Config};
use directory_sweep::crawler::{crawl, CrawlOutcome, DetailExtractor, ListingExtractor};
use directory_sweep::identity::IdentityPool;
use directory_sweep::selectors::SelectorTable;
use directory_sweep::url::{listing_page_urls, parse_start_url, site_origin};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Search URL used when none is given on the command line
const DEFAULT_START_URL: &str =
    "https://www.yellowpages.com/search?search_terms=pizza&geo_location_terms=New+York%2C+NY";

/// Directory-Sweep: a business directory crawler
///
/// Directory-Sweep walks the paginated listing pages of a directory search,
/// fetches every unique business detail page under a bounded concurrency
/// budget, and exports the extracted records as one CSV file named after
/// the search category.
#[derive(Parser, Debug)]
#[command(name = "directory-sweep")]
#[command(version = "1.0.0")]
#[command(about = "A business directory crawler", long_about = None)]
struct Cli {
    /// Search URL to start the sweep from
    #[arg(value_name = "START_URL")]
    start_url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and selectors without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let start_url = cli.start_url.unwrap_or_else(|| {
        tracing::info!("No start URL provided, using default: {}", DEFAULT_START_URL);
        DEFAULT_START_URL.to_string()
    });

    if cli.dry_run {
        handle_dry_run(&config, &start_url)?;
    } else {
        handle_crawl(config, &start_url).await?;
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
            0 => EnvFilter::new("directory_sweep=info,warn"),
            1 => EnvFilter::new("directory_sweep=debug,info"),
            2 => EnvFilter::new("directory_sweep=trace,debug"),
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

/// Handles the --dry-run mode: validates config and selectors without fetching
fn handle_dry_run(config: &Config, start_url: &str) -> anyhow::Result<()> {
    println!("=== Directory-Sweep Dry Run ===\n");

    let parsed = parse_start_url(start_url)?;
    let origin = site_origin(&parsed)
        .ok_or_else(|| anyhow::anyhow!("Start URL '{}' has no usable origin", parsed))?;

    println!("Start URL: {}", parsed);
    println!("Site origin: {}", origin);

    println!("\nCrawler Configuration:");
    println!("  Listing pages: {}", config.crawler.listing_pages);
    println!(
        "  Concurrent requests: {}",
        config.crawler.concurrent_requests
    );
    println!(
        "  Delay range: {}-{}ms",
        config.crawler.delay_min_ms, config.crawler.delay_max_ms
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout);

    // Constructing the extractors surfaces any missing selector key
    let table = SelectorTable::load(Path::new(&config.selectors.path))?;
    ListingExtractor::new(&table, origin.clone())?;
    DetailExtractor::new(&table, origin)?;

    println!("\nSelectors:");
    println!(
        "  Table: {} ({} entries)",
        config.selectors.path,
        table.len()
    );

    let pool = IdentityPool::load(Path::new(&config.identity.pool_path));
    println!("\nIdentity:");
    println!(
        "  Pool: {} ({} identities)",
        config.identity.pool_path,
        pool.len()
    );

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    let pages = listing_page_urls(&parsed, config.crawler.listing_pages);
    println!("\n✓ Configuration is valid");
    println!("✓ All selector keys present");
    println!("✓ Would sweep {} listing pages", pages.len());
    if let Some(first) = pages.first() {
        println!("  First: {}", first);
    }

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config, start_url: &str) -> anyhow::Result<()> {
    tokio::select! {
        result = crawl(config, start_url) => match result {
            Ok(CrawlOutcome::Exported { records, path }) => {
                tracing::info!("Crawl completed: {} records saved to {}", records, path.display());
                Ok(())
            }
            Ok(CrawlOutcome::NoListings) => {
                tracing::warn!("Crawl finished without finding any business URLs");
                Ok(())
            }
            Ok(CrawlOutcome::NoRecords) => {
                tracing::warn!("Crawl finished without extracting any records");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Crawl failed: {}", e);
                Err(e.into())
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Crawl interrupted by user");
            Ok(())
        }
    }
}
