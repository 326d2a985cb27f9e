//! Crawler module for the two-phase directory sweep
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with identity rotation and request pacing
//! - Listing-page and detail-page extraction
//! - Bounded-concurrency coordination of both crawl phases

mod coordinator;
mod detail;
mod fetcher;
mod listing;

pub use coordinator::{run_crawl, Coordinator, CrawlOutcome};
pub use detail::{BusinessRecord, DetailExtractor};
pub use fetcher::{build_http_client, FetchOutcome, Fetcher};
pub use listing::{ListingExtractor, ListingPage};

use crate::config::Config;
use crate::SweepError;
use scraper::{Html, Selector};

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a sweep. It will:
/// 1. Load the selector table and identity pool
/// 2. Build the HTTP client and both extractors
/// 3. Sweep the listing pages for business URLs
/// 4. Fetch every unique detail page under the concurrency budget
/// 5. Export the extracted records under the category name
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `start_url` - The search URL the sweep starts from
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Sweep completed, possibly with an empty outcome
/// * `Err(SweepError)` - Sweep failed
pub async fn crawl(config: Config, start_url: &str) -> Result<CrawlOutcome, SweepError> {
    run_crawl(config, start_url).await
}

/// Joins the text of every selector match with single spaces, trimmed
pub(crate) fn join_matched_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Reads an attribute from the first selector match, trimmed
pub(crate) fn first_attr_of(document: &Html, selector: &Selector, attr: &str) -> String {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
