//! Crawl coordination - the two-phase sweep
//!
//! This module contains the orchestration logic for a run:
//! - Building the HTTP client, extractors, and admission gate
//! - Phase one: sweep every listing page for business URLs
//! - Phase two: fetch each unique detail page and extract a record
//! - Exporting the surviving records under the category name
//!
//! Both phases draw permits from one shared admission gate, and phase two
//! starts only after every phase-one task has been awaited. Per-page
//! failures are absorbed inside their task; only configuration and setup
//! problems abort a run.

use crate::config::Config;
use crate::crawler::detail::{BusinessRecord, DetailExtractor};
use crate::crawler::fetcher::{build_http_client, Fetcher};
use crate::crawler::listing::ListingExtractor;
use crate::identity::IdentityPool;
use crate::output::{artifact_name, CsvExporter, Exporter};
use crate::selectors::SelectorTable;
use crate::url::{listing_page_urls, parse_start_url, site_origin};
use crate::{ConfigError, SweepError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

/// Terminal result of a crawl run
///
/// Empty outcomes are ordinary results, not errors: a search with no
/// matches or a directory that blocked every detail fetch still ran.
#[derive(Debug)]
pub enum CrawlOutcome {
    /// Records were extracted and exported
    Exported { records: usize, path: PathBuf },

    /// No listing page produced any business URL
    NoListings,

    /// Detail pages were fetched but no record survived extraction
    NoRecords,
}

/// Main crawl coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    start_url: Url,
    fetcher: Arc<Fetcher>,
    listing_extractor: Arc<ListingExtractor>,
    detail_extractor: Arc<DetailExtractor>,
    gate: Arc<Semaphore>,
    exporter: Box<dyn Exporter + Send + Sync>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Loads the selector table and identity pool, builds both extractors,
    /// the shared HTTP client, and the admission gate. A missing selector
    /// key fails here, before the first request goes out.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `start_url` - The search URL the sweep starts from
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SweepError)` - Failed to initialize
    pub fn new(config: Config, start_url: &str) -> Result<Self, SweepError> {
        let start_url = parse_start_url(start_url)?;
        let origin = site_origin(&start_url).ok_or_else(|| {
            ConfigError::Validation(format!("Start URL '{}' has no usable origin", start_url))
        })?;

        let table = SelectorTable::load(Path::new(&config.selectors.path))?;
        let listing_extractor = Arc::new(ListingExtractor::new(&table, origin.clone())?);
        let detail_extractor = Arc::new(DetailExtractor::new(&table, origin)?);

        let identities = IdentityPool::load(Path::new(&config.identity.pool_path));
        let client = build_http_client(&config.crawler)?;
        let fetcher = Arc::new(Fetcher::new(client, identities, &config.crawler));

        let gate = Arc::new(Semaphore::new(config.crawler.concurrent_requests as usize));

        Ok(Self {
            config: Arc::new(config),
            start_url,
            fetcher,
            listing_extractor,
            detail_extractor,
            gate,
            exporter: Box::new(CsvExporter),
        })
    }

    /// Replaces the default CSV exporter
    pub fn with_exporter(mut self, exporter: Box<dyn Exporter + Send + Sync>) -> Self {
        self.exporter = exporter;
        self
    }

    /// Runs the complete two-phase sweep
    ///
    /// 1. Generate the listing page URLs from the start URL
    /// 2. Sweep all listing pages for business URLs and a category
    /// 3. Fetch every unique detail page and extract records
    /// 4. Export the records under the category name
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - The run finished, possibly with nothing to show
    /// * `Err(SweepError)` - The run could not proceed
    pub async fn run(&self) -> Result<CrawlOutcome, SweepError> {
        tracing::info!("Starting directory sweep from {}", self.start_url);
        let start_time = std::time::Instant::now();

        let page_urls = listing_page_urls(&self.start_url, self.config.crawler.listing_pages);
        tracing::info!("Generated {} listing page URLs to check", page_urls.len());

        let (business_urls, category) = self.sweep_listings(page_urls).await;

        if business_urls.is_empty() {
            tracing::warn!("No business URLs found after checking all listing pages");
            return Ok(CrawlOutcome::NoListings);
        }

        let category = category.unwrap_or_else(|| "Unknown_Category".to_string());
        tracing::info!(
            "Found {} unique business URLs to scrape in category '{}'",
            business_urls.len(),
            category
        );

        let records = self.sweep_details(business_urls).await;

        if records.is_empty() {
            tracing::warn!("No business details could be extracted");
            return Ok(CrawlOutcome::NoRecords);
        }

        tracing::info!("Successfully extracted {} business records", records.len());

        let path = self.export(&records, &category)?;
        tracing::info!(
            "Sweep completed: {} records exported to {} in {:?}",
            records.len(),
            path.display(),
            start_time.elapsed()
        );

        Ok(CrawlOutcome::Exported {
            records: records.len(),
            path,
        })
    }

    /// Phase one: fetches every listing page and collects business URLs
    ///
    /// Returns the deduplicated URL set and the first non-empty category in
    /// listing page order. Every task is awaited before this returns, so
    /// phase two can never overlap phase one.
    async fn sweep_listings(&self, page_urls: Vec<String>) -> (HashSet<String>, Option<String>) {
        let mut handles = Vec::with_capacity(page_urls.len());

        for page_url in page_urls {
            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.listing_extractor);
            let gate = Arc::clone(&self.gate);

            handles.push(tokio::spawn(async move {
                let _permit = gate.acquire_owned().await.ok()?;
                tracing::info!("Fetching business URLs from {}", page_url);

                let outcome = fetcher.fetch(&page_url).await;
                let document = outcome.into_document()?;

                let page = extractor.extract(&document);
                if page.terminal_empty {
                    tracing::info!("No results reported on {}", page_url);
                }
                Some(page)
            }));
        }

        let mut pages = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(page) => pages.push(page),
                Err(e) => tracing::error!("Listing task failed: {}", e),
            }
        }

        let mut business_urls = HashSet::new();
        let mut category = None;
        for page in pages.into_iter().flatten() {
            business_urls.extend(page.business_urls);
            if category.is_none() {
                category = page.category;
            }
        }

        (business_urls, category)
    }

    /// Phase two: fetches every unique detail page and extracts records
    ///
    /// Failures stay inside their task: a page that cannot be fetched or
    /// carries no business name contributes nothing and the rest proceed.
    async fn sweep_details(&self, business_urls: HashSet<String>) -> Vec<BusinessRecord> {
        let mut handles = Vec::with_capacity(business_urls.len());

        for business_url in business_urls {
            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.detail_extractor);
            let gate = Arc::clone(&self.gate);

            handles.push(tokio::spawn(async move {
                let _permit = gate.acquire_owned().await.ok()?;
                tracing::info!(
                    "Scraping details for {} ({})",
                    business_slug(&business_url),
                    business_url
                );

                let outcome = fetcher.fetch(&business_url).await;
                let document = outcome.into_document()?;

                let record = extractor.extract(&document, &business_url);
                if record.is_none() {
                    tracing::warn!("No business name found on {}", business_url);
                }
                record
            }));
        }

        let mut records = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => tracing::error!("Detail task failed: {}", e),
            }
        }

        records
    }

    /// Writes the records through the exporter under the category name
    fn export(&self, records: &[BusinessRecord], category: &str) -> Result<PathBuf, SweepError> {
        let directory = Path::new(&self.config.output.directory);
        std::fs::create_dir_all(directory)?;

        let path = directory.join(artifact_name(category));
        self.exporter.export(records, &path)?;
        Ok(path)
    }
}

/// Derives a readable slug from a business URL for log lines
///
/// Takes the last path segment, drops the query and the trailing id
/// component, and replaces hyphens with spaces.
fn business_slug(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or("");
    let segment = segment.split('?').next().unwrap_or("");
    let mut parts: Vec<&str> = segment.split('-').collect();
    parts.pop();
    parts.join(" ")
}

/// Runs a complete directory sweep
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `start_url` - The search URL the sweep starts from
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Sweep finished
/// * `Err(SweepError)` - Sweep failed with an error
///
/// # Example
///
/// ```no_run
/// use directory_sweep::config::Config;
/// use directory_sweep::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let outcome = run_crawl(config, "https://www.yellowpages.com/search?search_terms=pizza").await?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, start_url: &str) -> Result<CrawlOutcome, SweepError> {
    let coordinator = Coordinator::new(config, start_url)?;
    coordinator.run().await
}
