//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client
//! - Per-request identity rotation and randomized pre-request delay
//! - Fetching and parsing pages into documents
//! - Error classification
//!
//! Every failure is classified and logged here so callers only have to
//! distinguish "got a document" from "did not".

use crate::config::CrawlerConfig;
use crate::identity::IdentityPool;
use rand::Rng;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Result of fetching one page
///
/// Exactly one variant carries a document; the rest are the failure classes
/// a single page can die of without affecting the rest of the run.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successful response parsed into a document
    Document(Html),

    /// Successful response with an empty body
    EmptyContent,

    /// Non-success HTTP status
    HttpStatus(u16),

    /// The request timed out
    Timeout,

    /// Connection or protocol failure
    Network(String),
}

impl FetchOutcome {
    /// Consumes the outcome, yielding the parsed document if there is one
    pub fn into_document(self) -> Option<Html> {
        match self {
            FetchOutcome::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Builds the HTTP client shared by all requests in a run
///
/// The User-Agent is deliberately not set here; it rotates per request.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages with identity rotation and randomized pacing
///
/// One instance is shared across all crawl tasks.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    identities: IdentityPool,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl Fetcher {
    /// Creates a fetcher from the shared client and identity pool
    pub fn new(client: Client, identities: IdentityPool, config: &CrawlerConfig) -> Self {
        Fetcher {
            client,
            identities,
            delay_min_ms: config.delay_min_ms,
            delay_max_ms: config.delay_max_ms,
        }
    }

    /// Fetches a URL and classifies the result
    ///
    /// Sleeps a random interval from the configured range before sending, so
    /// request pacing follows the caller's admission rather than bursting.
    /// All failure classes are logged here with the URL attached.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    ///
    /// # Returns
    ///
    /// A FetchOutcome carrying either the parsed document or the failure class
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let delay_ms = self.pre_request_delay();
        tracing::debug!("Sleeping {}ms before fetching {}", delay_ms, url);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let request = self
            .client
            .get(url)
            .header(USER_AGENT, self.identities.pick());

        match request.send().await {
            Ok(response) => {
                let status = response.status();

                if !status.is_success() {
                    tracing::warn!("HTTP {} from {}", status.as_u16(), url);
                    return FetchOutcome::HttpStatus(status.as_u16());
                }

                match response.text().await {
                    Ok(body) if body.is_empty() => {
                        tracing::warn!("Empty content received from {}", url);
                        FetchOutcome::EmptyContent
                    }
                    Ok(body) => FetchOutcome::Document(Html::parse_document(&body)),
                    Err(e) => {
                        tracing::warn!("Failed to read body from {}: {}", url, e);
                        FetchOutcome::Network(e.to_string())
                    }
                }
            }
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!("Timeout fetching {}", url);
                    FetchOutcome::Timeout
                } else {
                    tracing::warn!("Network error fetching {}: {}", url, e);
                    FetchOutcome::Network(e.to_string())
                }
            }
        }
    }

    fn pre_request_delay(&self) -> u64 {
        // Validation guarantees min <= max, which the sampler requires
        rand::rng().random_range(self.delay_min_ms..=self.delay_max_ms)
    }
}
