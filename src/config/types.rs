use serde::Deserialize;

/// Main configuration structure for Directory-Sweep
///
/// Every section is optional; a missing config file yields the defaults and
/// the crawl can run with nothing but a start URL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub identity: IdentityConfig,
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Number of listing pages generated from the start URL
    #[serde(rename = "listing-pages")]
    pub listing_pages: u32,

    /// Maximum number of in-flight requests across both crawl phases
    #[serde(rename = "concurrent-requests")]
    pub concurrent_requests: u32,

    /// Minimum pre-request delay (milliseconds)
    #[serde(rename = "delay-min-ms")]
    pub delay_min_ms: u64,

    /// Maximum pre-request delay (milliseconds)
    #[serde(rename = "delay-max-ms")]
    pub delay_max_ms: u64,

    /// Per-request total timeout (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        CrawlerConfig {
            listing_pages: 9,
            concurrent_requests: 10,
            delay_min_ms: 2000,
            delay_max_ms: 5000,
            request_timeout: 20,
        }
    }
}

/// Request identity configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Path to the newline-delimited User-Agent pool file
    #[serde(rename = "pool-path")]
    pub pool_path: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            pool_path: "user-agents.txt".to_string(),
        }
    }
}

/// Selector table configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Path to the TOML selector table
    pub path: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            path: "selectors.toml".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the export file is written into
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: "directory_database".to_string(),
        }
    }
}
