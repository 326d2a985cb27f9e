//! Directory-Sweep: a two-phase business directory crawler
//!
//! This crate crawls paginated search-result listings, collects the business
//! detail pages they reference, fetches every unique detail page under a
//! bounded concurrency budget, extracts structured records via a declarative
//! selector table, and exports the surviving records as one tabular file.

pub mod config;
pub mod crawler;
pub mod identity;
pub mod output;
pub mod selectors;
pub mod url;

use thiserror::Error;

/// Main error type for Directory-Sweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Selector key '{0}' not present in selector table")]
    MissingSelector(String),

    #[error("Invalid selector for key '{key}': {message}")]
    InvalidSelector { key: String, message: String },

    #[error("Invalid pattern for key '{key}': {message}")]
    InvalidPattern { key: String, message: String },
}

/// Result type alias for Directory-Sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, BusinessRecord, CrawlOutcome};
pub use selectors::SelectorTable;
