//! Configuration module for Directory-Sweep
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a built-in default, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use directory_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling {} listing pages", config.crawler.listing_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, IdentityConfig, OutputConfig, SelectorConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
