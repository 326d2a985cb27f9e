//! Declarative selector table
//!
//! Extraction rules live outside the code, in a flat TOML table mapping field
//! keys to CSS queries (and, for pattern keys, regular expressions). A markup
//! change on the target site is then a configuration edit rather than a code
//! change. The table is loaded once at startup and never mutated.

use crate::{ConfigError, ConfigResult};
use regex::{Regex, RegexBuilder};
use scraper::Selector;
use std::collections::HashMap;
use std::path::Path;

/// Selector-table keys used by the extractors
pub mod keys {
    // Listing pages
    pub const CATEGORY: &str = "category";
    pub const BUSINESS_LINK: &str = "business-link";
    pub const PAGE_CONTENT: &str = "page-content";
    pub const NO_RESULTS_PATTERN: &str = "no-results-pattern";

    // Detail pages
    pub const BUSINESS_NAME: &str = "business-name";
    pub const CONTACT: &str = "contact";
    pub const EMAIL: &str = "email";
    pub const ADDRESS: &str = "address";
    pub const MAP_LINK: &str = "map-link";
    pub const REVIEW: &str = "review";
    pub const REVIEW_COUNT: &str = "review-count";
    pub const IMAGE: &str = "image";
    pub const WEBSITE: &str = "website";
}

/// Immutable mapping from field keys to raw query strings
///
/// Lookups compile on demand; a missing or malformed entry is reported
/// against its key so the fix points straight at the selector file.
#[derive(Debug, Clone)]
pub struct SelectorTable {
    entries: HashMap<String, String>,
}

impl SelectorTable {
    /// Loads a selector table from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the selector file
    ///
    /// # Returns
    ///
    /// * `Ok(SelectorTable)` - Successfully loaded table
    /// * `Err(ConfigError)` - File unreadable or not a flat string table
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a selector table from TOML text
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let entries: HashMap<String, String> = toml::from_str(content)?;
        Ok(SelectorTable { entries })
    }

    /// Builds a table directly from key/value pairs
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        SelectorTable {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the raw query string stored under a key
    pub fn raw(&self, key: &str) -> ConfigResult<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingSelector(key.to_string()))
    }

    /// Compiles the CSS selector stored under a key
    ///
    /// # Returns
    ///
    /// * `Ok(Selector)` - Compiled selector
    /// * `Err(ConfigError)` - Key absent or query malformed
    pub fn selector(&self, key: &str) -> ConfigResult<Selector> {
        let raw = self.raw(key)?;
        Selector::parse(raw).map_err(|e| ConfigError::InvalidSelector {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    /// Compiles the regular expression stored under a key
    ///
    /// Patterns are always compiled case-insensitively.
    pub fn pattern(&self, key: &str) -> ConfigResult<Regex> {
        let raw = self.raw(key)?;
        RegexBuilder::new(raw)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
