//! Request identity rotation
//!
//! Every outgoing request presents a User-Agent drawn at random from a
//! newline-delimited pool file. An unreadable or empty pool degrades to a
//! single fixed identity with a warning instead of stopping the crawl.

use rand::Rng;
use std::path::Path;

/// Fallback User-Agent used when the pool file is missing or empty
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Pool of User-Agent strings
///
/// Holds at least one identity by construction.
#[derive(Debug, Clone)]
pub struct IdentityPool {
    agents: Vec<String>,
}

impl IdentityPool {
    /// Loads an identity pool from a newline-delimited file
    ///
    /// Blank lines are skipped. An unreadable or empty file yields the
    /// default pool so the crawl can still proceed.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the pool file
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let agents: Vec<String> = content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect();

                if agents.is_empty() {
                    tracing::warn!(
                        "User-agent pool {} has no entries, using the default identity",
                        path.display()
                    );
                    Self::default()
                } else {
                    IdentityPool { agents }
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read user-agent pool {}: {}, using the default identity",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Picks a random User-Agent from the pool
    pub fn pick(&self) -> &str {
        let index = rand::rng().random_range(0..self.agents.len());
        &self.agents[index]
    }

    /// Number of identities in the pool
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the pool holds no identities (never true by construction)
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for IdentityPool {
    fn default() -> Self {
        IdentityPool {
            agents: vec![DEFAULT_USER_AGENT.to_string()],
        }
    }
}
