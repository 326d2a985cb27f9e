//! Output handler traits and types
//!
//! This module defines the exporter interface the coordinator writes
//! finished records through, and the error type shared by output backends.

use crate::crawler::BusinessRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for record exporters
///
/// An exporter turns the finished record set into one artifact on disk.
/// It runs once, after both crawl phases have completed.
pub trait Exporter {
    /// Writes all records to the given path
    ///
    /// # Arguments
    ///
    /// * `records` - The extracted records, already filtered and deduplicated
    /// * `path` - Destination file path
    fn export(&self, records: &[BusinessRecord], path: &Path) -> OutputResult<()>;
}
