//! Output module for record export
//!
//! Extracted records leave the program through an exporter. CSV is the
//! built-in backend; the artifact is named after the sanitized category
//! label the listing pages reported.

mod csv_output;
mod traits;

pub use csv_output::CsvExporter;
pub use traits::{Exporter, OutputError, OutputResult};

/// Builds the export file name for a category label
pub fn artifact_name(category: &str) -> String {
    format!("{}.csv", sanitize_category(category))
}

/// Strips characters that cannot appear in file names
///
/// Removes `\ / * ? : " < > |`, trims whitespace, and falls back to
/// `General_Scrape` when nothing survives.
pub fn sanitize_category(category: &str) -> String {
    const FORBIDDEN: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

    let sanitized: String = category
        .chars()
        .filter(|c| !FORBIDDEN.contains(c))
        .collect();
    let sanitized = sanitized.trim();

    if sanitized.is_empty() {
        "General_Scrape".to_string()
    } else {
        sanitized.to_string()
    }
}
