//! URL handling for Directory-Sweep
//!
//! This module covers the three URL jobs the pipeline has: validating the
//! start URL, generating the listing-page URL sequence from it, and resolving
//! business references found in listing markup to absolute URLs.

use crate::{ConfigError, ConfigResult};
use url::Url;

/// Parses and validates a crawl start URL
///
/// The start URL anchors the whole run: it must be absolute, use the http or
/// https scheme, and carry a host.
///
/// # Arguments
///
/// * `raw` - The start URL string, typically from the command line
///
/// # Returns
///
/// * `Ok(Url)` - Parsed and validated start URL
/// * `Err(ConfigError)` - The URL cannot anchor a crawl
pub fn parse_start_url(raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::Validation(format!("Invalid start URL '{}': {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Start URL '{}' must use the http or https scheme",
            raw
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "Start URL '{}' has no host",
            raw
        )));
    }

    Ok(url)
}

/// Derives the site origin (scheme + host + port) of a URL as a new URL
///
/// The origin is the base against which relative business references and
/// map links are resolved. Returns None for URLs without a proper origin
/// (which `parse_start_url` already rules out for crawl inputs).
pub fn site_origin(url: &Url) -> Option<Url> {
    let origin = url.origin();
    if !matches!(origin, url::Origin::Tuple(..)) {
        return None;
    }
    Url::parse(&origin.ascii_serialization()).ok()
}

/// Generates the listing-page URL sequence for a start URL
///
/// Page URLs are formed by appending `&page=N` for N in 1..=pages. The start
/// URL is expected to already carry its search terms as query parameters.
pub fn listing_page_urls(start_url: &Url, pages: u32) -> Vec<String> {
    (1..=pages)
        .map(|page| format!("{}&page={}", start_url, page))
        .collect()
}

/// Resolves a business reference to an absolute URL string
///
/// Returns None for references that cannot identify a detail page:
/// - empty hrefs and fragment-only anchors
/// - javascript:, mailto:, tel: and data: pseudo-links
/// - references that resolve to a non-HTTP(S) URL
pub fn resolve_reference(origin: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match origin.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute.to_string())
        }
        _ => None,
    }
}
