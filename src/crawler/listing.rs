//! Listing-page extraction
//!
//! A search-results page yields three things: the business detail URLs it
//! references, an optional category label, and a terminal no-results signal.
//! Directories render a "no results" page with the same chrome as a real
//! results page, so the signal check runs before any link collection.

use crate::selectors::{keys, SelectorTable};
use crate::url::resolve_reference;
use crate::ConfigResult;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use super::join_matched_text;

/// Extracted information from one listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Business detail URLs referenced on the page (absolute)
    pub business_urls: Vec<String>,

    /// Category label, when the page carries one
    pub category: Option<String>,

    /// The page declared that the search has no results
    pub terminal_empty: bool,
}

/// Extracts business references and category labels from listing pages
///
/// All selector keys resolve and compile at construction, so a broken
/// selector file fails the run before anything is fetched.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    origin: Url,
    category: Selector,
    business_link: Selector,
    page_content: Selector,
    no_results: Regex,
}

impl ListingExtractor {
    /// Builds a listing extractor against a selector table
    ///
    /// # Arguments
    ///
    /// * `table` - The selector table
    /// * `origin` - Site origin for resolving relative references
    ///
    /// # Returns
    ///
    /// * `Ok(ListingExtractor)` - All keys present and compiled
    /// * `Err(ConfigError)` - A key is missing or its query is malformed
    pub fn new(table: &SelectorTable, origin: Url) -> ConfigResult<Self> {
        Ok(ListingExtractor {
            origin,
            category: table.selector(keys::CATEGORY)?,
            business_link: table.selector(keys::BUSINESS_LINK)?,
            page_content: table.selector(keys::PAGE_CONTENT)?,
            no_results: table.pattern(keys::NO_RESULTS_PATTERN)?,
        })
    }

    /// Extracts business references from one listing document
    ///
    /// A page that declares an empty search contributes no URLs even if
    /// stray elements match the link selector. The category is reported
    /// either way.
    pub fn extract(&self, document: &Html) -> ListingPage {
        let category = self.extract_category(document);

        if self.is_no_results(document) {
            return ListingPage {
                business_urls: Vec::new(),
                category,
                terminal_empty: true,
            };
        }

        let business_urls = document
            .select(&self.business_link)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| resolve_reference(&self.origin, href))
            .collect();

        ListingPage {
            business_urls,
            category,
            terminal_empty: false,
        }
    }

    fn extract_category(&self, document: &Html) -> Option<String> {
        let text = join_matched_text(document, &self.category);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn is_no_results(&self, document: &Html) -> bool {
        let content = join_matched_text(document, &self.page_content);
        self.no_results.is_match(&content)
    }
}
