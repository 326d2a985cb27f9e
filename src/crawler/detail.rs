//! Detail-page extraction
//!
//! Turns one business detail page into a flat record. Field selectors come
//! from the selector table; several fields carry their own post-processing
//! quirk matching how directories mark the data up (mailto: hrefs for email,
//! a rating encoded in a CSS class, a parenthesized review count).

use crate::selectors::{keys, SelectorTable};
use crate::url::resolve_reference;
use crate::ConfigResult;
use scraper::{Html, Selector};
use url::Url;

use super::{first_attr_of, join_matched_text};

/// One extracted business listing
///
/// `name` is never empty: pages without a recognizable business name are
/// dropped at extraction. Every other field may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessRecord {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub map_link: String,
    pub review: String,
    pub review_count: String,
    pub source_url: String,
    pub image: String,
    pub website: String,
}

impl BusinessRecord {
    /// Export column headers, in export order
    pub const FIELD_NAMES: [&'static str; 10] = [
        "Business",
        "Contact",
        "Email",
        "Address",
        "Map and direction",
        "Review",
        "Review count",
        "Hyperlink",
        "Images",
        "Website",
    ];

    /// Field values in the same order as `FIELD_NAMES`
    pub fn to_row(&self) -> [&str; 10] {
        [
            &self.name,
            &self.contact,
            &self.email,
            &self.address,
            &self.map_link,
            &self.review,
            &self.review_count,
            &self.source_url,
            &self.image,
            &self.website,
        ]
    }
}

/// Extracts business records from detail pages
///
/// Like the listing extractor, all selector keys resolve at construction.
#[derive(Debug, Clone)]
pub struct DetailExtractor {
    origin: Url,
    business_name: Selector,
    contact: Selector,
    email: Selector,
    address: Selector,
    map_link: Selector,
    review: Selector,
    review_count: Selector,
    image: Selector,
    website: Selector,
}

impl DetailExtractor {
    /// Builds a detail extractor against a selector table
    ///
    /// # Arguments
    ///
    /// * `table` - The selector table
    /// * `origin` - Site origin for resolving the map/direction reference
    pub fn new(table: &SelectorTable, origin: Url) -> ConfigResult<Self> {
        Ok(DetailExtractor {
            origin,
            business_name: table.selector(keys::BUSINESS_NAME)?,
            contact: table.selector(keys::CONTACT)?,
            email: table.selector(keys::EMAIL)?,
            address: table.selector(keys::ADDRESS)?,
            map_link: table.selector(keys::MAP_LINK)?,
            review: table.selector(keys::REVIEW)?,
            review_count: table.selector(keys::REVIEW_COUNT)?,
            image: table.selector(keys::IMAGE)?,
            website: table.selector(keys::WEBSITE)?,
        })
    }

    /// Extracts a record from one detail document
    ///
    /// Returns None when the page has no business name; a record without its
    /// identity field is useless downstream.
    ///
    /// # Arguments
    ///
    /// * `document` - The parsed detail page
    /// * `source_url` - The URL the page was fetched from
    pub fn extract(&self, document: &Html, source_url: &str) -> Option<BusinessRecord> {
        let name = join_matched_text(document, &self.business_name);
        if name.is_empty() {
            return None;
        }

        let map_href = first_attr_of(document, &self.map_link, "href");
        let map_link = resolve_reference(&self.origin, &map_href).unwrap_or_default();

        Some(BusinessRecord {
            name,
            contact: join_matched_text(document, &self.contact),
            email: join_matched_text(document, &self.email).replace("mailto:", ""),
            address: join_matched_text(document, &self.address),
            map_link,
            review: first_attr_of(document, &self.review, "class").replace("rating-stars ", ""),
            review_count: join_matched_text(document, &self.review_count).replace(['(', ')'], ""),
            source_url: source_url.to_string(),
            image: first_attr_of(document, &self.image, "src"),
            website: first_attr_of(document, &self.website, "href"),
        })
    }
}
