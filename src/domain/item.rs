//! Catalogue item records
//!
//! A record is born from one listing-page entry, enriched at most once by a
//! detail-page fetch and then only read. Normalisation produces a separate
//! [`NormalizedItem`] that keeps the raw record next to the typed columns.

use serde::{Deserialize, Serialize};

use crate::domain::constants;

/// Fields extracted from one product block on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub title: String,
    /// Price text as shown on the listing, e.g. `£51.77`
    pub price_raw: String,
    /// Rating word taken from the star-rating class list, e.g. `Three`
    pub rating_word: String,
    pub availability: String,
    /// Absolute detail-page URL
    pub url: String,
}

/// Secondary fields sourced from an item's detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailFields {
    pub category: String,
    pub description: String,
    pub upc: String,
    pub product_type: String,
    pub price_excl_tax: String,
    pub price_incl_tax: String,
    pub tax: String,
    pub num_reviews: String,
}

impl DetailFields {
    /// Values used when the detail page could not be fetched or parsed
    pub fn unavailable() -> Self {
        Self {
            category: constants::UNKNOWN_CATEGORY.to_string(),
            description: constants::NO_DESCRIPTION.to_string(),
            upc: String::new(),
            product_type: String::new(),
            price_excl_tax: String::new(),
            price_incl_tax: String::new(),
            tax: String::new(),
            num_reviews: String::new(),
        }
    }
}

impl Default for DetailFields {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// Result of a single detail-page enrichment attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Enriched(DetailFields),
    Unavailable { reason: String },
}

impl DetailOutcome {
    pub fn is_enriched(&self) -> bool {
        matches!(self, Self::Enriched(_))
    }

    /// Detail fields to store, falling back to the documented defaults
    pub fn into_fields(self) -> DetailFields {
        match self {
            Self::Enriched(fields) => fields,
            Self::Unavailable { .. } => DetailFields::unavailable(),
        }
    }
}

/// One scraped product, in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    pub price_raw: String,
    pub rating_word: String,
    pub availability: String,
    pub url: String,
    pub detail: DetailFields,
    /// Page the item was discovered on (1-based)
    pub page_number: u32,
    /// Position inside that page (0-based)
    pub index_in_page: u32,
    pub enriched: bool,
}

impl ItemRecord {
    pub fn new(entry: ListingEntry, outcome: DetailOutcome, page_number: u32, index_in_page: u32) -> Self {
        let enriched = outcome.is_enriched();
        Self {
            title: entry.title,
            price_raw: entry.price_raw,
            rating_word: entry.rating_word,
            availability: entry.availability,
            url: entry.url,
            detail: outcome.into_fields(),
            page_number,
            index_in_page,
            enriched,
        }
    }
}

/// Item with typed columns derived from the raw listing text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedItem {
    pub record: ItemRecord,
    /// `None` when the price text could not be parsed as a number
    pub price: Option<f64>,
    /// 1-5, or 0 for a missing/unknown rating word
    pub rating: u8,
    pub availability: String,
    /// Listing price text with encoding artifacts removed, e.g. `£51.77`
    pub price_text: String,
    /// Listing price text without artifacts or currency symbol, e.g. `51.77`
    pub price_raw: String,
}
