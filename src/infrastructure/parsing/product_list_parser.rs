//! Product list parser
//!
//! Extracts the listing-sourced fields of every product block on a
//! catalogue listing page. Detail URLs are resolved against the URL the
//! listing page was fetched from.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use super::config::ProductListSelectors;
use super::{ContextualParser, ParseContext, ParsingError, ParsingResult, compile_selector, element_text};
use crate::domain::ListingEntry;
use crate::domain::constants;

/// Parser for catalogue listing pages
pub struct ProductListParser {
    container_selector: Selector,
    link_selector: Selector,
    price_selector: Selector,
    availability_selector: Selector,
    rating_selector: Selector,
    rating_marker_class: String,
}

impl ProductListParser {
    /// Create a new product list parser with default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ProductListSelectors::default())
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &ProductListSelectors) -> ParsingResult<Self> {
        Ok(Self {
            container_selector: compile_selector(&selectors.product_container)?,
            link_selector: compile_selector(&selectors.product_link)?,
            price_selector: compile_selector(&selectors.price)?,
            availability_selector: compile_selector(&selectors.availability)?,
            rating_selector: compile_selector(&selectors.rating)?,
            rating_marker_class: selectors.rating_marker_class.clone(),
        })
    }

    fn extract_entry(&self, element: &ElementRef<'_>, base_url: &str) -> ParsingResult<ListingEntry> {
        let link = element
            .select(&self.link_selector)
            .next()
            .ok_or_else(|| ParsingError::required_field_missing("product link", Some("listing item")))?;

        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| ParsingError::required_field_missing("href", Some("listing item link")))?;

        let title = link
            .value()
            .attr("title")
            .map_or_else(|| constants::UNKNOWN_TITLE.to_string(), str::to_string);

        Ok(ListingEntry {
            price_raw: self.extract_text(element, &self.price_selector, "price", &title),
            availability: self.extract_text(element, &self.availability_selector, "availability", &title),
            rating_word: self.extract_rating_word(element),
            url: resolve_url(href, base_url)?,
            title,
        })
    }

    fn extract_text(&self, element: &ElementRef<'_>, selector: &Selector, field: &str, title: &str) -> String {
        if let Some(found) = element.select(selector).next() {
            element_text(&found)
        } else {
            warn!("No {} found for '{}'", field, title);
            String::new()
        }
    }

    /// First class token on the rating marker other than the marker class itself
    fn extract_rating_word(&self, element: &ElementRef<'_>) -> String {
        element
            .select(&self.rating_selector)
            .next()
            .and_then(|rating| {
                rating
                    .value()
                    .classes()
                    .find(|class| *class != self.rating_marker_class)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| constants::NO_RATING.to_string())
    }
}

impl ContextualParser for ProductListParser {
    type Output = Vec<ListingEntry>;
    type Context = ParseContext;

    /// Parse every product block on the page, in page order.
    ///
    /// A page without product blocks yields [`ParsingError::EmptyPage`].
    /// Blocks without a usable link are skipped.
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let blocks: Vec<ElementRef<'_>> = html.select(&self.container_selector).collect();
        if blocks.is_empty() {
            return Err(ParsingError::EmptyPage {
                page_number: context.page_number,
            });
        }

        debug!("Found {} product blocks on page {}", blocks.len(), context.page_number);

        let mut entries = Vec::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            match self.extract_entry(block, &context.base_url) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(
                    "Skipping item {} on page {}: {}",
                    index, context.page_number, e
                ),
            }
        }

        Ok(entries)
    }
}

/// Join `href` onto `base_url` with standard URL-joining rules
pub fn resolve_url(href: &str, base_url: &str) -> ParsingResult<String> {
    let base = Url::parse(base_url).map_err(|e| ParsingError::UrlResolutionFailed {
        url: base_url.to_string(),
        reason: format!("Invalid base URL: {e}"),
        base_url: None,
    })?;

    base.join(href.trim())
        .map(String::from)
        .map_err(|e| ParsingError::UrlResolutionFailed {
            url: href.to_string(),
            reason: format!("Failed to join URL: {e}"),
            base_url: Some(base_url.to_string()),
        })
}
