//! Product detail parser
//!
//! Reads the category from the breadcrumb trail, the description paragraph
//! and the key/value product information table of an item detail page.

use scraper::{Html, Selector};
use std::collections::HashMap;
use tracing::debug;

use super::config::ProductDetailSelectors;
use super::{ContextualParser, DetailParseContext, ParsingError, ParsingResult, compile_selector, element_text};
use crate::domain::DetailFields;
use crate::domain::constants;

/// Breadcrumb position holding the category (Home > Books > Category)
const CATEGORY_CRUMB_INDEX: usize = 2;

/// Information table headers, matched exactly
pub mod table_keys {
    pub const UPC: &str = "UPC";
    pub const PRODUCT_TYPE: &str = "Product Type";
    pub const PRICE_EXCL_TAX: &str = "Price (excl. tax)";
    pub const PRICE_INCL_TAX: &str = "Price (incl. tax)";
    pub const TAX: &str = "Tax";
    pub const NUM_REVIEWS: &str = "Number of reviews";
}

/// Parser for item detail pages
pub struct ProductDetailParser {
    breadcrumb_selector: Selector,
    description_selector: Selector,
    info_table_selector: Selector,
    row_selector: Selector,
    header_selector: Selector,
    data_selector: Selector,
}

impl ProductDetailParser {
    /// Create a new product detail parser with default configuration
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ProductDetailSelectors::default())
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &ProductDetailSelectors) -> ParsingResult<Self> {
        Ok(Self {
            breadcrumb_selector: compile_selector(&selectors.breadcrumb)?,
            description_selector: compile_selector(&selectors.description)?,
            info_table_selector: compile_selector(&selectors.info_table)?,
            row_selector: compile_selector(&selectors.table_row)?,
            header_selector: compile_selector(&selectors.header_cell)?,
            data_selector: compile_selector(&selectors.data_cell)?,
        })
    }

    fn extract_category(&self, html: &Html) -> String {
        html.select(&self.breadcrumb_selector)
            .nth(CATEGORY_CRUMB_INDEX)
            .map(|crumb| element_text(&crumb))
            .unwrap_or_else(|| constants::UNKNOWN_CATEGORY.to_string())
    }

    fn extract_description(&self, html: &Html) -> String {
        html.select(&self.description_selector)
            .next()
            .map(|paragraph| element_text(&paragraph))
            .unwrap_or_else(|| constants::NO_DESCRIPTION.to_string())
    }

    /// Header text -> value text for every row with both cells
    fn extract_info_table(&self, html: &Html) -> Option<HashMap<String, String>> {
        let table = html.select(&self.info_table_selector).next()?;

        let data = table
            .select(&self.row_selector)
            .filter_map(|row| {
                let key = row.select(&self.header_selector).next()?;
                let value = row.select(&self.data_selector).next()?;
                Some((element_text(&key), element_text(&value)))
            })
            .collect();

        Some(data)
    }
}

impl ContextualParser for ProductDetailParser {
    type Output = DetailFields;
    type Context = DetailParseContext;

    /// A page without an information table is treated as unparseable
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        debug!(
            "Parsing product detail from: {} (page {:?}, item {:?})",
            context.url, context.source_page, context.source_index
        );

        let table = self.extract_info_table(html).ok_or_else(|| {
            ParsingError::required_field_missing("product information table", Some(context.url.as_str()))
        })?;
        let field = |key: &str| table.get(key).cloned().unwrap_or_default();

        Ok(DetailFields {
            category: self.extract_category(html),
            description: self.extract_description(html),
            upc: field(table_keys::UPC),
            product_type: field(table_keys::PRODUCT_TYPE),
            price_excl_tax: field(table_keys::PRICE_EXCL_TAX),
            price_incl_tax: field(table_keys::PRICE_INCL_TAX),
            tax: field(table_keys::TAX),
            num_reviews: field(table_keys::NUM_REVIEWS),
        })
    }
}
