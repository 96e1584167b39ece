//! HTML parsing for catalogue listing and detail pages
//!
//! Parsers compile their CSS selectors once and are then applied to
//! `scraper::Html` documents together with a context describing where the
//! document came from.

pub mod config;
pub mod context;
pub mod product_detail_parser;
pub mod product_list_parser;

pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
pub use config::{ParsingConfig, ProductDetailSelectors, ProductListSelectors};
pub use context::{DetailParseContext, ParseContext};
pub use product_detail_parser::ProductDetailParser;
pub use product_list_parser::ProductListParser;

use scraper::{ElementRef, Html, Selector};

/// Parser that needs to know where the document came from
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse HTML with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;

    /// Parse raw markup; the document is dropped before returning
    fn parse_str(&self, markup: &str, context: &Self::Context) -> ParsingResult<Self::Output> {
        let html = Html::parse_document(markup);
        self.parse_with_context(&html, context)
    }
}

pub(crate) fn compile_selector(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, &e.to_string()))
}

/// Concatenated, trimmed text content of an element
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
