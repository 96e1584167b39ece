//! Books catalogue scraper
//!
//! Walks the paginated listing of books.toscrape.com, enriches every item
//! from its detail page and writes the normalized table as CSV plus a
//! styled XLSX workbook.

pub mod application;
pub mod domain;
pub mod infrastructure;
