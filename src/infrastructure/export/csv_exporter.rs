//! Delimited text reports
//!
//! The header row is always written, even for an empty table; rows follow
//! discovery order.

use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;

use super::ExportError;
use crate::domain::NormalizedItem;

pub const BASIC_HEADERS: [&str; 13] = [
    "Title",
    "Prices",
    "Rating",
    "Availability",
    "URL",
    "Category",
    "Description",
    "UPC",
    "Product Type",
    "Price (excl. tax)",
    "Price (incl. tax)",
    "Tax",
    "Number of Reviews",
];

pub const CLEAN_HEADERS: [&str; 8] = [
    "Title",
    "Price",
    "Rating",
    "Availability",
    "Category",
    "URL",
    "Price_raw",
    "Rating_word",
];

/// Raw listing text plus every detail field
#[derive(Serialize)]
struct BasicRow<'a> {
    title: &'a str,
    prices: &'a str,
    rating: &'a str,
    availability: &'a str,
    url: &'a str,
    category: &'a str,
    description: &'a str,
    upc: &'a str,
    product_type: &'a str,
    price_excl_tax: &'a str,
    price_incl_tax: &'a str,
    tax: &'a str,
    num_reviews: &'a str,
}

impl<'a> From<&'a NormalizedItem> for BasicRow<'a> {
    fn from(item: &'a NormalizedItem) -> Self {
        let record = &item.record;
        Self {
            title: &record.title,
            prices: &item.price_text,
            rating: &record.rating_word,
            availability: &record.availability,
            url: &record.url,
            category: &record.detail.category,
            description: &record.detail.description,
            upc: &record.detail.upc,
            product_type: &record.detail.product_type,
            price_excl_tax: &record.detail.price_excl_tax,
            price_incl_tax: &record.detail.price_incl_tax,
            tax: &record.detail.tax,
            num_reviews: &record.detail.num_reviews,
        }
    }
}

/// Typed columns followed by the raw helper columns
#[derive(Serialize)]
struct CleanRow<'a> {
    title: &'a str,
    /// Empty cell when missing
    price: Option<f64>,
    rating: u8,
    availability: &'a str,
    category: &'a str,
    url: &'a str,
    price_raw: &'a str,
    rating_word: &'a str,
}

impl<'a> From<&'a NormalizedItem> for CleanRow<'a> {
    fn from(item: &'a NormalizedItem) -> Self {
        let record = &item.record;
        Self {
            title: &record.title,
            price: item.price,
            rating: item.rating,
            availability: &item.availability,
            category: &record.detail.category,
            url: &record.url,
            price_raw: &item.price_raw,
            rating_word: &record.rating_word,
        }
    }
}

fn write_rows<R, I>(path: &Path, headers: &[&str], rows: I) -> Result<(), ExportError>
where
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Basic variant: `Title,Prices,Rating,...,Number of Reviews`
pub fn write_basic_csv(path: &Path, items: &[NormalizedItem]) -> Result<(), ExportError> {
    write_rows(path, &BASIC_HEADERS, items.iter().map(BasicRow::from))
}

/// Extended variant: `Title,Price,Rating,Availability,Category,URL,Price_raw,Rating_word`
pub fn write_clean_csv(path: &Path, items: &[NormalizedItem]) -> Result<(), ExportError> {
    write_rows(path, &CLEAN_HEADERS, items.iter().map(CleanRow::from))
}
