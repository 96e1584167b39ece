//! Normalisation of scraped records
//!
//! Derives the typed columns (numeric price, integer rating, single-line
//! availability) from the raw listing text. Raw values stay on the record.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{ItemRecord, NormalizedItem};

/// Mis-decoded byte that shows up in front of the pound sign
const ENCODING_ARTIFACT: char = '\u{00C2}';
const CURRENCY_SYMBOL: char = '£';
const NO_BREAK_SPACE: char = '\u{00A0}';
const THOUSANDS_SEPARATOR: char = ',';

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").expect("hardcoded regex pattern is valid"));

/// Listing price with encoding artifacts removed, currency kept
pub fn strip_encoding_artifacts(text: &str) -> String {
    text.replace(ENCODING_ARTIFACT, "")
}

/// Listing price without artifacts or currency symbol
pub fn price_raw_display(text: &str) -> String {
    text.chars()
        .filter(|c| *c != ENCODING_ARTIFACT && *c != CURRENCY_SYMBOL)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Numeric price, or `None` when the cleaned text is not a finite number
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(*c, ENCODING_ARTIFACT | CURRENCY_SYMBOL | NO_BREAK_SPACE | THOUSANDS_SEPARATOR))
        .collect();

    cleaned.trim().parse::<f64>().ok().filter(|price| price.is_finite())
}

/// `One`..`Five` map to 1..5; anything else is 0
pub fn rating_from_word(word: &str) -> u8 {
    match word {
        "One" => 1,
        "Two" => 2,
        "Three" => 3,
        "Four" => 4,
        "Five" => 5,
        _ => 0,
    }
}

/// Collapse each run of line breaks to one space, then trim
pub fn normalize_availability(text: &str) -> String {
    LINE_BREAKS.replace_all(text, " ").trim().to_string()
}

pub fn normalize_item(record: ItemRecord) -> NormalizedItem {
    NormalizedItem {
        price: parse_price(&record.price_raw),
        rating: rating_from_word(&record.rating_word),
        availability: normalize_availability(&record.availability),
        price_text: strip_encoding_artifacts(&record.price_raw),
        price_raw: price_raw_display(&record.price_raw),
        record,
    }
}

/// Normalise every record, keeping discovery order
pub fn normalize(records: Vec<ItemRecord>) -> Vec<NormalizedItem> {
    records.into_iter().map(normalize_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DetailFields;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("£51.77", Some(51.77))]
    #[case("Â£51.77", Some(51.77))]
    #[case(" £1,234.50 ", Some(1234.5))]
    #[case("£\u{a0}12.00", Some(12.0))]
    #[case("51", Some(51.0))]
    #[case("", None)]
    #[case("£", None)]
    #[case("free", None)]
    #[case("NaN", None)]
    #[case("£inf", None)]
    fn parses_prices(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_price(text), expected);
    }

    #[rstest]
    #[case("One", 1)]
    #[case("Two", 2)]
    #[case("Three", 3)]
    #[case("Four", 4)]
    #[case("Five", 5)]
    #[case("No Rating", 0)]
    #[case("five", 0)]
    #[case("", 0)]
    fn maps_rating_words(#[case] word: &str, #[case] expected: u8) {
        assert_eq!(rating_from_word(word), expected);
    }

    #[rstest]
    #[case("In stock", "In stock")]
    #[case("\n\n    In stock\n\n", "In stock")]
    #[case("In\r\nstock", "In stock")]
    #[case("In\n\nstock (22 available)", "In stock (22 available)")]
    fn normalizes_availability(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(normalize_availability(text), expected);
    }

    #[test]
    fn price_columns_drop_artifacts() {
        assert_eq!(strip_encoding_artifacts("Â£51.77"), "£51.77");
        assert_eq!(price_raw_display("Â£51.77"), "51.77");
        assert_eq!(price_raw_display("£1,234.50"), "1,234.50");
    }

    #[test]
    fn normalize_keeps_order_and_raw_values() {
        let record = |title: &str, price: &str, rating: &str| ItemRecord {
            title: title.to_string(),
            price_raw: price.to_string(),
            rating_word: rating.to_string(),
            availability: "\nIn stock\n".to_string(),
            url: format!("https://books.toscrape.com/catalogue/{title}/index.html"),
            detail: DetailFields::unavailable(),
            page_number: 1,
            index_in_page: 0,
            enriched: false,
        };

        let items = normalize(vec![record("a", "Â£10.00", "Two"), record("b", "broken", "Zero")]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].record.title, "a");
        assert_eq!(items[0].price, Some(10.0));
        assert_eq!(items[0].rating, 2);
        assert_eq!(items[0].availability, "In stock");
        assert_eq!(items[0].record.availability, "\nIn stock\n");
        assert_eq!(items[0].price_text, "£10.00");
        assert_eq!(items[1].price, None);
        assert_eq!(items[1].rating, 0);
        assert_eq!(items[1].record.price_raw, "broken");
    }

    proptest! {
        #[test]
        fn rating_is_always_in_range(word in ".*") {
            prop_assert!(rating_from_word(&word) <= 5);
        }

        #[test]
        fn availability_is_single_line_and_trimmed(text in "[ a-zA-Z()0-9\r\n]*") {
            let normalized = normalize_availability(&text);
            prop_assert!(!normalized.contains('\n'));
            prop_assert!(!normalized.contains('\r'));
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }

        #[test]
        fn formatted_prices_parse_back(pence in 0u32..10_000_000) {
            let text = format!("Â£{}.{:02}", pence / 100, pence % 100);
            let parsed = parse_price(&text).unwrap();
            prop_assert!((parsed - f64::from(pence) / 100.0).abs() < 1e-9);
        }

        #[test]
        fn parsed_prices_are_finite(text in "\\PC*") {
            if let Some(price) = parse_price(&text) {
                prop_assert!(price.is_finite());
            }
        }
    }
}
