//! Parsing configuration for HTML extraction
//!
//! Centralized CSS selectors for the catalogue's listing and detail pages.

use serde::{Deserialize, Serialize};

/// Main parsing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsingConfig {
    pub product_list_selectors: ProductListSelectors,
    pub product_detail_selectors: ProductDetailSelectors,
}

/// CSS selectors for listing pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListSelectors {
    /// One match per item on the page
    pub product_container: String,

    /// Anchor carrying the `title` and `href` attributes, relative to the container
    pub product_link: String,

    pub price: String,
    pub availability: String,

    /// Element whose class list holds the rating word
    pub rating: String,

    /// Class shared by every rating marker; never the rating itself
    pub rating_marker_class: String,
}

impl Default for ProductListSelectors {
    fn default() -> Self {
        Self {
            product_container: "article.product_pod".to_string(),
            product_link: "h3 a".to_string(),
            price: "p.price_color".to_string(),
            availability: "p.instock.availability".to_string(),
            rating: "p.star-rating".to_string(),
            rating_marker_class: "star-rating".to_string(),
        }
    }
}

/// CSS selectors for detail pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailSelectors {
    /// Breadcrumb links; the third one names the category
    pub breadcrumb: String,

    /// Paragraph following the description marker
    pub description: String,

    /// Key/value product information table
    pub info_table: String,
    pub table_row: String,
    pub header_cell: String,
    pub data_cell: String,
}

impl Default for ProductDetailSelectors {
    fn default() -> Self {
        Self {
            breadcrumb: "ul.breadcrumb li a".to_string(),
            description: "#product_description ~ p".to_string(),
            info_table: "table".to_string(),
            table_row: "tr".to_string(),
            header_cell: "th".to_string(),
            data_cell: "td".to_string(),
        }
    }
}
