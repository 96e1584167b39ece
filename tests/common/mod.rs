//! Shared helpers for pipeline integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use books_scraper_lib::application::{DelayPolicy, Pause};
use books_scraper_lib::infrastructure::config::{AppConfig, OutputConfig};
use books_scraper_lib::infrastructure::{FetchError, PageFetcher};

pub const INDEX_URL: &str = "https://books.toscrape.com/index.html";
pub const PAGE_2_URL: &str = "https://books.toscrape.com/catalogue/page-2.html";
pub const PAGE_3_URL: &str = "https://books.toscrape.com/catalogue/page-3.html";
pub const PAGE_4_URL: &str = "https://books.toscrape.com/catalogue/page-4.html";

pub const LISTING_INDEX: &str = include_str!("../fixtures/listing_index.html");
pub const LISTING_PAGE_2: &str = include_str!("../fixtures/listing_page_2.html");
pub const LISTING_EMPTY: &str = include_str!("../fixtures/listing_empty.html");
pub const DETAIL_ATTIC: &str = include_str!("../fixtures/detail_a_light_in_the_attic.html");

/// Detail URLs of the five fixture items, in listing order
pub const DETAIL_URLS: [&str; 5] = [
    "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html",
    "https://books.toscrape.com/catalogue/tipping-the-velvet_999/index.html",
    "https://books.toscrape.com/catalogue/soumission_998/index.html",
    "https://books.toscrape.com/catalogue/sharp-objects_997/index.html",
    "https://books.toscrape.com/catalogue/sapiens-a-brief-history-of-humankind_996/index.html",
];

/// In-memory fetcher; unknown URLs answer 404
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, Result<String, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_error(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    /// Every URL requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses.get(url).cloned().unwrap_or_else(|| {
            Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
        })
    }
}

/// Counts pauses instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pauses: Mutex<Vec<Pause>>,
}

impl RecordingDelay {
    pub fn count(&self, pause: Pause) -> usize {
        self.pauses.lock().unwrap().iter().filter(|p| **p == pause).count()
    }
}

#[async_trait]
impl DelayPolicy for RecordingDelay {
    async fn pause(&self, pause: Pause) {
        self.pauses.lock().unwrap().push(pause);
    }
}

/// Minimal detail page with a breadcrumb and a full information table
pub fn detail_page(category: &str, upc: &str) -> String {
    format!(
        r#"<html><body>
        <ul class="breadcrumb">
          <li><a href="../../index.html">Home</a></li>
          <li><a href="../category/books_1/index.html">Books</a></li>
          <li><a href="../category/books/x/index.html">{category}</a></li>
        </ul>
        <div id="product_description" class="sub-header"><h2>Product Description</h2></div>
        <p>About {upc}.</p>
        <table class="table table-striped">
          <tr><th>UPC</th><td>{upc}</td></tr>
          <tr><th>Product Type</th><td>Books</td></tr>
          <tr><th>Price (excl. tax)</th><td>£10.00</td></tr>
          <tr><th>Price (incl. tax)</th><td>£10.00</td></tr>
          <tr><th>Tax</th><td>£0.00</td></tr>
          <tr><th>Availability</th><td>In stock (5 available)</td></tr>
          <tr><th>Number of reviews</th><td>3</td></tr>
        </table>
        </body></html>"#
    )
}

/// Two full listing pages, then an empty one; every detail page present
pub fn full_catalogue() -> MockFetcher {
    MockFetcher::new()
        .with_page(INDEX_URL, LISTING_INDEX)
        .with_page(PAGE_2_URL, LISTING_PAGE_2)
        .with_page(PAGE_3_URL, LISTING_EMPTY)
        .with_page(DETAIL_URLS[0], DETAIL_ATTIC)
        .with_page(DETAIL_URLS[1], &detail_page("Historical Fiction", "90fa61229261140a"))
        .with_page(DETAIL_URLS[2], &detail_page("Fiction", "6957f44c3847a760"))
        .with_page(DETAIL_URLS[3], &detail_page("Mystery", "e00eb4fd7b871a48"))
        .with_page(DETAIL_URLS[4], &detail_page("History", "4165285e1663650f"))
}

/// Default configuration writing every report into `dir`
pub fn config_in(dir: &Path) -> AppConfig {
    AppConfig {
        output: OutputConfig::in_directory(dir),
        ..AppConfig::default()
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
