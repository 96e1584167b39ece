//! Catalogue walk
//!
//! Visits listing pages 1, 2, 3, ... in order, enriching every item before
//! moving on, until a page has no product blocks or a listing page fails.
//! The live site answers 404 for the page after the last one. Only one
//! request is ever in flight.

use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use super::enricher::DetailEnricher;
use super::politeness::{DelayPolicy, Pause};
use crate::domain::{ItemRecord, ListingEntry};
use crate::infrastructure::config::CatalogueConfig;
use crate::infrastructure::http_client::{FetchError, PageFetcher};
use crate::infrastructure::parsing::{ContextualParser, ParseContext, ParsingError, ProductListParser};

/// Why the walk ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Listing page without product blocks
    EmptyPage { page: u32 },
    ListingFetchFailed { page: u32, error: FetchError },
}

impl StopReason {
    /// True when the walk ran past the last listing page: an empty page, or
    /// a 404 for any page after the first
    pub fn is_catalogue_end(&self) -> bool {
        match self {
            Self::EmptyPage { .. } => true,
            Self::ListingFetchFailed { page, error } => is_past_last_page(*page, error),
        }
    }

    /// Page at which the walk stopped
    pub fn page(&self) -> u32 {
        match self {
            Self::EmptyPage { page } | Self::ListingFetchFailed { page, .. } => *page,
        }
    }
}

fn is_past_last_page(page: u32, error: &FetchError) -> bool {
    page > 1 && error.status() == Some(404)
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPage { page } => write!(f, "no items on page {page}"),
            Self::ListingFetchFailed { page, error } => write!(f, "page {page} fetch failed: {error}"),
        }
    }
}

/// Records collected by one walk, in discovery order
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    pub items: Vec<ItemRecord>,
    /// Listing pages whose items were processed
    pub pages_scraped: u32,
    pub stop_reason: StopReason,
}

impl ScrapeOutcome {
    pub fn enriched_count(&self) -> usize {
        self.items.iter().filter(|item| item.enriched).count()
    }

    pub fn unavailable_count(&self) -> usize {
        self.items.len() - self.enriched_count()
    }
}

pub struct PaginationDriver {
    fetcher: Arc<dyn PageFetcher>,
    delay: Arc<dyn DelayPolicy>,
    catalogue: CatalogueConfig,
    list_parser: ProductListParser,
    enricher: DetailEnricher,
}

impl PaginationDriver {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        delay: Arc<dyn DelayPolicy>,
        catalogue: CatalogueConfig,
        list_parser: ProductListParser,
        enricher: DetailEnricher,
    ) -> Self {
        Self {
            fetcher,
            delay,
            catalogue,
            list_parser,
            enricher,
        }
    }

    /// Walk the catalogue from page 1.
    ///
    /// Records gathered before a listing failure are kept in the outcome.
    pub async fn run(&self) -> ScrapeOutcome {
        let mut items = Vec::new();
        let mut pages_scraped = 0;
        let mut page_number = 1;

        let stop_reason = loop {
            let url = self.catalogue.listing_url(page_number);
            info!("Scraping page {}: {}", page_number, url);

            let body = match self.fetcher.fetch_text(&url).await {
                Ok(body) => body,
                Err(e) => {
                    if is_past_last_page(page_number, &e) {
                        info!("Page {} not found. Stopping.", page_number);
                    } else {
                        error!("Failed to scrape page {}: {}", page_number, e);
                    }
                    break StopReason::ListingFetchFailed { page: page_number, error: e };
                }
            };

            // Bad blocks are skipped by the parser; a page-level error means no blocks
            let entries = match self.parse_listing(&body, page_number, &url) {
                Ok(entries) => entries,
                Err(e) => {
                    info!("{}. Stopping.", e);
                    break StopReason::EmptyPage { page: page_number };
                }
            };

            info!("📦 Found {} items on page {}", entries.len(), page_number);

            for (index_in_page, entry) in (0..).zip(entries) {
                let outcome = self.enricher.enrich(&entry, page_number, index_in_page).await;
                items.push(ItemRecord::new(entry, outcome, page_number, index_in_page));
                self.delay.pause(Pause::AfterDetail).await;
            }

            pages_scraped += 1;
            self.delay.pause(Pause::AfterPage).await;
            page_number += 1;
        };

        ScrapeOutcome {
            items,
            pages_scraped,
            stop_reason,
        }
    }

    /// Parse HTML synchronously; the document is dropped before the next await
    fn parse_listing(&self, body: &str, page_number: u32, url: &str) -> Result<Vec<ListingEntry>, ParsingError> {
        self.list_parser.parse_str(body, &ParseContext::new(page_number, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_failed(page: u32, error: FetchError) -> StopReason {
        StopReason::ListingFetchFailed { page, error }
    }

    fn not_found(page: u32) -> FetchError {
        FetchError::HttpStatus {
            url: format!("https://books.toscrape.com/catalogue/page-{page}.html"),
            status: 404,
        }
    }

    #[test]
    fn empty_page_and_later_404_end_the_catalogue() {
        let empty = StopReason::EmptyPage { page: 51 };
        let past_last = fetch_failed(51, not_found(51));

        assert!(empty.is_catalogue_end());
        assert!(past_last.is_catalogue_end());
        assert_eq!(empty.page(), 51);
        assert_eq!(empty.to_string(), "no items on page 51");
        assert!(past_last.to_string().contains("status 404"));
    }

    #[test]
    fn other_listing_failures_are_not_the_catalogue_end() {
        let first_page_missing = fetch_failed(1, not_found(1));
        let unavailable = fetch_failed(
            7,
            FetchError::HttpStatus {
                url: "https://books.toscrape.com/catalogue/page-7.html".to_string(),
                status: 503,
            },
        );
        let timeout = fetch_failed(
            7,
            FetchError::Timeout {
                url: "https://books.toscrape.com/catalogue/page-7.html".to_string(),
            },
        );

        assert!(!first_page_missing.is_catalogue_end());
        assert!(!unavailable.is_catalogue_end());
        assert!(!timeout.is_catalogue_end());
        assert_eq!(timeout.page(), 7);
        assert!(timeout.to_string().starts_with("page 7 fetch failed"));
    }
}
