//! Detail-page enrichment
//!
//! Fetches one item's detail page and extracts its secondary fields. Every
//! failure is absorbed here: the caller always gets a [`DetailOutcome`] and
//! the walk continues.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{DetailFields, DetailOutcome, ListingEntry};
use crate::infrastructure::http_client::{FetchError, PageFetcher};
use crate::infrastructure::parsing::{ContextualParser, DetailParseContext, ParsingError, ProductDetailParser};

/// Why a detail page yielded no fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParsingError),
}

pub struct DetailEnricher {
    fetcher: Arc<dyn PageFetcher>,
    parser: ProductDetailParser,
}

impl DetailEnricher {
    pub fn new(fetcher: Arc<dyn PageFetcher>, parser: ProductDetailParser) -> Self {
        Self { fetcher, parser }
    }

    /// Enrich one listing entry; never fails
    pub async fn enrich(&self, entry: &ListingEntry, page_number: u32, index_in_page: u32) -> DetailOutcome {
        match self.fetch_details(entry, page_number, index_in_page).await {
            Ok(fields) => {
                debug!("Enriched '{}' (page {}, item {})", entry.title, page_number, index_in_page);
                DetailOutcome::Enriched(fields)
            }
            Err(e) => {
                warn!("Couldn't fetch details for '{}': {}", entry.title, e);
                DetailOutcome::Unavailable { reason: e.to_string() }
            }
        }
    }

    async fn fetch_details(
        &self,
        entry: &ListingEntry,
        page_number: u32,
        index_in_page: u32,
    ) -> Result<DetailFields, EnrichError> {
        let body = self.fetcher.fetch_text(&entry.url).await?;

        // Parse HTML synchronously; the document must not be held across an await
        let context = DetailParseContext::new(entry.url.as_str()).with_source(page_number, index_in_page);
        let fields = self.parser.parse_str(&body, &context)?;
        Ok(fields)
    }
}
