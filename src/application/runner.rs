//! End-to-end run: walk, normalise, emit

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::enricher::DetailEnricher;
use super::normalizer::normalize;
use super::pagination::{PaginationDriver, StopReason};
use super::politeness::DelayPolicy;
use crate::domain::NormalizedItem;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::export::emit_reports;
use crate::infrastructure::http_client::PageFetcher;
use crate::infrastructure::parsing::{ParsingConfig, ProductDetailParser, ProductListParser};

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub items: Vec<NormalizedItem>,
    pub pages_scraped: u32,
    pub enriched: usize,
    pub unavailable: usize,
    pub stop_reason: StopReason,
    /// Report files written, in emission order
    pub written: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Build the pipeline from `config` and run it once.
///
/// Listing failures end the walk but the records gathered so far are still
/// written; only report output errors are returned as `Err`.
pub async fn run_pipeline(
    config: &AppConfig,
    fetcher: Arc<dyn PageFetcher>,
    delay: Arc<dyn DelayPolicy>,
) -> Result<RunReport> {
    let started = Instant::now();
    if let Ok(json) = serde_json::to_string(config) {
        debug!("Effective configuration: {}", json);
    }

    let parsing = ParsingConfig::default();
    let list_parser = ProductListParser::with_config(&parsing.product_list_selectors)
        .context("Failed to build listing parser")?;
    let detail_parser = ProductDetailParser::with_config(&parsing.product_detail_selectors)
        .context("Failed to build detail parser")?;

    let enricher = DetailEnricher::new(Arc::clone(&fetcher), detail_parser);
    let driver = PaginationDriver::new(fetcher, delay, config.catalogue.clone(), list_parser, enricher);

    info!("🚀 Starting scrape...");
    let outcome = driver.run().await;
    let enriched = outcome.enriched_count();
    let unavailable = outcome.unavailable_count();
    info!("Scrape finished. Normalizing {} records...", outcome.items.len());

    let items = normalize(outcome.items);
    let written = emit_reports(&config.output, &items, Utc::now()).context("Failed to write reports")?;

    let report = RunReport {
        items,
        pages_scraped: outcome.pages_scraped,
        enriched,
        unavailable,
        stop_reason: outcome.stop_reason,
        written,
        elapsed: started.elapsed(),
    };

    let summary = format!(
        "📊 Run summary: {} pages, {} items ({} enriched, {} unavailable), stopped: {}, elapsed {:.2}s",
        report.pages_scraped,
        report.items.len(),
        report.enriched,
        report.unavailable,
        report.stop_reason,
        report.elapsed.as_secs_f64()
    );
    if report.stop_reason.is_catalogue_end() {
        info!("{}", summary);
    } else {
        warn!("{}", summary);
    }

    Ok(report)
}
