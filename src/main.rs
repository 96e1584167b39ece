use anyhow::{Context, Result};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

use books_scraper_lib::application::{FixedDelay, RunReport, run_pipeline};
use books_scraper_lib::infrastructure::logging::{init_logging_with_config, shutdown_logging};
use books_scraper_lib::infrastructure::{AppConfig, HttpClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let config = AppConfig::default();
    init_logging_with_config(&config.logging)?;

    // Reports are written on every stop reason, so any completed run exits 0
    let exit = match run(&config).await {
        Ok(report) => {
            if report.stop_reason.is_catalogue_end() {
                info!("✅ All done, {} report files written", report.written.len());
            } else {
                warn!(
                    "Listing page {} could not be fetched; {} report files written with the {} items collected",
                    report.stop_reason.page(),
                    report.written.len(),
                    report.items.len()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            Err(e)
        }
    };

    shutdown_logging();
    exit
}

async fn run(config: &AppConfig) -> Result<RunReport> {
    let client = HttpClient::new(config.http.clone()).context("Failed to build HTTP client")?;
    let delay = FixedDelay::from_config(&config.politeness);

    run_pipeline(config, Arc::new(client), Arc::new(delay)).await
}
