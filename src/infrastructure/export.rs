//! Report output
//!
//! Writes the normalized table as the basic CSV, the clean CSV and the
//! styled workbook, each only when [`OutputConfig`] names a file for it.

pub mod csv_exporter;
pub mod xlsx_report;

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::domain::NormalizedItem;
use crate::infrastructure::config::OutputConfig;

pub use csv_exporter::{BASIC_HEADERS, CLEAN_HEADERS, write_basic_csv, write_clean_csv};
pub use xlsx_report::{DATA_HEADERS, column_widths, write_styled_workbook};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error writing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Too many rows for a worksheet: {rows}")]
    TooManyRows { rows: usize },
}

/// Write every configured report and return the paths written
pub fn emit_reports(
    output: &OutputConfig,
    items: &[NormalizedItem],
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(&output.directory).map_err(|source| ExportError::Io {
        path: output.directory.clone(),
        source,
    })?;

    let mut written = Vec::new();

    if let Some(path) = output.basic_csv_path() {
        write_basic_csv(&path, items)?;
        info!("Saved scraped data to {}", path.display());
        written.push(path);
    }

    if let Some(path) = output.clean_csv_path() {
        write_clean_csv(&path, items)?;
        info!("Saved {}", path.display());
        written.push(path);
    }

    if let Some(path) = output.styled_xlsx_path() {
        write_styled_workbook(&path, items, generated_at)?;
        info!("Saved styled Excel as {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_reports_without_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            directory: dir.path().join("reports"),
            basic_csv: None,
            clean_csv: Some("clean.csv".to_string()),
            styled_xlsx: None,
        };

        let written = emit_reports(&output, &[], Utc::now()).unwrap();

        assert_eq!(written, vec![dir.path().join("reports").join("clean.csv")]);
        assert!(!dir.path().join("reports").join("books.csv").exists());
    }
}
