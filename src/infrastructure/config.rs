//! Configuration infrastructure
//!
//! The scraper has no config file, flags or environment settings: every
//! parameter is a constant in [`catalogue`] or [`defaults`], and
//! [`AppConfig::default`] assembles them. Tests build modified copies.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Catalogue site constants
pub mod catalogue {
    /// Page 1 of the listing lives at a different path than the rest
    pub const ENTRY_PAGE_URL: &str = "https://books.toscrape.com/index.html";

    /// Listing pages 2.. ; `{}` is replaced with the page number
    pub const PAGINATED_URL: &str = "https://books.toscrape.com/catalogue/page-{}.html";
}

/// Fixed runtime parameters
pub mod defaults {
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

    /// Pause after each detail-page fetch
    pub const DETAIL_DELAY_MS: u64 = 200;

    /// Pause after each processed listing page
    pub const PAGE_DELAY_MS: u64 = 800;

    pub const OUTPUT_DIR: &str = ".";
    pub const BASIC_CSV_FILE: &str = "books.csv";
    pub const CLEAN_CSV_FILE: &str = "books_clean.csv";
    pub const STYLED_XLSX_FILE: &str = "Books_Styled.xlsx";

    /// Extra characters added to the longest value when sizing XLSX columns
    pub const COLUMN_WIDTH_PADDING: usize = 2;

    pub const LOG_LEVEL: &str = "info";
    pub const LOG_DIR: &str = "logs";
    pub const LOG_FILE: &str = "books-scraper.log";
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalogue: CatalogueConfig,
    pub http: HttpClientConfig,
    pub politeness: PolitenessConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where the listing pages live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueConfig {
    pub entry_page_url: String,
    /// Template for pages 2.. with a `{}` placeholder
    pub paginated_url: String,
}

impl CatalogueConfig {
    /// URL of listing page `page_number` (1-based)
    pub fn listing_url(&self, page_number: u32) -> String {
        if page_number <= 1 {
            self.entry_page_url.clone()
        } else {
            self.paginated_url.replace("{}", &page_number.to_string())
        }
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            entry_page_url: catalogue::ENTRY_PAGE_URL.to_string(),
            paginated_url: catalogue::PAGINATED_URL.to_string(),
        }
    }
}

/// HTTP client behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    pub timeout_seconds: u64,
    /// Left unset: requests go out with the client's default headers only
    pub user_agent: Option<String>,
}

impl HttpClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: None,
        }
    }
}

/// Fixed pauses between outbound requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolitenessConfig {
    pub detail_delay_ms: u64,
    pub page_delay_ms: u64,
}

impl PolitenessConfig {
    /// No pauses at all
    pub fn disabled() -> Self {
        Self {
            detail_delay_ms: 0,
            page_delay_ms: 0,
        }
    }
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            detail_delay_ms: defaults::DETAIL_DELAY_MS,
            page_delay_ms: defaults::PAGE_DELAY_MS,
        }
    }
}

/// Report files; `None` skips that report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub basic_csv: Option<String>,
    pub clean_csv: Option<String>,
    pub styled_xlsx: Option<String>,
}

impl OutputConfig {
    /// Default file names inside `directory`
    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn basic_csv_path(&self) -> Option<PathBuf> {
        self.basic_csv.as_ref().map(|name| self.directory.join(name))
    }

    pub fn clean_csv_path(&self) -> Option<PathBuf> {
        self.clean_csv.as_ref().map(|name| self.directory.join(name))
    }

    pub fn styled_xlsx_path(&self) -> Option<PathBuf> {
        self.styled_xlsx.as_ref().map(|name| self.directory.join(name))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(defaults::OUTPUT_DIR),
            basic_csv: Some(defaults::BASIC_CSV_FILE.to_string()),
            clean_csv: Some(defaults::CLEAN_CSV_FILE.to_string()),
            styled_xlsx: Some(defaults::STYLED_XLSX_FILE.to_string()),
        }
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Console output carries the progress and warning lines
    pub console_output: bool,

    /// Also write to `directory/file_name`
    pub file_output: bool,

    /// JSON lines in the log file (console output stays plain)
    pub json_format: bool,

    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            console_output: true,
            file_output: false,
            json_format: false,
            directory: PathBuf::from(defaults::LOG_DIR),
            file_name: defaults::LOG_FILE.to_string(),
        }
    }
}
