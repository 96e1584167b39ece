//! Infrastructure layer
//!
//! Configuration, logging, HTTP access, HTML parsing and report output.

pub mod config;
pub mod export;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod parsing_error;

pub use config::AppConfig;
pub use export::{ExportError, emit_reports};
pub use http_client::{FetchError, HttpClient, PageFetcher};
pub use parsing_error::{ParsingError, ParsingResult};
