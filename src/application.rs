//! Application layer
//!
//! Orchestrates the catalogue walk: pacing, detail enrichment, pagination,
//! normalisation and the end-to-end run.

pub mod enricher;
pub mod normalizer;
pub mod pagination;
pub mod politeness;
pub mod runner;

pub use enricher::{DetailEnricher, EnrichError};
pub use normalizer::normalize;
pub use pagination::{PaginationDriver, ScrapeOutcome, StopReason};
pub use politeness::{DelayPolicy, FixedDelay, NoDelay, Pause};
pub use runner::{RunReport, run_pipeline};
