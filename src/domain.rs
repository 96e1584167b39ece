//! Domain module - catalogue entities
//!
//! Plain data records shared by the parsers, the scrape driver and the
//! report writers.

pub mod constants;
pub mod item;

pub use item::{DetailFields, DetailOutcome, ItemRecord, ListingEntry, NormalizedItem};
