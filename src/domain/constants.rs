//! Placeholder values written when a field cannot be extracted

/// Listing anchor without a `title` attribute
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Listing block without a rating marker
pub const NO_RATING: &str = "No Rating";

/// Detail page missing, unparseable or without a category crumb
pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub const NO_DESCRIPTION: &str = "No description available";
