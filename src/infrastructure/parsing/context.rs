//! Parsing context for HTML extraction

/// Context for a listing page
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Listing page number (1-based)
    pub page_number: u32,

    /// URL the page was fetched from; relative links resolve against it
    pub base_url: String,
}

impl ParseContext {
    pub fn new(page_number: u32, base_url: impl Into<String>) -> Self {
        Self {
            page_number,
            base_url: base_url.into(),
        }
    }
}

/// Context for an item detail page
#[derive(Debug, Clone)]
pub struct DetailParseContext {
    /// Detail page URL being parsed
    pub url: String,

    /// Listing page where this item was found
    pub source_page: Option<u32>,

    /// Index within that listing page
    pub source_index: Option<u32>,
}

impl DetailParseContext {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source_page: None,
            source_index: None,
        }
    }

    /// Set source information
    pub fn with_source(mut self, page_number: u32, index: u32) -> Self {
        self.source_page = Some(page_number);
        self.source_index = Some(index);
        self
    }
}
