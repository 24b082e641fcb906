//! HTML parsing and structured-data extraction.
//!
//! This module wraps a lenient HTML parse into a queryable [`Document`] and
//! runs the three independent format extractors over it:
//! - JSON-LD (`<script type="application/ld+json">`)
//! - Microdata (`itemscope` / `itemtype`)
//! - RDFa (`typeof`)
//!
//! All queries are CSS selectors via the `scraper` crate. Extractors never
//! fail; malformed payloads degrade to [`Issue`](crate::models::Issue)s.

mod document;
mod json_ld;
mod microdata;
mod rdfa;

use crate::models::{ExtractedItem, Issue};

// Re-export public API
pub use document::Document;
pub use json_ld::extract_json_ld;
pub use microdata::extract_microdata;
pub use rdfa::extract_rdfa;

/// Items and issues produced by one extractor run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Items in document order
    pub items: Vec<ExtractedItem>,
    /// Issues in document order
    pub issues: Vec<Issue>,
}

impl Extraction {
    /// Appends another extraction, keeping order.
    pub fn append(&mut self, other: Extraction) {
        self.items.extend(other.items);
        self.issues.extend(other.issues);
    }
}

/// Runs every extractor over the document in fixed order: JSON-LD, Microdata, RDFa.
pub fn extract_all(document: &Document) -> Extraction {
    let mut extraction = extract_json_ld(document);
    extraction.append(extract_microdata(document));
    extraction.append(extract_rdfa(document));
    extraction
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
