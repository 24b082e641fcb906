//! RDFa extraction.

use log::debug;

use super::{Document, Extraction};
use crate::models::ExtractedItem;

/// Extracts RDFa items: one per element carrying `typeof`, typed with the raw
/// attribute value.
pub fn extract_rdfa(document: &Document) -> Extraction {
    let items = document
        .find_with_attribute("typeof")
        .into_iter()
        .filter_map(|element| element.value().attr("typeof"))
        .map(|type_of| {
            debug!("Found RDFa item of type {type_of}");
            ExtractedItem::Rdfa {
                schema_type: type_of.to_string(),
                valid: true,
            }
        })
        .collect();

    Extraction {
        items,
        issues: Vec::new(),
    }
}
