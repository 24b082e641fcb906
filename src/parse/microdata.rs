//! Microdata extraction.

use log::debug;

use super::{Document, Extraction};
use crate::models::ExtractedItem;

/// Extracts Microdata items from a document.
///
/// Each `itemscope` element with a non-empty `itemtype` becomes one item whose
/// schema type is the last non-empty `/`-separated segment of `itemtype`.
/// Elements without `itemtype` are skipped silently.
pub fn extract_microdata(document: &Document) -> Extraction {
    let mut extraction = Extraction::default();

    for element in document.find_with_attribute("itemscope") {
        let item_type = match element.value().attr("itemtype").map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => continue,
        };

        let schema_type = last_path_segment(item_type);
        debug!("Found Microdata item of type {schema_type}");
        extraction.items.push(ExtractedItem::Microdata {
            schema_type: schema_type.to_string(),
            item_type: item_type.to_string(),
            valid: true,
        });
    }

    extraction
}

// Falls back to the whole value when it has no non-empty segment (e.g. "/").
fn last_path_segment(item_type: &str) -> &str {
    item_type
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(item_type)
}
