//! JSON-LD extraction.

use log::{debug, warn};
use serde_json::Value;

use super::{Document, Extraction};
use crate::models::{ExtractedItem, Issue};

const JSON_LD_MIME: &str = "application/ld+json";
const UNKNOWN_TYPE: &str = "Unknown";

/// Extracts JSON-LD blocks from a document.
///
/// Every `<script>` whose `type` essence is `application/ld+json` (case-insensitive,
/// parameters after `;` ignored) is parsed as one JSON value. A block that fails
/// to parse yields one `malformed-json` issue and no item.
pub fn extract_json_ld(document: &Document) -> Extraction {
    let mut extraction = Extraction::default();

    for script in document.find_tag_with_attribute("script", "type") {
        let is_json_ld = script
            .value()
            .attr("type")
            .is_some_and(is_json_ld_type);
        if !is_json_ld {
            continue;
        }

        let text: String = script.text().collect();
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(data) => {
                let schema_type = declared_type(&data);
                debug!("Found JSON-LD item of type {schema_type}");
                extraction.items.push(ExtractedItem::JsonLd {
                    schema_type,
                    data,
                    valid: true,
                });
            }
            Err(e) => {
                warn!("Skipping malformed JSON-LD block: {e}");
                extraction.issues.push(Issue::malformed_json(e));
            }
        }
    }

    extraction
}

fn is_json_ld_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(JSON_LD_MIME))
        .unwrap_or(false)
}

/// `@type` of the top-level object: a string as-is, an array of strings joined
/// with `", "`, anything else `"Unknown"`.
fn declared_type(data: &Value) -> String {
    match data.get("@type") {
        Some(Value::String(t)) => t.clone(),
        Some(Value::Array(types)) => {
            let names: Vec<&str> = types.iter().filter_map(Value::as_str).collect();
            if names.is_empty() {
                UNKNOWN_TYPE.to_string()
            } else {
                names.join(", ")
            }
        }
        _ => UNKNOWN_TYPE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declared_type_string() {
        assert_eq!(declared_type(&json!({"@type": "Product"})), "Product");
    }

    #[test]
    fn test_declared_type_array() {
        assert_eq!(
            declared_type(&json!({"@type": ["WebPage", "Article"]})),
            "WebPage, Article"
        );
    }

    #[test]
    fn test_declared_type_missing_or_odd() {
        assert_eq!(declared_type(&json!({"name": "x"})), "Unknown");
        assert_eq!(declared_type(&json!({"@type": 5})), "Unknown");
        assert_eq!(declared_type(&json!([{"@type": "Product"}])), "Unknown");
        assert_eq!(declared_type(&json!("text")), "Unknown");
    }

    #[test]
    fn test_is_json_ld_type() {
        assert!(is_json_ld_type("application/ld+json"));
        assert!(is_json_ld_type("APPLICATION/LD+JSON"));
        assert!(is_json_ld_type(" application/ld+json; charset=utf-8"));
        assert!(!is_json_ld_type("application/json"));
        assert!(!is_json_ld_type("text/javascript"));
    }
}
