// Parse module tests.

use super::*;
use crate::models::{IssueKind, SchemaFormat, Severity};
use serde_json::json;

#[test]
fn test_extract_json_ld_single_block() {
    let html = r#"
        <html>
            <head>
                <script type="application/ld+json">
                    {"@type": "Product", "name": "X"}
                </script>
            </head>
        </html>
    "#;
    let extraction = extract_json_ld(&Document::parse(html));
    assert!(extraction.issues.is_empty());
    assert_eq!(
        extraction.items,
        vec![ExtractedItem::JsonLd {
            schema_type: "Product".into(),
            data: json!({"@type": "Product", "name": "X"}),
            valid: true,
        }]
    );
}

#[test]
fn test_extract_json_ld_malformed() {
    let html = r#"<script type="application/ld+json">{"@type":</script>"#;
    let extraction = extract_json_ld(&Document::parse(html));
    assert!(extraction.items.is_empty());
    assert_eq!(extraction.issues.len(), 1);
    assert_eq!(extraction.issues[0].kind, IssueKind::MalformedJson);
    assert_eq!(extraction.issues[0].severity, Severity::High);
}

#[test]
fn test_extract_json_ld_empty_script_is_malformed() {
    let html = r#"<script type="application/ld+json"></script>"#;
    let extraction = extract_json_ld(&Document::parse(html));
    assert!(extraction.items.is_empty());
    assert_eq!(extraction.issues.len(), 1);
}

#[test]
fn test_extract_json_ld_keeps_document_order_around_failures() {
    let html = r#"
        <script type="application/ld+json">{"@type": "Organization"}</script>
        <script type="application/ld+json">not json</script>
        <script type="application/ld+json">{"@type": "WebSite"}</script>
    "#;
    let extraction = extract_json_ld(&Document::parse(html));
    let types: Vec<_> = extraction.items.iter().map(|i| i.schema_type()).collect();
    assert_eq!(types, vec!["Organization", "WebSite"]);
    assert_eq!(extraction.issues.len(), 1);
}

#[test]
fn test_extract_json_ld_single_quotes_and_case() {
    let html = r#"<script TYPE='APPLICATION/LD+JSON'>{"@type": "WebPage"}</script>"#;
    let extraction = extract_json_ld(&Document::parse(html));
    assert_eq!(extraction.items.len(), 1);
    assert_eq!(extraction.items[0].schema_type(), "WebPage");
}

#[test]
fn test_extract_json_ld_ignores_other_scripts() {
    let html = r#"
        <script type="application/json">{"@type": "Product"}</script>
        <script>var x = 1;</script>
    "#;
    let extraction = extract_json_ld(&Document::parse(html));
    assert!(extraction.items.is_empty());
    assert!(extraction.issues.is_empty());
}

#[test]
fn test_extract_json_ld_top_level_array_is_one_item() {
    let html = r#"<script type="application/ld+json">[{"@type": "WebPage"}, {"@type": "Organization"}]</script>"#;
    let extraction = extract_json_ld(&Document::parse(html));
    assert_eq!(extraction.items.len(), 1);
    assert_eq!(extraction.items[0].schema_type(), "Unknown");
    assert!(extraction.items[0].payload().is_some_and(|v| v.is_array()));
}

#[test]
fn test_extract_microdata_person() {
    let html = r#"<div itemscope itemtype="https://schema.org/Person"><span itemprop="name">Ada</span></div>"#;
    let extraction = extract_microdata(&Document::parse(html));
    assert_eq!(extraction.items.len(), 1);
    let item = &extraction.items[0];
    assert_eq!(item.format(), SchemaFormat::Microdata);
    assert_eq!(item.schema_type(), "Person");
    assert!(item.is_valid());
    assert!(item.payload().is_none());
}

#[test]
fn test_extract_microdata_skips_missing_itemtype() {
    let html = r#"
        <div itemscope><span itemprop="name">No type</span></div>
        <div itemscope itemtype=""></div>
        <div itemscope itemtype="http://schema.org/Offer"></div>
    "#;
    let extraction = extract_microdata(&Document::parse(html));
    assert_eq!(extraction.items.len(), 1);
    assert_eq!(extraction.items[0].schema_type(), "Offer");
    assert!(extraction.issues.is_empty());
}

#[test]
fn test_extract_microdata_nested_scopes() {
    let html = r#"
        <div itemscope itemtype="https://schema.org/Product">
            <div itemprop="offers" itemscope itemtype="https://schema.org/Offer"></div>
        </div>
    "#;
    let extraction = extract_microdata(&Document::parse(html));
    let types: Vec<_> = extraction.items.iter().map(|i| i.schema_type()).collect();
    assert_eq!(types, vec!["Product", "Offer"]);
}

#[test]
fn test_extract_rdfa_raw_value() {
    let html = r#"<div vocab="https://schema.org/" typeof="schema:Event"><span property="name">Gig</span></div>"#;
    let extraction = extract_rdfa(&Document::parse(html));
    assert_eq!(extraction.items.len(), 1);
    assert_eq!(extraction.items[0].schema_type(), "schema:Event");
    assert_eq!(extraction.items[0].format(), SchemaFormat::Rdfa);
}

#[test]
fn test_extract_all_runs_in_format_order() {
    let html = r#"
        <div typeof="Place"></div>
        <div itemscope itemtype="https://schema.org/Person"></div>
        <script type="application/ld+json">{"@type": "Article"}</script>
    "#;
    let extraction = extract_all(&Document::parse(html));
    let formats: Vec<_> = extraction.items.iter().map(|i| i.format()).collect();
    assert_eq!(
        formats,
        vec![SchemaFormat::JsonLd, SchemaFormat::Microdata, SchemaFormat::Rdfa]
    );
}

#[test]
fn test_malformed_json_ld_does_not_affect_other_formats() {
    let html = r#"
        <script type="application/ld+json">{broken</script>
        <div itemscope itemtype="https://schema.org/Person"></div>
        <span typeof="Thing"></span>
    "#;
    let extraction = extract_all(&Document::parse(html));
    assert_eq!(extraction.items.len(), 2);
    assert_eq!(extraction.issues.len(), 1);
}

#[test]
fn test_extract_all_empty() {
    let extraction = extract_all(&Document::parse("<html><body>No structured data</body></html>"));
    assert_eq!(extraction, Extraction::default());
}
