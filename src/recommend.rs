//! Rule-based recommendations.
//!
//! Rules are independent predicate/message pairs evaluated in declaration
//! order. New rules are appended to [`RULES`].

use crate::models::{ExtractedItem, Issue, IssueKind, SchemaFormat};

/// Recommendation when nothing was found.
pub const ADD_SCHEMA_MARKUP: &str = "Add schema markup to improve SEO";
/// Recommendation when no JSON-LD block was found.
pub const USE_JSON_LD: &str = "Use JSON-LD format for better compatibility";
/// Recommendation when a JSON-LD block failed to parse.
pub const FIX_MALFORMED_JSON_LD: &str = "Fix invalid JSON-LD syntax so search engines can read it";
/// Fixed recommendation for a page that could not be fetched.
pub const ENSURE_URL_ACCESSIBLE: &str = "Ensure the URL is accessible and returns valid HTML";

struct Rule {
    applies: fn(&[ExtractedItem], &[Issue]) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        applies: no_items,
        message: ADD_SCHEMA_MARKUP,
    },
    Rule {
        applies: no_json_ld,
        message: USE_JSON_LD,
    },
    Rule {
        applies: has_malformed_json,
        message: FIX_MALFORMED_JSON_LD,
    },
];

fn no_items(items: &[ExtractedItem], _issues: &[Issue]) -> bool {
    items.is_empty()
}

fn no_json_ld(items: &[ExtractedItem], _issues: &[Issue]) -> bool {
    !items.iter().any(|i| i.format() == SchemaFormat::JsonLd)
}

fn has_malformed_json(_items: &[ExtractedItem], issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.kind == IssueKind::MalformedJson)
}

/// Evaluates every rule against the analysis state.
///
/// Output follows rule order and contains no duplicates.
pub fn recommend(items: &[ExtractedItem], issues: &[Issue]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();
    for rule in RULES {
        if (rule.applies)(items, issues) && !recommendations.iter().any(|r| r == rule.message) {
            recommendations.push(rule.message.to_string());
        }
    }
    recommendations
}
