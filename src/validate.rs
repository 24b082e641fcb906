//! Validation of extracted items.
//!
//! Folds the issues found during extraction into the final issue list. No
//! cross-item or ontology checks run here yet; they belong in this module so
//! the extractors stay untouched.

use log::debug;

use crate::models::{ExtractedItem, Issue};

/// Returns the issue list for an analysis, in discovery order.
pub fn validate(items: &[ExtractedItem], extraction_issues: Vec<Issue>) -> Vec<Issue> {
    debug!(
        "Validating {} item(s) with {} extraction issue(s)",
        items.len(),
        extraction_issues.len()
    );
    extraction_issues
}
