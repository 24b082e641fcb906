//! Score calculation.

use crate::config::{ISSUE_SCORE_PENALTY, ITEM_SCORE_WEIGHT, MAX_SCORE, SCORE_BASELINE};

/// Computes the quality score from item and issue counts.
///
/// `raw = items * 20 + (100 - issues * 10)`, clamped to `[0, 100]`.
/// Non-decreasing in `item_count`, non-increasing in `issue_count`. Issue
/// severity is not taken into account.
pub fn score(item_count: usize, issue_count: usize) -> u8 {
    let items = i64::try_from(item_count).unwrap_or(i64::MAX);
    let issues = i64::try_from(issue_count).unwrap_or(i64::MAX);

    let raw = items
        .saturating_mul(ITEM_SCORE_WEIGHT)
        .saturating_add(SCORE_BASELINE.saturating_sub(issues.saturating_mul(ISSUE_SCORE_PENALTY)));

    // clamped into 0..=100, so the conversion cannot fail
    u8::try_from(raw.clamp(0, MAX_SCORE)).unwrap_or(0)
}
