//! Issue statistics tracking.
//!
//! Thread-safe counters for issues observed across many analyses, used to
//! summarize a batch run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use crate::models::IssueKind;

/// Thread-safe per-kind issue tracker.
///
/// All kinds are initialized to zero on creation, so lookups never miss.
#[derive(Debug)]
pub struct IssueStats {
    counts: HashMap<IssueKind, AtomicUsize>,
}

impl IssueStats {
    /// Creates a tracker with every issue kind at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in IssueKind::iter() {
            counts.insert(kind, AtomicUsize::new(0));
        }
        IssueStats { counts }
    }

    /// Increment the counter for one issue kind.
    pub fn increment(&self, kind: IssueKind) {
        if let Some(counter) = self.counts.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment issue counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Current count for one issue kind.
    pub fn get_count(&self, kind: IssueKind) -> usize {
        self.counts
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum over all issue kinds.
    pub fn total(&self) -> usize {
        self.counts.values().map(|c| c.load(Ordering::Relaxed)).sum()
    }
}

impl Default for IssueStats {
    fn default() -> Self {
        Self::new()
    }
}
