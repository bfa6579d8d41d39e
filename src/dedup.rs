//! Run-wide deduplication of entries across categories.

use std::collections::HashSet;

/// Set of every entry seen so far in this run.
///
/// Shared by all category processing: an entry is attributed to the first
/// category that discovers it and suppressed everywhere after that. The set
/// only grows and lives for exactly one run; nothing is persisted.
///
/// Because attribution is first-seen, the final contents of each category's
/// output depend on the order categories (and sources within them) are
/// merged. That order dependence is part of the contract, not an accident.
#[derive(Debug, Default)]
pub struct DedupSet {
    seen: HashSet<String>,
}

impl DedupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry if absent. Returns true when the entry was novel.
    pub fn insert(&mut self, entry: &str) -> bool {
        if self.seen.contains(entry) {
            false
        } else {
            self.seen.insert(entry.to_string());
            true
        }
    }

    /// Total unique entries seen across all categories so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.seen.contains(entry)
    }
}
