use std::collections::HashSet;

use crate::normalize::normalize;

/// Outcome of classifying a candidate batch against an existing list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    /// Candidates to add, display form preserved, first-appearance order.
    pub uniques: Vec<String>,
    /// Candidates rejected as duplicates, first-appearance order.
    pub duplicates: Vec<String>,
}

/// Classifies `candidates` against the items already in `existing`.
///
/// A candidate is a duplicate when its normalized key was already seen
/// earlier in the batch, or when an existing item carries the same key. The
/// first occurrence of a new key wins; later occurrences count as
/// duplicates even when the key is new to the list. `uniques` therefore
/// holds at most one candidate per key and none that `existing` already
/// covers, so appending it to a duplicate-free list keeps the list
/// duplicate-free.
pub fn partition(existing: &[String], candidates: &[String]) -> Partition {
    let existing_keys: HashSet<String> = existing.iter().map(|item| normalize(item)).collect();

    let mut batch_seen = HashSet::new();
    let mut result = Partition::default();
    for candidate in candidates {
        let key = normalize(candidate);
        if !batch_seen.insert(key.clone()) || existing_keys.contains(&key) {
            result.duplicates.push(candidate.clone());
        } else {
            result.uniques.push(candidate.clone());
        }
    }
    result
}

/// Collapses a candidate list against itself.
///
/// Each candidate is trimmed, empties are dropped, and only the first
/// occurrence per normalized key survives. Import files go through this
/// before [`partition`], so in-file repeats vanish without counting toward
/// the skipped total.
pub fn collapse(candidates: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for candidate in candidates {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(normalize(trimmed)) {
            result.push(trimmed.to_owned());
        }
    }
    result
}
