//! Violation deduplication keyed on (result id, rule).

use rustc_hash::FxHashSet;

use labqc_core::{Violation, WestgardRule};

/// Collapse violations sharing a (result id, rule) key, keeping the first
/// occurrence and preserving order. Messages are not compared.
pub fn dedup_violations(violations: Vec<Violation>) -> Vec<Violation> {
    let keep: Vec<bool> = {
        let mut seen: FxHashSet<(&str, WestgardRule)> = FxHashSet::default();
        violations.iter().map(|v| seen.insert(v.key())).collect()
    };
    violations
        .into_iter()
        .zip(keep)
        .filter_map(|(v, first)| first.then_some(v))
        .collect()
}

/// Merge several violation batches (e.g. overlapping re-evaluations) into one
/// deduplicated list, earlier batches taking precedence.
pub fn merge_violations<I>(batches: I) -> Vec<Violation>
where
    I: IntoIterator<Item = Vec<Violation>>,
{
    dedup_violations(batches.into_iter().flatten().collect())
}
