//! Pattern partitioning
//!
//! Given a guess and a candidate set, groups every candidate by the feedback
//! pattern it would produce. The groups form an exact partition of the input
//! set: each candidate lands in exactly one group.

use crate::core::{Pattern, Word};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from pattern to the candidates that would produce it
///
/// A `BTreeMap` keyed by the pattern's total order, so iteration visits
/// groups smallest-pattern-first. That order is what makes tie-breaking
/// reproducible.
pub type PatternGroups = BTreeMap<Pattern, BTreeSet<Word>>;

/// Group candidates by the pattern they produce against the guess
///
/// Every candidate is inserted under exactly one pattern; the union of all
/// groups equals the input set.
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &BTreeSet<Word>) -> PatternGroups {
    let mut groups = PatternGroups::new();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        groups.entry(pattern).or_default().insert(candidate.clone());
    }

    groups
}

/// Find the group with the most members
///
/// Ties break toward the smallest pattern under the
/// `Absent < Present < Exact` lexicographic order: ascending map iteration
/// plus a strict size comparison means an equal-sized later group never
/// displaces an earlier one. Returns `None` only for an empty map.
#[must_use]
pub fn largest_group(groups: &PatternGroups) -> Option<(&Pattern, &BTreeSet<Word>)> {
    let mut best: Option<(&Pattern, &BTreeSet<Word>)> = None;

    for (pattern, members) in groups {
        match best {
            Some((_, winners)) if members.len() <= winners.len() => {}
            _ => best = Some((pattern, members)),
        }
    }

    best
}
