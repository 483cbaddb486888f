//! Missing-date and duplicate-date detection.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

/// A date reported more than once, with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateDate {
    pub date: NaiveDate,
    pub count: usize,
}

/// Dates in `candidates` that never appear in `observed`.
///
/// Observed duplicates collapse into a set; order follows `candidates`, so
/// the result is ascending whenever the candidate sequence is. Exception
/// dates never appear here because the caller filters them out of
/// `candidates` before the diff.
#[must_use]
pub fn missing_dates(candidates: &[NaiveDate], observed: &[NaiveDate]) -> Vec<NaiveDate> {
    let seen: BTreeSet<NaiveDate> = observed.iter().copied().collect();
    candidates
        .iter()
        .copied()
        .filter(|d| !seen.contains(d))
        .collect()
}

/// Dates whose occurrence count in `observed` is at least `threshold`,
/// ascending by date.
///
/// Counting goes through a `BTreeMap`, so the output order is stable for a
/// given multiset of dates regardless of input order. A threshold of 1 flags
/// every distinct date; callers wanting duplicate detection validate `>= 2`
/// upstream (profile validation does).
#[must_use]
pub fn duplicate_dates(observed: &[NaiveDate], threshold: usize) -> Vec<DuplicateDate> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in observed {
        *counts.entry(*date).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|(date, count)| DuplicateDate { date, count })
        .collect()
}
