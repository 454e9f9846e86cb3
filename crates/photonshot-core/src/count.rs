//! Aggregated outcome counts.

use indexmap::IndexMap;

use crate::state::FockState;

/// Outcome → occurrence-count mapping summarizing a set of observations.
///
/// Counts are stored signed so that corrupted caller data (a negative count)
/// stays representable and is caught at normalization time instead of being
/// silently clamped. Entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    counts: IndexMap<FockState, i64>,
}

impl CountTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count recorded for `state`, 0 when absent.
    pub fn get(&self, state: &FockState) -> i64 {
        self.counts.get(state).copied().unwrap_or(0)
    }

    /// Overwrite the count for `state`.
    pub fn set(&mut self, state: FockState, count: i64) {
        self.counts.insert(state, count);
    }

    /// Whether the table has an entry for `state`.
    pub fn contains(&self, state: &FockState) -> bool {
        self.counts.contains_key(state)
    }

    /// Accumulate `delta` into the entry for `state`.
    ///
    /// An entry is created even when `delta` is 0: the synthesizer's rounding
    /// correction draws uniformly among all table entries, so outcomes whose
    /// count rounded to zero must stay addressable.
    pub fn add(&mut self, state: FockState, delta: i64) {
        *self.counts.entry(state).or_insert(0) += delta;
    }

    /// Iterate over `(outcome, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FockState, i64)> {
        self.counts.iter().map(|(state, &count)| (state, count))
    }

    /// Iterate over the distinct outcomes in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &FockState> {
        self.counts.keys()
    }

    /// Iterate over the counts in insertion order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.counts.values().copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }
}

impl FromIterator<(FockState, i64)> for CountTable {
    fn from_iter<I: IntoIterator<Item = (FockState, i64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
