//! Probability distributions over photon-number outcomes.

use indexmap::IndexMap;
use rand::Rng;

use crate::samples::Samples;
use crate::state::FockState;

/// A probability law over [`FockState`] outcomes.
///
/// Weights need not sum to 1 until [`normalize`](Self::normalize) is called;
/// entries keep insertion order, which makes sampling deterministic for a
/// seeded generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityDistribution {
    weights: IndexMap<FockState, f64>,
}

impl ProbabilityDistribution {
    /// Empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of `state`, 0 when absent.
    pub fn get(&self, state: &FockState) -> f64 {
        self.weights.get(state).copied().unwrap_or(0.0)
    }

    /// Overwrite the weight for `state`.
    pub fn set(&mut self, state: FockState, weight: f64) {
        self.weights.insert(state, weight);
    }

    /// Accumulate `weight` onto the entry for `state`.
    pub fn add(&mut self, state: FockState, weight: f64) {
        *self.weights.entry(state).or_insert(0.0) += weight;
    }

    /// Whether the distribution has an entry for `state`.
    pub fn contains(&self, state: &FockState) -> bool {
        self.weights.contains_key(state)
    }

    /// Iterate over `(outcome, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FockState, f64)> {
        self.weights.iter().map(|(state, &weight)| (state, weight))
    }

    /// Iterate over the outcomes in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &FockState> {
        self.weights.keys()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Scale all weights so they sum to 1. No-op when the total is not
    /// strictly positive.
    pub fn normalize(&mut self) {
        let total = self.total();
        if total > 0.0 {
            for weight in self.weights.values_mut() {
                *weight /= total;
            }
        }
    }

    /// Draw `n` independent outcomes proportionally to the current weights.
    ///
    /// Weights do not have to be normalized. When every weight is zero (or
    /// negative) but outcomes exist, outcomes are drawn uniformly instead —
    /// a degenerate table still yields the requested number of shots. An
    /// empty distribution yields an empty list for any `n`.
    pub fn sample(&self, n: usize, rng: &mut impl Rng) -> Samples {
        if self.weights.is_empty() || n == 0 {
            return Samples::new();
        }

        let states: Vec<&FockState> = self.weights.keys().collect();
        let mut cumulative = Vec::with_capacity(states.len());
        let mut acc = 0.0;
        for &weight in self.weights.values() {
            acc += weight.max(0.0);
            cumulative.push(acc);
        }
        let total = acc;

        let mut out = Samples::with_capacity(n);
        for _ in 0..n {
            let idx = if total > 0.0 {
                let r: f64 = rng.random::<f64>() * total;
                cumulative
                    .partition_point(|&mass| mass <= r)
                    .min(states.len() - 1)
            } else {
                rng.random_range(0..states.len())
            };
            out.push(states[idx].clone());
        }
        out
    }
}

impl FromIterator<(FockState, f64)> for ProbabilityDistribution {
    fn from_iter<I: IntoIterator<Item = (FockState, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
