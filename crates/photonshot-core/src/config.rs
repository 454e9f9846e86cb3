//! Sampling configuration and target-count resolution.

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};

/// Optional acquisition bounds consulted when a conversion is not given an
/// explicit target count.
///
/// `max_shots` comes from an acquisition-time shot budget, `max_samples`
/// from a requested sample count; both are independently meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Upper bound from an acquisition-time shot budget.
    pub max_shots: Option<usize>,
    /// Upper bound from a requested sample count.
    pub max_samples: Option<usize>,
}

impl SamplingConfig {
    /// Configuration with both bounds unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the concrete target count for a conversion.
    ///
    /// An explicit `count` wins over both bounds. When `max_shots` and
    /// `max_samples` are both set, the minimum of the two is used — an
    /// approximation: it caps the sample count but does not model a true
    /// shot-limited acquisition. With neither bound set and no explicit
    /// count, resolution fails with
    /// [`ConversionError::MissingCountInformation`].
    pub fn resolve_count(&self, count: Option<usize>) -> Result<usize> {
        if let Some(count) = count {
            return Ok(count);
        }
        match (self.max_shots, self.max_samples) {
            (Some(shots), Some(samples)) => Ok(shots.min(samples)),
            (Some(shots), None) => Ok(shots),
            (None, Some(samples)) => Ok(samples),
            (None, None) => Err(ConversionError::MissingCountInformation),
        }
    }
}
