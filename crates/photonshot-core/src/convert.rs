//! Conversions between the three faces of a measurement result.
//!
//! A finite run of a photonic experiment can be reported as a raw sample
//! list, an aggregated count table, or a probability distribution. The
//! functions here move between those representations:
//!
//! ```text
//! Samples ── samples_to_sample_count ──▶ CountTable
//! CountTable ── sample_count_to_probs ──▶ ProbabilityDistribution
//! ProbabilityDistribution ── probs_to_sample_count / probs_to_samples ──▶ …
//! CountTable ── sample_count_to_samples ──▶ Samples
//! ```
//!
//! Going from an exact distribution back to finite observations is the
//! non-trivial direction: `probs_to_sample_count` perturbs each probability
//! with Gaussian noise at the binomial-proportion standard error, so the
//! resulting table looks like what a real `count`-shot acquisition would
//! record rather than a rescaled copy of the exact law.
//!
//! All randomized operations take an explicit `&mut impl Rng`; seed a
//! [`rand::rngs::StdRng`] for reproducible output.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::config::SamplingConfig;
use crate::count::CountTable;
use crate::distribution::ProbabilityDistribution;
use crate::error::{ConversionError, Result};
use crate::samples::Samples;
use crate::state::FockState;

/// Aggregate a raw sample list into per-outcome occurrence counts.
///
/// The result has one entry per distinct observed outcome and no entries
/// with a zero count; its total equals `samples.len()`.
pub fn samples_to_sample_count(samples: &Samples) -> CountTable {
    let mut results = CountTable::new();
    for state in samples.iter() {
        if !results.contains(state) {
            results.set(state.clone(), samples.count_of(state) as i64);
        }
    }
    results
}

/// Aggregate a raw sample list directly into a normalized distribution.
pub fn samples_to_probs(samples: &Samples) -> Result<ProbabilityDistribution> {
    sample_count_to_probs(&samples_to_sample_count(samples))
}

/// Synthesize the count table a finite acquisition of `count` shots would
/// plausibly record for the exact distribution `probs`.
///
/// Each probability `p` is perturbed by a Gaussian draw with standard
/// deviation `sqrt(p(1-p)/count)` — the standard error of a binomial
/// proportion estimated from `count` trials — and clamped at zero. The
/// perturbed weights are renormalized and rounded to counts, and the
/// rounding residue is pushed onto uniformly chosen outcomes so the table
/// totals exactly `count` with every entry non-negative.
///
/// Should every perturbed weight collapse to zero (an all-zero input
/// distribution, for instance), the perturbation is abandoned and the table
/// is built by aggregating `count` directly drawn samples instead.
///
/// `count` resolves through `config` when not explicit; see
/// [`SamplingConfig::resolve_count`].
pub fn probs_to_sample_count(
    probs: &ProbabilityDistribution,
    count: Option<usize>,
    config: &SamplingConfig,
    rng: &mut impl Rng,
) -> Result<CountTable> {
    let count = config.resolve_count(count)?;
    if count == 0 {
        // The perturbation scale is undefined at zero shots.
        return Ok(CountTable::new());
    }

    let mut perturbed: Vec<(FockState, f64)> = Vec::with_capacity(probs.len());
    for (state, p) in probs.iter() {
        let sigma = (p * (1.0 - p) / count as f64).sqrt();
        let z: f64 = rng.sample(StandardNormal);
        perturbed.push((state.clone(), (p + sigma * z).max(0.0)));
    }

    let weight_sum: f64 = perturbed.iter().map(|(_, weight)| weight).sum();
    if weight_sum == 0.0 {
        log::debug!("perturbed weights sum to zero; falling back to direct sampling");
        let samples = probs_to_samples(probs, Some(count), config, rng)?;
        return Ok(samples_to_sample_count(&samples));
    }

    let mut results = CountTable::new();
    for (state, weight) in perturbed {
        results.add(state, ((weight / weight_sum) * count as f64).round() as i64);
    }

    // Independent rounding rarely lands on the exact total; push the residue
    // onto uniformly chosen outcomes.
    let states: Vec<FockState> = results.states().cloned().collect();
    let mut diff = count as i64 - results.total();
    if diff > 0 {
        results.add(states[rng.random_range(0..states.len())].clone(), diff);
    } else {
        while diff < 0 {
            let state = &states[rng.random_range(0..states.len())];
            // Never take more than the entry currently holds.
            let step = (-results.get(state)).max(diff);
            diff -= step;
            results.add(state.clone(), step);
        }
    }
    Ok(results)
}

/// Draw `count` independent samples from `probs`.
///
/// Direct multinomial sampling already carries the right finite-shot
/// statistics, so no extra noise model is applied. `count` resolves through
/// `config` when not explicit.
pub fn probs_to_samples(
    probs: &ProbabilityDistribution,
    count: Option<usize>,
    config: &SamplingConfig,
    rng: &mut impl Rng,
) -> Result<Samples> {
    let count = config.resolve_count(count)?;
    Ok(probs.sample(count, rng))
}

/// Normalize an observed count table into a probability distribution.
///
/// Zero-count entries are skipped; a strictly negative count fails with
/// [`ConversionError::InvalidCount`].
pub fn sample_count_to_probs(sample_count: &CountTable) -> Result<ProbabilityDistribution> {
    let mut probs = ProbabilityDistribution::new();
    for (state, count) in sample_count.iter() {
        if count == 0 {
            continue;
        }
        if count < 0 {
            return Err(ConversionError::InvalidCount(count));
        }
        probs.set(state.clone(), count as f64);
    }
    probs.normalize();
    Ok(probs)
}

/// Draw a fresh sample list distributed like an observed count table.
///
/// When no count information is available at all, the table's own total is
/// used as the target, so a bare table resamples at its original size.
pub fn sample_count_to_samples(
    sample_count: &CountTable,
    count: Option<usize>,
    config: &SamplingConfig,
    rng: &mut impl Rng,
) -> Result<Samples> {
    let count = match config.resolve_count(count) {
        Ok(count) => count,
        Err(ConversionError::MissingCountInformation) => sample_count.total().max(0) as usize,
        Err(err) => return Err(err),
    };
    Ok(sample_count_to_probs(sample_count)?.sample(count, rng))
}
