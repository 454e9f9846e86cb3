//! Statistical validation battery for the shot-noise synthesis engine.
//!
//! Structural unit tests prove that synthesized count tables hit their exact
//! totals; the checks here go further and ask whether the numbers are
//! statistically *plausible* — does a synthesized table fit the law it came
//! from, does the per-outcome dispersion scale like shot noise, do repeated
//! round trips stay stable. Each check returns a [`TestResult`] with a
//! p-value (where applicable), a pass/fail determination, and a letter grade
//! (A through F).

use rand::Rng;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use photonshot_core::{
    CountTable, ProbabilityDistribution, SamplingConfig, probs_to_sample_count, probs_to_samples,
    sample_count_to_probs,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Core types
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of a single statistical check.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub p_value: Option<f64>,
    pub statistic: f64,
    pub details: String,
    pub grade: char,
}

impl TestResult {
    /// Assign a letter grade based on p-value.
    ///
    /// - A: p >= 0.1
    /// - B: p >= 0.01
    /// - C: p >= 0.001
    /// - D: p >= 0.0001
    /// - F: otherwise or None
    pub fn grade_from_p(p: Option<f64>) -> char {
        match p {
            Some(p) if p >= 0.1 => 'A',
            Some(p) if p >= 0.01 => 'B',
            Some(p) if p >= 0.001 => 'C',
            Some(p) if p >= 0.0001 => 'D',
            _ => 'F',
        }
    }

    /// Determine pass/fail from p-value against a threshold (default 0.01).
    pub fn pass_from_p(p: Option<f64>, threshold: f64) -> bool {
        match p {
            Some(p) => p >= threshold,
            None => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Return a failing `TestResult` when inputs cannot support the check.
fn insufficient(name: &str, reason: &str) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed: false,
        p_value: None,
        statistic: 0.0,
        details: format!("Insufficient input: {reason}"),
        grade: 'F',
    }
}

/// Normalized copy of a distribution.
fn normalized(probs: &ProbabilityDistribution) -> ProbabilityDistribution {
    let mut copy = probs.clone();
    copy.normalize();
    copy
}

/// Sample variance (n-1 denominator).
fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
}

/// Chi-squared statistic of observed counts against expected counts, using
/// only bins whose expectation is at least 5. Returns `(chi2, used_bins)`.
fn chi_squared_statistic(pairs: &[(f64, f64)]) -> (f64, usize) {
    let mut chi2 = 0.0;
    let mut used = 0;
    for &(observed, expected) in pairs {
        if expected >= 5.0 {
            let diff = observed - expected;
            chi2 += diff * diff / expected;
            used += 1;
        }
    }
    (chi2, used)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Checks
// ═══════════════════════════════════════════════════════════════════════════════

/// Goodness of fit of one synthesized count table against the true law.
///
/// Synthesizes a single `count`-shot table and chi-squared-tests it against
/// the expected counts `p * count`. The synthesis path damps dispersion
/// below raw multinomial noise, so a correct engine passes comfortably; a
/// biased one does not.
pub fn chi_squared_fit(
    probs: &ProbabilityDistribution,
    count: usize,
    rng: &mut impl Rng,
) -> TestResult {
    let name = "Chi-Squared Fit";
    let law = normalized(probs);
    let config = SamplingConfig::default();

    let table = match probs_to_sample_count(&law, Some(count), &config, rng) {
        Ok(table) => table,
        Err(err) => return insufficient(name, &err.to_string()),
    };

    let pairs: Vec<(f64, f64)> = law
        .iter()
        .map(|(state, p)| (table.get(state) as f64, p * count as f64))
        .collect();
    let (chi2, used) = chi_squared_statistic(&pairs);
    if used < 2 {
        return insufficient(name, "need at least 2 bins with expected count >= 5");
    }

    let dof = (used - 1) as f64;
    let dist = ChiSquared::new(dof).unwrap();
    let p = dist.sf(chi2);
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: chi2,
        details: format!("bins={used}, dof={dof}, count={count}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

/// Exact-total and non-negativity invariants over repeated synthesis.
///
/// Structural rather than distributional: every one of `trials` synthesized
/// tables must total exactly `count` with no negative entry.
pub fn total_preservation(
    probs: &ProbabilityDistribution,
    count: usize,
    trials: usize,
    rng: &mut impl Rng,
) -> TestResult {
    let name = "Total Preservation";
    let law = normalized(probs);
    let config = SamplingConfig::default();

    let mut failures = 0usize;
    for _ in 0..trials {
        match probs_to_sample_count(&law, Some(count), &config, rng) {
            Ok(table) => {
                if table.total() != count as i64 || table.values().any(|c| c < 0) {
                    failures += 1;
                }
            }
            Err(_) => failures += 1,
        }
    }

    let passed = failures == 0;
    TestResult {
        name: name.to_string(),
        passed,
        p_value: None,
        statistic: failures as f64,
        details: format!("{failures}/{trials} trials violated the invariant"),
        grade: if passed { 'A' } else { 'F' },
    }
}

/// Variance of direct multinomial sampling against binomial `n·p(1-p)`.
///
/// Tracks one reference outcome (the first with `0 < p < 1`) across
/// `trials` independent sample draws and applies a two-sided variance-ratio
/// test: `(trials-1)·s²/σ²` is chi-squared with `trials - 1` degrees of
/// freedom under the null.
pub fn sampling_variance(
    probs: &ProbabilityDistribution,
    count: usize,
    trials: usize,
    rng: &mut impl Rng,
) -> TestResult {
    let name = "Sampling Variance";
    if trials < 10 {
        return insufficient(name, "need at least 10 trials");
    }
    let law = normalized(probs);
    let config = SamplingConfig::default();

    let Some(reference) = law
        .iter()
        .find(|&(_, p)| p > 0.0 && p < 1.0)
        .map(|(state, _)| state.clone())
    else {
        return insufficient(name, "no outcome with probability strictly between 0 and 1");
    };
    let p = law.get(&reference);
    let expected_variance = count as f64 * p * (1.0 - p);

    let mut observations = Vec::with_capacity(trials);
    for _ in 0..trials {
        match probs_to_samples(&law, Some(count), &config, rng) {
            Ok(samples) => observations.push(samples.count_of(&reference) as f64),
            Err(err) => return insufficient(name, &err.to_string()),
        }
    }

    let s2 = sample_variance(&observations);
    let ratio = s2 / expected_variance;
    let x = (trials - 1) as f64 * ratio;
    let dist = ChiSquared::new((trials - 1) as f64).unwrap();
    let p_value = (2.0 * dist.cdf(x).min(dist.sf(x))).min(1.0);

    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p_value), 0.01),
        p_value: Some(p_value),
        statistic: ratio,
        details: format!(
            "outcome {reference}: s²={s2:.2}, expected {expected_variance:.2}, trials={trials}"
        ),
        grade: TestResult::grade_from_p(Some(p_value)),
    }
}

/// Dispersion of the synthesis path relative to raw binomial shot noise.
///
/// The perturb-renormalize-round pipeline removes the common-mode component
/// of the noise, so per-outcome variance lands below `n·p(1-p)` — the check
/// accepts a broad ratio band rather than testing the exact binomial null.
pub fn synthesis_dispersion(
    probs: &ProbabilityDistribution,
    count: usize,
    trials: usize,
    rng: &mut impl Rng,
) -> TestResult {
    let name = "Synthesis Dispersion";
    if trials < 10 {
        return insufficient(name, "need at least 10 trials");
    }
    let law = normalized(probs);
    let config = SamplingConfig::default();

    let Some(reference) = law
        .iter()
        .find(|&(_, p)| p > 0.0 && p < 1.0)
        .map(|(state, _)| state.clone())
    else {
        return insufficient(name, "no outcome with probability strictly between 0 and 1");
    };
    let p = law.get(&reference);
    let binomial_variance = count as f64 * p * (1.0 - p);

    let mut observations = Vec::with_capacity(trials);
    for _ in 0..trials {
        match probs_to_sample_count(&law, Some(count), &config, rng) {
            Ok(table) => observations.push(table.get(&reference) as f64),
            Err(err) => return insufficient(name, &err.to_string()),
        }
    }

    let ratio = sample_variance(&observations) / binomial_variance;
    let passed = (0.2..=2.0).contains(&ratio);
    TestResult {
        name: name.to_string(),
        passed,
        p_value: None,
        statistic: ratio,
        details: format!(
            "outcome {reference}: variance ratio {ratio:.3} (accepted band 0.2–2.0), trials={trials}"
        ),
        grade: if passed { 'A' } else { 'F' },
    }
}

/// Stability of a counts → probs → counts round trip.
///
/// Normalizes an observed table, synthesizes a fresh table at the original
/// total, and chi-squared-tests the result against the original proportions.
/// Totals must match exactly; individual counts may wander within noise.
pub fn round_trip_stability(counts: &CountTable, rng: &mut impl Rng) -> TestResult {
    let name = "Round-Trip Stability";
    let total = counts.total();
    if total <= 0 {
        return insufficient(name, "table total must be positive");
    }
    let config = SamplingConfig::default();

    let law = match sample_count_to_probs(counts) {
        Ok(law) => law,
        Err(err) => return insufficient(name, &err.to_string()),
    };
    let back = match probs_to_sample_count(&law, Some(total as usize), &config, rng) {
        Ok(back) => back,
        Err(err) => return insufficient(name, &err.to_string()),
    };

    if back.total() != total {
        return TestResult {
            name: name.to_string(),
            passed: false,
            p_value: None,
            statistic: back.total() as f64,
            details: format!("round trip changed the total: {total} -> {}", back.total()),
            grade: 'F',
        };
    }

    let pairs: Vec<(f64, f64)> = law
        .iter()
        .map(|(state, p)| (back.get(state) as f64, p * total as f64))
        .collect();
    let (chi2, used) = chi_squared_statistic(&pairs);
    if used < 2 {
        return insufficient(name, "need at least 2 bins with expected count >= 5");
    }

    let dof = (used - 1) as f64;
    let dist = ChiSquared::new(dof).unwrap();
    let p = dist.sf(chi2);
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: chi2,
        details: format!("bins={used}, total={total}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Battery
// ═══════════════════════════════════════════════════════════════════════════════

/// Run the complete battery against one distribution.
///
/// The round-trip check runs on a table synthesized from the distribution
/// itself, so a single exact law exercises every path.
pub fn run_battery(
    probs: &ProbabilityDistribution,
    count: usize,
    trials: usize,
    rng: &mut impl Rng,
) -> Vec<TestResult> {
    let mut results = vec![
        chi_squared_fit(probs, count, rng),
        total_preservation(probs, count, trials, rng),
        sampling_variance(probs, count, trials, rng),
        synthesis_dispersion(probs, count, trials, rng),
    ];

    let law = normalized(probs);
    let config = SamplingConfig::default();
    match probs_to_sample_count(&law, Some(count), &config, rng) {
        Ok(table) => results.push(round_trip_stability(&table, rng)),
        Err(err) => results.push(insufficient("Round-Trip Stability", &err.to_string())),
    }
    results
}

/// Calculate overall quality score (0-100) from battery results.
///
/// Each grade maps to a score: A=100, B=75, C=50, D=25, F=0.
/// Returns the average across all checks.
pub fn quality_score(results: &[TestResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results
        .iter()
        .map(|r| match r.grade {
            'A' => 100.0,
            'B' => 75.0,
            'C' => 50.0,
            'D' => 25.0,
            _ => 0.0,
        })
        .sum();
    total / results.len() as f64
}
