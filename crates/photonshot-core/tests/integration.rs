//! Integration tests for photonshot-core.
//!
//! These tests drive full conversion chains across all three result
//! representations: samples → counts → probabilities → synthesized counts →
//! resampled samples.

use rand::SeedableRng;
use rand::rngs::StdRng;

use photonshot_core::{
    ConversionError, CountTable, FockState, ProbabilityDistribution, Samples, SamplingConfig,
    probs_to_sample_count, probs_to_samples, sample_count_to_probs, sample_count_to_samples,
    samples_to_probs, samples_to_sample_count,
};

fn state(occ: &[u32]) -> FockState {
    FockState::from(occ)
}

#[test]
fn full_chain_preserves_shot_totals() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = SamplingConfig::default();

    // Exact law over three two-photon outcomes.
    let mut probs = ProbabilityDistribution::new();
    probs.set(state(&[2, 0]), 0.6);
    probs.set(state(&[1, 1]), 0.3);
    probs.set(state(&[0, 2]), 0.1);

    // distribution → samples → counts → distribution → counts
    let samples = probs_to_samples(&probs, Some(5000), &config, &mut rng).unwrap();
    assert_eq!(samples.len(), 5000);

    let counts = samples_to_sample_count(&samples);
    assert_eq!(counts.total(), 5000);

    let observed = sample_count_to_probs(&counts).unwrap();
    let total: f64 = observed.iter().map(|(_, p)| p).sum();
    assert!((total - 1.0).abs() < 1e-9, "probabilities sum to {total}");

    let synthesized = probs_to_sample_count(&observed, Some(5000), &config, &mut rng).unwrap();
    assert_eq!(synthesized.total(), 5000);
    assert!(synthesized.values().all(|c| c >= 0));
}

#[test]
fn observed_frequencies_track_the_law() {
    let mut rng = StdRng::seed_from_u64(2);
    let config = SamplingConfig::default();

    let mut probs = ProbabilityDistribution::new();
    probs.set(state(&[1, 0, 0]), 0.5);
    probs.set(state(&[0, 1, 0]), 0.3);
    probs.set(state(&[0, 0, 1]), 0.2);

    let samples = probs_to_samples(&probs, Some(20_000), &config, &mut rng).unwrap();
    let observed = samples_to_probs(&samples).unwrap();

    for (outcome, p) in probs.iter() {
        let q = observed.get(outcome);
        // sd of a frequency at n=20000 is at most ~0.0035
        assert!(
            (p - q).abs() < 0.02,
            "outcome {outcome}: exact {p}, observed {q}"
        );
    }
}

#[test]
fn resampling_a_table_matches_its_size_without_config() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = SamplingConfig::default();

    let mut counts = CountTable::new();
    counts.set(state(&[3, 0]), 90);
    counts.set(state(&[0, 3]), 10);

    let resampled = sample_count_to_samples(&counts, None, &config, &mut rng).unwrap();
    assert_eq!(resampled.len(), 100);

    let reaggregated = samples_to_sample_count(&resampled);
    assert_eq!(reaggregated.total(), 100);
}

#[test]
fn config_bounds_flow_through_every_entry_point() {
    let mut rng = StdRng::seed_from_u64(4);
    let config = SamplingConfig {
        max_shots: Some(50),
        max_samples: Some(30),
    };

    let mut probs = ProbabilityDistribution::new();
    probs.set(state(&[1]), 1.0);

    let table = probs_to_sample_count(&probs, None, &config, &mut rng).unwrap();
    assert_eq!(table.total(), 30);

    let samples = probs_to_samples(&probs, None, &config, &mut rng).unwrap();
    assert_eq!(samples.len(), 30);

    let mut counts = CountTable::new();
    counts.set(state(&[1]), 500);
    let resampled = sample_count_to_samples(&counts, None, &config, &mut rng).unwrap();
    assert_eq!(resampled.len(), 30, "bounds beat the table's own total");
}

#[test]
fn errors_surface_unmodified() {
    let mut rng = StdRng::seed_from_u64(5);
    let empty_config = SamplingConfig::default();

    let mut probs = ProbabilityDistribution::new();
    probs.set(state(&[1]), 1.0);
    assert_eq!(
        probs_to_sample_count(&probs, None, &empty_config, &mut rng).unwrap_err(),
        ConversionError::MissingCountInformation
    );

    let mut corrupted = CountTable::new();
    corrupted.set(state(&[1]), 3);
    corrupted.set(state(&[0]), -7);
    assert_eq!(
        sample_count_to_probs(&corrupted).unwrap_err(),
        ConversionError::InvalidCount(-7)
    );
}

#[test]
fn degenerate_distribution_still_fills_the_requested_shots() {
    let mut rng = StdRng::seed_from_u64(6);
    let config = SamplingConfig::default();

    let mut probs = ProbabilityDistribution::new();
    probs.set(state(&[1, 0]), 0.0);
    probs.set(state(&[0, 1]), 0.0);

    let table = probs_to_sample_count(&probs, Some(10), &config, &mut rng).unwrap();
    assert_eq!(table.total(), 10);
}

#[test]
fn same_seed_same_result_end_to_end() {
    let config = SamplingConfig::default();

    let mut probs = ProbabilityDistribution::new();
    probs.set(state(&[2, 1]), 0.4);
    probs.set(state(&[1, 2]), 0.6);

    let run = |seed: u64| -> (CountTable, Samples) {
        let mut rng = StdRng::seed_from_u64(seed);
        let table = probs_to_sample_count(&probs, Some(300), &config, &mut rng).unwrap();
        let samples = sample_count_to_samples(&table, None, &config, &mut rng).unwrap();
        (table, samples)
    };

    assert_eq!(run(1234), run(1234));
}

#[test]
fn state_literals_round_trip_through_conversions() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = SamplingConfig::default();

    let parsed: FockState = "|1,0,2>".parse().unwrap();
    let mut probs = ProbabilityDistribution::new();
    probs.set(parsed.clone(), 1.0);

    let samples = probs_to_samples(&probs, Some(5), &config, &mut rng).unwrap();
    assert_eq!(samples.count_of(&parsed), 5);
    for s in samples.iter() {
        assert_eq!(s.to_string(), "|1,0,2>");
    }
}
