//! # photonshot-core
//!
//! **Move a photonic measurement result between its three faces.**
//!
//! A finite run of a photon-counting experiment can be reported as a raw
//! sample list, an aggregated outcome → count table, or a probability
//! distribution. Exact calculators, hardware emulators and post-processing
//! tools each expect a different one of those shapes; `photonshot-core`
//! converts freely between them, including the non-trivial direction —
//! synthesizing the count table a real `n`-shot acquisition would plausibly
//! record from an exact distribution, shot noise included.
//!
//! ## Quick Start
//!
//! ```
//! use photonshot_core::{
//!     FockState, ProbabilityDistribution, SamplingConfig, probs_to_sample_count,
//! };
//! use rand::SeedableRng;
//!
//! // Exact 50/50 law over two single-photon outcomes.
//! let mut probs = ProbabilityDistribution::new();
//! probs.set(FockState::new(vec![1, 0]), 0.5);
//! probs.set(FockState::new(vec![0, 1]), 0.5);
//!
//! // What would a 1000-shot acquisition have recorded?
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let config = SamplingConfig::default();
//! let counts = probs_to_sample_count(&probs, Some(1000), &config, &mut rng).unwrap();
//!
//! assert_eq!(counts.total(), 1000); // exact, always
//! ```
//!
//! ## Architecture
//!
//! Samples → CountTable → ProbabilityDistribution → (resampled) Samples
//!
//! Aggregation and normalization are exact; synthesis perturbs each
//! probability with Gaussian noise at the binomial-proportion standard error
//! and repairs rounding so totals are preserved to the shot. Every
//! randomized operation takes an explicit [`rand::Rng`] — seed it for
//! reproducible output.

pub mod config;
pub mod convert;
pub mod count;
pub mod distribution;
pub mod error;
pub mod samples;
pub mod state;

pub use config::SamplingConfig;
pub use convert::{
    probs_to_sample_count, probs_to_samples, sample_count_to_probs, sample_count_to_samples,
    samples_to_probs, samples_to_sample_count,
};
pub use count::CountTable;
pub use distribution::ProbabilityDistribution;
pub use error::{ConversionError, Result};
pub use samples::Samples;
pub use state::{FockState, ParseStateError};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
