//! Subcommand implementations: JSON in, JSON out.
//!
//! Wire shapes: a distribution is an array of `{"state": "|1,0,2>",
//! "probability": 0.5}` records, a count table an array of `{"state": ...,
//! "count": n}` records, and a sample list an array of state strings.

pub mod aggregate;
pub mod resample;
pub mod sample;
pub mod synth;
pub mod validate;

use std::fs;
use std::io::Read;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use photonshot_core::{CountTable, FockState, ProbabilityDistribution, Samples};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct DistributionRecord {
    pub state: String,
    pub probability: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountRecord {
    pub state: String,
    pub count: i64,
}

/// Read the whole input, with `-` meaning stdin.
pub fn read_input(path: &str) -> Result<String, std::io::Error> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

/// Print JSON to stdout, or write it to `output` when given.
pub fn write_output(output: Option<&str>, json: &str) -> Result<(), std::io::Error> {
    match output {
        Some(path) => fs::write(path, json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Seeded generator for reproducible runs, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn parse_distribution(json: &str) -> Result<ProbabilityDistribution, Box<dyn std::error::Error>>
{
    let records: Vec<DistributionRecord> = serde_json::from_str(json)?;
    let mut probs = ProbabilityDistribution::new();
    for record in records {
        probs.add(FockState::from_str(&record.state)?, record.probability);
    }
    Ok(probs)
}

pub fn parse_counts(json: &str) -> Result<CountTable, Box<dyn std::error::Error>> {
    let records: Vec<CountRecord> = serde_json::from_str(json)?;
    let mut counts = CountTable::new();
    for record in records {
        counts.add(FockState::from_str(&record.state)?, record.count);
    }
    Ok(counts)
}

pub fn parse_samples(json: &str) -> Result<Samples, Box<dyn std::error::Error>> {
    let literals: Vec<String> = serde_json::from_str(json)?;
    let mut samples = Samples::with_capacity(literals.len());
    for literal in literals {
        samples.push(FockState::from_str(&literal)?);
    }
    Ok(samples)
}

pub fn distribution_to_json(probs: &ProbabilityDistribution) -> serde_json::Result<String> {
    let records: Vec<DistributionRecord> = probs
        .iter()
        .map(|(state, probability)| DistributionRecord {
            state: state.to_string(),
            probability,
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

pub fn counts_to_json(counts: &CountTable) -> serde_json::Result<String> {
    let records: Vec<CountRecord> = counts
        .iter()
        .map(|(state, count)| CountRecord {
            state: state.to_string(),
            count,
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

pub fn samples_to_json(samples: &Samples) -> serde_json::Result<String> {
    let literals: Vec<String> = samples.iter().map(|state| state.to_string()).collect();
    serde_json::to_string_pretty(&literals)
}
