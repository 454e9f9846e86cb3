use photonshot_core::{SamplingConfig, sample_count_to_samples};

use super::{CommandResult, make_rng, parse_counts, read_input, samples_to_json, write_output};

pub fn run(
    input: &str,
    count: Option<usize>,
    max_shots: Option<usize>,
    max_samples: Option<usize>,
    seed: Option<u64>,
    output: Option<&str>,
) -> CommandResult {
    let counts = parse_counts(&read_input(input)?)?;
    let config = SamplingConfig {
        max_shots,
        max_samples,
    };
    let mut rng = make_rng(seed);

    let samples = sample_count_to_samples(&counts, count, &config, &mut rng)?;
    log::info!(
        "resampled {} shot(s) from {} outcome(s)",
        samples.len(),
        counts.len()
    );
    write_output(output, &samples_to_json(&samples)?)?;
    Ok(())
}
