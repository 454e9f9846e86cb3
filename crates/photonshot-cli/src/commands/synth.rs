use photonshot_core::{SamplingConfig, probs_to_sample_count};

use super::{CommandResult, counts_to_json, make_rng, parse_distribution, read_input, write_output};

pub fn run(
    input: &str,
    count: Option<usize>,
    max_shots: Option<usize>,
    max_samples: Option<usize>,
    seed: Option<u64>,
    output: Option<&str>,
) -> CommandResult {
    let probs = parse_distribution(&read_input(input)?)?;
    let config = SamplingConfig {
        max_shots,
        max_samples,
    };
    let mut rng = make_rng(seed);

    let counts = probs_to_sample_count(&probs, count, &config, &mut rng)?;
    log::info!(
        "synthesized {} outcome(s) totaling {} shot(s)",
        counts.len(),
        counts.total()
    );
    write_output(output, &counts_to_json(&counts)?)?;
    Ok(())
}
