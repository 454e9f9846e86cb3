use photonshot_core::{SamplingConfig, probs_to_samples};

use super::{
    CommandResult, make_rng, parse_distribution, read_input, samples_to_json, write_output,
};

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

    let samples = probs_to_samples(&probs, count, &config, &mut rng)?;
    log::info!("drew {} sample(s)", samples.len());
    write_output(output, &samples_to_json(&samples)?)?;
    Ok(())
}
