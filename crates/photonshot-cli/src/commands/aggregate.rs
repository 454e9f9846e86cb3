use photonshot_core::{samples_to_probs, samples_to_sample_count};

use super::{
    CommandResult, counts_to_json, distribution_to_json, parse_samples, read_input, write_output,
};

pub fn run(input: &str, probs: bool, output: Option<&str>) -> CommandResult {
    let samples = parse_samples(&read_input(input)?)?;

    let json = if probs {
        distribution_to_json(&samples_to_probs(&samples)?)?
    } else {
        counts_to_json(&samples_to_sample_count(&samples))?
    };
    write_output(output, &json)?;
    Ok(())
}
