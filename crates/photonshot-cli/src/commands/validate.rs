use photonshot_tests::{quality_score, run_battery};

use super::{CommandResult, make_rng, parse_distribution, read_input};

pub fn run(
    input: &str,
    count: usize,
    trials: usize,
    seed: Option<u64>,
) -> CommandResult {
    let probs = parse_distribution(&read_input(input)?)?;
    let mut rng = make_rng(seed);

    let results = run_battery(&probs, count, trials, &mut rng);

    println!(
        "Validation battery: {} shot(s) per table, {} trial(s)\n",
        count, trials
    );
    for result in &results {
        let status = if result.passed { "\u{2705}" } else { "\u{274C}" };
        let p = match result.p_value {
            Some(p) => format!("p={p:.4}"),
            None => "p=  -  ".to_string(),
        };
        println!(
            "  {status} {:<22} {}  {}  stat={:<8.3} {}",
            result.name, result.grade, p, result.statistic, result.details
        );
    }
    println!("\nQuality score: {:.0}/100", quality_score(&results));
    Ok(())
}
