//! CLI for photonshot — move measurement results between samples, counts and
//! probability distributions.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "photonshot")]
#[command(about = "photonshot — convert photonic measurement results between samples, counts and probability distributions")]
#[command(version = photonshot_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a shot-noise count table from an exact distribution
    Synth {
        /// Distribution JSON file, or "-" for stdin
        input: String,

        /// Explicit number of shots (wins over --max-shots/--max-samples)
        #[arg(long)]
        count: Option<usize>,

        /// Shot-budget bound consulted when --count is absent
        #[arg(long)]
        max_shots: Option<usize>,

        /// Sample-count bound consulted when --count is absent
        #[arg(long)]
        max_samples: Option<usize>,

        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write JSON to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Draw raw samples from an exact distribution
    Sample {
        /// Distribution JSON file, or "-" for stdin
        input: String,

        /// Explicit number of samples (wins over --max-shots/--max-samples)
        #[arg(long)]
        count: Option<usize>,

        /// Shot-budget bound consulted when --count is absent
        #[arg(long)]
        max_shots: Option<usize>,

        /// Sample-count bound consulted when --count is absent
        #[arg(long)]
        max_samples: Option<usize>,

        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write JSON to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Aggregate a raw sample list into a count table
    Aggregate {
        /// Sample-list JSON file, or "-" for stdin
        input: String,

        /// Emit the normalized distribution instead of counts
        #[arg(long)]
        probs: bool,

        /// Write JSON to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Run the statistical validation battery against a distribution
    Validate {
        /// Distribution JSON file, or "-" for stdin
        input: String,

        /// Shots per synthesized table
        #[arg(long, default_value_t = 1000)]
        count: usize,

        /// Tables/sample sets drawn per statistical check
        #[arg(long, default_value_t = 100)]
        trials: usize,

        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Draw a fresh sample list distributed like an observed count table
    Resample {
        /// Count-table JSON file, or "-" for stdin
        input: String,

        /// Target sample count (defaults to the table's own total)
        #[arg(long)]
        count: Option<usize>,

        /// Shot-budget bound consulted when --count is absent
        #[arg(long)]
        max_shots: Option<usize>,

        /// Sample-count bound consulted when --count is absent
        #[arg(long)]
        max_samples: Option<usize>,

        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write JSON to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Synth {
            input,
            count,
            max_shots,
            max_samples,
            seed,
            output,
        } => commands::synth::run(&input, count, max_shots, max_samples, seed, output.as_deref()),
        Commands::Sample {
            input,
            count,
            max_shots,
            max_samples,
            seed,
            output,
        } => commands::sample::run(&input, count, max_shots, max_samples, seed, output.as_deref()),
        Commands::Aggregate {
            input,
            probs,
            output,
        } => commands::aggregate::run(&input, probs, output.as_deref()),
        Commands::Validate {
            input,
            count,
            trials,
            seed,
        } => commands::validate::run(&input, count, trials, seed),
        Commands::Resample {
            input,
            count,
            max_shots,
            max_samples,
            seed,
            output,
        } => {
            commands::resample::run(&input, count, max_shots, max_samples, seed, output.as_deref())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
