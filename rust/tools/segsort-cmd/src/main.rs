use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use segsort::Strategy;
use segsort_testkit::DatasetKind;

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "segsort-cmd")]
#[command(about = "Command-line utility for natural-run merge sorting")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in pass/fail cases; exits with status 1 if any fails
    Check {
        /// Strategy to check (all when omitted)
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },

    /// Sort integers read from a file or stdin
    Sort {
        /// Merge strategy to use
        #[arg(short, long, default_value = "stack-balanced")]
        strategy: Strategy,

        /// Input file with integers separated by whitespace or commas (stdin if omitted)
        file: Option<String>,
    },

    /// Show the natural runs detected in the input
    Runs {
        /// Input file with integers separated by whitespace or commas (stdin if omitted)
        file: Option<String>,
    },

    /// Time every strategy against the standard library sort on generated datasets
    Bench {
        /// Number of elements per dataset
        #[arg(long, default_value_t = 100_000)]
        size: usize,

        /// Timed repetitions per dataset and algorithm
        #[arg(short, long, default_value_t = 3)]
        iterations: usize,

        /// Seed for dataset generation
        #[arg(long, default_value_t = 12345)]
        seed: u64,

        /// Restrict to a single dataset kind
        #[arg(short, long)]
        dataset: Option<DatasetKind>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { strategy } => commands::check::run(strategy),
        Commands::Sort { strategy, file } => {
            commands::sort::run(strategy, file)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Runs { file } => {
            commands::runs::run(file)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Bench {
            size,
            iterations,
            seed,
            dataset,
        } => {
            commands::bench::run(size, iterations, seed, dataset)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
