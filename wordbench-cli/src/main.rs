//! wordbench command-line entry point

use anyhow::Result;
use clap::Parser;
use wordbench_cli::commands::{Commands, RunArgs};

/// Corpus word statistics with a concurrency-strategy benchmark
#[derive(Debug, Parser)]
#[command(name = "wordbench", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // No subcommand runs the full pipeline with its defaults.
    match cli.command {
        Some(Commands::Run(args)) => args.execute(),
        Some(Commands::Worker(args)) => args.execute(),
        None => RunArgs::default().execute(),
    }
}
