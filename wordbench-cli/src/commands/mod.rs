//! CLI command implementations

use clap::Subcommand;

pub mod run;
pub mod worker;

pub use run::RunArgs;
pub use worker::WorkerArgs;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Process the corpus with every strategy, compare them, and write
    /// the reports
    Run(run::RunArgs),

    /// Internal worker mode backing the process-pool strategy
    #[command(hide = true)]
    Worker(worker::WorkerArgs),
}
