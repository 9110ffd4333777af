//! Hidden worker mode backing the process-pool strategy

use anyhow::Result;
use clap::Args;
use std::io;
use std::path::PathBuf;
use wordbench_engine::run_worker;

/// Arguments for the worker command
#[derive(Debug, Args)]
pub struct WorkerArgs {
    /// Files this worker is responsible for
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl WorkerArgs {
    /// Execute the worker loop.
    ///
    /// stdout carries protocol lines only; anything else would corrupt
    /// the coordinator's drain.
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        run_worker(&self.files, stdout.lock())?;
        Ok(())
    }
}
