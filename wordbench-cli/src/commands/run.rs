//! Run command: the full pipeline over a corpus directory

use crate::{input, output::ReportWriter, progress::ProgressReporter};
use anyhow::{Context, Result};
use clap::Args;
use std::env;
use std::path::PathBuf;
use wordbench_engine::{Benchmark, BenchmarkReport, EngineConfig, WorkerCommand};

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Directory containing the .txt corpus
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub input: PathBuf,

    /// Directory the reports are written to
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output: PathBuf,

    /// Worker process count for the process-pool strategy
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub pool_size: usize,

    /// Thread count for the threaded strategy (default: one per core)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Number of entries in the top-words list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data"),
            output: PathBuf::from("output"),
            pool_size: 4,
            threads: None,
            top: 10,
            quiet: false,
            verbose: 0,
        }
    }
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let files = input::list_text_files(&self.input)?;
        log::info!(
            "found {} text file(s) in {}",
            files.len(),
            self.input.display()
        );

        let config = EngineConfig {
            pool_size: self.pool_size,
            threads: self.threads,
            top_n: self.top,
        };
        let benchmark = Benchmark::new(config, worker_command()?);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_strategies(3);
        let report = benchmark.run_with_observer(&files, |run| {
            log::info!(
                "{} completed in {:.4}s",
                run.mode.name(),
                run.total_time.as_secs_f64()
            );
            progress.strategy_completed(run.mode.name(), run.total_time);
        })?;
        progress.finish();

        ReportWriter::new(&self.output, self.pool_size)
            .write_all(&report)
            .with_context(|| format!("failed to write reports to {}", self.output.display()))?;

        print_summary(&report, &self.output);
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .format_timestamp(None)
                .try_init()
                .ok();
        }
    }
}

/// The process-pool workers are this same binary in worker mode.
fn worker_command() -> Result<WorkerCommand> {
    let program =
        env::current_exe().context("failed to locate the wordbench binary for worker processes")?;
    Ok(WorkerCommand::new(program, vec!["worker".to_string()]))
}

fn print_summary(report: &BenchmarkReport, output_dir: &std::path::Path) {
    let baseline = report.baseline();

    println!();
    println!("Total words: {}", baseline.stats.total_words);
    println!("Unique words: {}", baseline.stats.unique_words);
    println!();
    println!("Top {} most common words:", baseline.stats.top.len());
    for (rank, (token, count)) in baseline.stats.top.iter().enumerate() {
        println!("  {:2}. {:<15} : {}", rank + 1, token, count);
    }

    println!();
    println!("Strategy ranking (fastest first):");
    let ranked = report.ranked();
    let fastest = ranked[0].total_time.as_secs_f64();
    for (rank, run) in ranked.iter().enumerate() {
        let relative = if rank == 0 {
            "1.00x (fastest)".to_string()
        } else if fastest > 0.0 {
            format!("{:.2}x slower", run.total_time.as_secs_f64() / fastest)
        } else {
            String::new()
        };
        println!(
            "  {:<13} {:>10.4}s  {relative}",
            run.mode.name(),
            run.total_time.as_secs_f64()
        );
    }

    println!();
    println!("Reports written to {}", output_dir.display());
}
