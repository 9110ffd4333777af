//! Benchmark harness
//!
//! Runs the three strategies in a fixed order against the identical
//! file list, wall-clock times each run, and asserts that every
//! strategy produced the same aggregate results before anything is
//! reported.

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    executor::{
        ExecutionMode, Executor, ProcessPoolExecutor, SequentialExecutor, ThreadedExecutor,
        WorkerCommand,
    },
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use wordbench_core::{AggregateStats, FrequencyTable};

/// One executed strategy: name, timing, and its aggregate results.
///
/// Immutable after creation; all timing lives in these explicit values
/// rather than any ambient timer state.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    /// Which strategy ran.
    pub mode: ExecutionMode,
    /// Aggregate statistics the strategy produced.
    pub stats: AggregateStats,
    /// Wall-clock time for the whole run.
    pub total_time: Duration,
    /// Summed per-file read+clean time across workers.
    pub processing_time: Duration,
    /// Number of files processed.
    pub files_processed: usize,
}

impl StrategyRun {
    /// Wall time not spent in per-file work: scheduling, locking,
    /// process startup, result serialization.
    pub fn overhead(&self) -> Duration {
        self.total_time.saturating_sub(self.processing_time)
    }

    /// Throughput over wall time.
    pub fn words_per_second(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs > 0.0 {
            self.stats.total_words as f64 / secs
        } else {
            0.0
        }
    }
}

/// Results of a full benchmark: one verified run per strategy.
#[derive(Debug)]
pub struct BenchmarkReport {
    /// Runs in fixed execution order: sequential, threaded, process-pool.
    pub runs: Vec<StrategyRun>,
    /// Frequency table from the sequential baseline, for the vocabulary
    /// report.
    pub vocabulary: FrequencyTable,
}

impl BenchmarkReport {
    /// The sequential baseline run.
    pub fn baseline(&self) -> &StrategyRun {
        &self.runs[0]
    }

    /// Runs ordered fastest to slowest.
    pub fn ranked(&self) -> Vec<&StrategyRun> {
        let mut ranked: Vec<&StrategyRun> = self.runs.iter().collect();
        ranked.sort_by_key(|run| run.total_time);
        ranked
    }
}

/// Runs the three strategies over one file list and compares them.
#[derive(Debug)]
pub struct Benchmark {
    config: EngineConfig,
    worker: WorkerCommand,
}

impl Benchmark {
    /// Harness with the given tunables and worker invocation.
    pub fn new(config: EngineConfig, worker: WorkerCommand) -> Self {
        Self { config, worker }
    }

    /// Execute sequential, threaded, and process-pool runs over `files`
    /// and verify they agree before returning anything.
    ///
    /// Known limitation: there is no read timeout, so a hung file read
    /// stalls its strategy indefinitely.
    pub fn run(&self, files: &[PathBuf]) -> Result<BenchmarkReport> {
        self.run_with_observer(files, |_| {})
    }

    /// Like [`Benchmark::run`], invoking `observe` as each strategy
    /// completes so callers can report progress.
    pub fn run_with_observer(
        &self,
        files: &[PathBuf],
        mut observe: impl FnMut(&StrategyRun),
    ) -> Result<BenchmarkReport> {
        if files.is_empty() {
            return Err(EngineError::NoFiles);
        }

        let threaded = match self.config.threads {
            Some(count) => ThreadedExecutor::with_threads(count),
            None => ThreadedExecutor::new(),
        };
        let pool = ProcessPoolExecutor::new(self.worker.clone(), self.config.pool_size);

        let (baseline, vocabulary) = self.timed_run(&SequentialExecutor, files)?;
        observe(&baseline);
        let (threaded_run, _) = self.timed_run(&threaded, files)?;
        observe(&threaded_run);
        let (pool_run, _) = self.timed_run(&pool, files)?;
        observe(&pool_run);

        verify_consistency(&baseline.stats, &threaded_run)?;
        verify_consistency(&baseline.stats, &pool_run)?;

        Ok(BenchmarkReport {
            runs: vec![baseline, threaded_run, pool_run],
            vocabulary,
        })
    }

    fn timed_run<E: Executor>(
        &self,
        executor: &E,
        files: &[PathBuf],
    ) -> Result<(StrategyRun, FrequencyTable)> {
        let start = Instant::now();
        let output = executor.run(files)?.into_result()?;
        let total_time = start.elapsed();

        let run = StrategyRun {
            mode: executor.mode(),
            stats: output.table.snapshot(self.config.top_n),
            total_time,
            processing_time: output.processing_time,
            files_processed: output.files_processed,
        };
        Ok((run, output.table))
    }
}

/// A disagreement with the baseline is a concurrency bug: fatal, never
/// retried, and no report is produced from the mismatched data.
fn verify_consistency(baseline: &AggregateStats, run: &StrategyRun) -> Result<()> {
    if run.stats != *baseline {
        return Err(EngineError::Consistency {
            strategy: run.mode.name(),
            detail: format!(
                "expected {} total / {} unique words, got {} total / {} unique (or top-{} content differs)",
                baseline.total_words,
                baseline.unique_words,
                run.stats.total_words,
                run.stats.unique_words,
                run.stats.top.len(),
            ),
        });
    }
    Ok(())
}
