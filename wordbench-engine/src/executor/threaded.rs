//! Threaded execution strategy (shared-memory concurrency)

use crate::{
    error::{EngineError, Result},
    executor::{read_and_clean, ExecutionMode, Executor, FileFailure, StrategyOutput},
};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use wordbench_core::FrequencyTable;

/// Multi-threaded executor sharing one locked frequency table.
///
/// One logical worker per file, bounded by the rayon pool. Reading and
/// cleaning run unsynchronized; the mutex guards only the merge call,
/// which is the sole contended resource. The run joins on every worker
/// before snapshotting, and per-file read errors are collected and
/// surfaced only after the join so one bad file never hides the state
/// of the rest.
#[derive(Debug, Clone, Default)]
pub struct ThreadedExecutor {
    threads: Option<usize>,
}

impl ThreadedExecutor {
    /// Executor on the global rayon pool.
    pub fn new() -> Self {
        Self { threads: None }
    }

    /// Executor with a dedicated pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    fn run_pool(&self, files: &[PathBuf]) -> StrategyOutput {
        let table = Mutex::new(FrequencyTable::new());

        // One outcome slot per file; nothing aborts the pool early.
        let outcomes: Vec<std::result::Result<Duration, FileFailure>> = files
            .par_iter()
            .map(|path| match read_and_clean(path) {
                Ok(result) => {
                    let elapsed = result.elapsed;
                    // Lock covers the merge only, never the read or clean.
                    table
                        .lock()
                        .expect("frequency table lock poisoned")
                        .extend(result.tokens);
                    Ok(elapsed)
                }
                Err(err) => Err(FileFailure {
                    path: path.clone(),
                    message: err.to_string(),
                }),
            })
            .collect();

        let mut failures = Vec::new();
        let mut processing_time = Duration::ZERO;
        let mut files_processed = 0;
        for outcome in outcomes {
            match outcome {
                Ok(elapsed) => {
                    processing_time += elapsed;
                    files_processed += 1;
                }
                Err(failure) => failures.push(failure),
            }
        }

        StrategyOutput {
            table: table
                .into_inner()
                .expect("frequency table lock poisoned"),
            failures,
            processing_time,
            files_processed,
        }
    }
}

impl Executor for ThreadedExecutor {
    fn run(&self, files: &[PathBuf]) -> Result<StrategyOutput> {
        match self.threads {
            Some(count) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
                Ok(pool.install(|| self.run_pool(files)))
            }
            None => Ok(self.run_pool(files)),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Threaded
    }
}
