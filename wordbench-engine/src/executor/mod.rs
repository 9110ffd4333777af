//! Execution strategies for corpus processing

use crate::error::{EngineError, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use wordbench_core::{clean_bytes, FileResult, FrequencyTable};

pub mod process_pool;
pub mod sequential;
pub mod threaded;

// Re-export executors
pub use process_pool::{ProcessPoolExecutor, WorkerCommand};
pub use sequential::SequentialExecutor;
pub use threaded::ThreadedExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded baseline
    Sequential,
    /// Shared-memory threads merging into one locked table
    Threaded,
    /// Isolated worker processes returning results as messages
    ProcessPool,
}

impl ExecutionMode {
    /// Human-readable strategy name
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Threaded => "threaded",
            ExecutionMode::ProcessPool => "process-pool",
        }
    }
}

/// A file a concurrent worker could not process.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    /// The file that failed.
    pub path: PathBuf,
    /// What went wrong.
    pub message: String,
}

/// Result of running one strategy over a file list.
#[derive(Debug)]
pub struct StrategyOutput {
    /// Merged frequency table; partial if `failures` is non-empty.
    pub table: FrequencyTable,
    /// Files that could not be processed, collected after every worker
    /// finished rather than aborting the pool mid-run.
    pub failures: Vec<FileFailure>,
    /// Summed per-file read+clean time across workers.
    pub processing_time: Duration,
    /// Number of files successfully processed.
    pub files_processed: usize,
}

impl StrategyOutput {
    /// Treat any per-file failure as an error.
    ///
    /// Callers that want the partial table can read it off the output
    /// directly instead; the harness refuses to compare partial runs.
    pub fn into_result(self) -> Result<StrategyOutput> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(EngineError::FilesFailed {
                failures: self.failures,
            })
        }
    }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Process every file in the list and merge the results into one
    /// frequency table.
    fn run(&self, files: &[PathBuf]) -> Result<StrategyOutput>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Read one file and clean it into a [`FileResult`], timing the span.
///
/// Decode problems inside the file are tolerated by the cleaner; only a
/// failure to open or read the file surfaces here.
pub(crate) fn read_and_clean(path: &Path) -> std::io::Result<FileResult> {
    let start = Instant::now();
    let raw = std::fs::read(path)?;
    let tokens = clean_bytes(&raw);
    Ok(FileResult::new(path.to_path_buf(), tokens, start.elapsed()))
}
