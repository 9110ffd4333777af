//! Sequential execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{read_and_clean, ExecutionMode, Executor, StrategyOutput},
};
use std::path::PathBuf;
use std::time::Duration;
use wordbench_core::FrequencyTable;

/// Sequential single-threaded executor
///
/// Iterates the file list in order and merges each file's tokens
/// directly into a table it alone owns. This is the correctness
/// baseline the concurrent strategies must reproduce exactly. Fails
/// fast: the first unreadable file aborts the run with zero partial
/// output.
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run(&self, files: &[PathBuf]) -> Result<StrategyOutput> {
        let mut table = FrequencyTable::new();
        let mut processing_time = Duration::ZERO;
        let mut files_processed = 0;

        for path in files {
            let result = read_and_clean(path).map_err(|source| EngineError::FileRead {
                path: path.clone(),
                source,
            })?;
            processing_time += result.elapsed;
            files_processed += 1;
            table.extend(result.tokens);
        }

        Ok(StrategyOutput {
            table,
            failures: Vec::new(),
            processing_time,
            files_processed,
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
