//! Process-pool execution strategy (isolated-memory concurrency)

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor, FileFailure, StrategyOutput},
    worker::WorkerReport,
};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use wordbench_core::FrequencyTable;

/// How the coordinator invokes a worker process.
///
/// Normally the current binary re-run in its hidden worker mode; kept
/// explicit so the executor is testable with any program speaking the
/// worker protocol.
#[derive(Debug, Clone)]
pub struct WorkerCommand {
    /// Program to execute.
    pub program: PathBuf,
    /// Leading arguments placed before the batch's file paths.
    pub args: Vec<String>,
}

impl WorkerCommand {
    /// Command invoking `program` with `args` before the file batch.
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }

    fn to_command(&self, files: &[PathBuf]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.args(files);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

/// Executor partitioning the file list across a fixed pool of isolated
/// worker processes.
///
/// No table is shared during parallel execution: each worker sends back
/// complete per-file results as JSON lines, and the coordinator merges
/// them sequentially after draining every child, so merging needs no
/// lock. Worker startup and result serialization are real costs of the
/// isolation boundary and stay on the measured path.
#[derive(Debug)]
pub struct ProcessPoolExecutor {
    worker: WorkerCommand,
    pool_size: usize,
}

impl ProcessPoolExecutor {
    /// Executor spawning at most `pool_size` concurrent workers.
    pub fn new(worker: WorkerCommand, pool_size: usize) -> Self {
        Self {
            worker,
            pool_size: pool_size.max(1),
        }
    }

    /// Round-robin partition of the file list into at most `pool_size`
    /// batches, one batch per worker process.
    fn partition(&self, files: &[PathBuf]) -> Vec<Vec<PathBuf>> {
        let lanes = self.pool_size.min(files.len()).max(1);
        let mut batches = vec![Vec::new(); lanes];
        for (index, path) in files.iter().enumerate() {
            batches[index % lanes].push(path.clone());
        }
        batches
    }

    fn drain_child(&self, child: Child) -> Result<Vec<WorkerReport>> {
        let output = child
            .wait_with_output()
            .map_err(|source| EngineError::WorkerSpawn {
                program: self.worker.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EngineError::WorkerExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|err| EngineError::WorkerProtocol {
                    detail: format!("{err}: {line}"),
                })
            })
            .collect()
    }
}

impl Executor for ProcessPoolExecutor {
    fn run(&self, files: &[PathBuf]) -> Result<StrategyOutput> {
        let batches = self.partition(files);

        // Launch the whole pool before collecting anything.
        let mut children = Vec::with_capacity(batches.len());
        for batch in &batches {
            let child =
                self.worker
                    .to_command(batch)
                    .spawn()
                    .map_err(|source| EngineError::WorkerSpawn {
                        program: self.worker.program.clone(),
                        source,
                    })?;
            children.push(child);
        }

        // Blocking drain of every child; shutdown is all-or-nothing.
        let mut reports = Vec::with_capacity(files.len());
        for child in children {
            reports.extend(self.drain_child(child)?);
        }

        // Single-writer merge: results are local now, no lock needed.
        let mut table = FrequencyTable::new();
        let mut failures = Vec::new();
        let mut processing_time = Duration::ZERO;
        let mut files_processed = 0;
        for report in reports {
            match report {
                WorkerReport::Ok { result } => {
                    processing_time += result.elapsed;
                    files_processed += 1;
                    table.extend(result.tokens);
                }
                WorkerReport::Failed { path, message } => {
                    failures.push(FileFailure { path, message });
                }
            }
        }

        Ok(StrategyOutput {
            table,
            failures,
            processing_time,
            files_processed,
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::ProcessPool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor(pool_size: usize) -> ProcessPoolExecutor {
        ProcessPoolExecutor::new(
            WorkerCommand::new(PathBuf::from("worker"), vec!["worker".into()]),
            pool_size,
        )
    }

    fn paths(count: usize) -> Vec<PathBuf> {
        (0..count).map(|i| PathBuf::from(format!("f{i}.txt"))).collect()
    }

    #[test]
    fn partition_spreads_files_round_robin() {
        let batches = executor(4).partition(&paths(10));
        assert_eq!(batches.len(), 4);
        let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
        assert_eq!(batches[0][0], PathBuf::from("f0.txt"));
        assert_eq!(batches[1][0], PathBuf::from("f1.txt"));
    }

    #[test]
    fn partition_never_creates_empty_batches() {
        let batches = executor(4).partition(&paths(2));
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| !b.is_empty()));
    }

    #[test]
    fn pool_size_is_at_least_one() {
        let batches = executor(0).partition(&paths(3));
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
    }
}
