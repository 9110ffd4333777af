//! Layered error types

use crate::executor::FileFailure;
use std::path::PathBuf;
use thiserror::Error;

/// Engine-level errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A listed file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// One or more concurrent workers failed, collected after the join.
    #[error("{} file(s) could not be processed: {}", .failures.len(), list_failures(.failures))]
    FilesFailed {
        /// Which files failed and why.
        failures: Vec<FileFailure>,
    },

    /// A worker process could not be spawned or reaped.
    #[error("failed to run worker {}: {source}", .program.display())]
    WorkerSpawn {
        /// Program the coordinator tried to execute.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A worker process exited abnormally.
    #[error("worker exited with status {code:?}: {stderr}")]
    WorkerExit {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Captured worker stderr.
        stderr: String,
    },

    /// A worker emitted output the coordinator could not parse.
    #[error("malformed worker output: {detail}")]
    WorkerProtocol {
        /// What the coordinator saw.
        detail: String,
    },

    /// Thread pool construction failed.
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Two strategies disagreed on the aggregate results. Always fatal,
    /// never retried: it means a concurrency bug, not a transient fault.
    #[error("consistency mismatch in {strategy} strategy: {detail}")]
    Consistency {
        /// Strategy that disagreed with the baseline.
        strategy: &'static str,
        /// What differed.
        detail: String,
    },

    /// The file list was empty.
    #[error("no input files to process")]
    NoFiles,
}

fn list_failures(failures: &[FileFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{} ({})", f.path.display(), f.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_failed_names_every_file() {
        let err = EngineError::FilesFailed {
            failures: vec![
                FileFailure {
                    path: PathBuf::from("a.txt"),
                    message: "permission denied".into(),
                },
                FileFailure {
                    path: PathBuf::from("b.txt"),
                    message: "not found".into(),
                },
            ],
        };
        let text = err.to_string();
        assert!(text.contains("2 file(s)"));
        assert!(text.contains("a.txt"));
        assert!(text.contains("b.txt"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn file_read_keeps_source() {
        let err = EngineError::FileRead {
            path: PathBuf::from("gone.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("gone.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
