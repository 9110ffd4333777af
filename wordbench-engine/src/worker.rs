//! Worker-side protocol for the process-pool strategy
//!
//! A worker is this same program re-invoked in a hidden mode. It reads
//! and cleans the files it was handed and emits one JSON report line
//! per file on stdout; nothing else may be written there. The
//! serialization cost is part of the isolation boundary being measured.

use crate::executor::read_and_clean;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::PathBuf;
use wordbench_core::FileResult;

/// One line of worker output: a cleaned file or a per-file failure.
///
/// A read failure is a report, not a worker crash, so one bad file
/// never hides the state of the rest of the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WorkerReport {
    /// File processed successfully.
    Ok {
        /// The cleaned file.
        result: FileResult,
    },
    /// File could not be read.
    Failed {
        /// The file that failed.
        path: PathBuf,
        /// Error description.
        message: String,
    },
}

/// Process a batch of files, writing one report line each.
pub fn run_worker<W: Write>(files: &[PathBuf], mut out: W) -> io::Result<()> {
    for path in files {
        let report = match read_and_clean(path) {
            Ok(result) => WorkerReport::Ok { result },
            Err(err) => WorkerReport::Failed {
                path: path.clone(),
                message: err.to_string(),
            },
        };
        let line = serde_json::to_string(&report).map_err(io::Error::other)?;
        writeln!(out, "{line}")?;
    }
    out.flush()
}
