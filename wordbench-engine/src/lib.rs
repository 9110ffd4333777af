//! Execution strategies and benchmark harness for corpus word statistics
//!
//! This crate orchestrates the wordbench pipeline: it fans file reads
//! and token cleaning out across one of three execution strategies,
//! merges the partial results into a single frequency table, and times
//! the strategies against each other over the identical file list,
//! refusing to report anything unless all of them agree.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod harness;
pub mod worker;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{
    ExecutionMode, Executor, FileFailure, ProcessPoolExecutor, SequentialExecutor, StrategyOutput,
    ThreadedExecutor, WorkerCommand,
};
pub use harness::{Benchmark, BenchmarkReport, StrategyRun};
pub use worker::{run_worker, WorkerReport};

// Re-export from core for convenience
pub use wordbench_core::{AggregateStats, FileResult, FrequencyTable};
