//! wordbench CLI library
//!
//! This library provides the command-line pipeline around the wordbench
//! engine: corpus discovery, the benchmark run, and the report files.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
