//! Shared value types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A normalized word: lowercase, alphabetic characters only, non-empty.
pub type Token = String;

/// The outcome of reading and cleaning a single file.
///
/// Produced by exactly one worker and consumed exactly once when it is
/// merged into a frequency table. This is also the wire value the
/// process-pool workers send back across the isolation boundary, hence
/// the serde derives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    /// Source file the tokens came from.
    pub path: PathBuf,
    /// Tokens in document order.
    pub tokens: Vec<Token>,
    /// Number of tokens, equal to `tokens.len()`.
    pub word_count: usize,
    /// Time spent reading and cleaning the file.
    pub elapsed: Duration,
}

impl FileResult {
    /// Build a result from a cleaned token sequence.
    pub fn new(path: PathBuf, tokens: Vec<Token>, elapsed: Duration) -> Self {
        let word_count = tokens.len();
        Self {
            path,
            tokens,
            word_count,
            elapsed,
        }
    }
}
