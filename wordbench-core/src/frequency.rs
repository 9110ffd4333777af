//! Frequency table and aggregate statistics

use crate::types::Token;
use std::collections::HashMap;

/// Mapping from token to occurrence count across the corpus.
///
/// Merging is commutative and associative: for any partition of a token
/// multiset into any number of inputs merged in any order, the resulting
/// content is identical. Every execution strategy relies on this to
/// produce the same table regardless of how its workers interleave.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<Token, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a token.
    pub fn add(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Count every token in a sequence.
    pub fn extend<I: IntoIterator<Item = Token>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token);
        }
    }

    /// Fold another table into this one, adding counts pairwise.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
    }

    /// Occurrences recorded for a token.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_words(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct tokens.
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    /// Whether no tokens have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tokens in alphabetical order, for the vocabulary report.
    pub fn sorted_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.counts.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }

    /// Freeze the table into its aggregate view.
    ///
    /// `top` is ordered by count descending, ties broken by token text
    /// ascending. Count alone is not a stable order and the reports must
    /// be reproducible.
    pub fn snapshot(&self, top_n: usize) -> AggregateStats {
        let mut top: Vec<(Token, u64)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.clone(), count))
            .collect();
        top.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top.truncate(top_n);

        AggregateStats {
            total_words: self.total_words(),
            unique_words: self.unique_words(),
            top,
        }
    }
}

/// Read-only aggregate view of a completed run.
///
/// Equality compares exactly the fields the benchmark asserts on:
/// totals, distinct count, and the ordered top list.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    /// Sum of all token counts.
    pub total_words: u64,
    /// Number of distinct tokens.
    pub unique_words: usize,
    /// Most frequent tokens, count descending then token ascending.
    pub top: Vec<(Token, u64)>,
}
