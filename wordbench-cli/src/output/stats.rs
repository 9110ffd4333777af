//! Vocabulary statistics file

use anyhow::Result;
use std::io::Write;
use wordbench_core::AggregateStats;

/// Write totals and the ranked top-words listing.
pub fn write(out: &mut dyn Write, stats: &AggregateStats) -> Result<()> {
    writeln!(out, "Total words: {}", stats.total_words)?;
    writeln!(out, "Unique words: {}", stats.unique_words)?;
    writeln!(out)?;
    writeln!(out, "Top {} most common words:", stats.top.len())?;
    for (rank, (token, count)) in stats.top.iter().enumerate() {
        writeln!(out, "{}. {} {}", rank + 1, token, count)?;
    }
    Ok(())
}
