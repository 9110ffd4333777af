//! Performance comparison file

use anyhow::Result;
use std::io::Write;
use wordbench_engine::BenchmarkReport;

/// Write the per-strategy timing report, fastest first.
pub fn write(out: &mut dyn Write, report: &BenchmarkReport, pool_size: usize) -> Result<()> {
    writeln!(out, "CONCURRENCY PERFORMANCE COMPARISON REPORT")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;

    writeln!(out, "System information:")?;
    writeln!(out, "- Logical CPUs: {}", num_cpus::get())?;
    writeln!(out, "- Worker process pool size: {pool_size}")?;
    writeln!(out)?;

    writeln!(out, "Strategy performance (fastest first):")?;
    writeln!(out, "{}", "-".repeat(40))?;
    let ranked = report.ranked();
    for run in &ranked {
        writeln!(out, "Strategy: {}", run.mode.name())?;
        writeln!(out, "  Files processed: {}", run.files_processed)?;
        writeln!(out, "  Words processed: {}", run.stats.total_words)?;
        writeln!(
            out,
            "  Total time:      {:.4} seconds",
            run.total_time.as_secs_f64()
        )?;
        writeln!(
            out,
            "  Processing time: {:.4} seconds",
            run.processing_time.as_secs_f64()
        )?;
        writeln!(
            out,
            "  Overhead time:   {:.4} seconds",
            run.overhead().as_secs_f64()
        )?;
        writeln!(out, "  Words/second:    {:.0}", run.words_per_second())?;
        writeln!(out)?;
    }

    writeln!(out, "Speed comparison:")?;
    writeln!(out, "{}", "-".repeat(16))?;
    let fastest = ranked[0].total_time.as_secs_f64();
    for (rank, run) in ranked.iter().enumerate() {
        if rank == 0 {
            writeln!(out, "{:<13}: 1.00x (fastest)", run.mode.name())?;
        } else if fastest > 0.0 {
            writeln!(
                out,
                "{:<13}: {:.2}x slower",
                run.mode.name(),
                run.total_time.as_secs_f64() / fastest
            )?;
        }
    }

    Ok(())
}
