//! Report writing
//!
//! Three flat files per run, each overwriting the previous run's copy.
//! Nothing is written at all when the benchmark failed: mismatched or
//! partial data never reaches disk.

use crate::error::CliError;
use anyhow::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use wordbench_engine::BenchmarkReport;

pub mod comparison;
pub mod stats;
pub mod vocabulary;

/// Writes the report artifacts into one output directory.
pub struct ReportWriter {
    dir: PathBuf,
    pool_size: usize,
}

impl ReportWriter {
    /// Writer rooted at `dir`, created on the first write.
    pub fn new(dir: &Path, pool_size: usize) -> Self {
        Self {
            dir: dir.to_path_buf(),
            pool_size,
        }
    }

    /// Write the vocabulary, statistics, and performance files.
    pub fn write_all(&self, report: &BenchmarkReport) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CliError::ReportError(format!("failed to create {}: {e}", self.dir.display()))
        })?;

        self.write_file("vocabulary.txt", |out| {
            vocabulary::write(out, &report.vocabulary)
        })?;
        self.write_file("vocabulary_stats.txt", |out| {
            stats::write(out, &report.baseline().stats)
        })?;
        self.write_file("performance_comparison.txt", |out| {
            comparison::write(out, report, self.pool_size)
        })?;

        Ok(())
    }

    fn write_file(
        &self,
        name: &str,
        write: impl FnOnce(&mut dyn Write) -> Result<()>,
    ) -> Result<()> {
        let path = self.dir.join(name);
        let file = File::create(&path)
            .map_err(|e| CliError::ReportError(format!("failed to create {}: {e}", path.display())))?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer
            .flush()
            .map_err(|e| CliError::ReportError(format!("failed to write {}: {e}", path.display())))?;
        Ok(())
    }
}
