//! Corpus discovery

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// List the `.txt` files of a corpus directory.
///
/// The pipeline refuses to run over nothing: an empty listing is a
/// configuration error raised before any strategy executes and before
/// any output file is touched.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::InvalidCorpus(format!("{} is not a directory", dir.display())).into());
    }

    let pattern = dir.join("*.txt");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-UTF-8 corpus path: {}", dir.display()))?
        .to_string();

    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("invalid corpus pattern: {pattern}"))? {
        let path = entry.with_context(|| format!("error scanning corpus: {pattern}"))?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(CliError::ConfigError(format!(
            "no .txt files found in {}",
            dir.display()
        ))
        .into());
    }

    // Deterministic processing order regardless of filesystem iteration.
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_txt_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("notes.md"), "skip").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = list_text_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn empty_directory_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let err = list_text_files(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no .txt files found"));
    }

    #[test]
    fn missing_directory_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = list_text_files(&missing).unwrap_err();
        assert!(err.to_string().contains("no .txt files found"));
    }

    #[test]
    fn file_as_corpus_dir_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("corpus");
        fs::write(&file, "not a dir").unwrap();
        let err = list_text_files(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
