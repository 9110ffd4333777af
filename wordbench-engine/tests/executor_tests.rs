//! Integration tests for the execution strategies

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wordbench_engine::{
    EngineError, ExecutionMode, Executor, SequentialExecutor, ThreadedExecutor,
};

fn write_corpus(dir: &TempDir, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

#[test]
fn sequential_counts_a_small_corpus() {
    let dir = TempDir::new().unwrap();
    let files = write_corpus(
        &dir,
        &[
            ("a.txt", "The cat sat. The dog ran!"),
            ("b.txt", "A CAT runs; a DOG sat."),
        ],
    );

    let output = SequentialExecutor.run(&files).unwrap();
    assert_eq!(output.files_processed, 2);
    assert!(output.failures.is_empty());
    assert_eq!(output.table.total_words(), 12);
    assert_eq!(output.table.unique_words(), 7);
    assert_eq!(output.table.count("cat"), 2);
    assert_eq!(output.table.count("runs"), 1);

    let stats = output.table.snapshot(10);
    let order: Vec<&str> = stats.top.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(order, vec!["a", "cat", "dog", "sat", "the", "ran", "runs"]);
}

#[test]
fn threaded_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = (0..12)
        .map(|i| {
            let path = dir.path().join(format!("doc{i}.txt"));
            let content =
                format!("file number {i} has words, WORDS and more-words; also token{i}.");
            fs::write(&path, content).unwrap();
            path
        })
        .collect();

    let baseline = SequentialExecutor.run(&files).unwrap();
    let threaded = ThreadedExecutor::with_threads(4).run(&files).unwrap();

    assert_eq!(threaded.table, baseline.table);
    assert_eq!(
        threaded.table.snapshot(10),
        baseline.table.snapshot(10),
        "snapshots must agree regardless of merge interleaving"
    );
    assert_eq!(threaded.files_processed, baseline.files_processed);
}

#[test]
fn threaded_on_global_pool_matches_too() {
    let dir = TempDir::new().unwrap();
    let files = write_corpus(&dir, &[("x.txt", "one two two"), ("y.txt", "two three")]);

    let baseline = SequentialExecutor.run(&files).unwrap();
    let threaded = ThreadedExecutor::new().run(&files).unwrap();
    assert_eq!(threaded.table, baseline.table);
}

#[test]
fn sequential_fails_fast_on_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let mut files = write_corpus(&dir, &[("ok.txt", "fine")]);
    let missing = dir.path().join("missing.txt");
    files.insert(0, missing.clone());

    match SequentialExecutor.run(&files) {
        Err(EngineError::FileRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected FileRead, got {other:?}"),
    }
}

#[test]
fn threaded_collects_failures_and_keeps_partial_results() {
    let dir = TempDir::new().unwrap();
    let mut files = write_corpus(&dir, &[("a.txt", "alpha beta"), ("b.txt", "gamma")]);
    let missing = dir.path().join("missing.txt");
    files.push(missing.clone());

    let output = ThreadedExecutor::with_threads(2).run(&files).unwrap();

    // The two readable files were still processed in full.
    assert_eq!(output.files_processed, 2);
    assert_eq!(output.table.total_words(), 3);
    assert_eq!(output.table.count("alpha"), 1);
    assert_eq!(output.table.count("gamma"), 1);

    // Exactly the one bad file is reported, after the join.
    assert_eq!(output.failures.len(), 1);
    assert_eq!(output.failures[0].path, missing);

    match output.into_result() {
        Err(EngineError::FilesFailed { failures }) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].path, missing);
        }
        other => panic!("expected FilesFailed, got {other:?}"),
    }
}

#[test]
fn decode_errors_are_tolerated_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.txt");
    let mut raw = b"before ".to_vec();
    raw.extend_from_slice(&[0xc3, 0x28, 0xa0, 0xa1]);
    raw.extend_from_slice(b" after");
    fs::write(&path, raw).unwrap();

    let output = SequentialExecutor.run(&[path]).unwrap();
    assert_eq!(output.files_processed, 1);
    assert_eq!(output.table.count("before"), 1);
    assert_eq!(output.table.count("after"), 1);
}

#[test]
fn empty_files_produce_an_empty_table() {
    let dir = TempDir::new().unwrap();
    let files = write_corpus(&dir, &[("empty.txt", ""), ("blank.txt", " \n\t ")]);

    for executor in [
        Box::new(SequentialExecutor) as Box<dyn Executor>,
        Box::new(ThreadedExecutor::new()),
    ] {
        let output = executor.run(&files).unwrap();
        assert!(output.table.is_empty(), "{:?}", executor.mode());
        assert_eq!(output.files_processed, 2);
    }
}

#[test]
fn modes_report_their_names() {
    assert_eq!(SequentialExecutor.mode(), ExecutionMode::Sequential);
    assert_eq!(ThreadedExecutor::new().mode(), ExecutionMode::Threaded);
}
