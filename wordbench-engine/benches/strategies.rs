//! Criterion comparison of the in-process execution strategies
//!
//! The process-pool strategy needs the installed binary and is covered
//! by the CLI integration tests instead.

use criterion::{criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wordbench_engine::{Executor, SequentialExecutor, ThreadedExecutor};

fn write_corpus(dir: &TempDir, files: usize, repeats: usize) -> Vec<PathBuf> {
    let paragraph = "The quick brown fox jumps over the lazy dog; \
                     pack my box with five dozen liquor jugs. ";
    (0..files)
        .map(|i| {
            let path = dir.path().join(format!("doc{i}.txt"));
            fs::write(&path, paragraph.repeat(repeats)).unwrap();
            path
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let files = write_corpus(&dir, 8, 2000);

    let mut group = c.benchmark_group("strategies");
    group.sample_size(20);

    group.bench_function("sequential", |b| {
        b.iter(|| SequentialExecutor.run(&files).unwrap())
    });

    group.bench_function("threaded", |b| {
        let executor = ThreadedExecutor::new();
        b.iter(|| executor.run(&files).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
