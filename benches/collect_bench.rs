//! Collection Benchmarks — Per-Scrape Cost
//!
//! Measures label cleaning and a full collection pass over real files,
//! which is the whole cost of serving one scrape.
//!
//! Run with: cargo bench --bench collect_bench

use std::fs::File;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use file_mtime_exporter::adapters::fs::StdFileStat;
use file_mtime_exporter::adapters::metrics::{FileMtimeCollector, MetricsRegistry};
use file_mtime_exporter::domain::{clean_path, FileList};
use file_mtime_exporter::usecases::FileCollector;

/// Benchmark cleaning a messy relative path.
fn bench_clean_path(c: &mut Criterion) {
    c.bench_function("clean_path_messy", |b| {
        b.iter(|| clean_path(black_box("./var//log/../log/./app/current.log/")));
    });
}

/// Benchmark one collection pass over 100 files, half of them missing.
fn bench_collect(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let files: FileList = (0..100)
        .map(|i| {
            let path = dir.path().join(format!("file-{i}.log"));
            if i % 2 == 0 {
                File::create(&path).unwrap();
            }
            path.to_str().unwrap().to_string()
        })
        .collect();

    let collector = Arc::new(FileCollector::new(Arc::new(StdFileStat::new()), files));

    c.bench_function("collect_100_files", |b| {
        b.iter(|| black_box(collector.collect()));
    });

    let registry =
        MetricsRegistry::new(FileMtimeCollector::new(Arc::clone(&collector)).unwrap()).unwrap();

    c.bench_function("gather_text_100_files", |b| {
        b.iter(|| black_box(registry.gather_text().unwrap()));
    });
}

criterion_group!(benches, bench_clean_path, bench_collect);
criterion_main!(benches);
