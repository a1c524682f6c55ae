use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use variant_diff::{compute_difference_rate, compute_segments, DiffConfig, DiffEngine};

fn paragraph(words: usize, variant: usize) -> String {
    let vocabulary = ["設計", "Rust", "開発", "テスト", "API", "運用", "性能", "改善"];
    (0..words)
        .map(|i| {
            // Every seventh word differs between variants.
            let pick = if i % 7 == 0 { i + variant } else { i };
            vocabulary[pick % vocabulary.len()]
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for words in [16, 128, 512] {
        let a = paragraph(words, 0);
        let b = paragraph(words, 3);
        group.throughput(Throughput::Bytes((a.len() + b.len()) as u64));

        group.bench_with_input(BenchmarkId::new("segments", words), &words, |bench, _| {
            bench.iter(|| compute_segments(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("rate", words), &words, |bench, _| {
            bench.iter(|| compute_difference_rate(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_variants");
    let variants: Vec<String> = (0..6).map(|v| paragraph(256, v)).collect();
    let refs: Vec<&str> = variants.iter().map(String::as_str).collect();

    for parallel in [false, true] {
        let engine = DiffEngine::new(DiffConfig::new().with_parallel(parallel)).expect("valid config");
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |bench| {
            bench.iter(|| engine.compare_variants(black_box(&refs)).expect("no limit"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare, bench_variants);
criterion_main!(benches);
