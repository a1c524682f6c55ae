use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tokenize::tokenize;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [64, 512, 4096, 32768].iter() {
        let text = "私はRustエンジニアです。 ".repeat(*size / 32 + 1);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| b.iter(|| tokenize(black_box(&text))));
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
