use benches::bench;
use core::hint::black_box;
use criterion::{criterion_group, Criterion};
use indices_core::enumerate;

criterion_group!(benches, enumerate_range);

fn enumerate_range(c: &mut Criterion) {
    c.benchmark_group(bench!("enumerate"))
        .bench_function("indices_core", |b| {
            b.iter(|| {
                enumerate(0..black_box(10_000u64))
                    .map(|(i, x)| i as u64 ^ x)
                    .sum::<u64>()
            });
        })
        .bench_function("std", |b| {
            b.iter(|| {
                (0..black_box(10_000u64))
                    .enumerate()
                    .map(|(i, x)| i as u64 ^ x)
                    .sum::<u64>()
            });
        });
}
