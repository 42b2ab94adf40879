use benches::bench;
use core::hint::black_box;
use criterion::{criterion_group, BenchmarkId, Criterion};
use indices_core::{indexed, indices, iter_indexed, iter_indices};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

criterion_group!(benches, index_only, index_and_elements);

const SIZES: [usize; 3] = [16, 1_024, 65_536];

fn inputs(len: usize) -> (Vec<u64>, Vec<u32>) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let a = (0..len).map(|_| rng.random()).collect();
    // The second input is one element longer so that the shortest length has to be computed.
    let b = (0..=len).map(|_| rng.random()).collect();
    (a, b)
}

fn index_only(c: &mut Criterion) {
    let mut group = c.benchmark_group(bench!("index_only"));

    for len in SIZES {
        let (a, b) = inputs(len);

        group.bench_with_input(BenchmarkId::new("eager", len), &len, |bencher, _| {
            bencher.iter(|| indices(black_box((&a, &b))));
        });
        group.bench_with_input(BenchmarkId::new("lazy", len), &len, |bencher, _| {
            bencher.iter(|| iter_indices(black_box((&a, &b))).sum::<usize>());
        });
        group.bench_with_input(BenchmarkId::new("range", len), &len, |bencher, _| {
            bencher.iter(|| (0..black_box(&a).len().min(black_box(&b).len())).sum::<usize>());
        });
    }

    group.finish();
}

fn index_and_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group(bench!("index_and_elements"));

    for len in SIZES {
        let (a, b) = inputs(len);

        group.bench_with_input(BenchmarkId::new("eager", len), &len, |bencher, _| {
            bencher.iter(|| indexed(black_box((&a, &b))));
        });
        group.bench_with_input(BenchmarkId::new("lazy", len), &len, |bencher, _| {
            bencher.iter(|| {
                iter_indexed(black_box((&a, &b)))
                    .map(|(i, x, y)| i as u64 + x + u64::from(*y))
                    .sum::<u64>()
            });
        });
        group.bench_with_input(BenchmarkId::new("runtime_arity", len), &len, |bencher, _| {
            let narrowed: Vec<u64> = b.iter().copied().map(u64::from).collect();
            bencher.iter(|| {
                iter_indexed(black_box([&a, &narrowed]))
                    .map(|(i, items)| i as u64 + items.into_iter().sum::<u64>())
                    .sum::<u64>()
            });
        });
        group.bench_with_input(BenchmarkId::new("zip", len), &len, |bencher, _| {
            bencher.iter(|| {
                black_box(&a)
                    .iter()
                    .zip(black_box(&b))
                    .enumerate()
                    .map(|(i, (x, y))| i as u64 + x + u64::from(*y))
                    .sum::<u64>()
            });
        });
    }

    group.finish();
}
