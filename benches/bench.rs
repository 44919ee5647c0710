use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use deal::{deal, deal_big, BigUint};

fn bench_deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("deal");
    for &n in &[16usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("u64 huge range", n), &n, |b, &n| {
            let mut rng = SmallRng::from_seed([0u8; 32]);
            let mut buffer = vec![0u64; n];
            b.iter(|| {
                deal(&mut buffer, 0, black_box(u64::MAX), &mut rng).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("u64 full range", n), &n, |b, &n| {
            let mut rng = SmallRng::from_seed([0u8; 32]);
            let mut buffer = vec![0u64; n];
            b.iter(|| {
                deal(&mut buffer, 0, black_box(n as u64), &mut rng).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("index::sample", n), &n, |b, &n| {
            let mut rng = SmallRng::from_seed([0u8; 32]);
            b.iter(|| rand::seq::index::sample(&mut rng, black_box(usize::MAX), n));
        });

        group.bench_with_input(BenchmarkId::new("big 2^256 range", n), &n, |b, &n| {
            let mut rng = SmallRng::from_seed([0u8; 32]);
            let origin = BigUint::default();
            let count: BigUint = BigUint::from(1u32) << 256;
            let mut buffer = vec![BigUint::default(); n];
            b.iter(|| {
                deal_big(&mut buffer, &origin, &count, &mut rng).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(3)).measurement_time(Duration::from_secs(10));
    targets = bench_deal
);
criterion_main!(benches);
