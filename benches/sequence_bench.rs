//! Benchmark for the lazy sequence transformer.
//!
//! Measures the cost of boxing and state tracking against a plain iterator.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use safetypes::control::ok;
use safetypes::iter::{Sequence, map};
use std::hint::black_box;

fn benchmark_map_drive(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_map_drive");

    for size in [100_u64, 10_000] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("sequence", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut total = 0_u64;
                map(Sequence::from_values(0..size), |x| ok(x * x)).drive(|item| {
                    total = total.wrapping_add(item.unwrap_or_default());
                    true
                });
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_iterator", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let total = (0..size).map(|x| x * x).fold(0_u64, u64::wrapping_add);
                black_box(total)
            });
        });
    }

    group.finish();
}

fn benchmark_early_stop(criterion: &mut Criterion) {
    criterion.bench_function("sequence_early_stop", |bencher| {
        bencher.iter(|| {
            let mut seen = 0;
            let state = map(Sequence::from_values(0_u64..), |x| ok(x + 1)).drive(|_| {
                seen += 1;
                seen < 10
            });
            black_box(state)
        });
    });
}

criterion_group!(benches, benchmark_map_drive, benchmark_early_stop);
criterion_main!(benches);
