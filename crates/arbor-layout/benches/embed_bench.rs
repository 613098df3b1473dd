//! Benchmarks for embed-constraint resolution.
//!
//! Run with: cargo bench -p arbor-layout --bench embed_bench

use arbor_core::Insets;
use arbor_layout::{EmbedPosition, Guide, resolve};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_resolve_by_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("embed/resolve");
    let insets = Insets::uniform(8.0);

    for position in EmbedPosition::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{position:?}")),
            &position,
            |b, &position| b.iter(|| black_box(resolve(position, insets, Guide::Bounds))),
        );
    }

    group.finish();
}

fn bench_resolve_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("embed/resolve_batch");
    let insets = Insets::new(1.0, 2.0, 3.0, 4.0);

    for n in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("children", n), &n, |b, &n| {
            b.iter(|| {
                let mut total = 0usize;
                for i in 0..n {
                    let position = EmbedPosition::ALL[i % EmbedPosition::ALL.len()];
                    total += black_box(resolve(position, insets, Guide::SafeArea)).len();
                }
                total
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_by_position, bench_resolve_batch);
criterion_main!(benches);
