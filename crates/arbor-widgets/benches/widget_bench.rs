//! Benchmarks for widget-tree operations: flattening, embedding, and
//! dynamic rebuild churn.
//!
//! Run with: cargo bench -p arbor-widgets --bench widget_bench

use arbor_reactive::Observable;
use arbor_widgets::{Container, DynamicViews, IntoView, Label, VStack, View, Widget};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn label_fragment(width: usize) -> View {
    View::Fragment(
        (0..width)
            .map(|i| Label::new(i.to_string()).into_view())
            .collect(),
    )
}

fn bench_view_flattening(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_flatten");
    for width in [8_usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            let view = label_fragment(width);
            b.iter(|| black_box(view.to_widgets().len()));
        });
    }
    group.finish();
}

fn bench_embed_install(c: &mut Criterion) {
    let mut group = c.benchmark_group("embed_install");
    for width in [8_usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| {
                let container = Container::with(label_fragment(width));
                black_box(container.node().installed_constraints().len())
            });
        });
    }
    group.finish();
}

fn bench_dynamic_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_rebuild");
    for n in [16_usize, 128, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let items = Observable::new((0..n).map(|i| i.to_string()).collect::<Vec<_>>());
            let stack = VStack::dynamic(DynamicViews::new(&items, |s| {
                Label::new(s.clone()).into_view()
            }));
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let head = if flip { "x" } else { "y" };
                items.update(|v| v[0] = head.to_string());
                black_box(stack.node().child_count())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_view_flattening,
    bench_embed_install,
    bench_dynamic_rebuild
);
criterion_main!(benches);
