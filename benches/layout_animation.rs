//! Benchmarks for layout and animation of the larger structures
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsvis_rs::animation::Ease;
use dsvis_rs::engine::{BstEngine, ListEngine};
use dsvis_rs::layout::{Band, ListLayout, TreeLayout};

/// Deterministic pseudo-random values without pulling in an RNG
fn scrambled(count: usize) -> Vec<i32> {
    (0..count as i32).map(|i| (i * 7919) % 1009).collect()
}

fn bench_tree_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_relayout");
    let layout = TreeLayout::default();
    let band = Band::new(40.0, 1240.0);

    for size in [100, 1_000, 10_000].iter() {
        let mut tree = BstEngine::new();
        for v in scrambled(*size) {
            tree.insert(v);
        }

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("balanced_ish", size), size, |b, _| {
            b.iter(|| tree.relayout(black_box(&layout), band));
        });
    }

    // sorted input produces a list-shaped tree
    for size in [100, 1_000].iter() {
        let mut tree = BstEngine::new();
        for v in 0..*size {
            tree.insert(v);
        }
        group.bench_with_input(BenchmarkId::new("degenerate", size), size, |b, _| {
            b.iter(|| tree.relayout(black_box(&layout), band));
        });
    }

    group.finish();
}

fn bench_list_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_frame");
    let layout = ListLayout::default();
    let ease = Ease::new(5.0);

    for size in [10, 100, 1_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("relayout_tick_view", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut list = ListEngine::new();
                    for v in 0..size as i32 {
                        list.insert_at_head(v);
                    }
                    list
                },
                |mut list| {
                    list.relayout(&layout);
                    list.tick(black_box(1.0 / 60.0), ease);
                    black_box(list.view(None))
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_bst_insert(c: &mut Criterion) {
    let values = scrambled(1_000);
    c.bench_function("bst_insert_1000", |b| {
        b.iter(|| {
            let mut tree = BstEngine::new();
            for v in &values {
                tree.insert(black_box(*v));
            }
            tree
        });
    });
}

criterion_group!(benches, bench_tree_relayout, bench_list_frame, bench_bst_insert);
criterion_main!(benches);
