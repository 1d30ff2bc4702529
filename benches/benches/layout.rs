// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use glam::DVec3;
use kurbo::{Point, Vec2};
use orrery_gesture::{InertiaConfig, apply_inertia};
use orrery_layout::{LayoutConfig, Node, PositionStore};

fn nodes(len: u32) -> Vec<Node<u32>> {
    (0..len)
        .map(|i| Node::new(i, "topic", Point::new(f64::from(i) * 10.0, f64::from(i % 7) * 30.0)))
        .collect()
}

fn bench_group_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/group_move");

    for len in [128_u32, 1_024, 8_192] {
        let nodes = nodes(len);
        let store = PositionStore::from_nodes(LayoutConfig::default(), &nodes);
        group.throughput(Throughput::Elements(u64::from(len)));

        // Incremental: each step adds the handle's delta to every node.
        group.bench_with_input(BenchmarkId::new("move_node_locked", len), &len, |b, _| {
            b.iter_batched(
                || store.clone(),
                |mut store| {
                    let p = store.get(&0).unwrap_or_default();
                    let _ = store.move_node(&0, p + DVec3::new(0.1, 0.1, 0.0), true);
                    black_box(store);
                },
                BatchSize::LargeInput,
            );
        });

        // Snapshot-relative: each step rewrites every node from the snapshot.
        group.bench_with_input(BenchmarkId::new("apply_offset_from", len), &len, |b, _| {
            let snapshot = store.snapshot();
            b.iter_batched(
                || store.clone(),
                |mut store| {
                    store.apply_offset_from(&snapshot, DVec3::new(0.1, 0.1, 0.0));
                    black_box(store);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    let nodes = nodes(8_192);
    let mut store = PositionStore::from_nodes(LayoutConfig::default(), &nodes);
    c.bench_function("layout/reset_8192", |b| {
        b.iter(|| {
            store.reset(black_box(&nodes));
        });
    });
}

fn bench_inertia(c: &mut Criterion) {
    let config = InertiaConfig::default();
    c.bench_function("gesture/apply_inertia_flick", |b| {
        b.iter(|| {
            let mut sum = Vec2::ZERO;
            let steps = apply_inertia(black_box(Vec2::new(50.0, -20.0)), config, |d| sum += d);
            black_box((steps, sum))
        });
    });
}

criterion_group!(benches, bench_group_move, bench_reset, bench_inertia);
criterion_main!(benches);
