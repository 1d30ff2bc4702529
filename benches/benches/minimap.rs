// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use orrery_layout::{Edge, LayoutConfig, Node, PositionStore};
use orrery_minimap::{CameraState, Minimap, MinimapConfig};

/// A grid of `len` nodes with an edge to each node's right neighbor.
fn grid(len: u32) -> (Vec<Node<u32>>, Vec<Edge<u32>>) {
    let side = (f64::from(len).sqrt().ceil() as u32).max(1);
    let nodes = (0..len)
        .map(|i| {
            let p = Point::new(f64::from(i % side) * 150.0, f64::from(i / side) * 100.0);
            Node::new(i, "topic", p)
        })
        .collect();
    let edges = (1..len)
        .filter(|i| i % side != 0)
        .map(|i| Edge::new(len + i, i - 1, i))
        .collect();
    (nodes, edges)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimap/build");
    let camera = CameraState::default();

    for len in [64_u32, 512, 4_096] {
        let (nodes, edges) = grid(len);
        let store = PositionStore::from_nodes(LayoutConfig::default(), &nodes);
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("fit_to_nodes", len), &len, |b, _| {
            let minimap = Minimap::default();
            b.iter(|| black_box(minimap.build(&nodes, &edges, &store, Some(&camera))));
        });

        group.bench_with_input(BenchmarkId::new("fit_with_viewport", len), &len, |b, _| {
            let minimap = Minimap::new(MinimapConfig {
                include_viewport_in_bounds: true,
                ..MinimapConfig::default()
            });
            b.iter(|| black_box(minimap.build(&nodes, &edges, &store, Some(&camera))));
        });
    }

    group.finish();
}

fn bench_click(c: &mut Criterion) {
    let (nodes, edges) = grid(4_096);
    let store = PositionStore::from_nodes(LayoutConfig::default(), &nodes);
    let Some(frame) = Minimap::default().build(&nodes, &edges, &store, None) else {
        return;
    };

    c.bench_function("minimap/hit_node_4096", |b| {
        b.iter(|| black_box(frame.hit_node(black_box(Point::new(100.0, 100.0)), 4.0)));
    });
}

criterion_group!(benches, bench_build, bench_click);
criterion_main!(benches);
