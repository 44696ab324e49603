//! Benchmarks for frontier expansion metrics.
//!
//! Run with: cargo bench -p netimpact-core --bench traversal

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use netimpact_core::{average_shortest_path, total_path_length, Graph, GraphBuilder};

/// Square lattice with `side * side` nodes.
fn lattice(side: usize) -> Graph {
    let mut builder = GraphBuilder::with_capacity(side * side);
    let name = |r: usize, c: usize| format!("{:03}-{:03}", r, c);
    for r in 0..side {
        for c in 0..side {
            builder.add_node(&name(r, c));
            if r + 1 < side {
                builder.add_edge(&name(r, c), &name(r + 1, c));
            }
            if c + 1 < side {
                builder.add_edge(&name(r, c), &name(r, c + 1));
            }
        }
    }
    builder.build()
}

fn bench_total_path_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_path_length");
    for side in [10, 20, 40] {
        let graph = lattice(side);
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &graph, |b, g| {
            b.iter(|| total_path_length(black_box(g)))
        });
    }
    group.finish();
}

fn bench_average_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_shortest_path");
    for side in [10, 20, 40] {
        let graph = lattice(side);
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &graph, |b, g| {
            b.iter(|| average_shortest_path(black_box(g)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_total_path_length, bench_average_shortest_path);
criterion_main!(benches);
