//! Criterion benchmarks for swing-topology.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use swing_topology::graph::Graph;
use swing_topology::topology::{honeycomb, rec_torus, supertorus};
use swing_topology::types::GridNode;

/// Fill every queue of a torus with a random number of destinations.
fn make_loaded_torus(b: usize, h: usize, max_load: usize) -> Graph<GridNode> {
    let mut rng = rand::thread_rng();
    let mut graph = rec_torus(b, h).unwrap();
    let edges = graph.edges().to_vec();
    for (u, v) in edges {
        let forward = rng.gen_range(0..=max_load);
        let backward = rng.gen_range(0..=max_load);
        graph.queue_mut(&u, &v).unwrap().enqueue_many(std::iter::repeat(v).take(forward));
        graph.queue_mut(&v, &u).unwrap().enqueue_many(std::iter::repeat(u).take(backward));
    }
    graph
}

fn bench_supertorus(c: &mut Criterion) {
    c.bench_function("supertorus_4096_k8", |b| {
        b.iter(|| supertorus(4096, 8).unwrap());
    });
}

fn bench_honeycomb(c: &mut Criterion) {
    c.bench_function("honeycomb_64x64", |b| {
        b.iter(|| honeycomb(64, 64).unwrap());
    });
}

fn bench_rec_torus(c: &mut Criterion) {
    c.bench_function("rec_torus_64x64", |b| {
        b.iter(|| rec_torus(64, 64).unwrap());
    });
}

fn bench_queue_scan(c: &mut Criterion) {
    let graph = make_loaded_torus(64, 64, 16);
    c.bench_function("longest_queue_64x64", |b| {
        b.iter(|| graph.longest_queue());
    });
    c.bench_function("summary_64x64", |b| {
        b.iter(|| graph.summary());
    });
}

criterion_group!(
    benches,
    bench_supertorus,
    bench_honeycomb,
    bench_rec_torus,
    bench_queue_scan
);
criterion_main!(benches);
