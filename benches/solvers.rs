use classic_sssp::algorithm::{AllPairsAlgorithm, ShortestPathAlgorithm};
use classic_sssp::graph::generators::generate_random;
use classic_sssp::{BellmanFord, Dijkstra, FloydWarshall};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");
    for size in [100, 1_000, 5_000] {
        let graph = generate_random(size, 4.0, 42);
        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, graph| {
            b.iter(|| Dijkstra::new().compute_shortest_paths(black_box(graph), &0))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, graph| {
            b.iter(|| {
                BellmanFord::new()
                    .with_early_exit(true)
                    .compute_shortest_paths(black_box(graph), &0)
            })
        });
    }
    group.finish();
}

fn all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(10);
    for size in [50, 200] {
        let graph = generate_random(size, 4.0, 42);
        group.bench_with_input(BenchmarkId::new("floyd_warshall", size), &graph, |b, graph| {
            b.iter(|| FloydWarshall::new().compute_all_pairs(black_box(graph)))
        });
        group.bench_with_input(BenchmarkId::new("floyd_warshall_parallel", size), &graph, |b, graph| {
            b.iter(|| {
                FloydWarshall::new()
                    .with_parallel(true)
                    .compute_all_pairs(black_box(graph))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, single_source, all_pairs);
criterion_main!(benches);
