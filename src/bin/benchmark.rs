use std::env;
use std::time::{Duration, Instant};

use classic_sssp::algorithm::{AllPairsAlgorithm, ShortestPathAlgorithm};
use classic_sssp::graph::generators::generate_random;
use classic_sssp::graph::{DirectedGraph, Graph};
use classic_sssp::{BellmanFord, Dijkstra, FloydWarshall};
use log::{error, info};
use ordered_float::OrderedFloat;
use serde::Serialize;

type BenchGraph = DirectedGraph<usize, OrderedFloat<f64>>;

/// One line of the summary table
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    reachable: usize,
    bellman_ford_ms: f64,
    dijkstra_ms: f64,
    floyd_warshall_ms: f64,
    floyd_warshall_parallel_ms: f64,
    distances_agree: bool,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

// Function to benchmark a single-source algorithm on a graph
fn time_single_source<A>(algorithm: &A, graph: &BenchGraph) -> Result<(Duration, Vec<Option<OrderedFloat<f64>>>), classic_sssp::Error>
where
    A: ShortestPathAlgorithm<usize, OrderedFloat<f64>, BenchGraph>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, &0)?;
    let duration = start.elapsed();
    info!("{} finished in {:?}", algorithm.name(), duration);
    Ok((duration, result.distances))
}

fn run_size(size: usize, edge_factor: f64, seed: u64) -> Result<BenchmarkRow, classic_sssp::Error> {
    let graph = generate_random(size, edge_factor, seed);

    let (bellman_ford_time, bellman_ford_distances) = time_single_source(&BellmanFord::new().with_early_exit(true), &graph)?;
    let (dijkstra_time, dijkstra_distances) = time_single_source(&Dijkstra::new(), &graph)?;

    let start = Instant::now();
    let all_pairs = FloydWarshall::new().compute_all_pairs(&graph)?;
    let floyd_warshall_time = start.elapsed();

    let start = Instant::now();
    let all_pairs_parallel = FloydWarshall::new().with_parallel(true).compute_all_pairs(&graph)?;
    let floyd_warshall_parallel_time = start.elapsed();

    let floyd_row: Vec<_> = (0..size).map(|v| all_pairs.distance(&0, &v)).collect();
    let distances_agree = bellman_ford_distances == dijkstra_distances
        && dijkstra_distances == floyd_row
        && all_pairs == all_pairs_parallel;
    if !distances_agree {
        error!("solvers disagree on the graph with {} vertices (seed {})", size, seed);
    }

    Ok(BenchmarkRow {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        reachable: dijkstra_distances.iter().filter(|d| d.is_some()).count(),
        bellman_ford_ms: millis(bellman_ford_time),
        dijkstra_ms: millis(dijkstra_time),
        floyd_warshall_ms: millis(floyd_warshall_time),
        floyd_warshall_parallel_ms: millis(floyd_warshall_parallel_time),
        distances_agree,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [vertices] [edge_factor] [seed] [--json]
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let graph_sizes = match positional.first() {
        Some(size) => vec![size.parse()?],
        None => vec![100, 200, 400],
    };
    let edge_factor: f64 = match positional.get(1) {
        Some(factor) => factor.parse()?,
        None => 4.0,
    };
    let seed: u64 = match positional.get(2) {
        Some(seed) => seed.parse()?,
        None => 42,
    };

    let mut results = Vec::new();
    for &size in &graph_sizes {
        info!("Generating random graph with {} vertices (seed {})", size, seed);
        results.push(run_size(size, edge_factor, seed)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("=====================================================");
    println!("Benchmark: Bellman-Ford vs Dijkstra vs Floyd-Warshall");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");
    println!(
        "{:<10} | {:<8} | {:<10} | {:<12} | {:<12} | {:<12} | {:<12} | {}",
        "Vertices", "Edges", "Reachable", "BF (ms)", "Dijkstra (ms)", "FW (ms)", "FW-par (ms)", "Agree"
    );
    println!("-----------------------------------------------------");
    for row in &results {
        println!(
            "{:<10} | {:<8} | {:<10} | {:<12.2} | {:<12.2} | {:<12.2} | {:<12.2} | {}",
            row.vertices,
            row.edges,
            row.reachable,
            row.bellman_ford_ms,
            row.dijkstra_ms,
            row.floyd_warshall_ms,
            row.floyd_warshall_parallel_ms,
            row.distances_agree
        );
    }

    Ok(())
}
