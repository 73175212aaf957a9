use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::ops::RangeInclusive;

/// Generates a random directed graph with `n` vertices and about
/// `edge_factor * n` edges with weights in `[1, 100)`.
///
/// The generator is seeded so the same arguments always give the same graph.
/// Self-loops are skipped, parallel edges may occur.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random directed acyclic graph with signed integer weights.
///
/// Edges only go from a lower to a higher vertex id, so no cycle (negative or
/// not) can exist whatever the weight range.
pub fn generate_random_dag(
    n: usize,
    edge_factor: f64,
    weights: RangeInclusive<i64>,
    seed: u64,
) -> DirectedGraph<usize, i64> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n - 1);
        let v = rng.gen_range(u + 1..n);
        graph.add_edge(u, v, rng.gen_range(weights.clone()));
    }

    graph
}

/// Generates a `width` x `height` grid where each cell links to its four
/// neighbours with unit weight
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;

            if x > 0 {
                graph.add_edge(current, current - 1, OrderedFloat(1.0));
            }
            if x + 1 < width {
                graph.add_edge(current, current + 1, OrderedFloat(1.0));
            }
            if y > 0 {
                graph.add_edge(current, current - width, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random(50, 3.0, 7);
        let b = generate_random(50, 3.0, 7);

        assert_eq!(a.vertex_count(), 50);
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn dag_edges_point_forward() {
        let graph = generate_random_dag(30, 4.0, -10..=10, 3);
        assert!(graph.edges().iter().all(|(u, v, _)| u < v));
    }

    #[test]
    fn grid_has_four_neighbour_edges() {
        let graph = generate_grid(3, 2);
        assert_eq!(graph.vertex_count(), 6);
        // 2 rows * 2 horizontal links + 3 vertical links, both directions
        assert_eq!(graph.edge_count(), 14);
    }
}
