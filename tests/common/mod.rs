#![allow(dead_code)]

use classic_sssp::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The five-vertex example graph with integer weights
pub fn example_graph() -> DirectedGraph<&'static str, i64> {
    DirectedGraph::from_adjacency(vec![
        ("A", vec![("B", 3), ("C", 5)]),
        ("B", vec![("C", 2), ("D", 6)]),
        ("C", vec![("B", 1), ("D", 4), ("E", 6)]),
        ("D", vec![("E", 2)]),
        ("E", vec![("A", 3), ("D", 7)]),
    ])
}

/// Same example with float weights
pub fn example_graph_f64() -> DirectedGraph<&'static str, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();
    for (from, to, weight) in [
        ("A", "B", 3.0),
        ("A", "C", 5.0),
        ("B", "C", 2.0),
        ("B", "D", 6.0),
        ("C", "B", 1.0),
        ("C", "D", 4.0),
        ("C", "E", 6.0),
        ("D", "E", 2.0),
        ("E", "A", 3.0),
        ("E", "D", 7.0),
    ] {
        graph.add_edge(from, to, OrderedFloat(weight));
    }
    graph
}

/// Example graph plus a two-vertex negative cycle hanging off D
pub fn example_with_negative_cycle() -> DirectedGraph<&'static str, i64> {
    let mut graph = example_graph();
    graph.add_edge("D", "X", 1);
    graph.add_edge("X", "Y", -1);
    graph.add_edge("Y", "X", -1);
    graph
}
