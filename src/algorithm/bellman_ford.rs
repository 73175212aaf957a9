use log::{debug, trace, warn};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Vertex, VertexIndex, Weight};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths.
///
/// Negative edge weights are allowed. A negative cycle reachable from the
/// source makes the run fail with [`Error::NegativeCycle`].
#[derive(Debug, Clone, Default)]
pub struct BellmanFord {
    /// Stop relaxing as soon as a full pass changes nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance that always runs |V| - 1 passes
    pub fn new() -> Self {
        BellmanFord { early_exit: false }
    }

    /// Stop after the first pass without an update. Results are identical,
    /// only the number of passes changes.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }
}

/// Distance `origin + weight` if it strictly improves on `destination`.
/// An unknown destination distance counts as infinity.
fn improvement<W: Weight>(distances: &[Option<W>], origin: usize, destination: usize, weight: W) -> Option<W> {
    let candidate = distances[origin]? + weight;
    match distances[destination] {
        Some(current) if current <= candidate => None,
        _ => Some(candidate),
    }
}

/// Relaxes every edge once, in edge-list order. Returns the number of
/// improved distances.
fn relax_pass<W: Weight>(
    edges: &[(usize, usize, W)],
    distances: &mut [Option<W>],
    predecessors: &mut [Option<usize>],
) -> usize {
    let mut updates = 0;
    for &(origin, destination, weight) in edges {
        if let Some(candidate) = improvement(distances, origin, destination, weight) {
            distances[destination] = Some(candidate);
            predecessors[destination] = Some(origin);
            updates += 1;
        }
    }
    updates
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BellmanFord
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        let vertices = VertexIndex::from_graph(graph);
        let source = vertices.require(source)?;
        let edges = vertices.edge_list(graph)?;
        let n = vertices.len();

        debug!(
            "Bellman-Ford from {:?}: {} vertices, {} edges",
            vertices.vertex(source),
            n,
            edges.len()
        );

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        for pass in 1..n {
            let updates = relax_pass(&edges, &mut distances, &mut predecessors);
            trace!("pass {}: {} distances improved", pass, updates);
            if updates == 0 && self.early_exit {
                debug!("no update in pass {}, stopping early", pass);
                break;
            }
        }

        // One more pass: anything that still improves sits behind a negative cycle
        for &(origin, destination, weight) in &edges {
            if improvement(&distances, origin, destination, weight).is_some() {
                let vertex = vertices.label(destination);
                warn!("negative cycle detected, {} still improves", vertex);
                return Err(Error::NegativeCycle(vertex));
            }
        }

        let reached = distances.iter().filter(|d| d.is_some()).count();
        debug!("Bellman-Ford reached {} of {} vertices", reached, n);

        Ok(ShortestPathResult {
            vertices,
            distances,
            predecessors,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    fn sample() -> DirectedGraph<&'static str, i64> {
        DirectedGraph::from_adjacency(vec![
            ("A", vec![("B", 3), ("C", 5)]),
            ("B", vec![("C", 2), ("D", 6)]),
            ("C", vec![("B", 1), ("D", 4), ("E", 6)]),
            ("D", vec![("E", 2)]),
            ("E", vec![("A", 3), ("D", 7)]),
        ])
    }

    #[test]
    fn negative_edges_without_cycle() {
        let mut graph = DirectedGraph::new();
        graph.add_edge('s', 'a', 4);
        graph.add_edge('s', 'b', 5);
        graph.add_edge('b', 'a', -3);
        graph.add_edge('a', 'c', 1);

        let result = BellmanFord::new().compute_shortest_paths(&graph, &'s').unwrap();
        assert_eq!(result.distance(&'a'), Some(2));
        assert_eq!(result.distance(&'c'), Some(3));
        assert_eq!(result.predecessor(&'a'), Some(&'b'));
        assert_eq!(result.predecessor(&'s'), None);
    }

    #[test]
    fn ties_keep_the_first_edge_in_list_order() {
        // s->a->t and s->b->t both cost 2; a's edge is listed first
        let graph = DirectedGraph::from_adjacency(vec![
            ('s', vec![('a', 1), ('b', 1)]),
            ('a', vec![('t', 1)]),
            ('b', vec![('t', 1)]),
            ('t', vec![]),
        ]);

        let result = BellmanFord::new().compute_shortest_paths(&graph, &'s').unwrap();
        assert_eq!(result.distance(&'t'), Some(2));
        assert_eq!(result.predecessor(&'t'), Some(&'a'));
    }

    #[test]
    fn early_exit_gives_identical_results() {
        let graph = sample();
        let full = BellmanFord::new().compute_shortest_paths(&graph, &"A").unwrap();
        let early = BellmanFord::new()
            .with_early_exit(true)
            .compute_shortest_paths(&graph, &"A")
            .unwrap();
        assert_eq!(full, early);
    }

    #[test]
    fn negative_cycle_is_reported_without_partial_result() {
        let mut graph = sample();
        graph.add_edge("D", "X", 1);
        graph.add_edge("X", "Y", -1);
        graph.add_edge("Y", "X", -1);

        let result = BellmanFord::new().compute_shortest_paths(&graph, &"A");
        assert!(matches!(result, Err(Error::NegativeCycle(_))));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let mut graph = sample();
        graph.add_edge("X", "Y", -1);
        graph.add_edge("Y", "X", -1);

        let result = BellmanFord::new().compute_shortest_paths(&graph, &"A").unwrap();
        assert_eq!(result.distance(&"X"), None);
        assert_eq!(result.distance(&"E"), Some(11));
    }

    #[test]
    fn unknown_source_and_dangling_neighbor() {
        let graph = sample();
        assert!(matches!(
            BellmanFord::new().compute_shortest_paths(&graph, &"Q"),
            Err(Error::UnknownVertex(_))
        ));

        let dangling = DirectedGraph::from_adjacency(vec![("A", vec![("B", 1)])]);
        assert_eq!(
            BellmanFord::new().compute_shortest_paths(&dangling, &"A"),
            Err(Error::UnknownVertex("\"B\"".to_string()))
        );
    }
}
