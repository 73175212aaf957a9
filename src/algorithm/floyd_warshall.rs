use log::{debug, warn};
use rayon::prelude::*;

use crate::algorithm::{AllPairsAlgorithm, AllPairsResult};
use crate::data_structures::Matrix;
use crate::graph::{Graph, Vertex, VertexIndex, Weight};
use crate::Result;

/// Floyd-Warshall all-pairs shortest paths.
///
/// Negative edge weights are accepted. Negative cycles are not rejected: the
/// run completes, the diagonal of every vertex on such a cycle goes negative
/// and distances routed through it are unreliable. Check
/// [`AllPairsResult::has_negative_cycle`] before trusting the output of a
/// graph that may contain one.
#[derive(Debug, Clone, Default)]
pub struct FloydWarshall {
    /// Relax the rows of each intermediate step on the rayon pool
    parallel: bool,
}

impl FloydWarshall {
    /// Creates a new sequential Floyd-Warshall instance
    pub fn new() -> Self {
        FloydWarshall { parallel: false }
    }

    /// Spread the rows of every intermediate step over rayon workers.
    ///
    /// Each step reads a copy of row k, so the output matches the sequential
    /// run on every graph without a negative cycle.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Direct edges on top of a zero diagonal. A later parallel edge overwrites
/// an earlier one; a self-loop only replaces the diagonal when negative.
fn initial_matrices<W: Weight>(n: usize, edges: &[(usize, usize, W)]) -> (Matrix<Option<W>>, Matrix<Option<usize>>) {
    let mut distances = Matrix::new(n, None);
    let mut next_hop = Matrix::new(n, None);

    for i in 0..n {
        distances.set(i, i, Some(W::zero()));
    }

    for &(i, j, weight) in edges {
        if i == j && weight >= W::zero() {
            continue;
        }
        distances.set(i, j, Some(weight));
        next_hop.set(i, j, Some(j));
    }

    (distances, next_hop)
}

/// Sum of two optional distances, `None` standing for infinity
fn through<W: Weight>(first: Option<W>, second: Option<W>) -> Option<W> {
    Some(first? + second?)
}

fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
    match current {
        Some(current) => candidate < current,
        None => true,
    }
}

fn relax_sequential<W: Weight>(distances: &mut Matrix<Option<W>>, next_hop: &mut Matrix<Option<usize>>) {
    let n = distances.size();
    // k must stay the outermost loop
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let Some(candidate) = through(*distances.get(i, k), *distances.get(k, j)) {
                    if improves(candidate, *distances.get(i, j)) {
                        distances.set(i, j, Some(candidate));
                        next_hop.set(i, j, *next_hop.get(i, k));
                    }
                }
            }
        }
    }
}

fn relax_parallel<W>(distances: &mut Matrix<Option<W>>, next_hop: &mut Matrix<Option<usize>>)
where
    W: Weight + Send + Sync,
{
    let n = distances.size();
    for k in 0..n {
        let row_k = distances.row_to_vec(k);
        distances
            .par_rows_mut()
            .zip(next_hop.par_rows_mut())
            .for_each(|(dist_row, hop_row)| {
                let Some(d_ik) = dist_row[k] else {
                    return;
                };
                let hop_ik = hop_row[k];
                for (j, d_kj) in row_k.iter().enumerate() {
                    if let Some(d_kj) = d_kj {
                        let candidate = d_ik + *d_kj;
                        if improves(candidate, dist_row[j]) {
                            dist_row[j] = Some(candidate);
                            hop_row[j] = hop_ik;
                        }
                    }
                }
            });
    }
}

impl<V, W, G> AllPairsAlgorithm<V, W, G> for FloydWarshall
where
    V: Vertex,
    W: Weight + Send + Sync,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<V, W>> {
        let vertices = VertexIndex::from_graph(graph);
        let edges = vertices.edge_list(graph)?;
        let n = vertices.len();

        debug!(
            "Floyd-Warshall: {} vertices, {} edges, parallel = {}",
            n,
            edges.len(),
            self.parallel
        );

        let (mut distances, mut next_hop) = initial_matrices(n, &edges);
        if self.parallel {
            relax_parallel(&mut distances, &mut next_hop);
        } else {
            relax_sequential(&mut distances, &mut next_hop);
        }

        let result = AllPairsResult {
            vertices,
            distances,
            next_hop,
        };

        let on_cycle = result.negative_cycle_vertices();
        if !on_cycle.is_empty() {
            warn!(
                "Floyd-Warshall: negative cycle through {:?}, affected distances are unreliable",
                on_cycle
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};
    use crate::Error;

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
    fn next_hop_propagates_first_step() {
        let result = FloydWarshall::new().compute_all_pairs(&sample()).unwrap();

        assert_eq!(result.distance(&"A", &"E"), Some(11));
        // A->C->E is the first route to E found, through intermediate C
        assert_eq!(result.next_hop(&"A", &"E"), Some(&"C"));
        assert_eq!(result.path(&"A", &"E").unwrap(), vec!["A", "C", "E"]);
        assert_eq!(result.path(&"B", &"A").unwrap(), vec!["B", "C", "E", "A"]);
        assert_eq!(result.distance(&"E", &"C"), Some(8));
        assert_eq!(result.path(&"E", &"C").unwrap(), vec!["E", "A", "C"]);
    }

    #[test]
    fn later_parallel_edge_overwrites() {
        let mut graph = DirectedGraph::new();
        graph.add_edge('a', 'b', 1);
        graph.add_edge('a', 'b', 9);

        let result = FloydWarshall::new().compute_all_pairs(&graph).unwrap();
        assert_eq!(result.distance(&'a', &'b'), Some(9));
    }

    #[test]
    fn positive_self_loop_keeps_zero_diagonal() {
        let mut graph = DirectedGraph::new();
        graph.add_edge('a', 'a', 4);
        graph.add_edge('a', 'b', 1);

        let result = FloydWarshall::new().compute_all_pairs(&graph).unwrap();
        assert_eq!(result.distance(&'a', &'a'), Some(0));
        assert!(result.path(&'a', &'a').unwrap().is_empty());
        assert!(!result.has_negative_cycle());
    }

    #[test]
    fn negative_cycle_is_flagged_not_fixed() {
        let mut graph = DirectedGraph::new();
        graph.add_edge('x', 'y', -1);
        graph.add_edge('y', 'x', -1);
        graph.add_edge('z', 'x', 5);

        let result = FloydWarshall::new().compute_all_pairs(&graph).unwrap();
        assert!(result.has_negative_cycle());
        assert_eq!(result.negative_cycle_vertices(), vec![&'x', &'y']);
        assert_eq!(result.distance(&'z', &'z'), Some(0));
    }

    #[test]
    fn parallel_matches_sequential() {
        let graph = sample();
        let sequential = FloydWarshall::new().compute_all_pairs(&graph).unwrap();
        let parallel = FloydWarshall::new()
            .with_parallel(true)
            .compute_all_pairs(&graph)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn empty_graph_gives_empty_matrices() {
        let graph: DirectedGraph<u32, i32> = DirectedGraph::new();
        let result = FloydWarshall::new().with_parallel(true).compute_all_pairs(&graph).unwrap();
        assert_eq!(result.distances.size(), 0);
        assert!(!result.has_negative_cycle());
    }

    #[test]
    fn dangling_neighbor_is_rejected() {
        let graph = DirectedGraph::from_adjacency(vec![("A", vec![("B", 1)])]);
        assert!(matches!(
            FloydWarshall::new().compute_all_pairs(&graph),
            Err(Error::UnknownVertex(_))
        ));
    }
}
