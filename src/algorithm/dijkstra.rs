use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, Vertex, VertexIndex, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Requires non-negative edge weights. Queue entries with equal cost pop in
/// ascending vertex position (the graph's vertex order), which decides the
/// predecessor among equally short paths.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Reject graphs with negative edge weights before running
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { check_weights: true }
    }

    /// Enable or disable the up-front negative weight check. With the check
    /// disabled, non-negative weights are the caller's responsibility.
    pub fn with_weight_check(mut self, check: bool) -> Self {
        self.check_weights = check;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Weight + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        let vertices = VertexIndex::from_graph(graph);
        let source = vertices.require(source)?;
        let adjacency = vertices.adjacency(graph)?;
        let n = vertices.len();

        if self.check_weights {
            for (origin, edges) in adjacency.iter().enumerate() {
                if let Some(&(destination, weight)) = edges.iter().find(|(_, w)| *w < W::zero()) {
                    return Err(Error::InvalidWeight {
                        from: vertices.label(origin),
                        to: vertices.label(destination),
                        weight: format!("{:?}", weight),
                    });
                }
            }
        }

        debug!(
            "Dijkstra from {:?}: {} vertices, {} edges",
            vertices.vertex(source),
            n,
            adjacency.iter().map(Vec::len).sum::<usize>()
        );

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());
        let mut stale = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // Lazy deletion: a shorter path to u was already settled
            if let Some(current_dist) = distances[u] {
                if dist_u > current_dist {
                    stale += 1;
                    continue;
                }
            }

            for &(v, weight) in &adjacency[u] {
                let new_dist = dist_u + weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        debug!(
            "Dijkstra done: {} pushes, {} stale entries skipped",
            queue.pushed(),
            stale
        );

        Ok(ShortestPathResult {
            vertices,
            distances,
            predecessors,
            source,
        })
    }
}
