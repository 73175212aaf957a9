use indexmap::IndexMap;
use serde::Serialize;

use crate::algorithm::path;
use crate::data_structures::Matrix;
use crate::graph::{Graph, Vertex, VertexIndex, Weight};
use crate::Result;

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertex positions used by `distances` and `predecessors`
    pub vertices: VertexIndex<V>,

    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex position
    pub source: usize,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// The source vertex
    pub fn source_vertex(&self) -> Option<&V> {
        self.vertices.vertex(self.source)
    }

    /// Shortest distance to `vertex`, `None` if unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.vertices
            .index_of(vertex)
            .and_then(|index| self.distances[index])
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.vertices
            .index_of(vertex)
            .and_then(|index| self.predecessors[index])
            .and_then(|pred| self.vertices.vertex(pred))
    }

    /// Returns true if `vertex` was reached from the source
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Labelled distance map in vertex order
    pub fn distance_map(&self) -> IndexMap<V, Option<W>> {
        self.vertices
            .iter()
            .cloned()
            .zip(self.distances.iter().copied())
            .collect()
    }

    /// Labelled predecessor map in vertex order
    pub fn predecessor_map(&self) -> IndexMap<V, Option<V>> {
        self.vertices
            .iter()
            .cloned()
            .zip(
                self.predecessors
                    .iter()
                    .map(|pred| pred.and_then(|p| self.vertices.vertex(p).cloned())),
            )
            .collect()
    }

    /// Shortest path from the source to `target`.
    ///
    /// Unreachable targets give an empty path; the source gives `[source]`.
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        let index = self.vertices.require(target)?;
        if self.distances[index].is_none() {
            return Ok(Vec::new());
        }
        path::walk_predecessors(&self.vertices, &self.predecessors, index)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices.
    ///
    /// `None` when the target is unknown or unreachable, or when the
    /// predecessor chain does not lead back to the source.
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>> {
        match result.path_to(target) {
            Ok(path) if !path.is_empty() && path.first() == result.source_vertex() => Some(path),
            _ => None,
        }
    }
}

/// Result of an all-pairs shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllPairsResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertex positions used for the matrix rows and columns
    pub vertices: VertexIndex<V>,

    /// `distances[i][j]` is the shortest distance from i to j, `None` if unreachable
    pub distances: Matrix<Option<W>>,

    /// `next_hop[i][j]` is the vertex after i on the way to j
    pub next_hop: Matrix<Option<usize>>,
}

impl<V, W> AllPairsResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Shortest distance from `from` to `to`
    pub fn distance(&self, from: &V, to: &V) -> Option<W> {
        let i = self.vertices.index_of(from)?;
        let j = self.vertices.index_of(to)?;
        *self.distances.get(i, j)
    }

    /// The vertex to step to right after `from` when travelling to `to`
    pub fn next_hop(&self, from: &V, to: &V) -> Option<&V> {
        let i = self.vertices.index_of(from)?;
        let j = self.vertices.index_of(to)?;
        (*self.next_hop.get(i, j)).and_then(|hop| self.vertices.vertex(hop))
    }

    /// Shortest path from `from` to `to`, empty when there is none
    pub fn path(&self, from: &V, to: &V) -> Result<Vec<V>> {
        path::reconstruct_forward(&self.next_hop, &self.vertices, from, to)
    }

    /// Vertices whose self-distance went negative, i.e. that lie on a
    /// negative cycle. Distances touching them are unreliable.
    pub fn negative_cycle_vertices(&self) -> Vec<&V> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(i, _)| matches!(self.distances.get(*i, *i), Some(d) if *d < W::zero()))
            .map(|(_, vertex)| vertex)
            .collect()
    }

    /// Returns true if any vertex lies on a negative cycle
    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle_vertices().is_empty()
    }

    /// Labelled distance rows: `rows[from][to]`
    pub fn distance_rows(&self) -> IndexMap<V, IndexMap<V, Option<W>>> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, from)| {
                let row = self
                    .vertices
                    .iter()
                    .cloned()
                    .zip(self.distances.row(i).iter().copied())
                    .collect();
                (from.clone(), row)
            })
            .collect()
    }
}

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest distances between every ordered pair of vertices
    fn compute_all_pairs(&self, graph: &G) -> Result<AllPairsResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
