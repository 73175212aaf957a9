use crate::graph::traits::{Graph, Vertex, Weight};
use crate::{Error, Result};
use indexmap::IndexSet;
use serde::Serialize;

/// Stable mapping between vertices and the positions used by result vectors
/// and matrices.
///
/// Built once per solver run from the graph's vertex iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VertexIndex<V>
where
    V: Vertex,
{
    vertices: IndexSet<V>,
}

impl<V> VertexIndex<V>
where
    V: Vertex,
{
    /// Enumerates the vertices of `graph` in its iteration order
    pub fn from_graph<W, G>(graph: &G) -> Self
    where
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        VertexIndex {
            vertices: graph.vertices().cloned().collect(),
        }
    }

    /// Returns the number of indexed vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if no vertex is indexed
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the position of `vertex`, if indexed
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    /// Returns the position of `vertex` or an `UnknownVertex` error
    pub fn require(&self, vertex: &V) -> Result<usize> {
        self.index_of(vertex)
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }

    /// Returns the vertex at `index`
    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get_index(index)
    }

    /// Debug rendering of the vertex at `index`, used in error messages
    pub fn label(&self, index: usize) -> String {
        self.vertex(index)
            .map(|vertex| format!("{:?}", vertex))
            .unwrap_or_default()
    }

    /// Iterates the vertices in index order
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Flattens the edges of `graph` into `(origin, destination, weight)`
    /// index triples, origins in index order and destinations in listing
    /// order. Fails on the first neighbor that is not indexed.
    pub fn edge_list<W, G>(&self, graph: &G) -> Result<Vec<(usize, usize, W)>>
    where
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        let mut edges = Vec::with_capacity(graph.edge_count());
        for (origin, vertex) in self.vertices.iter().enumerate() {
            for (neighbor, weight) in graph.outgoing_edges(vertex) {
                edges.push((origin, self.require(neighbor)?, weight));
            }
        }
        Ok(edges)
    }

    /// Index-based adjacency lists for `graph`, same order and checks as
    /// [`VertexIndex::edge_list`]
    pub fn adjacency<W, G>(&self, graph: &G) -> Result<Vec<Vec<(usize, W)>>>
    where
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        let mut adjacency = Vec::with_capacity(self.len());
        for vertex in self.vertices.iter() {
            let mut edges = Vec::new();
            for (neighbor, weight) in graph.outgoing_edges(vertex) {
                edges.push((self.require(neighbor)?, weight));
            }
            adjacency.push(edges);
        }
        Ok(adjacency)
    }
}
