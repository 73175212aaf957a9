use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::{Error, Result};
use indexmap::IndexMap;

/// A directed graph implementation using adjacency lists
///
/// Vertices iterate in insertion order, which is also the order every solver
/// uses to index them.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: IndexMap<V, Vec<(V, W)>>,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: IndexMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: IndexMap::with_capacity(vertices),
        }
    }

    /// Builds a graph straight from adjacency lists.
    ///
    /// Nothing is validated here: a neighbor that never appears as a key is
    /// kept as is and later rejected by the solvers. A repeated key replaces
    /// the earlier list.
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        DirectedGraph {
            outgoing_edges: adjacency
                .into_iter()
                .map(|(vertex, edges)| (vertex, edges.into_iter().collect()))
                .collect(),
        }
    }

    /// Checks that every neighbor is itself a vertex of the graph
    pub fn validate(&self) -> Result<()> {
        for (_origin, destination, _weight) in self.edges() {
            if !self.has_vertex(destination) {
                return Err(Error::unknown_vertex(destination));
            }
        }
        Ok(())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> Result<()> {
        for (origin, destination, weight) in self.edges() {
            if weight < W::zero() {
                return Err(Error::InvalidWeight {
                    from: format!("{:?}", origin),
                    to: format!("{:?}", destination),
                    weight: format!("{:?}", weight),
                });
            }
        }
        Ok(())
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        // shift_remove keeps the iteration order of the remaining vertices
        if self.outgoing_edges.shift_remove(vertex).is_none() {
            return false;
        }

        for edges in self.outgoing_edges.values_mut() {
            edges.retain(|(target, _)| target != vertex);
        }
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.outgoing_edges
            .entry(from)
            .or_default()
            .push((to.clone(), weight));
        if !self.outgoing_edges.contains_key(&to) {
            self.outgoing_edges.insert(to, Vec::new());
        }
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool {
        let mut updated = false;

        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            for edge in outgoing.iter_mut().filter(|(target, _)| target == to) {
                edge.1 = weight;
                updated = true;
            }
        }

        updated
    }
}
