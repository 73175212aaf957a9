use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Zero;

/// Identifier of a vertex. Any cloneable, hashable label works.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Edge weight. Integers, floats and `OrderedFloat` all qualify.
///
/// Unreachable distances are modelled as `None`, so no infinity value is
/// required from the weight type itself.
pub trait Weight: Copy + Debug + PartialOrd + Zero {}

impl<T> Weight for T where T: Copy + Debug + PartialOrd + Zero {}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertices in their stable iteration order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex, in the
    /// order they were listed. Unknown vertices have no edges.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists. With parallel edges the
    /// cheapest one is reported.
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }

    /// Returns every edge as `(origin, destination, weight)`, origins in
    /// vertex order and, within each, destinations in listing order.
    fn edges(&self) -> Vec<(&V, &V, W)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for origin in self.vertices() {
            for (destination, weight) in self.outgoing_edges(origin) {
                edges.push((origin, destination, weight));
            }
        }
        edges
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Adds a vertex to the graph. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex and its connected edges from the graph
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Appends a directed edge, creating missing endpoints. Parallel edges
    /// are kept side by side.
    fn add_edge(&mut self, from: V, to: V, weight: W);

    /// Removes every edge from `from` to `to`
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Updates the weight of every edge from `from` to `to`
    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool;
}
