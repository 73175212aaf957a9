pub mod traits;
pub mod directed;
pub mod index;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex, Weight};
pub use directed::DirectedGraph;
pub use index::VertexIndex;
