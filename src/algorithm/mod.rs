pub mod traits;
pub mod path;
pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;

pub use path::{path_cost, reconstruct_backward, reconstruct_forward};
pub use traits::{AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult};
