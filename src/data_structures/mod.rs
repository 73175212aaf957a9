pub mod matrix;
pub mod priority_queue;

pub use matrix::Matrix;
pub use priority_queue::BinaryHeapWrapper;
