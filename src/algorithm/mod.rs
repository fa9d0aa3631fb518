pub mod all_pairs;
pub mod bellman_ford;
pub mod dijkstra;
pub mod traits;

pub use traits::{Distance, ShortestPathAlgorithm, ShortestPaths, Weight};
