//! Classic Algorithms - small, self-contained textbook algorithms
//!
//! The crate collects a handful of independent algorithms, each a pure
//! transformation from explicit inputs to an explicit output:
//!
//! - single-source shortest paths by edge relaxation (Bellman-Ford)
//! - shortest path length between two nodes by priority search (Dijkstra)
//! - integer to string conversion in any radix from 2 to 36, and back
//! - greedy text wrapping to a column width
//! - heap sort of a sequence whose elements are at most k positions away from
//!   their sorted position
//!
//! plus a few companions (all-pairs distances, longest increasing
//! subsequence, power set) and the small graph and priority queue types they
//! are built on.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod sequence;
pub mod sort;
pub mod text;

pub use algorithm::{
    all_pairs::all_pairs_shortest_paths,
    bellman_ford::{shortest_paths, BellmanFord},
    dijkstra::{shortest_path_length, Dijkstra},
    Distance, ShortestPathAlgorithm, ShortestPaths, Weight,
};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, EdgeWeights, Successors};
pub use sequence::{lis::lis, powerset::powerset};
pub use sort::kheapsort::{kheapsort, kheapsort_checked};
pub use text::{
    base::{from_base, to_base},
    wrap::{wrap, TextWrapper},
};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Missing weight for edge from {0} to {1}")]
    MissingEdge(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Negative-weight cycle reachable from source")]
    NegativeCycle,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid radix {0}: expected 2..=36")]
    InvalidRadix(u32),

    #[error("Negative number cannot be converted: {0}")]
    NegativeNumber(String),

    #[error("Invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    #[error("Empty input")]
    EmptyInput,

    #[error("Column width must be positive")]
    InvalidColumns,

    #[error("Input is not {k}-sorted: output out of order at index {index}")]
    KBoundViolation { k: usize, index: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
