pub mod directed;
pub mod generators;
pub mod traits;

pub use directed::DirectedGraph;
pub use traits::{EdgeWeights, Graph, MutableGraph, Successors};
