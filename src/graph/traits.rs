use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Edge weights keyed by the `(from, to)` pair of node identifiers
pub type EdgeWeights<N, W> = HashMap<(N, N), W>;

/// Capability of producing the outgoing neighbors of a node
pub trait Successors<N> {
    /// Returns an iterator over the successors of `node`
    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = N> + 'a>;
}

impl<N> Successors<N> for HashMap<N, Vec<N>>
where
    N: Eq + Hash + Clone,
{
    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = N> + 'a> {
        match self.get(node) {
            Some(next) => Box::new(next.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all nodes
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns an iterator over the outgoing edges from a node
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns an iterator over the incoming edges to a node
    fn incoming_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    /// Adds a node, returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Removes a node and its connected edges from the graph
    fn remove_node(&mut self, node: &N) -> bool;

    /// Adds a directed edge, creating missing endpoints. An existing edge gets the new weight.
    fn add_edge(&mut self, from: N, to: N, weight: W);

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool;
}
