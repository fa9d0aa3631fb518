use crate::graph::traits::{EdgeWeights, Graph, MutableGraph, Successors};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph using adjacency lists, with nodes identified by value
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    /// Edge weights keyed by (from, to)
    weights: EdgeWeights<N, W>,

    /// Outgoing neighbors for each node, in insertion order
    outgoing: HashMap<N, Vec<N>>,

    /// Incoming neighbors for each node
    incoming: HashMap<N, Vec<N>>,
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            weights: HashMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Builds a graph from an edge-weight table
    pub fn from_edge_weights(weights: &EdgeWeights<N, W>) -> Self {
        let mut graph = DirectedGraph::new();
        for ((from, to), weight) in weights {
            graph.insert_edge(from.clone(), to.clone(), *weight);
        }
        graph
    }

    /// The edge-weight table backing this graph
    pub fn edge_weights(&self) -> &EdgeWeights<N, W> {
        &self.weights
    }

    fn insert_node(&mut self, node: N) -> bool {
        if self.outgoing.contains_key(&node) {
            return false;
        }
        self.outgoing.insert(node.clone(), Vec::new());
        self.incoming.insert(node, Vec::new());
        true
    }

    /// Inserts or reweights an edge; adjacency lists only grow for new edges
    fn insert_edge(&mut self, from: N, to: N, weight: W) {
        self.insert_node(from.clone());
        self.insert_node(to.clone());

        let key = (from.clone(), to.clone());
        if self.weights.insert(key, weight).is_some() {
            return;
        }

        if let Some(outgoing) = self.outgoing.get_mut(&from) {
            outgoing.push(to.clone());
        }
        if let Some(incoming) = self.incoming.get_mut(&to) {
            incoming.push(from);
        }
    }
}

impl<N, W> From<EdgeWeights<N, W>> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    fn from(weights: EdgeWeights<N, W>) -> Self {
        DirectedGraph::from_edge_weights(&weights)
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Copy + Debug,
{
    fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.weights.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.outgoing.keys().cloned())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        let Some(next) = self.outgoing.get(node) else {
            return Box::new(std::iter::empty());
        };
        let from = node.clone();
        Box::new(next.iter().filter_map(move |to| {
            self.weights
                .get(&(from.clone(), to.clone()))
                .map(|w| (to.clone(), *w))
        }))
    }

    fn incoming_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        let Some(prev) = self.incoming.get(node) else {
            return Box::new(std::iter::empty());
        };
        let to = node.clone();
        Box::new(prev.iter().filter_map(move |from| {
            self.weights
                .get(&(from.clone(), to.clone()))
                .map(|w| (from.clone(), *w))
        }))
    }

    fn has_node(&self, node: &N) -> bool {
        self.outgoing.contains_key(node)
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.weights.contains_key(&(from.clone(), to.clone()))
    }

    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.weights.get(&(from.clone(), to.clone())).copied()
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Copy + Debug,
{
    fn add_node(&mut self, node: N) -> bool {
        self.insert_node(node)
    }

    fn remove_node(&mut self, node: &N) -> bool {
        let Some(outgoing) = self.outgoing.remove(node) else {
            return false;
        };

        for target in outgoing {
            self.weights.remove(&(node.clone(), target.clone()));
            if let Some(incoming) = self.incoming.get_mut(&target) {
                incoming.retain(|source| source != node);
            }
        }

        if let Some(incoming) = self.incoming.remove(node) {
            for source in incoming {
                self.weights.remove(&(source.clone(), node.clone()));
                if let Some(outgoing) = self.outgoing.get_mut(&source) {
                    outgoing.retain(|target| target != node);
                }
            }
        }

        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) {
        self.insert_edge(from, to, weight);
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        if self.weights.remove(&(from.clone(), to.clone())).is_none() {
            return false;
        }

        if let Some(outgoing) = self.outgoing.get_mut(from) {
            outgoing.retain(|target| target != to);
        }
        if let Some(incoming) = self.incoming.get_mut(to) {
            incoming.retain(|source| source != from);
        }

        true
    }

    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool {
        match self.weights.get_mut(&(from.clone(), to.clone())) {
            Some(current) => {
                *current = weight;
                true
            }
            None => false,
        }
    }
}

impl<N, W> Successors<N> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = N> + 'a> {
        self.outgoing.successors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DirectedGraph<&'static str, i32> {
        let mut graph = DirectedGraph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);
        graph.add_edge("A", "C", 5);
        graph
    }

    #[test]
    fn test_add_edge_creates_nodes() {
        let graph = triangle();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_edge(&"A", &"C"));
        assert!(!graph.has_edge(&"C", &"A"));
        assert_eq!(graph.get_edge_weight(&"B", &"C"), Some(2));
    }

    #[test]
    fn test_add_edge_twice_updates_weight() {
        let mut graph = triangle();
        graph.add_edge("A", "B", 7);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge_weight(&"A", &"B"), Some(7));
        assert_eq!(graph.successors(&"A").count(), 2);
    }

    #[test]
    fn test_remove_node_drops_edges() {
        let mut graph = triangle();
        assert!(graph.remove_node(&"B"));
        assert!(!graph.remove_node(&"B"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.successors(&"A").collect::<Vec<_>>(), vec!["C"]);
        assert_eq!(graph.incoming_edges(&"C").collect::<Vec<_>>(), vec![("A", 5)]);
    }

    #[test]
    fn test_remove_and_update_edge() {
        let mut graph = triangle();
        assert!(graph.update_edge_weight(&"A", &"C", 4));
        assert!(!graph.update_edge_weight(&"C", &"A", 4));
        assert_eq!(graph.get_edge_weight(&"A", &"C"), Some(4));

        assert!(graph.remove_edge(&"A", &"C"));
        assert!(!graph.remove_edge(&"A", &"C"));
        assert_eq!(graph.outgoing_edges(&"A").collect::<Vec<_>>(), vec![("B", 1)]);
    }

    #[test]
    fn test_round_trip_through_edge_weights() {
        let graph = triangle();
        let rebuilt = DirectedGraph::from_edge_weights(graph.edge_weights());
        assert_eq!(rebuilt.edge_weights(), graph.edge_weights());
        assert_eq!(rebuilt.successors(&"A").count(), 2);
    }

    /// Node and weight types without `Debug` still build through `From` and `Default`
    #[derive(Clone, PartialEq, Eq, Hash)]
    struct Opaque(u8);

    #[test]
    fn test_from_edge_weights_without_debug_types() {
        let weights: EdgeWeights<Opaque, u32> =
            [((Opaque(0), Opaque(1)), 4), ((Opaque(1), Opaque(2)), 6)]
                .into_iter()
                .collect();

        let graph = DirectedGraph::from(weights.clone());
        assert!(graph.edge_weights() == &weights);
        assert_eq!(graph.successors(&Opaque(0)).count(), 1);
        assert_eq!(graph.successors(&Opaque(2)).count(), 0);

        let empty: DirectedGraph<Opaque, u32> = DirectedGraph::default();
        assert!(empty.edge_weights().is_empty());
    }
}
