use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPaths, Weight};
use crate::graph::{EdgeWeights, Graph};
use crate::{Error, Result};

/// Single-source shortest paths by repeated edge relaxation.
///
/// Relaxation is in place: a distance improved earlier in a pass is already
/// visible to the edges relaxed after it in the same pass. A pass that changes
/// nothing ends the run early. Negative weights are allowed.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Upper bound on relaxation passes; `None` means one pass per node
    max_rounds: Option<usize>,
    /// Whether a change in the last pass is reported as a negative cycle
    detect_negative_cycles: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a new instance: one pass per node, negative cycle detection on
    pub fn new() -> Self {
        BellmanFord {
            max_rounds: None,
            detect_negative_cycles: true,
        }
    }

    /// Limits the number of relaxation passes (never more than one per node).
    /// Cycle detection only applies when the full node count of passes runs.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Enable or disable negative cycle detection
    pub fn with_negative_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_negative_cycles = enabled;
        self
    }

    /// Distances from `source` to every node mentioned in `weight_by_edge`.
    ///
    /// The edge table is only read; distances live in their own table.
    pub fn shortest_paths<N, W>(
        &self,
        source: &N,
        weight_by_edge: &EdgeWeights<N, W>,
    ) -> Result<ShortestPaths<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
    {
        let edges: Vec<(N, N, W)> = weight_by_edge
            .iter()
            .map(|((from, to), weight)| (from.clone(), to.clone(), *weight))
            .collect();

        self.shortest_paths_in_order(source, &edges)
    }

    /// Like [`BellmanFord::shortest_paths`], but every pass relaxes `edges`
    /// in slice order, so truncated runs are reproducible.
    pub fn shortest_paths_in_order<N, W>(
        &self,
        source: &N,
        edges: &[(N, N, W)],
    ) -> Result<ShortestPaths<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
    {
        self.relax(source, std::iter::empty(), edges)
    }

    fn relax<N, W>(
        &self,
        source: &N,
        nodes: impl Iterator<Item = N>,
        edges: &[(N, N, W)],
    ) -> Result<ShortestPaths<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
    {
        let mut distances: HashMap<N, Distance<W>> =
            nodes.map(|n| (n, Distance::Infinite)).collect();
        for (from, to, _) in edges {
            distances.insert(from.clone(), Distance::Infinite);
            distances.insert(to.clone(), Distance::Infinite);
        }
        distances.insert(source.clone(), Distance::zero());

        let mut predecessors = HashMap::new();
        let node_count = distances.len();
        let rounds = self.max_rounds.map_or(node_count, |r| r.min(node_count));

        let mut changed = false;
        for round in 1..=rounds {
            changed = false;

            for (from, to, weight) in edges {
                let candidate = match distances.get(from) {
                    Some(Distance::Finite(d)) => Distance::Finite(*d).add(*weight)?,
                    _ => continue,
                };
                let current = distances.get(to).copied().unwrap_or(Distance::Infinite);

                if candidate < current {
                    distances.insert(to.clone(), candidate);
                    predecessors.insert(to.clone(), from.clone());
                    changed = true;
                }
            }

            trace!("Relaxation pass {}/{}: changed = {}", round, rounds, changed);
            if !changed {
                debug!("Distances settled after {} of {} passes", round, rounds);
                break;
            }
        }

        if changed && rounds == node_count && self.detect_negative_cycles {
            warn!("Negative cycle reachable from {:?}", source);
            return Err(Error::NegativeCycle);
        }

        Ok(ShortestPaths {
            source: source.clone(),
            distances,
            predecessors,
        })
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for BellmanFord
where
    N: Eq + Hash + Clone + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPaths<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::NodeNotFound(format!("{:?}", source)));
        }

        let edges: Vec<(N, N, W)> = graph
            .nodes()
            .flat_map(|from| {
                graph
                    .outgoing_edges(&from)
                    .map(move |(to, weight)| (from.clone(), to, weight))
            })
            .collect();

        self.relax(source, graph.nodes(), &edges)
    }
}

/// Shortest distances from `source` to every node mentioned in `weight_by_edge`,
/// using the default [`BellmanFord`] configuration.
///
/// Unreachable nodes map to [`Distance::Infinite`].
pub fn shortest_paths<N, W>(
    source: &N,
    weight_by_edge: &EdgeWeights<N, W>,
) -> Result<ShortestPaths<N, W>>
where
    N: Eq + Hash + Clone + Debug,
    W: Weight,
{
    BellmanFord::new().shortest_paths(source, weight_by_edge)
}
