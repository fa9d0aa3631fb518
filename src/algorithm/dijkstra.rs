use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPaths, Weight};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{DirectedGraph, EdgeWeights, Graph, Successors};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Length of the shortest path from `start` to `goal` in `graph`
    pub fn path_length<N, W>(
        &self,
        graph: &DirectedGraph<N, W>,
        start: &N,
        goal: &N,
    ) -> Result<Distance<W>>
    where
        N: Eq + Hash + Clone + Ord + Debug,
        W: Weight,
    {
        shortest_path_length(graph.edge_weights(), graph, start, goal)
    }
}

/// State of a finished or interrupted search
struct Search<N, W> {
    tentative: HashMap<N, Distance<W>>,
    predecessors: HashMap<N, N>,
    /// Distance to the goal, when the search stopped there
    reached: Option<Distance<W>>,
}

/// Runs the priority search from `start`, stopping early once `goal` is popped.
///
/// `expand` yields the outgoing `(neighbor, weight)` pairs of a node.
fn search<N, W, F>(start: &N, goal: Option<&N>, mut expand: F) -> Result<Search<N, W>>
where
    N: Eq + Hash + Clone + Ord + Debug,
    W: Weight,
    F: FnMut(&N) -> Result<Vec<(N, W)>>,
{
    let mut frontier = MinPriorityQueue::new();
    let mut tentative = HashMap::new();
    let mut predecessors = HashMap::new();
    let mut visited = HashSet::new();

    tentative.insert(start.clone(), Distance::zero());
    frontier.push(start.clone(), Distance::zero());

    while let Some((node, distance)) = frontier.pop() {
        // Stale entry: a shorter copy was already finalized
        if !visited.insert(node.clone()) {
            continue;
        }

        if goal == Some(&node) {
            debug!("Reached goal {:?} at distance {:?}", node, distance);
            return Ok(Search {
                tentative,
                predecessors,
                reached: Some(distance),
            });
        }

        for (next, weight) in expand(&node)? {
            if visited.contains(&next) {
                continue;
            }
            if weight < W::zero() {
                return Err(Error::NegativeWeight(format!("{:?}", weight)));
            }

            // First sighting starts from infinity, never from the edge weight itself
            let current = *tentative.entry(next.clone()).or_insert(Distance::Infinite);
            let candidate = distance.add(weight)?;

            if candidate < current {
                trace!("Relaxed {:?} -> {:?}: {:?}", node, next, candidate);
                tentative.insert(next.clone(), candidate);
                predecessors.insert(next.clone(), node.clone());
                frontier.push(next, candidate);
            }
        }
    }

    debug!("Frontier exhausted after finalizing {} nodes", visited.len());
    Ok(Search {
        tentative,
        predecessors,
        reached: None,
    })
}

/// Minimum total weight of a path from `start` to `goal`.
///
/// Successors come from `graph`; each step's weight is looked up in
/// `length_by_edge` under the `(node, successor)` pair. Returns
/// [`Distance::Infinite`] when `goal` cannot be reached. Edge weights must be
/// non-negative.
pub fn shortest_path_length<N, W, S>(
    length_by_edge: &EdgeWeights<N, W>,
    graph: &S,
    start: &N,
    goal: &N,
) -> Result<Distance<W>>
where
    N: Eq + Hash + Clone + Ord + Debug,
    W: Weight,
    S: Successors<N> + ?Sized,
{
    let expand = |node: &N| {
        graph
            .successors(node)
            .map(|next| {
                let key = (node.clone(), next);
                match length_by_edge.get(&key) {
                    Some(weight) => Ok((key.1, *weight)),
                    None => Err(Error::MissingEdge(
                        format!("{:?}", key.0),
                        format!("{:?}", key.1),
                    )),
                }
            })
            .collect::<Result<Vec<_>>>()
    };

    let result = search(start, Some(goal), expand)?;
    Ok(result.reached.unwrap_or(Distance::Infinite))
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Eq + Hash + Clone + Ord + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPaths<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::NodeNotFound(format!("{:?}", source)));
        }

        let Search {
            mut tentative,
            predecessors,
            ..
        } = search(source, None, |node| Ok(graph.outgoing_edges(node).collect()))?;

        for node in graph.nodes() {
            tentative.entry(node).or_insert(Distance::Infinite);
        }

        Ok(ShortestPaths {
            source: source.clone(),
            distances: tentative,
            predecessors,
        })
    }
}
