use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use rayon::prelude::*;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::{Distance, ShortestPaths, Weight};
use crate::graph::EdgeWeights;
use crate::Result;

/// Shortest distance between every ordered pair of nodes in `weight_by_edge`.
///
/// Runs one relaxation search per source node on the rayon thread pool.
/// Pairs with no connecting path map to [`Distance::Infinite`]; any reachable
/// negative cycle fails the whole computation.
pub fn all_pairs_shortest_paths<N, W>(
    weight_by_edge: &EdgeWeights<N, W>,
) -> Result<HashMap<(N, N), Distance<W>>>
where
    N: Eq + Hash + Clone + Debug + Send + Sync,
    W: Weight + Send + Sync,
{
    let nodes: Vec<N> = weight_by_edge
        .keys()
        .flat_map(|(from, to)| [from.clone(), to.clone()])
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    debug!("Computing all-pairs distances over {} nodes", nodes.len());

    let bellman_ford = BellmanFord::new();
    let per_source: Vec<ShortestPaths<N, W>> = nodes
        .par_iter()
        .map(|source| bellman_ford.shortest_paths(source, weight_by_edge))
        .collect::<Result<Vec<_>>>()?;

    Ok(per_source
        .into_iter()
        .flat_map(|paths| {
            let source = paths.source;
            paths
                .distances
                .into_iter()
                .map(move |(target, d)| ((source.clone(), target), d))
        })
        .collect())
}
