use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::{Error, Result};

/// An edge weight: totally ordered, with a zero and overflow-checked addition
pub trait Weight: Copy + Ord + Debug {
    /// The additive identity, distance from a node to itself
    fn zero() -> Self;

    /// Adds two weights, `None` when the sum is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t as CheckedAdd>::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn zero() -> Self {
                    OrderedFloat(0.0)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self.0 + rhs.0;
                    sum.is_finite().then_some(OrderedFloat(sum))
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Distance from a source: either a finite path weight or unreachable.
///
/// `Infinite` orders above every `Finite` value, so `min` works directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    /// Distance of the source to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Extends this distance by one edge. Infinity absorbs any weight.
    pub fn add(self, weight: W) -> Result<Self> {
        match self {
            Distance::Infinite => Ok(Distance::Infinite),
            Distance::Finite(d) => d
                .checked_add(weight)
                .map(Distance::Finite)
                .ok_or(Error::Overflow),
        }
    }
}

impl<W> From<W> for Distance<W> {
    fn from(weight: W) -> Self {
        Distance::Finite(weight)
    }
}

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPaths<N, W>
where
    N: Eq + Hash,
{
    /// Source node
    pub source: N,

    /// Distance from source to every known node
    pub distances: HashMap<N, Distance<W>>,

    /// Predecessor of each reached node (other than the source) on a shortest path
    pub predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Weight,
{
    /// Distance to `node`; nodes never seen are unreachable
    pub fn distance(&self, node: &N) -> Distance<W> {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// Nodes with a finite distance, together with that distance
    pub fn reachable(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.distances
            .iter()
            .filter_map(|(node, d)| d.finite().map(|w| (node, w)))
    }

    pub fn into_distances(self) -> HashMap<N, Distance<W>> {
        self.distances
    }

    /// Reconstructs the path from the source to `target` by following predecessors
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.distance(target).is_finite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut visited = HashSet::new();
        let mut current = target.clone();

        while current != self.source {
            if !visited.insert(current.clone()) {
                warn!("Cycle detected in path reconstruction at node {:?}", current);
                return None;
            }
            current = self.predecessors.get(&current)?.clone();
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPaths<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPaths<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target)
    }
}
