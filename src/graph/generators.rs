use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::Rng;

/// Generates a random directed graph on nodes `0..n` with about `edge_factor * n` edges.
/// Weights are drawn from `1..=max_weight`; self-loops are skipped.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_weight: u32,
) -> DirectedGraph<usize, u32> {
    let mut graph = DirectedGraph::new();
    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight.max(1)));
        }
    }

    graph
}

/// Generates a `width * height` grid with unit-weight edges between 4-connected neighbors.
/// Node `(x, y)` is numbered `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<usize, u32> {
    let mut graph = DirectedGraph::new();
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            graph.add_node(current);

            if x > 0 {
                graph.add_edge(current, index(x - 1, y), 1);
            }
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), 1);
            }
            if y > 0 {
                graph.add_edge(current, index(x, y - 1), 1);
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), 1);
            }
        }
    }

    graph
}

/// Generates a random geometric graph in the unit square.
/// Points closer than `r` are connected both ways, weighted by their Euclidean distance.
pub fn geometric_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    r: f64,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();

    let points: Vec<(f64, f64)> = (0..n)
        .map(|v| {
            graph.add_node(v);
            (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
        })
        .collect();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            if dist <= r {
                graph.add_edge(i, j, OrderedFloat(dist));
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_graph_shape() {
        let graph = grid_graph(3, 2);
        assert_eq!(graph.node_count(), 6);
        // 2 * (horizontal pairs + vertical pairs) = 2 * (4 + 3)
        assert_eq!(graph.edge_count(), 14);
        assert!(graph.has_edge(&0, &1));
        assert!(graph.has_edge(&4, &1));
        assert!(!graph.has_edge(&2, &3));
    }

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = random_graph(&mut StdRng::seed_from_u64(7), 50, 3.0, 20);
        let b = random_graph(&mut StdRng::seed_from_u64(7), 50, 3.0, 20);
        assert_eq!(a.node_count(), 50);
        assert_eq!(a.edge_weights(), b.edge_weights());
        assert!(a.edge_weights().keys().all(|(u, v)| u != v));
        assert!(a.edge_weights().values().all(|w| (1..=20).contains(w)));
    }

    #[test]
    fn test_geometric_graph_is_symmetric() {
        let graph = geometric_graph(&mut StdRng::seed_from_u64(3), 30, 0.4);
        for ((u, v), w) in graph.edge_weights() {
            assert_eq!(graph.get_edge_weight(v, u), Some(*w));
        }
    }
}
