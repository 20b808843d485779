//! Single-source shortest paths over the edge graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::EdgeGraph;

/// Tentative distance of a node, ordered so the heap pops the nearest first.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    node: usize,
    distance: f64,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap
        other.distance.total_cmp(&self.distance)
    }
}

/// Shortest path length from `source` to every node of `graph`.
///
/// Returns one entry per node: `0.0` at the source, `f64::INFINITY` for nodes
/// in another connected component.
///
/// # Panics
///
/// Panics if `source` is not a node of the graph.
///
/// # Example
///
/// ```
/// use dgmesh::algo::geodesic::{dijkstra, EdgeGraph};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let graph = EdgeGraph::from_mesh(&vertices, &[[0, 1, 2], [0, 2, 3]]);
///
/// let d = dijkstra(&graph, 1);
/// assert_eq!(d, vec![1.0, 0.0, 1.0, 2.0]);
/// ```
pub fn dijkstra(graph: &EdgeGraph, source: usize) -> Vec<f64> {
    let mut distances = vec![f64::INFINITY; graph.num_nodes()];
    let mut heap = BinaryHeap::new();

    distances[source] = 0.0;
    heap.push(Frontier {
        node: source,
        distance: 0.0,
    });

    while let Some(Frontier { node, distance }) = heap.pop() {
        // Stale entry
        if distance > distances[node] {
            continue;
        }

        for &(next, length) in graph.neighbors(node) {
            let candidate = distance + length;
            if candidate < distances[next] {
                distances[next] = candidate;
                heap.push(Frontier {
                    node: next,
                    distance: candidate,
                });
            }
        }
    }

    distances
}
