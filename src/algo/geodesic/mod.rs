//! Geodesic distance approximation on meshes.
//!
//! Distances are shortest paths along mesh edges, with each edge weighted by
//! its Euclidean length. This is exact on the edge graph and approximates
//! the true surface geodesic distance from above.
//!
//! # Available Algorithms
//!
//! - [`dijkstra`]: distances from one source vertex
//! - [`geodesic_distance_matrix`]: the dense all-pairs distance matrix
//!
//! # Example
//!
//! ```
//! use dgmesh::algo::geodesic::{dijkstra, EdgeGraph};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2], [0, 2, 3]];
//! let graph = EdgeGraph::from_mesh(&vertices, &faces);
//!
//! let d = dijkstra(&graph, 1);
//! assert!((d[3] - 2.0).abs() < 1e-12);
//! ```

mod dijkstra;
mod distmat;

pub use dijkstra::dijkstra;
pub use distmat::{
    geodesic_distance_matrix, geodesic_distance_matrix_sequential,
    geodesic_distance_matrix_with_progress, DistanceMatrixOptions,
};

use nalgebra::Point3;

use super::edges::edges_from_faces;

/// Undirected graph of mesh edges weighted by Euclidean length.
///
/// Stored as sorted adjacency lists. Every edge is present in both
/// directions with the same weight, even when the face list only traverses
/// it one way.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGraph {
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl EdgeGraph {
    /// Build the edge graph of a triangle mesh.
    ///
    /// The graph has one node per vertex, including vertices that belong to
    /// no face (they are isolated).
    pub fn from_mesh(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Self {
        let edges = edges_from_faces(faces);
        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); vertices.len()];

        for [i, j] in edges {
            let length = (vertices[j] - vertices[i]).norm();
            adjacency[i].push((j, length));
            adjacency[j].push((i, length));
        }

        // An edge seen in both directions was pushed twice per endpoint.
        for neighbors in &mut adjacency {
            neighbors.sort_by_key(|&(v, _)| v);
            neighbors.dedup_by_key(|&mut (v, _)| v);
        }

        Self { adjacency }
    }

    /// Number of nodes (mesh vertices).
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbors of a node with the corresponding edge lengths.
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[(usize, f64)] {
        &self.adjacency[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::fixtures::{grid, tetrahedron};

    #[test]
    fn test_graph_symmetric_weights() {
        let mesh = tetrahedron();
        let graph = EdgeGraph::from_mesh(mesh.vertices(), mesh.faces());

        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 6);

        let edge = 2.0 * 2.0_f64.sqrt();
        for v in 0..4 {
            assert_eq!(graph.neighbors(v).len(), 3);
            for &(u, w) in graph.neighbors(v) {
                assert!((w - edge).abs() < 1e-12);
                assert!(graph.neighbors(u).iter().any(|&(x, _)| x == v));
            }
        }
    }

    #[test]
    fn test_graph_boundary_edges_both_ways() {
        // A single triangle traverses each edge in one direction only
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        let graph = EdgeGraph::from_mesh(&vertices, &[[0, 1, 2]]);

        assert_eq!(graph.neighbors(0), &[(1, 3.0), (2, 4.0)]);
        assert_eq!(graph.neighbors(1), &[(0, 3.0), (2, 5.0)]);
        assert_eq!(graph.neighbors(2), &[(0, 4.0), (1, 5.0)]);
    }

    #[test]
    fn test_graph_isolated_vertex() {
        let mut vertices = grid(1).vertices().to_vec();
        vertices.push(Point3::new(9.0, 9.0, 9.0));
        let graph = EdgeGraph::from_mesh(&vertices, grid(1).faces());

        assert_eq!(graph.num_nodes(), 5);
        assert!(graph.neighbors(4).is_empty());
        assert_eq!(graph.num_edges(), 5);
    }

    #[test]
    fn test_interior_edge_weighted_once() {
        // The diagonal 0-3 of a unit square is shared by both faces
        let mesh = grid(1);
        let graph = EdgeGraph::from_mesh(mesh.vertices(), mesh.faces());
        let diagonal = 2.0_f64.sqrt();

        let (_, w) = graph.neighbors(0).iter().copied().find(|&(v, _)| v == 3).unwrap();
        assert!((w - diagonal).abs() < 1e-12);
        assert_eq!(graph.neighbors(0).iter().filter(|&&(v, _)| v == 3).count(), 1);

        let d = geodesic_distance_matrix(mesh.vertices(), mesh.faces());
        assert!((d[(0, 3)] - diagonal).abs() < 1e-12);
        assert!((d[(3, 0)] - diagonal).abs() < 1e-12);
    }
}
