//! # dgmesh
//!
//! Discrete differential geometry on triangle meshes.
//!
//! dgmesh computes the per-face and per-vertex quantities that functional
//! map and shape analysis pipelines are built on: face normals and areas,
//! vertex areas, gradients of vertex functions, orientation operators,
//! edge-graph geodesic distances and farthest point samples.
//!
//! ## Features
//!
//! - **Plain arrays in, plain arrays out**: operators take vertex positions
//!   and face index triples, no adjacency structure required
//! - **Sparse operators**: the orientation operator is assembled from
//!   per-face triplets into a CSR matrix
//! - **Parallel by default**: per-face work and all-pairs geodesics use rayon
//! - **Reproducible sampling**: random choices come from a seeded generator
//!
//! ## Quick Start
//!
//! ```
//! use dgmesh::prelude::*;
//! use dgmesh::algo::gradient::GradientOptions;
//! use dgmesh::algo::sampling::{SampleInit, SamplingOptions};
//! use nalgebra::{DVector, Point3};
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2], [0, 2, 3]];
//! let mesh = TriMesh::new(vertices, faces).unwrap();
//!
//! let normals = face_normals(mesh.vertices(), mesh.faces());
//! let areas = vertex_areas(mesh.vertices(), mesh.faces(), None).unwrap();
//!
//! // Gradient of f(x, y, z) = x
//! let f: Vec<f64> = mesh.vertices().iter().map(|p| p.x).collect();
//! let grad = gradient(&f, mesh.vertices(), mesh.faces(), &normals, &GradientOptions::default())
//!     .unwrap();
//!
//! // Orientation operator of grad f, applied to g(x, y, z) = y
//! let op = orientation_operator(&grad, mesh.vertices(), mesh.faces(), &normals, &areas, false)
//!     .unwrap();
//! let g = DVector::from_iterator(4, mesh.vertices().iter().map(|p| p.y));
//! assert!(op.mul_vec(&g).iter().all(|&v| (v - 1.0).abs() < 1e-10));
//!
//! // Geodesic distances and a well-spread pair of vertices
//! let d = mesh.geodesic_distance_matrix();
//! let samples = farthest_point_sampling(
//!     &d,
//!     2,
//!     &SamplingOptions::default().with_init(SampleInit::MaxRowSum),
//! )
//! .unwrap();
//! assert_eq!(samples.len(), 2);
//! ```
//!
//! ## Degenerate input
//!
//! Zero-area faces are not rejected: they yield NaN normals and non-finite
//! gradients. Face indices are checked by [`mesh::TriMesh::new`]; the free
//! functions assume valid indices and panic otherwise. Vertices without
//! faces have zero area and make [`algo::orientation::orientation_operator`]
//! fail with [`error::MeshError::ZeroVertexArea`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// ```
/// use dgmesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::edges::edges_from_faces;
    pub use crate::algo::geodesic::{geodesic_distance_matrix, EdgeGraph};
    pub use crate::algo::gradient::gradient;
    pub use crate::algo::metrics::{face_areas, face_normals, vertex_areas};
    pub use crate::algo::orientation::orientation_operator;
    pub use crate::algo::sampling::farthest_point_sampling;
    pub use crate::algo::sparse::CsrMatrix;
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::TriMesh;
}

// Re-export nalgebra types for convenience
pub use nalgebra;
