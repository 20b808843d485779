//! Core mesh data structures.
//!
//! The operators in [`crate::algo`] work on plain vertex and face arrays.
//! [`TriMesh`] bundles the two, validates face indices on construction and
//! offers convenience methods that forward to the operators.
//!
//! ```
//! use dgmesh::mesh::TriMesh;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh = TriMesh::new(vertices, faces).unwrap();
//! assert_eq!(mesh.edges(), vec![[0, 1], [1, 2], [2, 0]]);
//! ```

#[cfg(test)]
pub(crate) mod fixtures;
mod trimesh;

pub use trimesh::TriMesh;
