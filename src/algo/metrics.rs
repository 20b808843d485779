//! Per-face normals and areas, and per-vertex areas.
//!
//! All three quantities are read directly off the face list; no adjacency
//! structure is built.
//!
//! # Example
//!
//! ```
//! use dgmesh::algo::metrics::{face_areas, face_normals, vertex_areas};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let normals = face_normals(&vertices, &faces);
//! let areas = face_areas(&vertices, &faces);
//! let vert_areas = vertex_areas(&vertices, &faces, Some(&areas)).unwrap();
//!
//! assert!((normals[0].z - 1.0).abs() < 1e-12);
//! assert!((areas[0] - 0.5).abs() < 1e-12);
//! assert!((vert_areas.iter().sum::<f64>() - 0.5).abs() < 1e-12);
//! ```

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use crate::error::{MeshError, Result};

/// Unnormalized normal of a face: `(v2 - v1) x (v3 - v1)`.
///
/// Its length is twice the face area.
#[inline]
pub(crate) fn face_cross(vertices: &[Point3<f64>], face: &[usize; 3]) -> Vector3<f64> {
    let v1 = vertices[face[0]];
    let v2 = vertices[face[1]];
    let v3 = vertices[face[2]];
    (v2 - v1).cross(&(v3 - v1))
}

/// Compute the unit normal of every face.
///
/// The normal follows the face winding: `normalize((v2 - v1) x (v3 - v1))`.
/// Degenerate (zero-area) faces produce NaN components.
///
/// This function uses parallel computation by default. Use
/// [`face_normals_sequential`] for single-threaded execution.
pub fn face_normals(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Vec<Vector3<f64>> {
    faces
        .par_iter()
        .map(|face| {
            let n = face_cross(vertices, face);
            n / n.norm()
        })
        .collect()
}

/// Compute the unit normal of every face (sequential version).
pub fn face_normals_sequential(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Vec<Vector3<f64>> {
    faces
        .iter()
        .map(|face| {
            let n = face_cross(vertices, face);
            n / n.norm()
        })
        .collect()
}

/// Compute the area of every face: `0.5 * |(v2 - v1) x (v3 - v1)|`.
///
/// This function uses parallel computation by default. Use
/// [`face_areas_sequential`] for single-threaded execution.
pub fn face_areas(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Vec<f64> {
    faces
        .par_iter()
        .map(|face| 0.5 * face_cross(vertices, face).norm())
        .collect()
}

/// Compute the area of every face (sequential version).
pub fn face_areas_sequential(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Vec<f64> {
    faces
        .iter()
        .map(|face| 0.5 * face_cross(vertices, face).norm())
        .collect()
}

/// Compute per-vertex areas as one third of the area of the incident faces.
///
/// If `face_areas` is `None` the face areas are computed first. Vertices that
/// belong to no face get an area of zero.
///
/// # Errors
///
/// Returns [`MeshError::DimensionMismatch`] if `face_areas` is supplied and its
/// length differs from the number of faces.
pub fn vertex_areas(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    face_areas: Option<&[f64]>,
) -> Result<Vec<f64>> {
    match face_areas {
        Some(areas) => {
            MeshError::check_len("face areas", faces.len(), areas.len())?;
            Ok(vertex_areas_from_faces(vertices.len(), faces, areas))
        }
        None => {
            let areas = self::face_areas(vertices, faces);
            Ok(vertex_areas_from_faces(vertices.len(), faces, &areas))
        }
    }
}

/// Scatter one third of each face area onto its three corners.
pub(crate) fn vertex_areas_from_faces(
    num_vertices: usize,
    faces: &[[usize; 3]],
    face_areas: &[f64],
) -> Vec<f64> {
    let mut areas = vec![0.0; num_vertices];

    // A vertex repeated inside one face receives one share per occurrence.
    for (face, &area) in faces.iter().zip(face_areas) {
        let share = area / 3.0;
        for &v in face {
            areas[v] += share;
        }
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::fixtures::{grid, tetrahedron};

    #[test]
    fn test_unit_right_triangle() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2]];

        let areas = face_areas(&vertices, &faces);
        assert!((areas[0] - 0.5).abs() < 1e-12);

        let normals = face_normals(&vertices, &faces);
        assert!((normals[0] - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_normal_follows_winding() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];

        let normals = face_normals(&vertices, &[[0, 2, 1]]);
        assert!((normals[0] + Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_normals_unit_and_orthogonal() {
        let mesh = tetrahedron();
        let normals = face_normals(mesh.vertices(), mesh.faces());

        for (f, n) in normals.iter().enumerate() {
            let [v1, v2, v3] = mesh.face_vertices(f);
            assert!((n.norm() - 1.0).abs() < 1e-12, "face {} normal not unit", f);
            assert!(n.dot(&(v2 - v1)).abs() < 1e-12);
            assert!(n.dot(&(v3 - v1)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_face_normal_is_nan() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let faces = vec![[0, 1, 2]];

        let normals = face_normals(&vertices, &faces);
        assert!(normals[0].x.is_nan());

        let areas = face_areas(&vertices, &faces);
        assert_eq!(areas[0], 0.0);
    }

    #[test]
    fn test_vertex_areas_conserve_total() {
        let mesh = grid(4);
        let areas = face_areas(mesh.vertices(), mesh.faces());
        let vert = vertex_areas(mesh.vertices(), mesh.faces(), None).unwrap();

        let total_faces: f64 = areas.iter().sum();
        let total_verts: f64 = vert.iter().sum();
        assert!((total_faces - 16.0).abs() < 1e-10);
        assert!((total_faces - total_verts).abs() < 1e-10);
    }

    #[test]
    fn test_vertex_areas_accumulate() {
        // Two triangles sharing the edge (1, 2)
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2], [1, 3, 2]];

        let vert = vertex_areas(&vertices, &faces, None).unwrap();
        assert!((vert[0] - 0.5 / 3.0).abs() < 1e-12);
        assert!((vert[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((vert[2] - 1.0 / 3.0).abs() < 1e-12);
        assert!((vert[3] - 0.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertex_areas_supplied_face_areas() {
        let mesh = grid(2);
        let areas = vec![3.0; mesh.num_faces()];
        let vert = vertex_areas(mesh.vertices(), mesh.faces(), Some(&areas)).unwrap();

        // Corner (0, 0) touches two faces
        assert!((vert[0] - 2.0).abs() < 1e-12);

        let err = vertex_areas(mesh.vertices(), mesh.faces(), Some(&areas[1..])).unwrap_err();
        assert!(matches!(err, MeshError::DimensionMismatch { what: "face areas", .. }));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let mesh = grid(6);
        assert_eq!(
            face_areas(mesh.vertices(), mesh.faces()),
            face_areas_sequential(mesh.vertices(), mesh.faces())
        );
        assert_eq!(
            face_normals(mesh.vertices(), mesh.faces()),
            face_normals_sequential(mesh.vertices(), mesh.faces())
        );
    }
}
