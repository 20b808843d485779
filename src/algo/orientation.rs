//! Orientation operator of a gradient field.
//!
//! Given the gradient `grad f` of some function on the faces, the orientation
//! operator `W_f` is the sparse vertex-by-vertex matrix such that, for any
//! per-vertex function `g`, `(W_f g)_i` approximates `<grad f x grad g, n>` at
//! vertex `i`. It is assembled per face from `<n x grad f, grad g>`, averaged
//! over the faces around each vertex and normalized by the vertex area.
//!
//! Functional map pipelines use it to ask that a map preserve orientation:
//! a direct map commutes with the orientation operators of corresponding
//! descriptors.
//!
//! # Example
//!
//! ```
//! use dgmesh::algo::gradient::{gradient, GradientOptions};
//! use dgmesh::algo::metrics::{face_normals, vertex_areas};
//! use dgmesh::algo::orientation::orientation_operator;
//! use nalgebra::{DVector, Point3};
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2], [0, 2, 3]];
//! let normals = face_normals(&vertices, &faces);
//! let areas = vertex_areas(&vertices, &faces, None).unwrap();
//!
//! let f: Vec<f64> = vertices.iter().map(|p| p.x).collect();
//! let grad_f = gradient(&f, &vertices, &faces, &normals, &GradientOptions::default()).unwrap();
//! let op = orientation_operator(&grad_f, &vertices, &faces, &normals, &areas, false).unwrap();
//!
//! // <grad x ^ grad y, z> = 1 everywhere on a counter-clockwise planar mesh
//! let g = DVector::from_iterator(4, vertices.iter().map(|p| p.y));
//! let w = op.mul_vec(&g);
//! assert!(w.iter().all(|&v| (v - 1.0).abs() < 1e-10));
//! ```

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use super::sparse::CsrMatrix;
use crate::error::{MeshError, Result};

/// Build the orientation operator of a per-face gradient field.
///
/// # Arguments
///
/// * `grad_field` - One vector per face, typically from [`super::gradient::gradient`]
/// * `vertices` - Vertex positions
/// * `faces` - Triangle faces
/// * `normals` - Unit normal of each face
/// * `vertex_areas` - Area of each vertex, as from [`super::metrics::vertex_areas`]
/// * `rotated` - Whether `grad_field` already holds `n x grad f` per face
///
/// # Returns
///
/// An `n x n` sparse matrix, `n = vertices.len()`, with non-zero entries only
/// on the diagonal and at pairs joined by a mesh edge.
///
/// # Errors
///
/// * [`MeshError::DimensionMismatch`] if the per-face or per-vertex inputs
///   do not match the mesh.
/// * [`MeshError::ZeroVertexArea`] if a vertex area is zero or not finite,
///   since its row could not be normalized.
///
/// The per-face assembly runs in parallel. Use
/// [`orientation_operator_sequential`] for single-threaded execution.
pub fn orientation_operator(
    grad_field: &[Vector3<f64>],
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    normals: &[Vector3<f64>],
    vertex_areas: &[f64],
    rotated: bool,
) -> Result<CsrMatrix> {
    orientation_operator_impl(grad_field, vertices, faces, normals, vertex_areas, rotated, true)
}

/// Build the orientation operator of a per-face gradient field (sequential version).
pub fn orientation_operator_sequential(
    grad_field: &[Vector3<f64>],
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    normals: &[Vector3<f64>],
    vertex_areas: &[f64],
    rotated: bool,
) -> Result<CsrMatrix> {
    orientation_operator_impl(grad_field, vertices, faces, normals, vertex_areas, rotated, false)
}

fn orientation_operator_impl(
    grad_field: &[Vector3<f64>],
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    normals: &[Vector3<f64>],
    vertex_areas: &[f64],
    rotated: bool,
    parallel: bool,
) -> Result<CsrMatrix> {
    MeshError::check_len("vertex areas", vertices.len(), vertex_areas.len())?;

    let inv_area = vertex_areas
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            if a == 0.0 || !a.is_finite() {
                Err(MeshError::ZeroVertexArea { vertex: i })
            } else {
                Ok(1.0 / a)
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    let weights = orientation_weights_impl(grad_field, vertices, faces, normals, rotated, parallel)?;
    weights.scale_rows(&inv_area)
}

/// Assemble the orientation operator before normalization by vertex areas.
///
/// For every face and each of its directed edges `(i, j)`, two pairings
/// `S_ij` and `S_ji` of the rotated field with the barycentric gradient
/// directions are added as `(i, j) += S_ij`, `(j, i) += S_ji`,
/// `(i, i) -= S_ij`, `(j, j) -= S_ji`. Every row therefore sums to zero.
///
/// # Errors
///
/// Returns [`MeshError::DimensionMismatch`] if `grad_field` or `normals` do not
/// have one entry per face.
pub fn orientation_weights(
    grad_field: &[Vector3<f64>],
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    normals: &[Vector3<f64>],
    rotated: bool,
) -> Result<CsrMatrix> {
    orientation_weights_impl(grad_field, vertices, faces, normals, rotated, true)
}

/// Assemble the un-normalized orientation operator (sequential version).
pub fn orientation_weights_sequential(
    grad_field: &[Vector3<f64>],
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    normals: &[Vector3<f64>],
    rotated: bool,
) -> Result<CsrMatrix> {
    orientation_weights_impl(grad_field, vertices, faces, normals, rotated, false)
}

fn orientation_weights_impl(
    grad_field: &[Vector3<f64>],
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    normals: &[Vector3<f64>],
    rotated: bool,
    parallel: bool,
) -> Result<CsrMatrix> {
    MeshError::check_len("gradient field", faces.len(), grad_field.len())?;
    MeshError::check_len("face normals", faces.len(), normals.len())?;

    let n = vertices.len();

    let per_face = |(face, (normal, grad)): (&[usize; 3], (&Vector3<f64>, &Vector3<f64>))| {
        face_triplets(vertices, face, normal, grad, rotated)
    };

    let triplets: Vec<(usize, usize, f64)> = if parallel {
        faces
            .par_iter()
            .zip(normals.par_iter().zip(grad_field.par_iter()))
            .flat_map_iter(per_face)
            .collect()
    } else {
        faces
            .iter()
            .zip(normals.iter().zip(grad_field.iter()))
            .flat_map(per_face)
            .collect()
    };

    if normals.iter().any(|nrm| !nrm.iter().all(|c| c.is_finite())) {
        log::warn!("orientation operator assembled with non-finite face normals (degenerate faces?)");
    }

    let weights = CsrMatrix::from_triplets(n, n, triplets);
    log::debug!(
        "assembled orientation operator: {} vertices, {} faces, {} non-zeros",
        n,
        faces.len(),
        weights.nnz()
    );

    Ok(weights)
}

/// The twelve triplets one face contributes.
fn face_triplets(
    vertices: &[Point3<f64>],
    face: &[usize; 3],
    normal: &Vector3<f64>,
    grad: &Vector3<f64>,
    rotated: bool,
) -> [(usize, usize, f64); 12] {
    let [i1, i2, i3] = *face;
    let (v1, v2, v3) = (vertices[i1], vertices[i2], vertices[i3]);

    // Barycentric gradient directions scaled by the face area
    let jc1 = normal.cross(&(v3 - v2)) / 2.0;
    let jc2 = normal.cross(&(v1 - v3)) / 2.0;
    let jc3 = normal.cross(&(v2 - v1)) / 2.0;

    let rot = if rotated { *grad } else { normal.cross(grad) };

    let s1 = jc1.dot(&rot) / 3.0;
    let s2 = jc2.dot(&rot) / 3.0;
    let s3 = jc3.dot(&rot) / 3.0;

    // Edge i -> j pairs S_ij with the direction of j, S_ji with that of i.
    let edges = [(i1, i2, s2, s1), (i2, i3, s3, s2), (i3, i1, s1, s3)];

    let mut out = [(0, 0, 0.0); 12];
    for (k, &(i, j, sij, sji)) in edges.iter().enumerate() {
        out[4 * k] = (i, j, sij);
        out[4 * k + 1] = (j, i, sji);
        out[4 * k + 2] = (i, i, -sij);
        out[4 * k + 3] = (j, j, -sji);
    }
    out
}
