//! Discrete gradient of per-vertex scalar functions.
//!
//! A function given by its values at the vertices is interpolated linearly
//! over each triangle, so its gradient is constant per face. With `A` the
//! face area and `n` its unit normal, the gradient of the barycentric
//! coordinate of corner `k` is `n x e_k / (2A)`, where `e_k` is the edge
//! opposite to corner `k`, oriented along the face winding.
//!
//! # Example
//!
//! ```
//! use dgmesh::algo::gradient::{gradient, GradientOptions};
//! use dgmesh::algo::metrics::face_normals;
//! use nalgebra::{Point3, Vector3};
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//! let normals = face_normals(&vertices, &faces);
//!
//! // f(x, y, z) = 2x + 3y
//! let f = vec![0.0, 2.0, 3.0];
//! let grad = gradient(&f, &vertices, &faces, &normals, &GradientOptions::default()).unwrap();
//! assert!((grad[0] - Vector3::new(2.0, 3.0, 0.0)).norm() < 1e-12);
//! ```

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use super::metrics;
use crate::error::{MeshError, Result};

/// Options for [`gradient`].
#[derive(Debug, Clone)]
pub struct GradientOptions {
    /// Precomputed per-face areas. Computed from the mesh when `None`.
    ///
    /// Supplied areas are not checked against the geometry; they must come
    /// from the same mesh.
    pub face_areas: Option<Vec<f64>>,

    /// Use the three-term expression `f1 g1 + f2 g2 + f3 g3` instead of the
    /// two-term expression `(f2 - f1) g2 + (f3 - f1) g3`.
    ///
    /// Both are equal in exact arithmetic. The symmetric one treats the three
    /// corners alike at the cost of one more cross product per face.
    pub symmetric: bool,

    /// Whether to use parallel processing across faces.
    pub parallel: bool,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            face_areas: None,
            symmetric: false,
            parallel: true,
        }
    }
}

impl GradientOptions {
    /// Use precomputed per-face areas.
    pub fn with_face_areas(mut self, areas: Vec<f64>) -> Self {
        self.face_areas = Some(areas);
        self
    }

    /// Select the symmetric three-term expression.
    pub fn with_symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Compute the per-face gradient of a per-vertex scalar function.
///
/// # Arguments
///
/// * `f` - Function value at each vertex
/// * `vertices` - Vertex positions
/// * `faces` - Triangle faces
/// * `normals` - Unit normal of each face, as from [`metrics::face_normals`]
/// * `options` - Face areas, expression and parallelism
///
/// # Returns
///
/// One gradient vector per face, lying in the face plane. Degenerate faces
/// yield non-finite vectors.
///
/// # Errors
///
/// Returns [`MeshError::DimensionMismatch`] if `f`, `normals` or the supplied
/// face areas do not match the mesh.
pub fn gradient(
    f: &[f64],
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    normals: &[Vector3<f64>],
    options: &GradientOptions,
) -> Result<Vec<Vector3<f64>>> {
    MeshError::check_len("function values", vertices.len(), f.len())?;
    MeshError::check_len("face normals", faces.len(), normals.len())?;

    let computed;
    let areas: &[f64] = match &options.face_areas {
        Some(areas) => {
            MeshError::check_len("face areas", faces.len(), areas.len())?;
            areas
        }
        None => {
            computed = if options.parallel {
                metrics::face_areas(vertices, faces)
            } else {
                metrics::face_areas_sequential(vertices, faces)
            };
            &computed
        }
    };

    let compute_face = |fi: usize| -> Vector3<f64> {
        let [i1, i2, i3] = faces[fi];
        let (v1, v2, v3) = (vertices[i1], vertices[i2], vertices[i3]);
        let n = &normals[fi];
        let scale = 1.0 / (2.0 * areas[fi]);

        let grad2 = n.cross(&(v1 - v3)) * scale;
        let grad3 = n.cross(&(v2 - v1)) * scale;

        if options.symmetric {
            let grad1 = n.cross(&(v3 - v2)) * scale;
            grad1 * f[i1] + grad2 * f[i2] + grad3 * f[i3]
        } else {
            grad2 * (f[i2] - f[i1]) + grad3 * (f[i3] - f[i1])
        }
    };

    let result = if options.parallel {
        (0..faces.len()).into_par_iter().map(compute_face).collect()
    } else {
        (0..faces.len()).map(compute_face).collect()
    };

    Ok(result)
}
