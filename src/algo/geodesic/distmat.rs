//! All-pairs geodesic distance matrix.

use std::sync::atomic::{AtomicUsize, Ordering};

use nalgebra::{DMatrix, Point3};
use rayon::prelude::*;

use super::{dijkstra, EdgeGraph};
use crate::algo::Progress;

/// Options for [`geodesic_distance_matrix_with_progress`].
#[derive(Debug, Clone)]
pub struct DistanceMatrixOptions {
    /// Whether to run the single-source solves in parallel.
    pub parallel: bool,
}

impl Default for DistanceMatrixOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl DistanceMatrixOptions {
    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Compute the matrix of edge-graph geodesic distances between all vertex pairs.
///
/// Entry `(i, j)` is the length of the shortest path from vertex `i` to vertex
/// `j` along mesh edges. The matrix is `n x n` with `n = vertices.len()`,
/// symmetric, zero on the diagonal, and `f64::INFINITY` between vertices in
/// different connected components.
///
/// Memory is quadratic in the vertex count.
///
/// This function uses parallel computation by default. Use
/// [`geodesic_distance_matrix_sequential`] for single-threaded execution.
///
/// # Example
///
/// ```
/// use dgmesh::algo::geodesic::geodesic_distance_matrix;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ];
/// let d = geodesic_distance_matrix(&vertices, &[[0, 1, 2]]);
/// assert_eq!(d[(0, 2)], 2.0);
/// ```
pub fn geodesic_distance_matrix(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> DMatrix<f64> {
    geodesic_distance_matrix_with_progress(
        vertices,
        faces,
        &DistanceMatrixOptions::default(),
        &Progress::none(),
    )
}

/// Compute the all-pairs geodesic distance matrix (sequential version).
pub fn geodesic_distance_matrix_sequential(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> DMatrix<f64> {
    geodesic_distance_matrix_with_progress(
        vertices,
        faces,
        &DistanceMatrixOptions::default().with_parallel(false),
        &Progress::none(),
    )
}

/// Compute the all-pairs geodesic distance matrix, reporting one progress step per source vertex.
pub fn geodesic_distance_matrix_with_progress(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
    options: &DistanceMatrixOptions,
    progress: &Progress,
) -> DMatrix<f64> {
    let n = vertices.len();
    let graph = EdgeGraph::from_mesh(vertices, faces);

    log::debug!(
        "geodesic distance matrix: {} vertices, {} edges, parallel = {}",
        n,
        graph.num_edges(),
        options.parallel
    );

    let done = AtomicUsize::new(0);
    let solve = |source: usize| -> Vec<f64> {
        let row = dijkstra(&graph, source);
        let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
        progress.report(finished, n, "Computing geodesic distances");
        row
    };

    let rows: Vec<Vec<f64>> = if options.parallel {
        (0..n).into_par_iter().map(solve).collect()
    } else {
        (0..n).map(solve).collect()
    };

    DMatrix::from_fn(n, n, |i, j| rows[i][j])
}
