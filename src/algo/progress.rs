//! Progress reporting for long-running algorithms.
//!
//! The all-pairs geodesic solve is quadratic in the vertex count; callers
//! that want feedback pass a [`Progress`] in.
//!
//! # Example
//!
//! ```
//! use dgmesh::algo::Progress;
//! use dgmesh::algo::geodesic::{geodesic_distance_matrix_with_progress, DistanceMatrixOptions};
//! use nalgebra::Point3;
//!
//! let progress = Progress::new(|current, total, message| {
//!     eprintln!("[{}/{}] {}", current, total, message);
//! });
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let d = geodesic_distance_matrix_with_progress(
//!     &vertices,
//!     &[[0, 1, 2]],
//!     &DistanceMatrixOptions::default(),
//!     &progress,
//! );
//! assert_eq!(d.nrows(), 3);
//! ```

/// A progress callback that receives updates during long-running operations.
///
/// The callback receives:
/// - `current`: Number of completed steps
/// - `total`: Total number of steps
/// - `message`: Description of the current operation
///
/// Parallel algorithms may call it from several threads, and completions
/// may be reported out of order.
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
