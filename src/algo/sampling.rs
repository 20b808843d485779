//! Farthest point sampling.
//!
//! Greedily picks a well-spread subset of points given their pairwise
//! distances: each new sample is the point farthest from all samples chosen
//! so far. Any distance matrix works; on meshes it is usually the output of
//! [`super::geodesic::geodesic_distance_matrix`].
//!
//! # Example
//!
//! ```
//! use dgmesh::algo::sampling::{farthest_point_sampling, SampleInit, SamplingOptions};
//! use nalgebra::DMatrix;
//!
//! // Eleven points on a line, one unit apart
//! let d = DMatrix::from_fn(11, 11, |i, j| (i as f64 - j as f64).abs());
//!
//! let options = SamplingOptions::default().with_init(SampleInit::MaxRowSum);
//! let samples = farthest_point_sampling(&d, 3, &options).unwrap();
//! assert_eq!(samples, vec![0, 10, 5]);
//! ```

use nalgebra::DMatrix;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{MeshError, Result};

/// How the first sample is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleInit {
    /// Pick the first sample uniformly at random.
    Random,
    /// Pick the point with the largest total distance to all others.
    MaxRowSum,
}

/// Options for [`farthest_point_sampling`].
#[derive(Debug, Clone)]
pub struct SamplingOptions {
    /// How the first sample is chosen.
    pub init: SampleInit,
    /// Seed of the generator used by [`SampleInit::Random`].
    pub seed: u64,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            init: SampleInit::Random,
            seed: 0,
        }
    }
}

impl SamplingOptions {
    /// Set how the first sample is chosen.
    pub fn with_init(mut self, init: SampleInit) -> Self {
        self.init = init;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Select `k` indices by farthest point sampling over the distance matrix `d`.
///
/// The random first pick, if any, is drawn from a `SmallRng` seeded with
/// `options.seed`, so equal inputs always give equal samples. Use
/// [`farthest_point_sampling_with_rng`] to supply a generator.
///
/// # Errors
///
/// * [`MeshError::NotSquare`] if `d` is not square.
/// * [`MeshError::InvalidParameter`] if `k` exceeds the number of points.
pub fn farthest_point_sampling(
    d: &DMatrix<f64>,
    k: usize,
    options: &SamplingOptions,
) -> Result<Vec<usize>> {
    let mut rng = SmallRng::seed_from_u64(options.seed);
    farthest_point_sampling_with_rng(d, k, options.init, &mut rng)
}

/// Select `k` indices by farthest point sampling, drawing the random first pick from `rng`.
///
/// `d` must be a square matrix of non-negative distances with a zero
/// diagonal. `f64::INFINITY` entries (unreachable pairs) count as maximally
/// far, so every connected component is visited before any of them is
/// sampled twice. After the first pick, each step takes the point whose
/// distance to the nearest selected point is largest, the lowest index
/// winning ties. The result holds `k` distinct indices; with `k` equal to
/// the number of points it is a permutation.
///
/// `rng` is not used with [`SampleInit::MaxRowSum`].
pub fn farthest_point_sampling_with_rng<R: Rng + ?Sized>(
    d: &DMatrix<f64>,
    k: usize,
    init: SampleInit,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = d.nrows();
    if d.ncols() != n {
        return Err(MeshError::NotSquare {
            rows: n,
            cols: d.ncols(),
        });
    }
    if k > n {
        return Err(MeshError::invalid_param(
            "k",
            k,
            "cannot sample more points than the distance matrix has",
        ));
    }
    if k == 0 {
        log::warn!("farthest point sampling called with k = 0");
        return Ok(Vec::new());
    }

    let first = match init {
        SampleInit::Random => rng.gen_range(0..n),
        SampleInit::MaxRowSum => {
            let sums: Vec<f64> = (0..n).map(|i| d.row(i).sum()).collect();
            argmax(&sums, &vec![false; n])
        }
    };

    let mut selected = vec![false; n];
    let mut samples = Vec::with_capacity(k);
    selected[first] = true;
    samples.push(first);

    let mut dists: Vec<f64> = d.row(first).iter().copied().collect();

    for _ in 1..k {
        let next = argmax(&dists, &selected);
        selected[next] = true;
        samples.push(next);

        for (j, dist) in dists.iter_mut().enumerate() {
            *dist = dist.min(d[(next, j)]);
        }
    }

    log::debug!("farthest point sampling selected {} of {} points", k, n);

    Ok(samples)
}

/// Index of the largest value among the entries not yet selected.
///
/// The first index wins ties and NaN never wins against a number. If every
/// candidate is NaN the first candidate is returned.
fn argmax(values: &[f64], selected: &[bool]) -> usize {
    let mut best: Option<(usize, f64)> = None;

    for (i, &v) in values.iter().enumerate() {
        if selected[i] {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, b)) => v > b || (b.is_nan() && !v.is_nan()),
        };
        if better {
            best = Some((i, v));
        }
    }

    best.map_or(0, |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::geodesic::geodesic_distance_matrix;
    use crate::mesh::fixtures::{grid, tetrahedron};
    use nalgebra::Point3;

    fn line(n: usize) -> DMatrix<f64> {
        DMatrix::from_fn(n, n, |i, j| (i as f64 - j as f64).abs())
    }

    #[test]
    fn test_line_spread() {
        let d = line(11);
        let options = SamplingOptions::default().with_init(SampleInit::MaxRowSum);
        let samples = farthest_point_sampling(&d, 5, &options).unwrap();

        // Both ends tie on row sum; the first index wins
        assert_eq!(samples, vec![0, 10, 5, 2, 7]);
    }

    #[test]
    fn test_full_permutation() {
        let mesh = grid(3);
        let d = geodesic_distance_matrix(mesh.vertices(), mesh.faces());
        let n = mesh.num_vertices();

        for init in [SampleInit::Random, SampleInit::MaxRowSum] {
            let options = SamplingOptions::default().with_init(init).with_seed(7);
            let mut samples = farthest_point_sampling(&d, n, &options).unwrap();
            samples.sort_unstable();
            assert_eq!(samples, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_deterministic_without_random_init() {
        let mesh = grid(4);
        let d = geodesic_distance_matrix(mesh.vertices(), mesh.faces());

        let a = farthest_point_sampling(&d, 6, &SamplingOptions::default().with_init(SampleInit::MaxRowSum).with_seed(1))
            .unwrap();
        let b = farthest_point_sampling(&d, 6, &SamplingOptions::default().with_init(SampleInit::MaxRowSum).with_seed(2))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_random_reproducible() {
        let d = line(50);
        let options = SamplingOptions::default().with_seed(42);

        let a = farthest_point_sampling(&d, 10, &options).unwrap();
        let b = farthest_point_sampling(&d, 10, &options).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        assert!(a[0] < 50);
    }

    #[test]
    fn test_injected_rng() {
        let d = line(20);
        let mut rng = SmallRng::seed_from_u64(3);
        let samples = farthest_point_sampling_with_rng(&d, 4, SampleInit::Random, &mut rng).unwrap();

        let mut sorted = samples.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
        // After the first pick, the next one is an end of the line
        assert!(samples[1] == 0 || samples[1] == 19);
    }

    #[test]
    fn test_infinite_distance_is_farthest() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(6.0, 0.0, 0.0),
            Point3::new(5.0, 1.0, 0.0),
        ];
        let d = geodesic_distance_matrix(&vertices, &[[0, 1, 2], [3, 4, 5]]);

        let options = SamplingOptions::default().with_init(SampleInit::MaxRowSum);
        let samples = farthest_point_sampling(&d, 2, &options).unwrap();

        // Every row sum is infinite, so the first point wins; the second
        // sample comes from the other component
        assert_eq!(samples[0], 0);
        assert_eq!(samples[1], 3);
    }

    #[test]
    fn test_coincident_points_stay_distinct() {
        let d = DMatrix::zeros(4, 4);
        let options = SamplingOptions::default().with_init(SampleInit::MaxRowSum);
        let samples = farthest_point_sampling(&d, 4, &options).unwrap();
        assert_eq!(samples, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_tetrahedron_all_vertices() {
        let mesh = tetrahedron();
        let d = geodesic_distance_matrix(mesh.vertices(), mesh.faces());
        let options = SamplingOptions::default().with_init(SampleInit::MaxRowSum);

        let mut samples = farthest_point_sampling(&d, 4, &options).unwrap();
        samples.sort_unstable();
        assert_eq!(samples, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_invalid_inputs() {
        let d = line(3);
        let err = farthest_point_sampling(&d, 4, &SamplingOptions::default()).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { name: "k", .. }));

        let rect = DMatrix::zeros(2, 3);
        let err = farthest_point_sampling(&rect, 1, &SamplingOptions::default()).unwrap_err();
        assert_eq!(err, MeshError::NotSquare { rows: 2, cols: 3 });

        assert!(farthest_point_sampling(&d, 0, &SamplingOptions::default())
            .unwrap()
            .is_empty());

        let empty = DMatrix::<f64>::zeros(0, 0);
        assert!(farthest_point_sampling(&empty, 0, &SamplingOptions::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_argmax_ties_and_nan() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0], &[false; 3]), 1);
        assert_eq!(argmax(&[f64::NAN, 2.0, 1.0], &[false; 3]), 1);
        assert_eq!(argmax(&[1.0, f64::INFINITY, 5.0], &[false; 3]), 1);
        assert_eq!(argmax(&[9.0, 3.0, 4.0], &[true, false, false]), 2);
    }
}
