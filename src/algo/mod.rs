//! Discrete geometry operators on triangle meshes.
//!
//! - **Metrics**: face normals, face areas, vertex areas
//! - **Edges**: directed edge set of a face list
//! - **Gradient**: per-face gradient of per-vertex functions
//! - **Orientation**: sparse operator for `<grad f x grad g, n>`
//! - **Geodesics**: Dijkstra over the edge graph, all-pairs distance matrix
//! - **Sampling**: farthest point sampling over a distance matrix
//!
//! Every operator is a pure function of its inputs. Per-face work and the
//! independent single-source solves run on rayon's thread pool; each such
//! operator has a sequential counterpart that gives identical results.

pub mod edges;
pub mod geodesic;
pub mod gradient;
pub mod metrics;
pub mod orientation;
mod progress;
pub mod sampling;
pub mod sparse;

pub use progress::Progress;
