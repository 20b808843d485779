//! Edge extraction from a face list.

use std::collections::BTreeSet;

/// Compute the directed edges of a triangle mesh.
///
/// Every face `[v0, v1, v2]` contributes `(v0, v1)`, `(v1, v2)` and `(v2, v0)`.
/// The edges are collected as a set, so a directed edge appearing in several
/// faces is reported once. An interior edge of a consistently oriented mesh
/// shows up in both directions, a boundary edge in one.
///
/// Edges are returned sorted by `(source, target)`.
///
/// # Example
///
/// ```
/// use dgmesh::algo::edges::edges_from_faces;
///
/// let edges = edges_from_faces(&[[0, 1, 2], [1, 3, 2]]);
/// assert_eq!(edges, vec![[0, 1], [1, 2], [1, 3], [2, 0], [2, 1], [3, 2]]);
/// ```
pub fn edges_from_faces(faces: &[[usize; 3]]) -> Vec<[usize; 2]> {
    let mut edges = BTreeSet::new();

    for &[a, b, c] in faces {
        edges.insert([a, b]);
        edges.insert([b, c]);
        edges.insert([c, a]);
    }

    edges.into_iter().collect()
}
