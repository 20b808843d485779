//! Small meshes shared by the unit tests.

use nalgebra::Point3;

use super::TriMesh;

/// A regular tetrahedron with outward-facing normals and edge length `2 * sqrt(2)`.
pub(crate) fn tetrahedron() -> TriMesh {
    let vertices = vec![
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
    ];
    let faces = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
    TriMesh::new_unchecked(vertices, faces)
}

/// A flat `n x n` grid of unit squares in the z = 0 plane, each split into two
/// counter-clockwise triangles (normals along +z).
pub(crate) fn grid(n: usize) -> TriMesh {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    TriMesh::new_unchecked(vertices, faces)
}

/// A grid lifted onto the paraboloid `z = 0.1 * (x^2 + y^2)`, so faces are not coplanar.
pub(crate) fn bumpy_grid(n: usize) -> TriMesh {
    let flat = grid(n);
    let vertices = flat
        .vertices()
        .iter()
        .map(|p| Point3::new(p.x, p.y, 0.1 * (p.x * p.x + p.y * p.y)))
        .collect();
    TriMesh::new_unchecked(vertices, flat.faces().to_vec())
}
