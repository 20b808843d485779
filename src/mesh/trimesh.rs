//! Face-vertex triangle mesh container.

use nalgebra::{DMatrix, Point3, Vector3};

use crate::algo::{edges, geodesic, gradient, metrics};
use crate::error::{MeshError, Result};

/// A triangle mesh stored as a vertex array and a face index array.
///
/// This is the input to every operator in the crate. It carries no
/// connectivity beyond the face list: faces are not required to form a
/// closed or manifold surface, and vertices referenced by no face are
/// allowed.
///
/// # Example
///
/// ```
/// use dgmesh::mesh::TriMesh;
/// use nalgebra::Point3;
///
/// let mesh = TriMesh::new(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
///
/// assert_eq!(mesh.num_faces(), 1);
/// assert!((mesh.face_areas()[0] - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<[usize; 3]>,
}

impl TriMesh {
    /// Create a mesh, checking that every face index refers to an existing vertex.
    ///
    /// Degenerate faces (repeated indices, collinear vertices) are accepted;
    /// they produce non-finite values in the operators that divide by area.
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi >= vertices.len() {
                    return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
                }
            }
        }

        Ok(Self { vertices, faces })
    }

    /// Create a mesh without validating face indices.
    ///
    /// Operators index the vertex array directly and will panic on an
    /// out-of-range index.
    pub fn new_unchecked(vertices: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Triangle faces as vertex index triples.
    #[inline]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no vertices.
    ///
    /// Only a mesh built with [`TriMesh::new_unchecked`] can be empty; a mesh
    /// with vertices but no faces is not.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Positions of the three corners of a face, in the face's order.
    #[inline]
    pub fn face_vertices(&self, face: usize) -> [Point3<f64>; 3] {
        let [a, b, c] = self.faces[face];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Unit normal of every face. See [`metrics::face_normals`].
    pub fn face_normals(&self) -> Vec<Vector3<f64>> {
        metrics::face_normals(&self.vertices, &self.faces)
    }

    /// Area of every face. See [`metrics::face_areas`].
    pub fn face_areas(&self) -> Vec<f64> {
        metrics::face_areas(&self.vertices, &self.faces)
    }

    /// One third of the incident face area at every vertex. See [`metrics::vertex_areas`].
    pub fn vertex_areas(&self) -> Vec<f64> {
        metrics::vertex_areas_from_faces(self.vertices.len(), &self.faces, &self.face_areas())
    }

    /// Directed edges of the mesh. See [`edges::edges_from_faces`].
    pub fn edges(&self) -> Vec<[usize; 2]> {
        edges::edges_from_faces(&self.faces)
    }

    /// Per-face gradient of a per-vertex scalar field, using the mesh's own normals and areas.
    pub fn gradient(&self, f: &[f64], symmetric: bool) -> Result<Vec<Vector3<f64>>> {
        let normals = self.face_normals();
        let options = gradient::GradientOptions::default()
            .with_face_areas(self.face_areas())
            .with_symmetric(symmetric);
        gradient::gradient(f, &self.vertices, &self.faces, &normals, &options)
    }

    /// All-pairs edge-graph geodesic distances. See [`geodesic::geodesic_distance_matrix`].
    pub fn geodesic_distance_matrix(&self) -> DMatrix<f64> {
        geodesic::geodesic_distance_matrix(&self.vertices, &self.faces)
    }
}
