//! Error types for dgmesh.
//!
//! Most operators in this crate do not guard against degenerate geometry:
//! zero-area faces surface as NaN or infinite values rather than errors.
//! The errors below cover the conditions that are checked up front.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The mesh has no vertices.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// Two inputs that must agree in length do not.
    #[error("{what}: expected length {expected}, got {actual}")]
    DimensionMismatch {
        /// Which input was mismatched.
        what: &'static str,
        /// The expected length.
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// A vertex has zero area, so it cannot be used to normalize an operator row.
    #[error("vertex {vertex} has zero area (isolated or only adjacent to degenerate faces)")]
    ZeroVertexArea {
        /// The vertex index.
        vertex: usize,
    },

    /// A matrix that must be square is not.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Check that `actual == expected`, returning a [`MeshError::DimensionMismatch`] otherwise.
    pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(MeshError::DimensionMismatch {
                what,
                expected,
                actual,
            })
        }
    }
}
