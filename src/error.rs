//! Error types for tessel.
//!
//! Failures fall into two classes: input that was malformed before any
//! topology was derived ([`MalformedInputError`]), and connectivity that
//! cannot be resolved while deriving or rebuilding topology
//! ([`TopologyError`]). Both are surfaced immediately at their origin;
//! no operation returns a partial mesh.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The input mesh value itself is invalid.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),

    /// The mesh connectivity is invalid for the requested operation.
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors detected while validating a face-vertex mesh value.
#[derive(Error, Debug)]
pub enum MalformedInputError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a point index outside the point sequence.
    #[error("face {face} references point {vertex}, but the mesh has {num_points} points")]
    VertexOutOfRange {
        /// The face index.
        face: usize,
        /// The out-of-range point index.
        vertex: usize,
        /// Number of points in the mesh.
        num_points: usize,
    },

    /// A face repeats a point index (degenerate quad).
    #[error("face {face} is degenerate (repeats a point index)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },
}

/// Errors detected while deriving connectivity or rebuilding topology.
#[derive(Error, Debug)]
pub enum TopologyError {
    /// An edge is shared by more than two faces.
    #[error("edge ({v0}, {v1}) is shared by more than two faces")]
    NonManifoldEdge {
        /// First endpoint of the edge.
        v0: usize,
        /// Second endpoint of the edge.
        v1: usize,
    },

    /// An edge borders only one face, so the mesh is not closed.
    #[error("edge ({v0}, {v1}) borders only one face; the mesh is not closed")]
    OpenEdge {
        /// First endpoint of the edge.
        v0: usize,
        /// Second endpoint of the edge.
        v1: usize,
    },

    /// A point has no incident edges, so its valence is zero.
    #[error("point {vertex} has no incident edges")]
    IsolatedVertex {
        /// The isolated point index.
        vertex: usize,
    },

    /// A face does not have exactly four incident edges.
    #[error("face {face} has {found} incident edges, expected 4")]
    FaceEdgeCount {
        /// The face index.
        face: usize,
        /// Number of incident edges found.
        found: usize,
    },

    /// A corner of a face has no unique second incident edge.
    #[error("no unique second edge at corner {vertex} of face {face}")]
    MissingCornerEdge {
        /// The face index.
        face: usize,
        /// The corner point index.
        vertex: usize,
    },

    /// An edge claimed by a face is not one of that face's four sides.
    #[error("edge ({v0}, {v1}) is not a side of face {face}")]
    EdgeNotOnFace {
        /// First endpoint of the edge.
        v0: usize,
        /// Second endpoint of the edge.
        v1: usize,
        /// The face index.
        face: usize,
    },
}
