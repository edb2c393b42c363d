//! Error types for face extraction and folding.

use orikit_pattern::EdgeId;
use thiserror::Error;

use crate::FaceId;

/// Errors from face extraction and fold simulation.
///
/// All of these point at a malformed crease pattern; retrying with the same
/// input fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FoldError {
    /// An edge endpoint has no entry in the pattern's vertex list.
    #[error("edge endpoint ({x}, {y}) is not a vertex of the pattern")]
    MissingVertex {
        /// X coordinate of the endpoint.
        x: f64,
        /// Y coordinate of the endpoint.
        y: f64,
    },

    /// A face refers to an edge the pattern does not contain.
    #[error("face edge {0} is not part of the crease pattern")]
    UnknownEdge(EdgeId),

    /// A hinge edge has coincident endpoints, so its rotation axis is undefined.
    #[error("hinge edge {0} has zero length")]
    DegenerateHinge(EdgeId),

    /// A hinge edge's endpoints are missing from the border of a face it bounds.
    #[error("hinge edge {edge} does not lie on the border of face {face}")]
    HingeNotOnBoundary {
        /// The hinge edge.
        edge: EdgeId,
        /// The face being rotated.
        face: FaceId,
    },

    /// A face walk ran longer than the number of directed edges.
    #[error("face walk starting at ({x}, {y}) did not close")]
    UnclosedWalk {
        /// X coordinate of the start vertex.
        x: f64,
        /// Y coordinate of the start vertex.
        y: f64,
    },

    /// Fold settings are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for folding operations.
pub type Result<T> = std::result::Result<T, FoldError>;
