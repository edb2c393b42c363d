//! Error types for crease-pattern construction and validation.

use thiserror::Error;

use crate::EdgeId;

/// Errors raised when building or validating a crease pattern.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Both endpoints of an edge are the same point.
    #[error("degenerate edge: both endpoints at ({x}, {y})")]
    DegenerateEdge {
        /// X coordinate of the collapsed endpoint.
        x: f64,
        /// Y coordinate of the collapsed endpoint.
        y: f64,
    },

    /// A fold angle is outside `[-π, π]` or not finite.
    #[error("fold angle {0} is outside [-pi, pi]")]
    FoldAngleOutOfRange(f64),

    /// An edge endpoint has no matching entry in the vertex list.
    #[error("edge {edge} has endpoint ({x}, {y}) with no matching vertex")]
    MissingVertex {
        /// The edge whose endpoint is dangling.
        edge: EdgeId,
        /// X coordinate of the endpoint.
        x: f64,
        /// Y coordinate of the endpoint.
        y: f64,
    },

    /// Two edges share the same identifier.
    #[error("edge id {0} is used more than once")]
    DuplicateEdgeId(EdgeId),

    /// Editor settings are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for crease-pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
