#![warn(missing_docs)]

//! Crease-pattern geometry engine.
//!
//! Edit a [`CreasePattern`] with [`insert_edge`], [`delete_box`] and
//! friends, then recover its faces and fold them into 3D. The member crates
//! are re-exported for hosts that need the lower-level pieces.
//!
//! # Example
//!
//! ```
//! use orikit::{fold_pattern, insert_edge, CreasePattern, EdgeAssignment, Point};
//!
//! let cp = insert_edge(
//!     &CreasePattern::unit_square(),
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     EdgeAssignment::Mountain,
//! );
//! let folded = fold_pattern(&cp).unwrap();
//! assert_eq!(folded.faces.len(), 2);
//! assert_eq!(folded.folded.len(), 2);
//! ```

pub use orikit_fold;
pub use orikit_geom;
pub use orikit_math;
pub use orikit_pattern;

pub use orikit_fold::{
    find_faces, fold_faces, fold_faces_with, Face, FaceId, FoldError, FoldSettings, FoldedFace,
};
pub use orikit_math::{Point3, Transform};
pub use orikit_pattern::{
    delete_box, delete_edge, edge_in_box, flip_box, flip_edge, insert_edge, set_fold_angle,
    snap_points, snap_vertex, CreasePattern, Edge, EdgeAssignment, EdgeId, EditorSettings, PatternError, Point,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Any error raised by the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The crease pattern is malformed.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// Face extraction or folding failed.
    #[error(transparent)]
    Fold(#[from] FoldError),
}

/// Result type for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Flat faces of a pattern together with their folded placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldedPattern {
    /// Faces in extraction order.
    pub faces: Vec<Face>,
    /// `folded[i]` is `faces[i]` placed in 3D.
    pub folded: Vec<FoldedFace>,
}

/// Validate `cp`, extract its faces and fold them with default settings.
pub fn fold_pattern(cp: &CreasePattern) -> Result<FoldedPattern> {
    fold_pattern_with(cp, &FoldSettings::default())
}

/// Validate `cp`, extract its faces and fold them.
pub fn fold_pattern_with(cp: &CreasePattern, settings: &FoldSettings) -> Result<FoldedPattern> {
    cp.validate()?;
    let faces = find_faces(cp)?;
    let folded = fold_faces_with(&faces, cp, settings)?;
    debug!(
        edges = cp.edges().len(),
        faces = faces.len(),
        "folded pattern"
    );
    Ok(FoldedPattern { faces, folded })
}
