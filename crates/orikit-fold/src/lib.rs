#![warn(missing_docs)]

//! Face extraction and rigid fold simulation for orikit crease patterns.
//!
//! [`find_faces`] recovers the bounded regions of a planar crease graph, and
//! [`fold_faces`] places each of them in 3D by rotating it about the creases
//! between it and the first face.
//!
//! # Example
//!
//! ```
//! use orikit_fold::{find_faces, fold_faces};
//! use orikit_pattern::{insert_edge, CreasePattern, EdgeAssignment, Point};
//!
//! let cp = insert_edge(
//!     &CreasePattern::unit_square(),
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     EdgeAssignment::Valley,
//! );
//! let faces = find_faces(&cp).unwrap();
//! assert_eq!(faces.len(), 2);
//!
//! let folded = fold_faces(&faces, &cp).unwrap();
//! assert!(folded[0].border.iter().all(|p| p.z == 0.0));
//! ```

pub mod error;
mod faces;
mod fold;

pub use error::{FoldError, Result};
pub use faces::{find_faces, Face, FaceId};
pub use fold::{fold_faces, fold_faces_with, FoldedFace};

use serde::{Deserialize, Serialize};

/// Fraction by which every fold angle is reduced, so that faces folded flat
/// stay separated instead of landing exactly on top of each other.
pub const DEFAULT_DISTORTION: f64 = 0.001;

/// Fold simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldSettings {
    /// Each hinge rotates by `fold_angle * (1 - distortion)`.
    pub distortion: f64,
}

impl Default for FoldSettings {
    fn default() -> Self {
        Self {
            distortion: DEFAULT_DISTORTION,
        }
    }
}

impl FoldSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.distortion.is_finite() || !(0.0..1.0).contains(&self.distortion) {
            return Err(FoldError::InvalidSettings(
                "distortion must be in [0, 1)".into(),
            ));
        }
        Ok(())
    }
}
