#![warn(missing_docs)]

//! Crease-pattern model and editing operations.
//!
//! A [`CreasePattern`] is an immutable value. Each edit ([`insert_edge`],
//! [`delete_box`], [`delete_edge`], [`flip_edge`], [`flip_box`],
//! [`set_fold_angle`]) borrows the current pattern and returns a new one,
//! so a host can keep older snapshots around for as long as it likes.
//!
//! # Example
//!
//! ```
//! use orikit_pattern::{insert_edge, CreasePattern, EdgeAssignment};
//! use orikit_geom::Point;
//!
//! let square = CreasePattern::unit_square();
//! let cp = insert_edge(
//!     &square,
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     EdgeAssignment::Mountain,
//! );
//! assert_eq!(cp.edges().len(), 5);
//! assert_eq!(square.edges().len(), 4);
//! ```

pub mod error;
mod assign;
mod insert;
mod model;
mod region;
mod snap;

pub use assign::{flip_box, flip_edge, set_fold_angle};
pub use error::{PatternError, Result};
pub use insert::insert_edge;
pub use model::{CreasePattern, Edge, EdgeAssignment, EdgeId};
pub use region::{delete_box, delete_edge, edge_in_box};
pub use snap::{snap_points, snap_vertex};

pub use orikit_geom::Point;

use serde::{Deserialize, Serialize};

/// Editing parameters supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Maximum distance, in design-space units, at which a pointer position
    /// snaps to a vertex or edge midpoint.
    pub snap_tolerance: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            snap_tolerance: 0.03,
        }
    }
}

impl EditorSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.snap_tolerance.is_finite() || self.snap_tolerance < 0.0 {
            return Err(PatternError::InvalidSettings(
                "snap_tolerance must be a non-negative finite number".into(),
            ));
        }
        Ok(())
    }
}
