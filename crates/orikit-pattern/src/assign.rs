//! Reassignment of existing creases: mountain/valley flips and fold angles.

use std::f64::consts::PI;

use orikit_geom::Point;
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::model::{CreasePattern, EdgeId};
use crate::region::edge_in_box;

/// Swap mountain and valley on the edge with the given id.
///
/// The fold angle is negated, the id and geometry are kept. An unknown id
/// returns an equal pattern.
pub fn flip_edge(cp: &CreasePattern, id: EdgeId) -> CreasePattern {
    let edges = cp
        .edges()
        .iter()
        .map(|e| if e.id() == id { e.flipped() } else { e.clone() })
        .collect();
    CreasePattern::new(cp.vertices().to_vec(), edges)
}

/// Set the fold angle of the edge with the given id, keeping its id,
/// endpoints and assignment.
///
/// An unknown id returns an equal pattern.
///
/// # Errors
///
/// Returns [`PatternError::FoldAngleOutOfRange`] if `fold_angle` is NaN or
/// outside `[-π, π]`, whether or not the id is present.
pub fn set_fold_angle(cp: &CreasePattern, id: EdgeId, fold_angle: f64) -> Result<CreasePattern> {
    if !(-PI..=PI).contains(&fold_angle) {
        return Err(PatternError::FoldAngleOutOfRange(fold_angle));
    }
    let edges = cp
        .edges()
        .iter()
        .map(|e| {
            if e.id() == id {
                e.with_fold_angle(fold_angle)
            } else {
                Ok(e.clone())
            }
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(%id, fold_angle, "set fold angle");
    Ok(CreasePattern::new(cp.vertices().to_vec(), edges))
}

/// Swap mountain and valley on every edge touching the box spanned by
/// `corner1` and `corner2`.
pub fn flip_box(cp: &CreasePattern, corner1: Point, corner2: Point) -> CreasePattern {
    let mut flipped = 0usize;
    let edges = cp
        .edges()
        .iter()
        .map(|e| {
            if edge_in_box(e, corner1, corner2) {
                flipped += 1;
                e.flipped()
            } else {
                e.clone()
            }
        })
        .collect();
    debug!(flipped, "box flip");
    CreasePattern::new(cp.vertices().to_vec(), edges)
}
