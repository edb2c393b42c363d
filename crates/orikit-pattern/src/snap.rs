//! Snap candidates for pointer input.

use orikit_geom::{segment_length, Point};

use crate::model::CreasePattern;
use crate::EditorSettings;

/// All points a drawn crease may snap to: every vertex, then every edge midpoint.
pub fn snap_points(cp: &CreasePattern) -> Vec<Point> {
    cp.vertices()
        .iter()
        .copied()
        .chain(cp.edges().iter().map(|e| e.midpoint()))
        .collect()
}

/// First snap candidate within `settings.snap_tolerance` of `point`, if any.
///
/// Candidates are tried in [`snap_points`] order, so vertices win over
/// midpoints at equal range.
pub fn snap_vertex(cp: &CreasePattern, point: Point, settings: &EditorSettings) -> Option<Point> {
    snap_points(cp)
        .into_iter()
        .find(|p| segment_length(*p, point) <= settings.snap_tolerance)
}
