#![warn(missing_docs)]

//! Exact 2D geometry primitives for crease patterns.
//!
//! All predicates here use exact floating-point comparisons. Callers that
//! want tolerance must snap their inputs first.
//!
//! # Example
//!
//! ```
//! use orikit_geom::{intersect_segments, Point, SegmentIntersection};
//!
//! let hit = intersect_segments(
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 0.0),
//! );
//! assert_eq!(hit, SegmentIntersection::Point(Point::new(0.5, 0.5)));
//! ```

mod measure;
mod segment;

pub use measure::{line_distance, midpoint, project_to_line, segment_length, shoelace_sum};
pub use segment::{cross, intersect_segments, line_intersection, on_segment, SegmentIntersection};

use std::cmp::Ordering;

/// A point in the crease-pattern design space.
pub type Point = orikit_math::Point2;

/// Exact equality of both coordinates.
pub fn points_equal(a: &Point, b: &Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Lexicographic order by `x`, then `y`.
pub fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Hashable identity of a point under exact equality.
///
/// `-0.0` and `0.0` compare equal as floats, so both map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey(u64, u64);

impl From<&Point> for PointKey {
    fn from(p: &Point) -> Self {
        // adding +0.0 turns -0.0 into +0.0 and leaves everything else alone
        PointKey((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
    }
}
