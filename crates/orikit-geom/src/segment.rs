//! Segment orientation and intersection predicates.

use crate::Point;

/// Outcome of classifying two segments against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments meet at exactly one point, either crossing properly or
    /// with one segment's endpoint touching the other segment.
    Point(Point),
    /// The segments lie on one line and share at least one point. There is
    /// no single intersection point; callers must test endpoint membership.
    CollinearOverlap,
    /// The segments do not meet.
    None,
}

/// Cross product of `b - a` and `c - a`.
///
/// Twice the signed area of triangle `a, b, c`: positive when `c` lies to the
/// left of the directed line `a → b`, zero when the three are collinear.
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether `c` lies within the closed bounding box of `a` and `b`.
///
/// Only meaningful when the three points are already known to be collinear.
pub fn on_segment(a: Point, b: Point, c: Point) -> bool {
    c.x <= a.x.max(b.x) && c.x >= a.x.min(b.x) && c.y <= a.y.max(b.y) && c.y >= a.y.min(b.y)
}

/// Intersection of the infinite lines `AB` and `CD`.
///
/// The lines must not be parallel; parallel input divides by zero and
/// yields non-finite coordinates.
pub fn line_intersection(a: Point, b: Point, c: Point, d: Point) -> Point {
    let a1 = b.y - a.y;
    let b1 = a.x - b.x;
    let c1 = a.x * a1 + a.y * b1;
    let a2 = d.y - c.y;
    let b2 = c.x - d.x;
    let c2 = c.x * a2 + c.y * b2;
    let det = a1 * b2 - a2 * b1;
    Point::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det)
}

fn opposite_signs(u: f64, v: f64) -> bool {
    (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0)
}

/// Classify segment `AB` against segment `CD`.
///
/// A touching endpoint is returned as that exact endpoint value, so callers
/// can compare it to existing vertices with exact equality.
pub fn intersect_segments(a: Point, b: Point, c: Point, d: Point) -> SegmentIntersection {
    let c1 = cross(a, b, c);
    let c2 = cross(a, b, d);
    let c3 = cross(c, d, a);
    let c4 = cross(c, d, b);

    if opposite_signs(c1, c2) && opposite_signs(c3, c4) {
        return SegmentIntersection::Point(line_intersection(a, b, c, d));
    }

    // all four points on one line; a zero-length segment only counts when
    // it sits on the other segment's line
    if c1 == 0.0
        && c2 == 0.0
        && c3 == 0.0
        && c4 == 0.0
        && (on_segment(a, b, c) || on_segment(a, b, d) || on_segment(c, d, a) || on_segment(c, d, b))
    {
        return SegmentIntersection::CollinearOverlap;
    }

    if c1 == 0.0 && on_segment(a, b, c) {
        SegmentIntersection::Point(c)
    } else if c2 == 0.0 && on_segment(a, b, d) {
        SegmentIntersection::Point(d)
    } else if c3 == 0.0 && on_segment(c, d, a) {
        SegmentIntersection::Point(a)
    } else if c4 == 0.0 && on_segment(c, d, b) {
        SegmentIntersection::Point(b)
    } else {
        SegmentIntersection::None
    }
}
