//! Lengths, distances and areas.

use crate::Point;

/// Euclidean length of segment `AB`.
pub fn segment_length(a: Point, b: Point) -> f64 {
    (b - a).norm()
}

/// Midpoint of segment `AB`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Distance from `c` to the infinite line through `a` and `b`.
pub fn line_distance(a: Point, b: Point, c: Point) -> f64 {
    let c1 = b.y - a.y;
    let c2 = a.x - b.x;
    let c3 = c1 * a.x + c2 * a.y;
    (c.x * c1 + c.y * c2 - c3).abs() / (c1 * c1 + c2 * c2).sqrt()
}

/// Orthogonal projection of `c` onto the infinite line through `a` and `b`.
pub fn project_to_line(a: Point, b: Point, c: Point) -> Point {
    let dir = b - a;
    let t = dir.dot(&(c - a)) / dir.norm_squared();
    a + dir * t
}

/// Shoelace sum `Σ x_i·y_{i+1} − x_{i+1}·y_i` over a closed polygon.
///
/// Twice the signed area. With the y axis pointing down (screen
/// coordinates), a negative sum means the polygon is walked clockwise
/// on screen.
pub fn shoelace_sum(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            p1.x * p2.y - p2.x * p1.y
        })
        .sum()
}
