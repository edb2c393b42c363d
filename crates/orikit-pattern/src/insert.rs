//! Crease insertion that keeps the pattern a planar subdivision.

use orikit_geom::{cmp_xy, intersect_segments, on_segment, points_equal, Point, SegmentIntersection};
use tracing::debug;

use crate::model::{CreasePattern, Edge, EdgeAssignment, PointSet};

/// Draw a crease from `p1` to `p2` into `cp`.
///
/// Every existing edge the new segment crosses is split at the crossing,
/// every existing edge it runs along is truncated to meet it, and the new
/// segment itself is split at each crossing and overlapped endpoint. The new
/// pieces carry `assignment` and its default fold angle.
///
/// Drawing a zero-length crease (`p1 == p2`) returns `cp` unchanged.
///
/// All classification uses exact comparisons; snap the endpoints to existing
/// vertices first (see [`crate::snap_vertex`]) to avoid near-miss slivers.
pub fn insert_edge(
    cp: &CreasePattern,
    p1: Point,
    p2: Point,
    assignment: EdgeAssignment,
) -> CreasePattern {
    if points_equal(&p1, &p2) {
        return cp.clone();
    }

    let mut vertices = PointSet::from_points(cp.vertices());
    vertices.insert(p1);
    vertices.insert(p2);

    let mut edges = Vec::with_capacity(cp.edges().len() + 2);
    let mut break_points = PointSet::from_points(&[p1, p2]);
    let mut crossed = 0usize;
    let mut overlapped = 0usize;

    for edge in cp.edges() {
        match intersect_segments(edge.vertex1(), edge.vertex2(), p1, p2) {
            SegmentIntersection::None => edges.push(edge.clone()),
            SegmentIntersection::CollinearOverlap => {
                overlapped += 1;
                merge_collinear(edge, p1, p2, &mut edges, &mut break_points);
            }
            SegmentIntersection::Point(x) => {
                vertices.insert(x);
                if edge.is_endpoint(&x) {
                    edges.push(edge.clone());
                } else {
                    crossed += 1;
                    edges.push(edge.fragment(edge.vertex1(), x));
                    edges.push(edge.fragment(x, edge.vertex2()));
                }
                if !points_equal(&x, &p1) && !points_equal(&x, &p2) {
                    break_points.insert(x);
                }
            }
        }
    }

    let mut break_points = break_points.into_vec();
    break_points.sort_by(cmp_xy);

    let fold_angle = assignment.default_fold_angle();
    for pair in break_points.windows(2) {
        edges.push(Edge::from_parts(pair[0], pair[1], assignment, fold_angle));
    }

    debug!(
        ?assignment,
        crossed,
        overlapped,
        segments = break_points.len() - 1,
        "inserted crease"
    );

    CreasePattern::new(vertices.into_vec(), edges)
}

/// Resolve an existing edge lying on the same line as the new crease `p1 → p2`.
///
/// Endpoints of `edge` inside the new span become break points of the new
/// crease. Where `edge` sticks out past the new span, the part outside is
/// kept as a fragment ending at the new crease's endpoint. The part of
/// `edge` inside the span is dropped; the new crease covers it.
fn merge_collinear(
    edge: &Edge,
    p1: Point,
    p2: Point,
    edges: &mut Vec<Edge>,
    break_points: &mut PointSet,
) {
    for p in [edge.vertex1(), edge.vertex2()] {
        if on_segment(p1, p2, p) {
            if !points_equal(&p, &p1) && !points_equal(&p, &p2) {
                break_points.insert(p);
            }
        } else if on_segment(p, p1, p2) {
            edges.push(edge.fragment(p, p2));
        } else if on_segment(p, p2, p1) {
            edges.push(edge.fragment(p, p1));
        }
    }
}
