//! Box selection and edge deletion.

use orikit_geom::{intersect_segments, Point, SegmentIntersection};
use tracing::debug;

use crate::model::{CreasePattern, Edge, EdgeId};

/// Closed axis-aligned box spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SelectionBox {
    min: Point,
    max: Point,
}

impl SelectionBox {
    fn new(corner1: Point, corner2: Point) -> Self {
        Self {
            min: Point::new(corner1.x.min(corner2.x), corner1.y.min(corner2.y)),
            max: Point::new(corner1.x.max(corner2.x), corner1.y.max(corner2.y)),
        }
    }

    fn contains(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    fn sides(&self) -> [(Point, Point); 4] {
        let corners = [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ];
        [
            (corners[0], corners[1]),
            (corners[1], corners[2]),
            (corners[2], corners[3]),
            (corners[3], corners[0]),
        ]
    }
}

/// Whether `edge` touches the closed box spanned by `corner1` and `corner2`.
///
/// True when either endpoint is inside the box or any side of the box meets
/// the edge.
pub fn edge_in_box(edge: &Edge, corner1: Point, corner2: Point) -> bool {
    let bx = SelectionBox::new(corner1, corner2);
    if bx.contains(&edge.vertex1()) || bx.contains(&edge.vertex2()) {
        return true;
    }
    bx.sides().iter().any(|&(a, b)| {
        intersect_segments(a, b, edge.vertex1(), edge.vertex2()) != SegmentIntersection::None
    })
}

/// Remove every edge touching the box spanned by `corner1` and `corner2`.
///
/// The vertex list is rebuilt from the surviving edges, so no vertex is left
/// without an incident edge.
pub fn delete_box(cp: &CreasePattern, corner1: Point, corner2: Point) -> CreasePattern {
    let survivors: Vec<Edge> = cp
        .edges()
        .iter()
        .filter(|e| !edge_in_box(e, corner1, corner2))
        .cloned()
        .collect();
    debug!(removed = cp.edges().len() - survivors.len(), "box delete");
    CreasePattern::from_edges(survivors)
}

/// Remove the edge with the given id, rebuilding the vertex list.
///
/// An unknown id leaves the edge set unchanged.
pub fn delete_edge(cp: &CreasePattern, id: EdgeId) -> CreasePattern {
    let survivors: Vec<Edge> = cp.edges().iter().filter(|e| e.id() != id).cloned().collect();
    debug!(%id, removed = cp.edges().len() - survivors.len(), "edge delete");
    CreasePattern::from_edges(survivors)
}
