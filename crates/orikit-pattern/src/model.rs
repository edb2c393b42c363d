//! Crease-pattern data model: assignments, edges and the pattern itself.

use std::collections::HashSet;
use std::f64::consts::PI;
use std::fmt;

use orikit_geom::{midpoint, points_equal, segment_length, Point, PointKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PatternError, Result};

/// Fold assignment of a crease, using the single-letter codes of the FOLD format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeAssignment {
    /// Mountain fold.
    #[serde(rename = "M")]
    Mountain,
    /// Valley fold.
    #[serde(rename = "V")]
    Valley,
    /// Paper boundary.
    #[serde(rename = "B")]
    Border,
    /// Construction line with no physical meaning.
    #[serde(rename = "A")]
    Auxiliary,
    /// Crease that stays flat.
    #[serde(rename = "F")]
    Flat,
    /// Slit through the paper.
    #[serde(rename = "C")]
    Cut,
    /// Edge joining two pieces of paper.
    #[serde(rename = "J")]
    Join,
}

impl EdgeAssignment {
    /// Fold angle given to a freshly drawn crease: fully folded for
    /// mountain (`-π`) and valley (`+π`), flat for everything else.
    pub fn default_fold_angle(self) -> f64 {
        match self {
            EdgeAssignment::Mountain => -PI,
            EdgeAssignment::Valley => PI,
            _ => 0.0,
        }
    }

    /// Swap mountain and valley; other assignments are unchanged.
    pub fn flipped(self) -> Self {
        match self {
            EdgeAssignment::Mountain => EdgeAssignment::Valley,
            EdgeAssignment::Valley => EdgeAssignment::Mountain,
            other => other,
        }
    }
}

/// Identifier of an edge, unique within a crease pattern and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(Uuid);

impl EdgeId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A straight crease between two distinct points.
///
/// Deserialization runs the same checks as [`Edge::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EdgeRepr")]
pub struct Edge {
    vertex1: Point,
    vertex2: Point,
    assignment: EdgeAssignment,
    fold_angle: f64,
    id: EdgeId,
}

/// Unchecked wire form of [`Edge`].
#[derive(Deserialize)]
struct EdgeRepr {
    vertex1: Point,
    vertex2: Point,
    assignment: EdgeAssignment,
    fold_angle: f64,
    id: EdgeId,
}

impl TryFrom<EdgeRepr> for Edge {
    type Error = PatternError;

    fn try_from(repr: EdgeRepr) -> Result<Self> {
        let edge = Edge::new(repr.vertex1, repr.vertex2, repr.assignment, repr.fold_angle)?;
        Ok(Self { id: repr.id, ..edge })
    }
}

impl Edge {
    /// Create an edge with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide or if `fold_angle` is not
    /// within `[-π, π]`.
    pub fn new(
        vertex1: Point,
        vertex2: Point,
        assignment: EdgeAssignment,
        fold_angle: f64,
    ) -> Result<Self> {
        if points_equal(&vertex1, &vertex2) {
            return Err(PatternError::DegenerateEdge {
                x: vertex1.x,
                y: vertex1.y,
            });
        }
        if !(-PI..=PI).contains(&fold_angle) {
            return Err(PatternError::FoldAngleOutOfRange(fold_angle));
        }
        Ok(Self::from_parts(vertex1, vertex2, assignment, fold_angle))
    }

    /// Create an edge whose fold angle is the assignment's default.
    pub fn with_assignment(vertex1: Point, vertex2: Point, assignment: EdgeAssignment) -> Result<Self> {
        Self::new(vertex1, vertex2, assignment, assignment.default_fold_angle())
    }

    /// Unchecked constructor for endpoints already known to be distinct.
    pub(crate) fn from_parts(
        vertex1: Point,
        vertex2: Point,
        assignment: EdgeAssignment,
        fold_angle: f64,
    ) -> Self {
        debug_assert!(!points_equal(&vertex1, &vertex2));
        Self {
            vertex1,
            vertex2,
            assignment,
            fold_angle,
            id: EdgeId::new(),
        }
    }

    /// A piece of this edge between new endpoints, keeping assignment and
    /// fold angle under a fresh id.
    pub(crate) fn fragment(&self, vertex1: Point, vertex2: Point) -> Self {
        Self::from_parts(vertex1, vertex2, self.assignment, self.fold_angle)
    }

    /// First endpoint.
    pub fn vertex1(&self) -> Point {
        self.vertex1
    }

    /// Second endpoint.
    pub fn vertex2(&self) -> Point {
        self.vertex2
    }

    /// Fold assignment.
    pub fn assignment(&self) -> EdgeAssignment {
        self.assignment
    }

    /// Signed fold angle in radians: positive valley, negative mountain.
    pub fn fold_angle(&self) -> f64 {
        self.fold_angle
    }

    /// Stable identifier.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Whether `p` is exactly one of the endpoints.
    pub fn is_endpoint(&self, p: &Point) -> bool {
        points_equal(&self.vertex1, p) || points_equal(&self.vertex2, p)
    }

    /// The endpoint opposite to `v`. Returns `vertex1` when `v` is not `vertex1`.
    pub fn other_vertex(&self, v: &Point) -> Point {
        if points_equal(&self.vertex1, v) {
            self.vertex2
        } else {
            self.vertex1
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        segment_length(self.vertex1, self.vertex2)
    }

    /// Midpoint, used as a snap candidate.
    pub fn midpoint(&self) -> Point {
        midpoint(self.vertex1, self.vertex2)
    }

    /// Same edge with a new fold angle, keeping id, endpoints and assignment.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::FoldAngleOutOfRange`] if `fold_angle` is not
    /// within `[-π, π]`.
    pub fn with_fold_angle(&self, fold_angle: f64) -> Result<Self> {
        if !(-PI..=PI).contains(&fold_angle) {
            return Err(PatternError::FoldAngleOutOfRange(fold_angle));
        }
        Ok(Self {
            fold_angle,
            ..self.clone()
        })
    }

    /// Same edge with mountain and valley swapped and the fold angle negated.
    ///
    /// The id is kept: this is a reassignment, not a new crease.
    pub fn flipped(&self) -> Self {
        Self {
            assignment: self.assignment.flipped(),
            fold_angle: -self.fold_angle,
            ..self.clone()
        }
    }
}

/// Points in insertion order, skipping exact duplicates.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointSet {
    points: Vec<Point>,
    keys: HashSet<PointKey>,
}

impl PointSet {
    /// Start from `points` as given, duplicates included.
    pub(crate) fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
            keys: points.iter().map(PointKey::from).collect(),
        }
    }

    /// Append `p` unless an exactly equal point is already present.
    pub(crate) fn insert(&mut self, p: Point) {
        if self.keys.insert(PointKey::from(&p)) {
            self.points.push(p);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<Point> {
        self.points
    }
}

/// An immutable crease pattern: a vertex list and the creases between them.
///
/// Every editing operation takes a pattern by reference and returns a new
/// one; nothing mutates a pattern after construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreasePattern {
    vertices: Vec<Point>,
    edges: Vec<Edge>,
}

impl CreasePattern {
    /// Assemble a pattern from parts. Use [`CreasePattern::validate`] to
    /// check that every endpoint has a vertex.
    pub fn new(vertices: Vec<Point>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Pattern whose vertices are exactly the endpoints of `edges`:
    /// every `vertex1` in edge order, then every `vertex2`, deduplicated.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let mut vertices = PointSet::default();
        for e in &edges {
            vertices.insert(e.vertex1);
        }
        for e in &edges {
            vertices.insert(e.vertex2);
        }
        Self {
            vertices: vertices.into_vec(),
            edges,
        }
    }

    /// The unit square `[0,1]²` bounded by four border edges.
    pub fn unit_square() -> Self {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let edges = (0..4)
            .map(|i| Edge::from_parts(corners[i], corners[(i + 1) % 4], EdgeAssignment::Border, 0.0))
            .collect();
        Self::new(corners.to_vec(), edges)
    }

    /// Vertex list.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edge list.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Whether the pattern has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check the structural invariants: no zero-length edge, unique edge
    /// ids, and a vertex for every edge endpoint.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.edges.len());
        let vertices: HashSet<PointKey> = self.vertices.iter().map(PointKey::from).collect();
        for e in &self.edges {
            if points_equal(&e.vertex1, &e.vertex2) {
                return Err(PatternError::DegenerateEdge {
                    x: e.vertex1.x,
                    y: e.vertex1.y,
                });
            }
            if !ids.insert(e.id) {
                return Err(PatternError::DuplicateEdgeId(e.id));
            }
            for p in [e.vertex1, e.vertex2] {
                if !vertices.contains(&PointKey::from(&p)) {
                    return Err(PatternError::MissingVertex {
                        edge: e.id,
                        x: p.x,
                        y: p.y,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_default_fold_angles() {
        assert_eq!(EdgeAssignment::Mountain.default_fold_angle(), -PI);
        assert_eq!(EdgeAssignment::Valley.default_fold_angle(), PI);
        assert_eq!(EdgeAssignment::Border.default_fold_angle(), 0.0);
        assert_eq!(EdgeAssignment::Auxiliary.default_fold_angle(), 0.0);
    }

    #[test]
    fn test_zero_length_edge_rejected() {
        let err = Edge::new(p(0.5, 0.5), p(0.5, 0.5), EdgeAssignment::Valley, PI).unwrap_err();
        assert_eq!(err, PatternError::DegenerateEdge { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_fold_angle_range() {
        assert!(Edge::new(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley, PI).is_ok());
        let err = Edge::new(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley, 4.0).unwrap_err();
        assert_eq!(err, PatternError::FoldAngleOutOfRange(4.0));
        assert!(Edge::new(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley, f64::NAN).is_err());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Mountain).unwrap();
        let b = a.fragment(p(0.0, 0.0), p(0.5, 0.0));
        assert_ne!(a.id(), b.id());
        assert_eq!(b.assignment(), EdgeAssignment::Mountain);
        assert_eq!(b.fold_angle(), -PI);
    }

    #[test]
    fn test_flip_keeps_id() {
        let e = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Mountain).unwrap();
        let f = e.flipped();
        assert_eq!(f.id(), e.id());
        assert_eq!(f.assignment(), EdgeAssignment::Valley);
        assert_eq!(f.fold_angle(), PI);

        let b = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Border).unwrap();
        assert_eq!(b.flipped().assignment(), EdgeAssignment::Border);
    }

    #[test]
    fn test_other_vertex() {
        let e = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Flat).unwrap();
        assert_eq!(e.other_vertex(&p(0.0, 0.0)), p(1.0, 0.0));
        assert_eq!(e.other_vertex(&p(1.0, 0.0)), p(0.0, 0.0));
        assert!(e.is_endpoint(&p(1.0, 0.0)));
        assert!(!e.is_endpoint(&p(0.5, 0.0)));
    }

    #[test]
    fn test_unit_square_is_valid() {
        let cp = CreasePattern::unit_square();
        assert_eq!(cp.vertices().len(), 4);
        assert_eq!(cp.edges().len(), 4);
        assert!(cp.edges().iter().all(|e| e.assignment() == EdgeAssignment::Border));
        cp.validate().unwrap();
    }

    #[test]
    fn test_validate_missing_vertex() {
        let e = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley).unwrap();
        let id = e.id();
        let cp = CreasePattern::new(vec![p(0.0, 0.0)], vec![e]);
        assert_eq!(
            cp.validate().unwrap_err(),
            PatternError::MissingVertex { edge: id, x: 1.0, y: 0.0 }
        );
    }

    #[test]
    fn test_validate_duplicate_id() {
        let e = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley).unwrap();
        let cp = CreasePattern::from_edges(vec![e.clone(), e.clone()]);
        assert_eq!(cp.validate().unwrap_err(), PatternError::DuplicateEdgeId(e.id()));
    }

    #[test]
    fn test_from_edges_dedups_endpoints() {
        let a = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley).unwrap();
        let b = Edge::with_assignment(p(1.0, 0.0), p(1.0, 1.0), EdgeAssignment::Valley).unwrap();
        let cp = CreasePattern::from_edges(vec![a, b]);
        assert_eq!(cp.vertices(), &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
    }

    #[test]
    fn test_point_set_keeps_first_occurrence_order() {
        let mut set = PointSet::from_points(&[p(1.0, 0.0), p(0.0, 0.0)]);
        set.insert(p(0.0, 0.0));
        set.insert(p(0.5, 0.5));
        set.insert(p(-0.0, 0.0));
        set.insert(p(1.0, 0.0));
        assert_eq!(set.into_vec(), vec![p(1.0, 0.0), p(0.0, 0.0), p(0.5, 0.5)]);
    }

    #[test]
    fn test_with_fold_angle_keeps_identity() {
        let e = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley).unwrap();
        let half = e.with_fold_angle(PI / 2.0).unwrap();
        assert_eq!(half.id(), e.id());
        assert_eq!(half.assignment(), EdgeAssignment::Valley);
        assert_eq!(half.fold_angle(), PI / 2.0);
        assert_eq!((half.vertex1(), half.vertex2()), (e.vertex1(), e.vertex2()));

        assert!(matches!(
            e.with_fold_angle(4.0),
            Err(PatternError::FoldAngleOutOfRange(_))
        ));
        assert!(e.with_fold_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_edge_json_roundtrip_keeps_id() {
        let e = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.5), EdgeAssignment::Mountain).unwrap();
        let back: Edge = serde_json::from_str(&serde_json::to_string(&e).unwrap()).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_deserialize_rejects_invalid_edges() {
        let e = Edge::with_assignment(p(0.0, 0.0), p(1.0, 0.0), EdgeAssignment::Valley).unwrap();

        let mut json = serde_json::to_value(&e).unwrap();
        json["vertex2"] = json["vertex1"].clone();
        let err = serde_json::from_value::<Edge>(json).unwrap_err();
        assert!(err.to_string().contains("degenerate edge"));

        let mut json = serde_json::to_value(&e).unwrap();
        json["fold_angle"] = serde_json::json!(7.0);
        let err = serde_json::from_value::<Edge>(json).unwrap_err();
        assert!(err.to_string().contains("outside [-pi, pi]"));
    }

    #[test]
    fn test_assignment_serializes_as_fold_letter() {
        let json = serde_json::to_string(&EdgeAssignment::Mountain).unwrap();
        assert_eq!(json, "\"M\"");
        let back: EdgeAssignment = serde_json::from_str("\"J\"").unwrap();
        assert_eq!(back, EdgeAssignment::Join);
    }

    #[test]
    fn test_pattern_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CreasePattern>();
    }
}
