//! Face extraction from the planar crease graph.

use std::collections::{HashMap, HashSet};
use std::fmt;

use orikit_geom::{points_equal, shoelace_sum, Point, PointKey};
use orikit_pattern::{CreasePattern, Edge};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{FoldError, Result};

/// Identifier of an extracted face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceId(Uuid);

impl FaceId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A bounded region of the crease pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Boundary points in walk order. Negative shoelace sum.
    pub border: Vec<Point>,
    /// Bounding edges in walk order; `edges[i]` ends at `border[i]`.
    pub edges: Vec<Edge>,
    /// Face id, fresh on every extraction.
    pub id: FaceId,
}

impl Face {
    /// Signed area of the border polygon (negative for extracted faces).
    pub fn signed_area(&self) -> f64 {
        shoelace_sum(&self.border) / 2.0
    }

    /// Unsigned area of the border polygon.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

/// Incident edges of one vertex, sorted by direction angle.
struct Rotation {
    vertex: Point,
    edges: Vec<usize>,
}

fn direction_angle(edge: &Edge, from: &Point) -> f64 {
    let other = edge.other_vertex(from);
    (other.y - from.y).atan2(other.x - from.x)
}

/// Per-vertex incident edge lists in ascending angle order.
fn build_rotations(cp: &CreasePattern) -> Result<HashMap<PointKey, Rotation>> {
    let mut rotations: HashMap<PointKey, Rotation> = cp
        .vertices()
        .iter()
        .map(|v| {
            (
                PointKey::from(v),
                Rotation {
                    vertex: *v,
                    edges: Vec::new(),
                },
            )
        })
        .collect();

    for (index, edge) in cp.edges().iter().enumerate() {
        for v in [edge.vertex1(), edge.vertex2()] {
            rotations
                .get_mut(&PointKey::from(&v))
                .ok_or(FoldError::MissingVertex { x: v.x, y: v.y })?
                .edges
                .push(index);
        }
    }

    let edges = cp.edges();
    for rotation in rotations.values_mut() {
        let vertex = rotation.vertex;
        rotation.edges.sort_by(|&a, &b| {
            direction_angle(&edges[a], &vertex)
                .partial_cmp(&direction_angle(&edges[b], &vertex))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    Ok(rotations)
}

/// Walks faces of one crease pattern, consuming each directed edge once.
struct FaceTracer<'a> {
    edges: &'a [Edge],
    rotations: HashMap<PointKey, Rotation>,
    used: HashSet<(PointKey, PointKey)>,
}

impl FaceTracer<'_> {
    fn is_used(&self, from: &Point, to: &Point) -> bool {
        self.used.contains(&(PointKey::from(from), PointKey::from(to)))
    }

    /// Walk from `start` along `start_edge`, always taking the next edge
    /// counter-clockwise from the one just arrived on, until back at `start`.
    ///
    /// Returns the walk as `(arrival point, edge index)` steps.
    fn trace(&mut self, start: Point, start_edge: usize) -> Result<Vec<(Point, usize)>> {
        let mut steps = Vec::new();
        let mut current_vertex = start;
        let mut current_edge = start_edge;
        let max_steps = 2 * self.edges.len();

        loop {
            let next_vertex = self.edges[current_edge].other_vertex(&current_vertex);
            steps.push((next_vertex, current_edge));
            self.used
                .insert((PointKey::from(&current_vertex), PointKey::from(&next_vertex)));

            let around = self
                .rotations
                .get(&PointKey::from(&next_vertex))
                .ok_or(FoldError::MissingVertex {
                    x: next_vertex.x,
                    y: next_vertex.y,
                })?;
            let arrived = around
                .edges
                .iter()
                .position(|&i| i == current_edge)
                .ok_or(FoldError::MissingVertex {
                    x: next_vertex.x,
                    y: next_vertex.y,
                })?;
            current_edge = around.edges[(arrived + 1) % around.edges.len()];
            current_vertex = next_vertex;

            if points_equal(&current_vertex, &start) {
                return Ok(steps);
            }
            if steps.len() > max_steps {
                return Err(FoldError::UnclosedWalk {
                    x: start.x,
                    y: start.y,
                });
            }
        }
    }
}

/// Drop dangling spurs from a closed walk.
///
/// A spur shows up as the same edge taken twice in a row, out and back.
/// Removing each such pair (including pairs that wrap around the end of the
/// walk) leaves only the edges that actually enclose the face.
fn prune_spurs(steps: Vec<(Point, usize)>) -> Vec<(Point, usize)> {
    let mut kept: Vec<(Point, usize)> = Vec::with_capacity(steps.len());
    for step in steps {
        match kept.last() {
            Some(&(_, edge)) if edge == step.1 => {
                kept.pop();
            }
            _ => kept.push(step),
        }
    }
    while kept.len() >= 2 && kept[0].1 == kept[kept.len() - 1].1 {
        kept.pop();
        kept.remove(0);
    }
    kept
}

/// Recover the bounded faces of a crease pattern.
///
/// Each face is returned once, walked so that its shoelace sum is negative;
/// the unbounded outer region and any walk shorter than three points are
/// dropped. Edges hanging into a face without closing a loop are left out of
/// every face border.
///
/// # Errors
///
/// Fails with [`FoldError::MissingVertex`] when an edge endpoint is not in
/// the pattern's vertex list.
pub fn find_faces(cp: &CreasePattern) -> Result<Vec<Face>> {
    let mut tracer = FaceTracer {
        edges: cp.edges(),
        rotations: build_rotations(cp)?,
        used: HashSet::with_capacity(2 * cp.edges().len()),
    };

    let mut faces = Vec::new();
    let mut walks = 0usize;
    for (index, edge) in cp.edges().iter().enumerate() {
        for start in [edge.vertex1(), edge.vertex2()] {
            let other = edge.other_vertex(&start);
            if tracer.is_used(&start, &other) {
                continue;
            }
            walks += 1;
            let steps = prune_spurs(tracer.trace(start, index)?);
            let border: Vec<Point> = steps.iter().map(|&(p, _)| p).collect();
            if border.len() >= 3 && shoelace_sum(&border) < 0.0 {
                faces.push(Face {
                    border,
                    edges: steps.iter().map(|&(_, e)| cp.edges()[e].clone()).collect(),
                    id: FaceId::new(),
                });
            }
        }
    }

    debug!(faces = faces.len(), discarded = walks - faces.len(), "extracted faces");
    Ok(faces)
}
