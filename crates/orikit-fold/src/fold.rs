//! Rigid fold simulation over a spanning tree of face adjacency.

use std::collections::HashMap;

use orikit_geom::points_equal;
use orikit_math::{lift, Dir3, Point3, Transform};
use orikit_pattern::{CreasePattern, Edge, EdgeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FoldError, Result};
use crate::faces::{Face, FaceId};
use crate::FoldSettings;

/// A face placed in 3D after folding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldedFace {
    /// Border points in the same order as the flat face's border.
    pub border: Vec<Point3>,
    /// Id of the flat face this was folded from.
    pub id: FaceId,
}

/// Link from a face to its parent in the spanning tree.
#[derive(Debug, Clone, Copy)]
struct Hinge {
    parent: usize,
    edge: usize,
}

/// For every face, the faces sharing an edge with it and the edge they share.
///
/// Neighbours are listed in crease-pattern edge order. Only edges bounding
/// exactly two faces make faces adjacent.
fn face_adjacency(faces: &[Face], cp: &CreasePattern) -> Result<Vec<Vec<(usize, usize)>>> {
    let mut edge_faces: HashMap<EdgeId, Vec<usize>> =
        cp.edges().iter().map(|e| (e.id(), Vec::new())).collect();
    for (fi, face) in faces.iter().enumerate() {
        for edge in &face.edges {
            edge_faces
                .get_mut(&edge.id())
                .ok_or(FoldError::UnknownEdge(edge.id()))?
                .push(fi);
        }
    }

    let mut adjacency = vec![Vec::new(); faces.len()];
    for (ei, edge) in cp.edges().iter().enumerate() {
        if let Some(&[a, b]) = edge_faces.get(&edge.id()).map(Vec::as_slice) {
            adjacency[a].push((b, ei));
            adjacency[b].push((a, ei));
        }
    }
    Ok(adjacency)
}

/// Depth-first spanning tree rooted at face 0.
///
/// Uses an explicit stack of `(face, next neighbour)` cursors so deep
/// patterns cannot overflow the call stack. Faces unreachable from the root
/// get no parent and stay flat.
fn spanning_tree(adjacency: &[Vec<(usize, usize)>]) -> Vec<Option<Hinge>> {
    let mut parents = vec![None; adjacency.len()];
    if adjacency.is_empty() {
        return parents;
    }

    let mut visited = vec![false; adjacency.len()];
    visited[0] = true;
    let mut stack = vec![(0usize, 0usize)];
    while let Some(top) = stack.last_mut() {
        let (face, cursor) = *top;
        match adjacency[face].get(cursor) {
            Some(&(neighbour, edge)) => {
                top.1 += 1;
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    parents[neighbour] = Some(Hinge { parent: face, edge });
                    stack.push((neighbour, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    parents
}

/// Whether `face` runs along `edge` against the edge's own direction.
///
/// The rotation sense is kept when `vertex2` directly follows `vertex1` in
/// the face border and reversed otherwise.
fn should_flip(face: &Face, edge: &Edge) -> Result<bool> {
    let position = |v| face.border.iter().position(|p| points_equal(p, &v));
    match (position(edge.vertex1()), position(edge.vertex2())) {
        (Some(i1), Some(i2)) => {
            let n = face.border.len();
            Ok((i2 + n - i1) % n != 1)
        }
        _ => Err(FoldError::HingeNotOnBoundary {
            edge: edge.id(),
            face: face.id,
        }),
    }
}

/// Rotation about `edge` lifted to `z = 0`, by its fold angle scaled down by
/// `distortion` and negated when `flip` is set.
fn hinge_rotation(edge: &Edge, flip: bool, distortion: f64) -> Result<Transform> {
    let a = lift(&edge.vertex1());
    let b = lift(&edge.vertex2());
    let axis = b - a;
    if axis.norm() == 0.0 {
        return Err(FoldError::DegenerateHinge(edge.id()));
    }
    let sign = if flip { -1.0 } else { 1.0 };
    let angle = edge.fold_angle() * (1.0 - distortion) * sign;
    trace!(edge = %edge.id(), angle, flip, "hinge rotation");
    Ok(Transform::rotation_about_line(
        &a,
        &Dir3::new_normalize(axis),
        angle,
    ))
}

/// Fold every face into 3D with the default [`FoldSettings`].
///
/// See [`fold_faces_with`].
pub fn fold_faces(faces: &[Face], cp: &CreasePattern) -> Result<Vec<FoldedFace>> {
    fold_faces_with(faces, cp, &FoldSettings::default())
}

/// Fold every face into 3D.
///
/// `faces[0]` stays in the `z = 0` plane. Every other face is carried to its
/// place by rotating it about each hinge on its path to the root, nearest
/// hinge first, each by the hinge's fold angle times
/// `1 - settings.distortion`.
///
/// # Errors
///
/// - [`FoldError::UnknownEdge`] if a face edge is not in `cp`.
/// - [`FoldError::DegenerateHinge`] if a hinge has zero length.
/// - [`FoldError::HingeNotOnBoundary`] if a hinge's endpoints are not on
///   the border of the face it rotates.
/// - [`FoldError::InvalidSettings`] if `settings` fails validation.
pub fn fold_faces_with(
    faces: &[Face],
    cp: &CreasePattern,
    settings: &FoldSettings,
) -> Result<Vec<FoldedFace>> {
    settings.validate()?;
    let adjacency = face_adjacency(faces, cp)?;
    let parents = spanning_tree(&adjacency);

    let folded = faces
        .iter()
        .enumerate()
        .map(|(fi, face)| {
            let mut transform = Transform::identity();
            let mut current = fi;
            while let Some(hinge) = parents[current] {
                let edge = &cp.edges()[hinge.edge];
                let flip = should_flip(&faces[current], edge)?;
                transform = hinge_rotation(edge, flip, settings.distortion)?.then(&transform);
                current = hinge.parent;
            }
            Ok(FoldedFace {
                border: face
                    .border
                    .iter()
                    .map(|p| transform.apply_point(&lift(p)))
                    .collect(),
                id: face.id,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        faces = folded.len(),
        hinges = parents.iter().filter(|p| p.is_some()).count(),
        "folded faces"
    );
    Ok(folded)
}
