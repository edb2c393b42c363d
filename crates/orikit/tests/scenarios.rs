//! End-to-end editing and folding scenarios.

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use orikit::orikit_geom::{points_equal, shoelace_sum};
use orikit::{
    delete_box, edge_in_box, find_faces, fold_faces, fold_pattern, insert_edge, snap_vertex,
    CreasePattern, Edge, EdgeAssignment, EditorSettings, Point,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Unit square divided into `n × n` cells by alternating valley and mountain creases.
fn grid(n: usize) -> CreasePattern {
    let mut cp = CreasePattern::unit_square();
    for i in 1..n {
        let t = i as f64 / n as f64;
        cp = insert_edge(&cp, p(t, 0.0), p(t, 1.0), EdgeAssignment::Valley);
        cp = insert_edge(&cp, p(0.0, t), p(1.0, t), EdgeAssignment::Mountain);
    }
    cp
}

fn edges_between<'a>(cp: &'a CreasePattern, a: Point, b: Point) -> Vec<&'a Edge> {
    cp.edges()
        .iter()
        .filter(|e| e.is_endpoint(&a) && e.is_endpoint(&b))
        .collect()
}

#[test]
fn test_square_with_diagonal_scenario() {
    let square = CreasePattern::unit_square();
    assert_eq!(square.vertices().len(), 4);
    assert_eq!(square.edges().len(), 4);

    let cp = insert_edge(&square, p(0.0, 0.0), p(1.0, 1.0), EdgeAssignment::Mountain);
    assert_eq!(cp.edges().len(), 5);
    assert_eq!(cp.vertices().len(), 4);
    let diagonal = edges_between(&cp, p(0.0, 0.0), p(1.0, 1.0));
    assert_eq!(diagonal.len(), 1);
    assert_eq!(diagonal[0].fold_angle(), -PI);
    cp.validate().unwrap();

    let faces = find_faces(&cp).unwrap();
    assert_eq!(faces.len(), 2);
    for face in &faces {
        assert_eq!(face.border.len(), 3);
        assert!(shoelace_sum(&face.border) < 0.0);
    }
}

#[test]
fn test_point_insertion_is_a_no_op() {
    let cp = grid(2);
    for q in [p(0.5, 0.5), p(0.3, 0.7), p(2.0, -1.0)] {
        assert_eq!(insert_edge(&cp, q, q, EdgeAssignment::Valley), cp);
    }
}

#[test]
fn test_single_crossing_splits_edge_in_two() {
    let square = CreasePattern::unit_square();
    let bottom = edges_between(&square, p(0.0, 0.0), p(1.0, 0.0))[0].id();

    let cp = insert_edge(&square, p(0.5, -0.5), p(0.5, 0.5), EdgeAssignment::Valley);
    let x = p(0.5, 0.0);
    assert!(cp.edge(bottom).is_none());

    let halves: Vec<&Edge> = cp
        .edges()
        .iter()
        .filter(|e| e.assignment() == EdgeAssignment::Border && e.is_endpoint(&x))
        .collect();
    assert_eq!(halves.len(), 2);
    let mut far_ends: Vec<Point> = halves.iter().map(|e| e.other_vertex(&x)).collect();
    far_ends.sort_by(orikit::orikit_geom::cmp_xy);
    assert_eq!(far_ends, vec![p(0.0, 0.0), p(1.0, 0.0)]);
    assert_abs_diff_eq!(halves[0].length() + halves[1].length(), 1.0, epsilon = 1e-12);
    cp.validate().unwrap();
}

#[test]
fn test_duplicate_crease_adds_no_geometry() {
    let cp = insert_edge(
        &CreasePattern::unit_square(),
        p(0.0, 0.0),
        p(1.0, 1.0),
        EdgeAssignment::Mountain,
    );
    let again = insert_edge(&cp, p(0.0, 0.0), p(1.0, 1.0), EdgeAssignment::Mountain);
    assert_eq!(again.edges().len(), cp.edges().len());
    assert_eq!(again.vertices().len(), cp.vertices().len());
    assert_eq!(edges_between(&again, p(0.0, 0.0), p(1.0, 1.0)).len(), 1);

    let reversed = insert_edge(&cp, p(1.0, 1.0), p(0.0, 0.0), EdgeAssignment::Mountain);
    assert_eq!(edges_between(&reversed, p(0.0, 0.0), p(1.0, 1.0)).len(), 1);
}

#[test]
fn test_grid_faces_conserve_area() {
    let cp = grid(4);
    cp.validate().unwrap();
    let faces = find_faces(&cp).unwrap();
    assert_eq!(faces.len(), 16);
    let total: f64 = faces.iter().map(|f| f.area()).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    for face in &faces {
        assert_eq!(face.border.len(), 4);
        assert_abs_diff_eq!(face.area(), 1.0 / 16.0, epsilon = 1e-12);
    }
}

#[test]
fn test_unfolded_pattern_stays_flat() {
    let mut cp = CreasePattern::unit_square();
    cp = insert_edge(&cp, p(0.0, 0.0), p(1.0, 1.0), EdgeAssignment::Flat);
    cp = insert_edge(&cp, p(0.0, 1.0), p(1.0, 0.0), EdgeAssignment::Auxiliary);
    cp = insert_edge(&cp, p(0.5, 0.0), p(0.5, 1.0), EdgeAssignment::Cut);

    let faces = find_faces(&cp).unwrap();
    let folded = fold_faces(&faces, &cp).unwrap();
    assert_eq!(folded.len(), faces.len());
    for face in &folded {
        for point in &face.border {
            assert_abs_diff_eq!(point.z, 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_folding_preserves_edge_lengths() {
    let result = fold_pattern(&grid(3)).unwrap();
    for (flat, folded) in result.faces.iter().zip(&result.folded) {
        let n = flat.border.len();
        for i in 0..n {
            let j = (i + 1) % n;
            let flat_len = (flat.border[j] - flat.border[i]).norm();
            let folded_len = (folded.border[j] - folded.border[i]).norm();
            assert_abs_diff_eq!(flat_len, folded_len, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_adjacent_faces_meet_at_their_hinge() {
    let cp = insert_edge(
        &CreasePattern::unit_square(),
        p(0.5, 0.0),
        p(0.5, 1.0),
        EdgeAssignment::Valley,
    );
    let cp = insert_edge(&cp, p(0.75, 0.0), p(0.75, 1.0), EdgeAssignment::Mountain);
    let result = fold_pattern(&cp).unwrap();
    assert_eq!(result.faces.len(), 3);

    // every flat point shared by two faces lands on the same 3D point in both
    for (a, fa) in result.faces.iter().zip(&result.folded) {
        for (b, fb) in result.faces.iter().zip(&result.folded) {
            if a.id == b.id {
                continue;
            }
            for (pa, qa) in a.border.iter().zip(&fa.border) {
                for (pb, qb) in b.border.iter().zip(&fb.border) {
                    if points_equal(pa, pb) {
                        assert_abs_diff_eq!((*qa - *qb).norm(), 0.0, epsilon = 1e-9);
                    }
                }
            }
        }
    }
}

#[test]
fn test_box_delete_leaves_no_isolated_vertices() {
    let cp = grid(4);
    let (c1, c2) = (p(0.1, 0.1), p(0.4, 0.4));
    let out = delete_box(&cp, c1, c2);

    assert!(out.edges().len() < cp.edges().len());
    assert!(out.edges().iter().all(|e| !edge_in_box(e, c1, c2)));
    for v in out.vertices() {
        assert!(
            out.edges().iter().any(|e| e.is_endpoint(v)),
            "vertex {v:?} has no surviving edge"
        );
    }
    assert!(!out.vertices().contains(&p(0.25, 0.25)));
    out.validate().unwrap();
}

#[test]
fn test_snapped_input_lands_on_existing_vertex() {
    let cp = grid(2);
    let settings = EditorSettings::default();
    let start = snap_vertex(&cp, p(0.01, 0.02), &settings).unwrap();
    let end = snap_vertex(&cp, p(0.51, 0.49), &settings).unwrap();
    assert_eq!(start, p(0.0, 0.0));
    assert_eq!(end, p(0.5, 0.5));

    let out = insert_edge(&cp, start, end, EdgeAssignment::Valley);
    assert_eq!(out.vertices().len(), cp.vertices().len());
    assert_eq!(out.edges().len(), cp.edges().len() + 1);
}

#[test]
fn test_snapshots_fold_concurrently() {
    let snapshots = vec![grid(2), grid(3), grid(4)];
    std::thread::scope(|s| {
        let handles: Vec<_> = snapshots
            .iter()
            .map(|cp| s.spawn(move || fold_pattern(cp).map(|r| r.faces.len())))
            .collect();
        let counts: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert_eq!(counts, vec![4, 9, 16]);
    });
}

#[test]
fn test_pattern_serializes_with_fold_letters() {
    let cp = insert_edge(
        &CreasePattern::unit_square(),
        p(0.0, 0.0),
        p(1.0, 1.0),
        EdgeAssignment::Valley,
    );
    let json = serde_json::to_string(&cp).unwrap();
    assert!(json.contains("\"V\""));
    assert!(json.contains("\"B\""));
    let back: CreasePattern = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cp);
}
