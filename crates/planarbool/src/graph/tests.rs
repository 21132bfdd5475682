use nalgebra::{Vector2, Vector3};

use super::*;
use crate::cfg::Tolerance;
use crate::error::BoolError;

fn square(x0: f64, y0: f64, s: f64) -> Vec<Vector2<f64>> {
    vec![
        Vector2::new(x0, y0),
        Vector2::new(x0 + s, y0),
        Vector2::new(x0 + s, y0 + s),
        Vector2::new(x0, y0 + s),
    ]
}

fn assert_consistent(g: &PlanarGraph) {
    for n in g.node_ids() {
        assert_ne!(g.mate(n), n, "{n:?} is its own mate");
        assert_eq!(g.mate(g.mate(n)), n);
        assert_eq!(g.fpred(g.fsucc(n)), n);
        assert_eq!(g.fsucc(g.fpred(n)), n);
        assert_eq!(g.xy(g.mate(n)), g.xy(g.fsucc(n)));
    }
}

#[test]
fn loop_insertion_builds_two_faces() {
    let mut g = PlanarGraph::new();
    let start = g.insert_loop(&square(0.0, 0.0, 2.0)).unwrap();
    assert_consistent(&g);
    assert_eq!(g.node_count(), 8);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.face_len(start), 4);
    assert_eq!(g.xy(start), Vector2::new(0.0, 0.0));
    assert_eq!(g.face_area(start), 4.0);
    assert_eq!(g.face_area(g.mate(start)), -4.0);

    assert!(g.face_loop(start).all(|n| g.masks(n) == Mask::BOUNDARY));
    let outside = g.mate(start);
    assert!(g
        .face_loop(outside)
        .all(|n| g.masks(n) == Mask::BOUNDARY | Mask::ORIGINAL_CURVE));
    // every corner is a two-node vertex
    assert!(g.node_ids().all(|n| g.vertex_loop(n).count() == 2));
}

#[test]
fn loop_insertion_drops_repeated_points() {
    let mut g = PlanarGraph::new();
    let mut pts = square(0.0, 0.0, 1.0);
    pts.insert(1, pts[1]);
    pts.push(pts[0]);
    g.insert_loop(&pts).unwrap();
    assert_eq!(g.edge_count(), 4);

    let err = g.insert_loop(&[Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)]);
    assert!(matches!(err, Err(BoolError::DegenerateInput { .. })));
    let err = g.insert_polyline(&[Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.0)]);
    assert!(matches!(err, Err(BoolError::DegenerateInput { .. })));
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn polyline_is_a_single_zero_area_face() {
    let mut g = PlanarGraph::new();
    let pts = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
    ];
    let start = g.insert_polyline(&pts).unwrap();
    assert_consistent(&g);
    assert_eq!(g.face_len(start), 4);
    assert_eq!(g.face_area(start), 0.0);
    assert_eq!(g.face_seeds().unwrap().len(), 1);
    assert!(g.face_centroid(start).is_none());
}

#[test]
fn add_edge_is_a_null_face() {
    let mut g = PlanarGraph::new();
    let n = g.add_edge(Vector3::zeros(), Vector3::new(1.0, 0.0, 5.0), Mask::USER_2);
    assert_consistent(&g);
    assert!(g.is_null_face(n));
    assert_eq!(g.face_area(n), 0.0);
    assert_eq!(g.xyz(g.mate(n)).z, 5.0);
    assert!(g.has_mask(g.mate(n), Mask::USER_2));
}

#[test]
fn split_edge_keeps_faces_and_masks() {
    let mut g = PlanarGraph::new();
    let start = g.insert_loop(&square(0.0, 0.0, 2.0)).unwrap();
    let n2 = g.split_edge(start, Vector3::new(1.0, 0.0, 0.0));
    assert_consistent(&g);
    assert_eq!(g.edge_count(), 5);
    assert_eq!(g.fsucc(start), n2);
    assert_eq!(g.xy(n2), Vector2::new(1.0, 0.0));
    assert_eq!(g.face_len(start), 5);
    assert_eq!(g.face_area(start), 4.0);
    assert_eq!(g.face_area(g.mate(start)), -4.0);
    assert_eq!(g.masks(n2), Mask::BOUNDARY);
    assert!(g.has_mask(g.mate(n2), Mask::ORIGINAL_CURVE));
}

#[test]
fn split_edge_at_dangling_end() {
    let mut g = PlanarGraph::new();
    let n = g.add_edge(Vector3::zeros(), Vector3::new(2.0, 0.0, 0.0), Mask::NONE);
    let n2 = g.split_edge(n, Vector3::new(1.0, 0.0, 0.0));
    assert_consistent(&g);
    assert_eq!(g.face_len(n), 4);
    assert_eq!(g.face_loop(n).collect::<Vec<_>>().len(), 4);
    assert_eq!(g.fsucc(n), n2);
}

#[test]
fn delete_edge_merges_faces_and_recycles_nodes() {
    let mut g = PlanarGraph::new();
    let start = g.insert_loop(&square(0.0, 0.0, 2.0)).unwrap();
    let n2 = g.split_edge(start, Vector3::new(1.0, 0.0, 0.0));
    // chord from the split point to the top-left corner
    let top_left = g.fpred(start);
    let chord = g.add_edge(g.xyz(n2), g.xyz(top_left), Mask::USER_0);
    g.insert_into_vertex(n2, chord);
    g.insert_into_vertex(top_left, g.mate(chord));
    assert_consistent(&g);
    let mut areas: Vec<f64> = g
        .face_seeds()
        .unwrap()
        .into_iter()
        .map(|n| g.face_area(n))
        .collect();
    areas.sort_by(f64::total_cmp);
    assert_eq!(areas, vec![-4.0, 1.0, 3.0]);

    let freed = [chord, g.mate(chord)];
    g.delete_edge(chord);
    assert_consistent(&g);
    assert_eq!(g.face_seeds().unwrap().len(), 2);
    assert!(freed.iter().all(|&n| !g.is_live(n)));
    // the next allocation reuses a freed slot
    let again = g.add_edge(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0), Mask::NONE);
    assert!(freed.contains(&again) || freed.contains(&g.mate(again)));
}

#[test]
fn vertex_twist_is_self_inverse() {
    let mut g = PlanarGraph::new();
    let a = g.add_edge(Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0), Mask::NONE);
    let b = g.add_edge(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0), Mask::NONE);
    g.vertex_twist(a, b);
    assert_consistent_links(&g);
    assert_eq!(g.vertex_loop(a).count(), 2);
    assert_eq!(g.face_seeds().unwrap().len(), 1);
    g.vertex_twist(a, b);
    assert_eq!(g.vertex_loop(a).count(), 1);
    assert_eq!(g.face_seeds().unwrap().len(), 2);
}

fn assert_consistent_links(g: &PlanarGraph) {
    for n in g.node_ids() {
        assert_eq!(g.mate(g.mate(n)), n);
        assert_eq!(g.fpred(g.fsucc(n)), n);
    }
}

#[test]
fn sort_outgoing_orders_counterclockwise() {
    let mut g = PlanarGraph::new();
    let dirs = [(1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
    let mut out: Vec<NodeId> = dirs
        .iter()
        .map(|&(x, y)| g.add_edge(Vector3::zeros(), Vector3::new(x, y, 0.0), Mask::NONE))
        .collect();
    g.sort_outgoing(&mut out);
    let angles: Vec<f64> = out.iter().map(|&n| g.outgoing_angle(n)).collect();
    assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    g.set_vertex_order(&out);
    assert_consistent(&g);
    assert_eq!(g.vertex_loop(out[0]).count(), 5);
    // vsucc walks clockwise
    assert_eq!(g.vsucc(out[1]), out[0]);
    assert_eq!(g.vpred(out[0]), out[1]);
}

#[test]
fn mask_pool_grab_drop_and_exhaustion() {
    let mut g = PlanarGraph::new();
    g.insert_loop(&square(0.0, 0.0, 1.0)).unwrap();
    assert_eq!(g.free_mask_count(), 16);
    let mut held = Vec::new();
    for _ in 0..16 {
        held.push(g.grab_mask().unwrap());
    }
    assert_eq!(g.grab_mask(), Err(BoolError::MaskPoolExhausted));
    assert!(g.with_mask(|_, _| ()).is_err());

    let m = held.pop().unwrap();
    let n = g.node_ids().next().unwrap();
    g.set_mask_around_face(n, m);
    assert_eq!(g.count_mask_around_face(n, m), 4);
    g.drop_mask(m);
    assert!(g.node_ids().all(|p| !g.has_mask(p, m)));

    let again = g
        .with_mask(|g, m2| {
            g.set_mask_around_vertex(n, m2);
            g.count_mask_around_vertex(n, m2)
        })
        .unwrap();
    assert_eq!(again, 2);
    assert_eq!(g.free_mask_count(), 1);
    for m in held {
        g.drop_mask(m);
    }
    assert_eq!(g.free_mask_count(), 16);
}

#[test]
fn with_stack_lends_an_empty_reusable_stack() {
    let mut g = PlanarGraph::new();
    let start = g.insert_loop(&square(0.0, 0.0, 1.0)).unwrap();
    let len = g.with_stack(|g, stack| {
        stack.extend(g.face_loop(start));
        g.with_stack(|_, inner| assert!(inner.is_empty()));
        stack.len()
    });
    assert_eq!(len, 4);
    g.with_stack(|_, stack| assert!(stack.is_empty()));
}

#[test]
fn mask_helpers_around_edges_and_faces() {
    let mut g = PlanarGraph::new();
    let start = g.insert_loop(&square(0.0, 0.0, 1.0)).unwrap();
    g.set_mask_around_edge(start, Mask::USER_1);
    assert!(g.has_mask(g.mate(start), Mask::USER_1));
    assert_eq!(g.find_mask_around_face(start, Mask::USER_1), Some(start));
    assert_eq!(
        g.find_mask_around_vertex(g.mate(start), Mask::USER_1),
        Some(g.mate(start))
    );
    g.clear_mask_around_edge(start, Mask::USER_1);
    assert_eq!(g.find_mask_around_face(start, Mask::USER_1), None);

    g.toggle_mask(start, Mask::USER_3);
    assert!(g.has_mask(start, Mask::USER_3));
    g.toggle_mask(start, Mask::USER_3);
    assert!(!g.has_mask(start, Mask::USER_3));

    g.set_depth_around_face(start, 7);
    assert!(g.face_loop(start).all(|n| g.depth(n) == 7));
    g.set_mask_around_face(start, Mask::USER_0);
    g.clear_mask_around_vertex(start, Mask::USER_0);
    assert_eq!(g.count_mask_around_face(start, Mask::USER_0), 3);
    g.clear_mask_around_face(start, Mask::USER_0);
    assert_eq!(g.count_mask_around_face(start, Mask::USER_0), 0);
}

#[test]
fn coordinate_queries() {
    let mut g = PlanarGraph::with_tolerance(Tolerance::new(0.0, 1e-3));
    let start = g.insert_loop(&square(1.0, 2.0, 2.0)).unwrap();
    let (c, area) = g.face_centroid(start).unwrap();
    assert!((c - Vector2::new(2.0, 3.0)).norm() < 1e-12);
    assert_eq!(area, 4.0);

    let range = g.graph_range();
    assert_eq!(range.min, Vector2::new(1.0, 2.0));
    assert_eq!(range.max, Vector2::new(3.0, 4.0));
    assert_eq!(range.semiperimeter(), 4.0);
    assert_eq!(g.face_range(start), range);
    assert!((g.resolved_tolerance() - 4e-3).abs() < 1e-15);

    let coords = g.face_coordinates(start);
    assert_eq!(coords.len(), 4);
    assert_eq!(coords[0], Vector3::new(1.0, 2.0, 0.0));

    assert!(g.is_strict_left_turn(start));
    assert!(!g.is_strict_left_turn(g.mate(start)));
    let (a, b) = (start, g.fsucc(start));
    assert_eq!(g.cross(a, b, g.fsucc(b)), 4.0);

    // bottom edge (both sides) lies in the band y ∈ [1.5, 2.5]
    assert!(g.is_edge_in_band(start, Axis::Y, 1.5, 2.5));
    assert!(!g.is_edge_in_band(b, Axis::Y, 1.5, 2.5));
    assert_eq!(g.mark_edges_in_band(Axis::Y, 1.5, 2.5, Mask::USER_2), 2);
    assert!(g.has_mask(g.mate(start), Mask::USER_2));
}

#[test]
fn ranges_and_periods() {
    let mut r = Range2::null();
    assert!(r.is_null());
    assert_eq!(r.semiperimeter(), 0.0);
    assert_eq!(r.extent(), Vector2::zeros());
    assert!(!r.contains(Vector2::zeros()));
    r.extend(Vector2::new(1.0, -1.0));
    r.extend(Vector2::new(-2.0, 3.0));
    assert_eq!(r, Range2::from_corners(Vector2::new(1.0, 3.0), Vector2::new(-2.0, -1.0)));
    assert_eq!(r.extent(), Vector2::new(3.0, 4.0));
    assert!(r.contains(Vector2::new(0.0, 0.0)));

    let mut g = PlanarGraph::new();
    assert!(!g.periods().is_periodic());
    g.set_periods(Periods {
        x: Some(1.0),
        y: None,
    });
    assert!(g.periods().is_periodic());
    g.set_tolerance(Tolerance::new(1.0, 0.0));
    assert_eq!(g.tolerance().abs, 1.0);
    assert!(g.is_empty());
    assert_eq!(g.face_seeds().unwrap(), Vec::<NodeId>::new());
}

#[test]
fn mask_bit_ops() {
    let m = Mask::BOUNDARY | Mask::EXTERIOR;
    assert!(m.contains(Mask::BOUNDARY));
    assert!(!m.contains(Mask::BOUNDARY | Mask::GRID));
    assert!(m.intersects(Mask::BOUNDARY | Mask::GRID));
    assert!((m & Mask::GRID).is_empty());
    assert_eq!(m & !Mask::EXTERIOR, Mask::BOUNDARY);
    let mut acc = Mask::NONE;
    acc |= Mask::AUXILIARY;
    assert_eq!(acc, Mask::AUXILIARY);
}
