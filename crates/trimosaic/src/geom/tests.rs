use super::*;
use std::cmp::Ordering;

use rand::{rngs::StdRng, Rng, SeedableRng};

fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle {
    Triangle::new(pt(a.0, a.1), pt(b.0, b.1), pt(c.0, c.1))
}

#[test]
fn distance_and_midpoint() {
    let a = pt(0.0, 0.0);
    let b = pt(3.0, 4.0);
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    assert_eq!(midpoint(a, b), pt(1.5, 2.0));
    assert_eq!(dot(pt(1.0, 2.0), pt(3.0, -1.0)), 1.0);
}

#[test]
fn signed_side_orientation() {
    let start = pt(0.0, 0.0);
    let end = pt(2.0, 2.0);
    // (2,2) × (0,2) = 4
    assert_eq!(signed_side(pt(0.0, 2.0), start, end), Ordering::Greater);
    assert_eq!(signed_side(pt(2.0, 0.0), start, end), Ordering::Less);
    assert_eq!(signed_side(pt(1.0, 1.0), start, end), Ordering::Equal);
    assert_eq!(signed_side(pt(5.0, 5.0), start, end), Ordering::Equal);
}

#[test]
fn vertices_and_centroid_are_contained() {
    let t = tri((0.0, 0.0), (7.0, 1.0), (2.0, 5.0));
    for p in t.vertices() {
        assert!(t.contains(*p), "vertex {p:?} not contained");
    }
    assert!(t.contains(t.centroid()));
    assert!(!t.contains(pt(100.0, -50.0)));
    assert!(!t.contains(pt(7.0, 5.0)));
}

#[test]
fn edge_points_are_contained() {
    let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
    assert!(t.contains(pt(2.0, 0.0)));
    assert!(t.contains(pt(2.0, 2.0)));
    assert!(t.contains(pt(0.0, 3.0)));
    assert!(!t.contains(pt(2.0, 2.5)));
    assert!(!t.contains(pt(-0.5, 1.0)));
}

#[test]
fn degenerate_triangle_contains_nothing() {
    let t = tri((0.0, 0.0), (1.0, 1.0), (3.0, 3.0));
    assert!(is_degenerate(t.v[0], t.v[1], t.v[2]));
    for p in [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0), pt(5.0, 0.0)] {
        assert!(!t.contains(p));
    }
    let point_like = tri((1.0, 1.0), (1.0, 1.0), (1.0, 1.0));
    assert!(!point_like.contains(pt(1.0, 1.0)));
    assert_eq!(point_like.lattice_points().count(), 0);
}

#[test]
fn containment_randomized_centroids_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut p = || pt(rng.gen_range(-50..50) as f64, rng.gen_range(-50..50) as f64);
        let (a, b, c) = (p(), p(), p());
        if is_degenerate(a, b, c) {
            continue;
        }
        let t = Triangle::new(a, b, c);
        assert!(t.contains(a) && t.contains(b) && t.contains(c));
        assert!(t.contains(t.centroid()));
        assert!(!t.contains(pt(1000.0, 1000.0)));
    }
}

#[test]
fn area_is_unsigned() {
    let ccw = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
    let cw = tri((0.0, 0.0), (0.0, 3.0), (4.0, 0.0));
    assert_eq!(ccw.area(), 6.0);
    assert_eq!(cw.area(), 6.0);
    assert_eq!(signed_area(ccw.v[0], ccw.v[1], ccw.v[2]), 6.0);
    assert_eq!(signed_area(cw.v[0], cw.v[1], cw.v[2]), -6.0);
}

#[test]
fn equality_ignores_vertex_order() {
    let a = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
    let b = tri((0.0, 1.0), (0.0, 0.0), (1.0, 0.0));
    let c = tri((0.0, 1.0), (0.0, 0.0), (1.0, 1.0));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn lattice_points_of_right_triangle() {
    // Scan range is [0, 2) on both axes.
    let t = tri((0.0, 0.0), (2.0, 0.0), (0.0, 2.0));
    let pts: Vec<_> = t.lattice_points().collect();
    assert_eq!(pts, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    let half = tri((0.5, 0.5), (3.5, 0.5), (0.5, 3.5));
    assert!(half.lattice_points().all(|(x, y)| half.contains(pt(x as f64, y as f64))));
    assert_eq!(half.lattice_points().count(), 6);
}

#[test]
fn scaled_multiplies_vertices() {
    let t = tri((1.0, 2.0), (3.0, 4.0), (5.0, 0.0)).scaled(2.0);
    assert_eq!(t.v[0], pt(2.0, 4.0));
    assert_eq!(t.v[2], pt(10.0, 0.0));
    assert_eq!(t.to_string(), "[(2, 4), (6, 8), (10, 0)]");
}
