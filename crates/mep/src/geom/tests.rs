use super::rand::{draw_convex_polygon, RadialCfg, ReplayToken, VertexCount};
use super::*;
use approx::assert_relative_eq;
use nalgebra::vector;
use std::f64::consts::PI;

#[test]
fn direction_covers_the_full_circle() {
    let o = vector![0.0, 0.0];
    let cases = [
        (vector![1.0, 0.0], 0.0),
        (vector![1.0, 1.0], PI / 4.0),
        (vector![0.0, 1.0], PI / 2.0),
        (vector![-1.0, 1.0], 3.0 * PI / 4.0),
        (vector![-1.0, 0.0], PI),
        (vector![-1.0, -1.0], 5.0 * PI / 4.0),
        (vector![0.0, -1.0], 3.0 * PI / 2.0),
        (vector![1.0, -1.0], 7.0 * PI / 4.0),
    ];
    for (end, expected) in cases {
        let d = Segment::new(o, end).direction();
        assert_relative_eq!(d, expected, epsilon = 1e-12);
        assert!((0.0..2.0 * PI).contains(&d));
    }
}

#[test]
fn angle_to_is_signed_and_unnormalized() {
    let right = Segment::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let up = Segment::new(vector![0.0, 0.0], vector![0.0, 1.0]);
    assert_relative_eq!(right.angle_to(&up), PI / 2.0, epsilon = 1e-12);
    assert_relative_eq!(up.angle_to(&right), -PI / 2.0, epsilon = 1e-12);
    // Directions near the wrap produce differences near ±2π; no extra
    // normalization is applied here.
    let down = Segment::new(vector![0.0, 0.0], vector![1.0, -1e-9]);
    assert!(right.angle_to(&down) > 1.9 * PI);
}

#[test]
fn from_direction_round_trips_and_has_unit_length() {
    for k in 0..16 {
        let theta = f64::from(k) * PI / 8.0;
        let s = Segment::from_direction(vector![2.0, -1.0], theta);
        assert_relative_eq!(s.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.direction(), theta % (2.0 * PI), epsilon = 1e-9);
    }
}

#[test]
fn line_vanishes_on_both_endpoints() {
    let s = Segment::new(vector![1.0, 2.0], vector![4.0, -3.0]);
    assert_relative_eq!(s.line.eval(s.start), 0.0, epsilon = 1e-12);
    assert_relative_eq!(s.line.eval(s.end), 0.0, epsilon = 1e-12);
    let mid = (s.start + s.end) / 2.0;
    assert_relative_eq!(s.line.eval(mid), 0.0, epsilon = 1e-12);
}

#[test]
fn perpendicular_foot_on_the_infinite_line() {
    let s = Segment::new(vector![0.0, 0.0], vector![4.0, 0.0]);
    let perp = s.perpendicular(vector![1.0, 3.0]).unwrap();
    assert_eq!(perp.start, vector![1.0, 3.0]);
    assert_relative_eq!(perp.end, vector![1.0, 0.0], epsilon = 1e-12);
    assert_relative_eq!(perp.length(), 3.0, epsilon = 1e-12);
    // The foot may fall outside the finite extent.
    let far = s.perpendicular(vector![9.0, 2.0]).unwrap();
    assert_relative_eq!(far.end, vector![9.0, 0.0], epsilon = 1e-12);
    // A point on the line projects onto itself (zero-length result).
    let on_line = s.perpendicular(vector![2.0, 0.0]).unwrap();
    assert_relative_eq!(on_line.length(), 0.0, epsilon = 1e-12);
}

#[test]
fn intersection_of_crossing_lines() {
    let s1 = Segment::new(vector![0.0, 0.0], vector![1.0, 1.0]);
    let s2 = Segment::new(vector![0.0, 2.0], vector![1.0, 1.0]);
    let p = s1.intersection(&s2).unwrap();
    assert_relative_eq!(p, vector![1.0, 1.0], epsilon = 1e-12);
    // Infinite lines: the solution may lie outside both extents.
    let s3 = Segment::new(vector![10.0, 0.0], vector![11.0, 0.0]);
    let s4 = Segment::new(vector![0.0, 10.0], vector![0.0, 11.0]);
    let q = s3.intersection(&s4).unwrap();
    assert_relative_eq!(q, vector![0.0, 0.0], epsilon = 1e-12);
}

#[test]
fn parallel_and_antiparallel_lines_do_not_intersect() {
    let s1 = Segment::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let parallel = Segment::new(vector![0.0, 1.0], vector![1.0, 1.0]);
    let antiparallel = Segment::new(vector![1.0, 1.0], vector![0.0, 1.0]);
    assert!(s1.intersection(&parallel).is_none());
    assert!(s1.intersection(&antiparallel).is_none());
    // Coincident lines are parallel too.
    let coincident = Segment::new(vector![2.0, 0.0], vector![3.0, 0.0]);
    assert!(s1.intersection(&coincident).is_none());
}

#[test]
fn near_parallel_within_tolerance_is_rejected() {
    let s1 = Segment::from_direction(vector![0.0, 0.0], 0.3);
    let near = Segment::from_direction(vector![0.0, 1.0], 0.3 + 0.5 * EPS_PARALLEL);
    assert!(s1.intersection(&near).is_none());
    let apart = Segment::from_direction(vector![0.0, 1.0], 0.3 + 1e-3);
    assert!(s1.intersection(&apart).is_some());
}

#[test]
fn wrap_around_two_pi_is_still_parallel() {
    // Directions ~0 and ~2π−ε differ by almost 2π yet are the same line
    // direction; the mod-π reduction must flag them as parallel.
    let s1 = Segment::new(vector![0.0, 0.0], vector![1.0, 1e-9]);
    let s2 = Segment::new(vector![0.0, 1.0], vector![1.0, 1.0 - 1e-9]);
    assert!(s1.intersection(&s2).is_none());
}

#[test]
fn shoelace_areas() {
    let square = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert_relative_eq!(polygon_area(&square), 1.0, epsilon = 1e-12);
    // Clockwise winding gives the same absolute area.
    let square_cw = [
        vector![0.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
    ];
    assert_relative_eq!(polygon_area(&square_cw), 1.0, epsilon = 1e-12);
    let reference = [
        vector![6.0, 6.0],
        vector![4.0, 5.0],
        vector![3.0, 4.0],
        vector![4.0, 2.0],
        vector![7.0, 1.0],
        vector![8.0, 2.0],
        vector![7.0, 5.0],
    ];
    assert_relative_eq!(polygon_area(&reference), 15.5, epsilon = 1e-12);
    assert_eq!(polygon_area(&square[..2]), 0.0);
}

#[test]
fn hull_strips_interior_points_and_is_ccw() {
    let pts = [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![1.0, 1.0],
        vector![0.5, 0.5],
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.len(), 4);
    assert_relative_eq!(polygon_area(&hull), 4.0, epsilon = 1e-12);
    // CCW: every consecutive triple turns left.
    for i in 0..hull.len() {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let c = hull[(i + 2) % hull.len()];
        let cross = (b - a).x * (c - a).y - (b - a).y * (c - a).x;
        assert!(cross > 0.0);
    }
}

#[test]
fn sampler_is_deterministic_and_convex() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 16 },
        ..RadialCfg::default()
    };
    let tok = ReplayToken { seed: 42, index: 7 };
    let p1 = draw_convex_polygon(cfg, tok).unwrap();
    let p2 = draw_convex_polygon(cfg, tok).unwrap();
    assert_eq!(p1, p2);
    assert!(p1.len() >= 3);
    for i in 0..p1.len() {
        let a = p1[i];
        let b = p1[(i + 1) % p1.len()];
        let c = p1[(i + 2) % p1.len()];
        let cross = (b - a).x * (c - a).y - (b - a).y * (c - a).x;
        assert!(cross > 0.0, "hull output must be strictly convex CCW");
    }
    let other = draw_convex_polygon(cfg, ReplayToken { seed: 42, index: 8 }).unwrap();
    assert_ne!(p1, other);
}

#[test]
fn sampler_respects_fixed_vertex_count_upper_bound() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(9),
        ..RadialCfg::default()
    };
    let poly = draw_convex_polygon(cfg, ReplayToken { seed: 3, index: 0 }).unwrap();
    // The hull can only drop points, never add them.
    assert!(poly.len() >= 3 && poly.len() <= 9);
}
