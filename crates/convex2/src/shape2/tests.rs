use super::*;
use crate::generators::{random_convex, regular_polygon, RadialCfg, ReplayToken, VertexCount};
use crate::math::DEFAULT_EPSILON;
use nalgebra::vector;
use proptest::prelude::*;

const Z: Rotation2 = Rotation2::ZERO;

fn o() -> Vector2<f64> {
    Vector2::zeros()
}

fn unit_square() -> Polygon2 {
    Polygon2::from_rect(&Rect2::new(o(), vector![1.0, 1.0]).unwrap()).unwrap()
}

fn line(a: Vector2<f64>, b: Vector2<f64>) -> Line2 {
    Line2::new(a, b).unwrap()
}

#[test]
fn rect_misses_rotated_triangle() {
    let rect = Rect2::new(o(), vector![1.0, 1.0]).unwrap();
    let tri = regular_polygon(1.0, 3).unwrap();
    let pos = vector![3.3, 4.1];
    let rot = Rotation2::from_degrees(30.0);
    for strict in [false, true] {
        assert!(!intersects_rect_poly(&rect, &tri, o(), pos, rot, strict));
        assert!(!intersects_poly_rect(&tri, &rect, pos, o(), rot, strict));
    }
    assert!(intersect_mtv_rect_poly(&rect, &tri, o(), pos, rot).is_none());
}

#[test]
fn poly_rect_matches_polygon_pair() {
    let rect = Rect2::new(o(), vector![2.0, 1.0]).unwrap();
    let as_poly = Polygon2::from_rect(&rect).unwrap();
    let hex = regular_polygon(1.0, 6).unwrap();
    let rot = Rotation2::from_degrees(17.0);
    for pos in [vector![1.5, 0.2], vector![2.5, -1.8], vector![-2.5, 0.0], vector![0.4, 0.9]] {
        for strict in [false, true] {
            assert_eq!(
                intersects_poly_rect(&hex, &rect, pos, o(), rot, strict),
                Polygon2::intersects(&hex, &as_poly, pos, o(), rot, Z, strict),
                "pos {pos:?} strict {strict}"
            );
        }
    }
}

#[test]
fn poly_circle_edge_overlap() {
    let sq = unit_square();
    let c = Circle2::new(0.5).unwrap();
    // center (1.3, 0.5): 0.2 into the right edge
    let pos_c = vector![0.8, 0.0];
    assert!(intersects_poly_circle(&sq, &c, o(), pos_c, Z, true));
    let mtv = intersect_mtv_poly_circle(&sq, &c, o(), pos_c, Z).unwrap();
    assert!((mtv.depth - 0.2).abs() < 1e-9);
    assert!((mtv.axis - vector![-1.0, 0.0]).norm() < 1e-9);
    let back = intersect_mtv_circle_poly(&c, &sq, pos_c, o(), Z).unwrap();
    assert!((back.axis - vector![1.0, 0.0]).norm() < 1e-9);
    assert!(!intersects_poly_circle(&sq, &c, o(), vector![1.2, 0.0], Z, false));
}

#[test]
fn circle_near_corner_needs_vertex_axis() {
    let sq = unit_square();
    let rect = Rect2::new(o(), vector![1.0, 1.0]).unwrap();
    let c = Circle2::new(0.5).unwrap();
    // center (1.4, 1.4) is 0.566 from the corner (1, 1)
    let pos_c = vector![0.9, 0.9];
    assert!(!intersects_poly_circle(&sq, &c, o(), pos_c, Z, false));
    assert!(!intersects_rect_circle(&rect, &c, o(), pos_c, false));
    let closer = vector![0.8, 0.8];
    assert!(intersects_poly_circle(&sq, &c, o(), closer, Z, true));
    assert!(intersects_circle_rect(&c, &rect, closer, o(), true));
}

#[test]
fn circle_line_exact() {
    let c = Circle2::new(1.0).unwrap();
    let far = line(vector![0.0, 2.5], vector![3.0, 2.5]);
    let near = line(vector![0.0, 1.5], vector![3.0, 1.5]);
    let tangent = line(vector![0.0, 2.0], vector![3.0, 2.0]);
    let beside = line(vector![3.0, 1.0], vector![5.0, 1.0]);
    assert!(!intersects_circle_line(&c, &far, o(), o(), false));
    assert!(intersects_circle_line(&c, &near, o(), o(), true));
    assert!(intersects_circle_line(&c, &tangent, o(), o(), false));
    assert!(!intersects_circle_line(&c, &tangent, o(), o(), true));
    assert!(!intersects_line_circle(&beside, &c, o(), o(), false));

    let mtv = intersect_mtv_circle_line(&c, &near, o(), o()).unwrap();
    assert!((mtv.depth - 0.5).abs() < 1e-9);
    assert!((mtv.axis - vector![0.0, -1.0]).norm() < 1e-9);
    assert!(intersect_mtv_circle_line(&c, &tangent, o(), o()).is_none());
}

#[test]
fn circle_centered_on_segment_leaves_along_normal() {
    let c = Circle2::new(1.0).unwrap();
    let through = line(vector![0.0, 1.0], vector![3.0, 1.0]);
    let mtv = intersect_mtv_circle_line(&c, &through, o(), o()).unwrap();
    assert!((mtv.depth - 1.0).abs() < 1e-12);
    assert!(mtv.axis.x.abs() < 1e-12);
}

#[test]
fn poly_line_crossing_and_touching() {
    let sq = unit_square();
    let crossing = line(vector![0.5, -1.0], vector![0.5, 2.0]);
    assert!(intersects_poly_line(&sq, &crossing, o(), o(), Z, true));
    let mtv = intersect_mtv_poly_line(&sq, &crossing, o(), o(), Z).unwrap();
    assert!((mtv.depth - 0.5).abs() < 1e-12);
    assert!((mtv.axis - vector![-1.0, 0.0]).norm() < 1e-12);

    let along_edge = line(vector![1.0, -1.0], vector![1.0, 2.0]);
    assert!(intersects_line_poly(&along_edge, &sq, o(), o(), Z, false));
    assert!(!intersects_line_poly(&along_edge, &sq, o(), o(), Z, true));

    let outside = line(vector![2.0, 0.0], vector![3.0, 1.0]);
    assert!(!intersects_poly_line(&sq, &outside, o(), o(), Z, false));
}

#[test]
fn rect_line_diagonal() {
    let rect = Rect2::new(o(), vector![2.0, 1.0]).unwrap();
    let diag = line(vector![-1.0, -1.0], vector![3.0, 3.0]);
    assert!(intersects_rect_line(&rect, &diag, o(), o(), true));
    assert!(intersects_line_rect(&diag, &rect, o(), o(), true));
    let clear = line(vector![3.0, 0.0], vector![4.0, 5.0]);
    assert!(!intersects_rect_line(&rect, &clear, o(), o(), false));
    assert!(intersect_mtv_line_rect(&clear, &rect, o(), o()).is_none());
}

fn scene() -> Vec<(Shape, Vector2<f64>)> {
    vec![
        (Shape::from(regular_polygon(1.0, 6).unwrap()), o()),
        (Shape::from(Rect2::new(vector![0.5, 0.5], vector![1.5, 1.5]).unwrap()), o()),
        (Shape::from(Circle2::new(0.6).unwrap()), vector![0.4, 0.4]),
        (Shape::from(line(o(), vector![2.0, 2.0])), o()),
    ]
}

#[test]
fn dispatch_covers_every_pair() {
    let shapes = scene();
    for (a, pa) in &shapes {
        for (b, pb) in &shapes {
            let tag = format!("{} vs {}", a.kind(), b.kind());
            assert!(Shape::intersects(a, b, *pa, *pb, Z, Z, true), "{tag}");
            assert!(Shape::intersects(b, a, *pb, *pa, Z, Z, true), "{tag} swapped");
            if matches!((a, b), (Shape::Line(_), Shape::Line(_))) {
                assert!(Shape::intersect_mtv(a, b, *pa, *pb, Z, Z).is_none());
                continue;
            }
            let mtv = Shape::intersect_mtv(a, b, *pa, *pb, Z, Z).unwrap();
            let back = Shape::intersect_mtv(b, a, *pb, *pa, Z, Z).unwrap();
            assert!((mtv.depth - back.depth).abs() < 1e-9, "{tag}");
            let moved = *pa + mtv.translation();
            assert!(!Shape::intersects(a, b, moved, *pb, Z, Z, true), "{tag} after mtv");
            assert!(Shape::intersects(a, b, moved, *pb, Z, Z, false), "{tag} touching");
        }
    }
}

#[test]
fn rotated_rect_turns_about_its_center() {
    let spin = Rotation2::from_degrees(45.0);
    let bar = Rect2::new(o(), vector![4.0, 0.5]).unwrap();
    let ball = Circle2::new(0.2).unwrap();
    // Ball centred on the bar's diagonal at (3, 1.25), clear of the axis-aligned bar.
    let at = vector![2.8, 1.05];
    let (a, b) = (Shape::from(bar), Shape::from(ball));
    assert!(!Shape::intersects(&a, &b, o(), at, Z, Z, false));
    let as_poly = Polygon2::from_rect(&bar).unwrap();
    for strict in [false, true] {
        assert!(Shape::intersects(&a, &b, o(), at, spin, Z, strict));
        assert!(Shape::intersects(&b, &a, at, o(), Z, spin, strict));
        assert_eq!(
            Shape::intersects(&a, &b, o(), at, spin, Z, strict),
            intersects_poly_circle(&as_poly, &ball, o(), at, spin, strict)
        );
    }
    let mtv = Shape::intersect_mtv(&a, &b, o(), at, spin, Z).unwrap();
    let expected = intersect_mtv_poly_circle(&as_poly, &ball, o(), at, spin).unwrap();
    assert!((mtv.depth - expected.depth).abs() < 1e-9);
    assert!(matches!(a.rotated(spin).unwrap(), Shape::Polygon(_)));
}

#[test]
fn rotated_segment_turns_about_its_midpoint() {
    let quarter = Rotation2::from_degrees(90.0);
    let seg = Shape::from(line(o(), vector![4.0, 0.0]));
    let block = Shape::from(Rect2::new(vector![1.5, 1.0], vector![2.5, 1.5]).unwrap());
    assert!(!Shape::intersects(&seg, &block, o(), o(), Z, Z, false));
    assert!(Shape::intersects(&seg, &block, o(), o(), quarter, Z, true));
    assert!(Shape::intersects(&block, &seg, o(), o(), Z, quarter, true));
    assert!(seg.contains(o(), quarter, vector![2.0, 1.0], false));
    match seg.rotated(quarter).unwrap() {
        Shape::Line(l) => {
            assert!((l.start - vector![2.0, -2.0]).norm() < 1e-9);
            assert!((l.end - vector![2.0, 2.0]).norm() < 1e-9);
        }
        other => panic!("expected a segment, got {}", other.kind()),
    }
}

#[test]
fn circle_ignores_rotation() {
    let shapes = scene();
    let spin = Rotation2::from_degrees(40.0);
    let (c, pc) = &shapes[2];
    for (b, pb) in &shapes {
        let nudge = vector![0.9, -0.3];
        for strict in [false, true] {
            assert_eq!(
                Shape::intersects(c, b, *pc + nudge, *pb, spin, Z, strict),
                Shape::intersects(c, b, *pc + nudge, *pb, Z, Z, strict)
            );
        }
    }
}

#[test]
fn contains_dispatch() {
    let shapes = scene();
    let mid = vector![1.0, 1.0];
    for (s, pos) in &shapes {
        assert!(s.contains(*pos, Z, mid, false), "{}", s.kind());
    }
    assert!(!shapes[3].0.contains(o(), Z, vector![1.0, 0.0], false));
}

// ---------- properties ----------

fn convex(index: u64) -> Polygon2 {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 10 },
        ..RadialCfg::default()
    };
    random_convex(cfg, ReplayToken { seed: 0x5eed, index }).unwrap()
}

fn partner(kind: u8) -> Shape {
    match kind {
        0 => Shape::from(Circle2::new(0.8).unwrap()),
        1 => Shape::from(Rect2::new(o(), vector![1.5, 0.7]).unwrap()),
        2 => Shape::from(line(vector![-1.0, 0.3], vector![1.2, -0.4])),
        _ => Shape::from(regular_polygon(0.9, 7).unwrap()),
    }
}

fn pose() -> impl Strategy<Value = (Vector2<f64>, f64)> {
    ((-2.5f64..2.5), (-2.5f64..2.5), (0.0f64..std::f64::consts::TAU)).prop_map(|(x, y, th)| (vector![x, y], th))
}

proptest! {
    #[test]
    fn mtv_against_every_kind_resolves_exactly(index in 0u64..500, kind in 0u8..4, (p1, t1) in pose(), (p2, t2) in pose()) {
        let a = Shape::from(convex(index));
        let b = partner(kind);
        let (r1, r2) = (Rotation2::new(t1), Rotation2::new(t2));
        match Shape::intersect_mtv(&a, &b, p1, p2, r1, r2) {
            Some(mtv) => {
                prop_assert!(mtv.depth > DEFAULT_EPSILON);
                prop_assert!(Shape::intersects(&a, &b, p1, p2, r1, r2, true));
                let back = Shape::intersect_mtv(&b, &a, p2, p1, r2, r1);
                prop_assert!(back.is_some_and(|m| (m.depth - mtv.depth).abs() < 1e-6));
                let moved = p1 + mtv.translation();
                prop_assert!(!Shape::intersects(&a, &b, moved, p2, r1, r2, true));
                let short = p1 + mtv.translation() * 0.999;
                prop_assert!(Shape::intersects(&a, &b, short, p2, r1, r2, false));
            }
            None => prop_assert!(!Shape::intersects(&a, &b, p1, p2, r1, r2, true)),
        }
    }
}
