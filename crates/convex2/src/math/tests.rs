use super::*;
use nalgebra::{vector, Vector2};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn rotation_normalizes_into_range() {
    let r = Rotation2::new(-FRAC_PI_2);
    assert!((r.theta - 3.0 * FRAC_PI_2).abs() < 1e-12);
    let r = Rotation2::new(5.0 * PI);
    assert!((r.theta - PI).abs() < 1e-12);
    assert!(Rotation2::new(TAU).is_zero());
    assert!(Rotation2::new(0.0).is_zero());
    assert_eq!(Rotation2::default(), Rotation2::ZERO);
}

#[test]
fn rotation_caches_trig_and_rotates() {
    let r = Rotation2::from_degrees(90.0);
    assert!((r.cos_theta - r.theta.cos()).abs() < 1e-15);
    assert!((r.sin_theta - r.theta.sin()).abs() < 1e-15);
    let v = r.rotate(vector![1.0, 0.0]);
    assert!((v - vector![0.0, 1.0]).norm() < 1e-12);
    let back = r.unrotate(v);
    assert!((back - vector![1.0, 0.0]).norm() < 1e-12);
    let inv = r.inverse().rotate(v);
    assert!((inv - vector![1.0, 0.0]).norm() < 1e-12);
    let m = r.matrix() * vector![2.0, 3.0];
    assert!((m - r.rotate(vector![2.0, 3.0])).norm() < 1e-12);
}

#[test]
fn rotate_about_keeps_pivot_fixed() {
    let r = Rotation2::from_degrees(37.0);
    let pivot = vector![3.0, -1.0];
    assert!((r.rotate_about(pivot, pivot) - pivot).norm() < 1e-12);
    let p = r.rotate_about(vector![4.0, -1.0], pivot);
    assert!(((p - pivot).norm() - 1.0).abs() < 1e-12);
}

#[test]
fn standard_normal_merges_opposites() {
    let n = Vector2::new(0.6, -0.8);
    assert!(approx_eq_vec(standard_normal(n), standard_normal(-n)));
    let vertical = Vector2::new(0.0, -1.0);
    assert_eq!(standard_normal(vertical), Vector2::new(0.0, 1.0));
    let almost_vertical = Vector2::new(-0.0005, -1.0);
    assert!(standard_normal(almost_vertical).y > 0.0);
}

#[test]
fn triple_cross_gives_perpendicular_toward_origin() {
    // Edge from a to b, origin on the +y side.
    let a = vector![-1.0, -1.0];
    let b = vector![1.0, -1.0];
    let ab = b - a;
    let ao = -a;
    let d = triple_cross(ab, ao, ab);
    assert!(d.dot(&ab).abs() < 1e-12);
    assert!(d.y > 0.0);
}

#[test]
fn parallel_and_collinear() {
    assert!(are_parallel(vector![1.0, 1.0], vector![-2.0, -2.0]));
    assert!(!are_parallel(vector![1.0, 0.0], vector![0.0, 1.0]));
    assert!(are_points_collinear(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![5.0, 5.0]
    ));
    assert!(!are_points_collinear(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![5.0, 4.0]
    ));
    assert_eq!(perpendicular(vector![1.0, 0.0]), vector![0.0, 1.0]);
    assert_eq!(cross(vector![1.0, 0.0], vector![0.0, 1.0]), 1.0);
    assert!(approx_eq(1.0, 1.0005));
    assert!(!approx_eq_eps(1.0, 1.0005, 1e-6));
}
