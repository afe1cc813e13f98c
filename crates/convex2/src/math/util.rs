//! Vector helpers used by the SAT and simplex code.

use nalgebra::Vector2;

use super::cfg::{DEFAULT_EPSILON, PARALLEL_SIN_EPS};

#[inline]
pub fn approx_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, DEFAULT_EPSILON)
}

/// Component-wise approximate equality with `DEFAULT_EPSILON`.
#[inline]
pub fn approx_eq_vec(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// Scalar 2D cross product `a.x*b.y - a.y*b.x`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `v` rotated a quarter turn from +x toward +y: `(-y, x)`.
#[inline]
pub fn perpendicular(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// True if `a` and `b` point along the same line (either sign).
///
/// Compares the sine of the angle between them against `DEFAULT_EPSILON`, so
/// the test is independent of the vectors' lengths.
pub fn are_parallel(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    let la = a.norm();
    let lb = b.norm();
    if la == 0.0 || lb == 0.0 {
        return true;
    }
    (cross(a, b) / (la * lb)).abs() <= DEFAULT_EPSILON
}

/// True if `c` lies within `DEFAULT_EPSILON` of the infinite line through `a`, `b`.
pub fn are_points_collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    let ab = b - a;
    let len = ab.norm();
    if len == 0.0 {
        return (c - a).norm() <= DEFAULT_EPSILON;
    }
    (cross(ab, c - a) / len).abs() <= DEFAULT_EPSILON
}

/// `(a × b) × c` with `a`, `b`, `c` lifted to z = 0, projected back to the plane.
///
/// Expands to `b (a·c) − a (b·c)`. With `c = a` this yields the component of
/// `b` perpendicular to `a`, scaled by `|a|²` (GJK's edge-normal trick).
#[inline]
pub fn triple_cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Vector2<f64> {
    b * a.dot(&c) - a * b.dot(&c)
}

/// True when unit vectors `a` and `b` span the same separating axis.
///
/// Compares the sine of the angle between them against `PARALLEL_SIN_EPS`.
/// Edges of long thin polygons may differ by far less than `DEFAULT_EPSILON`
/// and still need their own axis.
#[inline]
pub fn same_axis(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    cross(a, b).abs() <= PARALLEL_SIN_EPS
}

/// Canonical representative of the axis `{n, -n}`.
///
/// Flips `n` so that `x > 0`, or `y > 0` when `|x| <= DEFAULT_EPSILON`. Two normals
/// of the same axis map to approximately equal vectors.
#[inline]
pub fn standard_normal(n: Vector2<f64>) -> Vector2<f64> {
    if n.x.abs() <= DEFAULT_EPSILON {
        if n.y < 0.0 {
            -n
        } else {
            n
        }
    } else if n.x < 0.0 {
        -n
    } else {
        n
    }
}
