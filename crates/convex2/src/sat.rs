//! Separating-axis driver shared by every shape pair.
//!
//! Callers supply candidate axes plus one projection closure per operand; this
//! module owns the axis bookkeeping (canonical dedup) and the three reductions:
//! boolean overlap, smallest overlap (MTV) and largest gap (min distance).

use nalgebra::Vector2;

use crate::math::{same_axis, standard_normal};
use crate::shapes::{AxisAlignedLine2, Distance, Mtv};

/// Push the canonical form of `axis` unless an equivalent axis is present.
///
/// `axis` must be unit length.
#[inline]
pub(crate) fn push_unique_axis(axes: &mut Vec<Vector2<f64>>, axis: Vector2<f64>) {
    let n = standard_normal(axis);
    if !axes.iter().any(|a| same_axis(*a, n)) {
        axes.push(n);
    }
}

/// Unit direction `from -> to`, or `None` when the points coincide.
#[inline]
pub(crate) fn unit_between(from: Vector2<f64>, to: Vector2<f64>) -> Option<Vector2<f64>> {
    let d = to - from;
    let len = d.norm();
    if len > 0.0 && len.is_finite() {
        Some(d / len)
    } else {
        None
    }
}

/// True unless some axis separates the projections.
pub(crate) fn overlaps_on_all<P1, P2>(axes: &[Vector2<f64>], proj1: P1, proj2: P2, strict: bool) -> bool
where
    P1: Fn(Vector2<f64>) -> AxisAlignedLine2,
    P2: Fn(Vector2<f64>) -> AxisAlignedLine2,
{
    axes.iter()
        .all(|&axis| proj1(axis).intersects(&proj2(axis), strict))
}

/// Smallest strict overlap across `axes`, or `None` if any axis fails to overlap.
///
/// Ties keep the first axis seen; the order is not part of the contract.
pub(crate) fn min_overlap<P1, P2>(axes: &[Vector2<f64>], proj1: P1, proj2: P2) -> Option<Mtv>
where
    P1: Fn(Vector2<f64>) -> AxisAlignedLine2,
    P2: Fn(Vector2<f64>) -> AxisAlignedLine2,
{
    let mut best: Option<(Vector2<f64>, f64)> = None;
    for &axis in axes {
        let push = proj1(axis).intersect_mtv(&proj2(axis))?;
        if best.map_or(true, |(_, b)| push.abs() < b.abs()) {
            best = Some((axis, push));
        }
    }
    best.map(|(axis, push)| Mtv::from_signed(axis, push))
}

/// Largest gap across `axes`, or `None` if every axis shows (non-strict) overlap.
pub(crate) fn max_gap<P1, P2>(axes: &[Vector2<f64>], proj1: P1, proj2: P2) -> Option<Distance>
where
    P1: Fn(Vector2<f64>) -> AxisAlignedLine2,
    P2: Fn(Vector2<f64>) -> AxisAlignedLine2,
{
    let mut best: Option<(Vector2<f64>, f64)> = None;
    for &axis in axes {
        if let Some(gap) = proj1(axis).min_distance(&proj2(axis)) {
            if best.map_or(true, |(_, b)| gap.abs() > b.abs()) {
                best = Some((axis, gap));
            }
        }
    }
    best.map(|(axis, gap)| Distance::from_signed(axis, gap))
}

/// Project a vertex set onto `axis`, offset by `offset · axis`.
#[inline]
pub(crate) fn project_points(points: &[Vector2<f64>], offset: Vector2<f64>, axis: Vector2<f64>) -> AxisAlignedLine2 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        let d = p.dot(&axis);
        if d < min {
            min = d;
        }
        if d > max {
            max = d;
        }
    }
    let shift = offset.dot(&axis);
    AxisAlignedLine2 {
        axis,
        min: min + shift,
        max: max + shift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square(at: Vector2<f64>) -> impl Fn(Vector2<f64>) -> AxisAlignedLine2 {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        move |axis| project_points(&pts, at, axis)
    }

    #[test]
    fn dedup_merges_opposite_normals() {
        let mut axes = Vec::new();
        push_unique_axis(&mut axes, vector![1.0, 0.0]);
        push_unique_axis(&mut axes, vector![-1.0, 0.0]);
        push_unique_axis(&mut axes, vector![0.0, -1.0]);
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[1], vector![0.0, 1.0]);
    }

    #[test]
    fn dedup_keeps_nearly_parallel_axes() {
        let mut axes = Vec::new();
        push_unique_axis(&mut axes, vector![0.0, 1.0]);
        let tilted = vector![-0.0005, 1.0].normalize();
        push_unique_axis(&mut axes, tilted);
        push_unique_axis(&mut axes, -tilted);
        assert_eq!(axes.len(), 2);
    }

    #[test]
    fn reductions_on_unit_squares() {
        let axes = [vector![1.0, 0.0], vector![0.0, 1.0]];
        let a = square(vector![0.0, 0.0]);
        let b = square(vector![0.75, 0.5]);
        assert!(overlaps_on_all(&axes, &a, &b, true));
        let mtv = min_overlap(&axes, &a, &b).unwrap();
        assert!((mtv.depth - 0.25).abs() < 1e-12);
        assert_eq!(mtv.axis, vector![-1.0, 0.0]);
        assert!(max_gap(&axes, &a, &b).is_none());

        let far = square(vector![3.0, 0.0]);
        assert!(!overlaps_on_all(&axes, &a, &far, false));
        assert!(min_overlap(&axes, &a, &far).is_none());
        let d = max_gap(&axes, &a, &far).unwrap();
        assert!((d.distance - 2.0).abs() < 1e-12);
        assert_eq!(d.axis, vector![1.0, 0.0]);
    }

    #[test]
    fn unit_between_rejects_coincident_points() {
        assert!(unit_between(vector![1.0, 1.0], vector![1.0, 1.0]).is_none());
        let u = unit_between(vector![0.0, 0.0], vector![0.0, 2.0]).unwrap();
        assert_eq!(u, vector![0.0, 1.0]);
    }
}
