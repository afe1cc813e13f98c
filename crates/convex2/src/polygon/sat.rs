//! Separating-axis queries between two polygons.

use nalgebra::Vector2;

use super::Polygon2;
use crate::math::{same_axis, Rotation2};
use crate::sat::{min_overlap, overlaps_on_all, project_points, push_unique_axis};
use crate::shapes::Mtv;

impl Polygon2 {
    /// Canonical union of both normal sets, each rotated into world space.
    pub(crate) fn pair_axes(a: &Polygon2, b: &Polygon2, rot1: Rotation2, rot2: Rotation2) -> Vec<Vector2<f64>> {
        let mut axes = Vec::with_capacity(a.normals.len() + b.normals.len());
        for n in &a.normals {
            push_unique_axis(&mut axes, rot1.rotate(*n));
        }
        for n in &b.normals {
            push_unique_axis(&mut axes, rot2.rotate(*n));
        }
        axes
    }

    /// SAT overlap test; `strict` requires a positive-area overlap.
    pub fn intersects(
        a: &Polygon2,
        b: &Polygon2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        rot1: Rotation2,
        rot2: Rotation2,
        strict: bool,
    ) -> bool {
        if rot1.is_zero() && rot2.is_zero() {
            return intersects_unrotated(a, b, pos1, pos2, strict);
        }
        let axes = Polygon2::pair_axes(a, b, rot1, rot2);
        overlaps_on_all(
            &axes,
            |axis| a.project(pos1, rot1, axis),
            |axis| b.project(pos2, rot2, axis),
            strict,
        )
    }

    /// Minimum translation of `a` that separates the pair; `None` unless they
    /// overlap strictly. Which axis wins a tie is unspecified.
    pub fn intersect_mtv(
        a: &Polygon2,
        b: &Polygon2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        rot1: Rotation2,
        rot2: Rotation2,
    ) -> Option<Mtv> {
        let axes = Polygon2::pair_axes(a, b, rot1, rot2);
        min_overlap(
            &axes,
            |axis| a.project(pos1, rot1, axis),
            |axis| b.project(pos2, rot2, axis),
        )
    }
}

// Stored normals are already canonical, so no per-call allocation; bail on the
// first separating axis.
fn intersects_unrotated(a: &Polygon2, b: &Polygon2, pos1: Vector2<f64>, pos2: Vector2<f64>, strict: bool) -> bool {
    let separated = |axis: Vector2<f64>| {
        !project_points(&a.vertices, pos1, axis).intersects(&project_points(&b.vertices, pos2, axis), strict)
    };
    if a.normals.iter().any(|&n| separated(n)) {
        return false;
    }
    !b.normals
        .iter()
        .filter(|&&n| !a.normals.iter().any(|m| same_axis(*m, n)))
        .any(|&n| separated(n))
}
