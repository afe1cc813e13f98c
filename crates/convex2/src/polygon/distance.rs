//! Separation distances (point to polygon, polygon to polygon).

use nalgebra::Vector2;

use super::Polygon2;
use crate::error::GeomError;
use crate::math::{Rotation2, DEFAULT_EPSILON};
use crate::sat::{max_gap, project_points, push_unique_axis, unit_between};
use crate::shapes::Distance;

impl Polygon2 {
    /// Distance from `point` to the polygon, `None` when the point is inside or
    /// within epsilon of the boundary.
    ///
    /// Only edges the point lies strictly above (outward side) are candidates;
    /// for a convex ring one of them owns the closest boundary point. The
    /// epsilon cut-off applies to the final distance, not per edge. The axis
    /// points from the polygon toward `point`.
    pub fn min_distance_to_point(&self, pos: Vector2<f64>, rot: Rotation2, point: Vector2<f64>) -> Option<Distance> {
        let local = self.to_local(pos, rot, point);
        let mut best: Option<(Vector2<f64>, f64)> = None;
        for (i, line) in self.lines.iter().enumerate() {
            let rel = local - line.start;
            if rel.dot(&self.outward_normal(i)) <= 0.0 {
                continue;
            }
            let t = rel.dot(&line.axis);
            let closest = if t <= 0.0 {
                line.start
            } else if t >= line.magnitude {
                line.end
            } else {
                line.start + line.axis * t
            };
            let d2 = (local - closest).norm_squared();
            if best.map_or(true, |(_, b)| d2 < b) {
                best = Some((closest, d2));
            }
        }
        let (closest, d2) = best?;
        let distance = d2.sqrt();
        if distance <= DEFAULT_EPSILON {
            return None;
        }
        Some(Distance {
            axis: rot.rotate((local - closest) / distance),
            distance,
        })
    }

    /// Distance between two unrotated polygons.
    ///
    /// `Ok(None)` when they intersect (non-strictly). Candidate axes are both
    /// normal sets plus every vertex-to-vertex direction, which covers the
    /// vertex/edge and vertex/vertex closest-feature cases exactly. Rotated
    /// operands are rejected; rotate with [`Polygon2::rotated`] first.
    pub fn min_distance(
        a: &Polygon2,
        b: &Polygon2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        rot1: Rotation2,
        rot2: Rotation2,
    ) -> Result<Option<Distance>, GeomError> {
        if !rot1.is_zero() || !rot2.is_zero() {
            return Err(GeomError::RotatedDistanceUnsupported);
        }
        if Polygon2::intersects(a, b, pos1, pos2, rot1, rot2, false) {
            return Ok(None);
        }
        let mut axes = Vec::with_capacity(a.normals.len() + b.normals.len() + a.vertices.len() * b.vertices.len());
        for n in a.normals.iter().chain(&b.normals) {
            push_unique_axis(&mut axes, *n);
        }
        for va in &a.vertices {
            for vb in &b.vertices {
                if let Some(u) = unit_between(va + pos1, vb + pos2) {
                    axes.push(u);
                }
            }
        }
        Ok(max_gap(
            &axes,
            |axis| project_points(&a.vertices, pos1, axis),
            |axis| project_points(&b.vertices, pos2, axis),
        ))
    }
}
