//! Convex polygons: immutable shape definition plus stateless queries.
//!
//! Purpose
//! - Build a polygon once (normals, centroid, winding, AABB, fan partition;
//!   the longest axis on first use) and reuse it for every frame; positions
//!   and rotations are always passed to the query.
//! - Provide SAT intersection/MTV (`sat`), a simplex-walk intersection test over
//!   the Minkowski difference (`gjk`), point/polygon distances (`distance`) and
//!   the swept-quad decomposition (`sweep`).
//!
//! Conventions
//! - Rotations pivot on the polygon's area centroid: a vertex `v` lands at
//!   `rot(v - center) + center + pos`.
//! - Convexity is the caller's responsibility; the fan partition still answers
//!   containment for star-shaped rings, but SAT/GJK assume convex input.
//!
//! Module layout: `build.rs` (construction), `sat.rs`, `gjk.rs`, `distance.rs`,
//! `sweep.rs`; tests live in `tests.rs`.

mod build;
mod distance;
mod gjk;
mod sat;
mod sweep;

pub use gjk::MinkowskiDifference;

use nalgebra::Vector2;
use std::sync::OnceLock;

use crate::error::{ensure_finite, GeomError};
use crate::math::{approx_eq_vec, Rotation2};
use crate::sat::project_points;
use crate::shapes::{AxisAlignedLine2, Line2, Rect2, Triangle2};

/// Immutable convex polygon.
///
/// Invariants (established by `new`, never changed afterwards):
/// - At least 3 vertices; no vertex approximately equals its successor.
/// - `normals`: one canonical unit normal per distinct edge direction.
/// - `partition`: fan triangles from vertex 0, sorted by descending area.
/// - `center`/`area`: area-weighted centroid and (unsigned) area of the fan.
/// - `clockwise`: ring order as seen on screen (y down).
#[derive(Clone, Debug)]
pub struct Polygon2 {
    vertices: Vec<Vector2<f64>>,
    normals: Vec<Vector2<f64>>,
    lines: Vec<Line2>,
    partition: Vec<Triangle2>,
    center: Vector2<f64>,
    area: f64,
    clockwise: bool,
    aabb: Rect2,
    longest_axis_length: OnceLock<f64>,
}

impl Polygon2 {
    /// Validate the ring and precompute every derived quantity.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeomError::TooFewVertices { count: n });
        }
        for v in &vertices {
            ensure_finite(*v)?;
        }
        for i in 0..n {
            if approx_eq_vec(vertices[i], vertices[(i + 1) % n]) {
                return Err(GeomError::DuplicateVertex { index: i });
            }
        }
        let lines = build::ring_lines(&vertices)?;
        let normals = build::unique_normals(&lines);
        let partition = build::fan_partition(&vertices);
        if partition.is_empty() {
            return Err(GeomError::ZeroAreaPolygon);
        }
        let (center, area) = build::centroid_and_area(&partition);
        let clockwise = build::winding(&vertices, center);
        let aabb = build::bounds(&vertices)?;
        Ok(Self {
            vertices,
            normals,
            lines,
            partition,
            center,
            area,
            clockwise,
            aabb,
            longest_axis_length: OnceLock::new(),
        })
    }

    /// Polygon with the rectangle's corners (ring `min`, `upper_right`, `max`, `lower_left`).
    pub fn from_rect(rect: &Rect2) -> Result<Self, GeomError> {
        Polygon2::new(rect.corners(Vector2::zeros()).to_vec())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }
    #[inline]
    pub fn normals(&self) -> &[Vector2<f64>] {
        &self.normals
    }
    #[inline]
    pub fn lines(&self) -> &[Line2] {
        &self.lines
    }
    #[inline]
    pub fn triangle_partition(&self) -> &[Triangle2] {
        &self.partition
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }
    /// Bounding box at zero rotation and zero offset.
    #[inline]
    pub fn aabb(&self) -> &Rect2 {
        &self.aabb
    }
    /// Largest distance between any two vertices (O(n²) on first call, cached).
    pub fn longest_axis_length(&self) -> f64 {
        *self
            .longest_axis_length
            .get_or_init(|| build::longest_axis(&self.vertices))
    }

    /// World-space vertices for this placement (the stored shape is untouched).
    pub fn actualize(&self, pos: Vector2<f64>, rot: Rotation2) -> Vec<Vector2<f64>> {
        if rot.is_zero() {
            return self.vertices.iter().map(|v| v + pos).collect();
        }
        let pivot = self.center + pos;
        self.vertices
            .iter()
            .map(|v| rot.rotate(v - self.center) + pivot)
            .collect()
    }

    /// Map a world point into the polygon's unrotated, unshifted frame.
    #[inline]
    pub(crate) fn to_local(&self, pos: Vector2<f64>, rot: Rotation2, point: Vector2<f64>) -> Vector2<f64> {
        rot.unrotate(point - pos - self.center) + self.center
    }

    /// Projection onto a unit `axis`.
    ///
    /// Rotated placements rotate the axis once instead of every vertex:
    /// `(R(v - c) + c + pos)·a = v·Rᵀa - c·Rᵀa + (c + pos)·a`.
    pub fn project(&self, pos: Vector2<f64>, rot: Rotation2, axis: Vector2<f64>) -> AxisAlignedLine2 {
        if rot.is_zero() {
            return project_points(&self.vertices, pos, axis);
        }
        let local_axis = rot.unrotate(axis);
        let local = project_points(&self.vertices, Vector2::zeros(), local_axis);
        let shift = (self.center + pos).dot(&axis) - self.center.dot(&local_axis);
        AxisAlignedLine2 {
            axis,
            min: local.min + shift,
            max: local.max + shift,
        }
    }

    /// Point membership; `strict` rejects points on the boundary.
    ///
    /// Tries the largest fan triangles first; boundary points are caught by
    /// the ring edges, so points within epsilon outside still count as
    /// non-strictly contained.
    pub fn contains(&self, pos: Vector2<f64>, rot: Rotation2, point: Vector2<f64>, strict: bool) -> bool {
        let local = self.to_local(pos, rot, point);
        let origin = Vector2::zeros();
        if !self.aabb.contains(origin, local, false) {
            return false;
        }
        let on_edge = || self.lines.iter().any(|l| l.contains(origin, local, false));
        let in_fan = || self.partition.iter().any(|t| t.contains(origin, local, false));
        if strict {
            !on_edge() && in_fan()
        } else {
            in_fan() || on_edge()
        }
    }

    /// New polygon with every vertex rotated about the centroid.
    ///
    /// Meant to be cached by callers that query the same rotated shape often
    /// (and required for `min_distance`).
    pub fn rotated(&self, rot: Rotation2) -> Result<Polygon2, GeomError> {
        if rot.is_zero() {
            return Ok(self.clone());
        }
        Polygon2::new(
            self.vertices
                .iter()
                .map(|v| rot.rotate_about(*v, self.center))
                .collect(),
        )
    }

    /// Outward unit normal of edge `i` (`lines[i]`).
    #[inline]
    pub(crate) fn outward_normal(&self, i: usize) -> Vector2<f64> {
        // Screen-clockwise rings have their interior on the `normal` side.
        if self.clockwise {
            -self.lines[i].normal
        } else {
            self.lines[i].normal
        }
    }
}
