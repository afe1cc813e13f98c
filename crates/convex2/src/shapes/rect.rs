//! Axis-aligned rectangles (no rotation; rotated boxes are polygons).

use nalgebra::Vector2;

use super::axis_line::{interval_contains, intervals_intersect, intervals_min_distance, intervals_mtv};
use super::{AxisAlignedLine2, Distance, Mtv};
use crate::error::{ensure_finite, GeomError};
use crate::math::DEFAULT_EPSILON;

/// Axis-aligned box `min..max`.
///
/// Invariants:
/// - `max.x - min.x > DEFAULT_EPSILON` and `max.y - min.y > DEFAULT_EPSILON`.
/// - Screen convention (y down): `min` is the top-left corner,
///   `upper_right = (max.x, min.y)`, `lower_left = (min.x, max.y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
    pub upper_right: Vector2<f64>,
    pub lower_left: Vector2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Rect2 {
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Result<Self, GeomError> {
        ensure_finite(min)?;
        ensure_finite(max)?;
        let width = max.x - min.x;
        let height = max.y - min.y;
        if width <= DEFAULT_EPSILON || height <= DEFAULT_EPSILON {
            return Err(GeomError::DegenerateRect { min, max });
        }
        Ok(Self {
            min,
            max,
            upper_right: Vector2::new(max.x, min.y),
            lower_left: Vector2::new(min.x, max.y),
            width,
            height,
        })
    }

    /// Box spanned by two arbitrary opposite corners.
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Result<Self, GeomError> {
        Rect2::new(
            Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    #[inline]
    pub fn center(&self, pos: Vector2<f64>) -> Vector2<f64> {
        pos + (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Corners as a ring: `min`, `upper_right`, `max`, `lower_left`.
    #[inline]
    pub fn corners(&self, pos: Vector2<f64>) -> [Vector2<f64>; 4] {
        [
            self.min + pos,
            self.upper_right + pos,
            self.max + pos,
            self.lower_left + pos,
        ]
    }

    pub fn contains(&self, pos: Vector2<f64>, point: Vector2<f64>, strict: bool) -> bool {
        interval_contains(self.min.x + pos.x, self.max.x + pos.x, point.x, strict, false)
            && interval_contains(self.min.y + pos.y, self.max.y + pos.y, point.y, strict, false)
    }

    /// `inner` lies inside `outer`, judged by `inner`'s min and max corners.
    ///
    /// Only meaningful because both boxes are axis-aligned; a rotated inner
    /// region must be tested as a polygon instead.
    pub fn contains_rect(
        outer: &Rect2,
        inner: &Rect2,
        pos_outer: Vector2<f64>,
        pos_inner: Vector2<f64>,
        strict: bool,
    ) -> bool {
        outer.contains(pos_outer, inner.min + pos_inner, strict)
            && outer.contains(pos_outer, inner.max + pos_inner, strict)
    }

    /// Projection onto a unit `axis`.
    pub fn project(&self, pos: Vector2<f64>, axis: Vector2<f64>) -> AxisAlignedLine2 {
        let c = self.center(pos).dot(&axis);
        let half = 0.5 * (self.width * axis.x.abs() + self.height * axis.y.abs());
        AxisAlignedLine2 {
            axis,
            min: c - half,
            max: c + half,
        }
    }

    pub fn intersects(a: &Rect2, b: &Rect2, pos1: Vector2<f64>, pos2: Vector2<f64>, strict: bool) -> bool {
        intervals_intersect(
            a.min.x + pos1.x,
            a.max.x + pos1.x,
            b.min.x + pos2.x,
            b.max.x + pos2.x,
            strict,
            false,
        ) && intervals_intersect(
            a.min.y + pos1.y,
            a.max.y + pos1.y,
            b.min.y + pos2.y,
            b.max.y + pos2.y,
            strict,
            false,
        )
    }

    /// Shorter of the x and y pushes for `a` (ties push along x).
    pub fn intersect_mtv(a: &Rect2, b: &Rect2, pos1: Vector2<f64>, pos2: Vector2<f64>) -> Option<Mtv> {
        let px = intervals_mtv(
            a.min.x + pos1.x,
            a.max.x + pos1.x,
            b.min.x + pos2.x,
            b.max.x + pos2.x,
            false,
        )?;
        let py = intervals_mtv(
            a.min.y + pos1.y,
            a.max.y + pos1.y,
            b.min.y + pos2.y,
            b.max.y + pos2.y,
            false,
        )?;
        if px.abs() <= py.abs() {
            Some(Mtv::from_signed(Vector2::new(1.0, 0.0), px))
        } else {
            Some(Mtv::from_signed(Vector2::new(0.0, 1.0), py))
        }
    }

    /// Exact gap between two boxes (corner-to-corner when separated on both axes).
    pub fn min_distance(a: &Rect2, b: &Rect2, pos1: Vector2<f64>, pos2: Vector2<f64>) -> Option<Distance> {
        let gx = intervals_min_distance(
            a.min.x + pos1.x,
            a.max.x + pos1.x,
            b.min.x + pos2.x,
            b.max.x + pos2.x,
            false,
        );
        let gy = intervals_min_distance(
            a.min.y + pos1.y,
            a.max.y + pos1.y,
            b.min.y + pos2.y,
            b.max.y + pos2.y,
            false,
        );
        match (gx, gy) {
            (None, None) => None,
            (Some(x), None) => Some(Distance::from_signed(Vector2::new(1.0, 0.0), x)),
            (None, Some(y)) => Some(Distance::from_signed(Vector2::new(0.0, 1.0), y)),
            (Some(x), Some(y)) => {
                let v = Vector2::new(x, y);
                let len = v.norm();
                Some(Distance {
                    axis: v / len,
                    distance: len,
                })
            }
        }
    }

    /// Gap from the box to `point`; `None` if the point is (non-strictly) inside.
    pub fn min_distance_to_point(&self, pos: Vector2<f64>, point: Vector2<f64>) -> Option<Distance> {
        let lo = self.min + pos;
        let hi = self.max + pos;
        let clamped = Vector2::new(point.x.clamp(lo.x, hi.x), point.y.clamp(lo.y, hi.y));
        let delta = point - clamped;
        let dist = delta.norm();
        if dist <= DEFAULT_EPSILON {
            return None;
        }
        Some(Distance {
            axis: delta / dist,
            distance: dist,
        })
    }
}
