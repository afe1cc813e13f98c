//! Circles positioned by the top-left of their bounding box.

use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::{AxisAlignedLine2, Distance, Mtv, Rect2};
use crate::error::GeomError;
use crate::math::DEFAULT_EPSILON;

/// Circle of `radius`; position is external.
///
/// The position passed to every query is the top-left of the circle's
/// bounding box, so the center is `pos + (radius, radius)`. Equality and
/// hashing look at the radius only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2 {
    pub radius: f64,
}

impl Eq for Circle2 {}

impl Hash for Circle2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radius.to_bits().hash(state);
    }
}

impl Circle2 {
    pub fn new(radius: f64) -> Result<Self, GeomError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeomError::InvalidRadius { radius });
        }
        Ok(Self { radius })
    }

    #[inline]
    pub fn center(&self, pos: Vector2<f64>) -> Vector2<f64> {
        pos + Vector2::new(self.radius, self.radius)
    }

    /// Bounding box at zero offset (`(0,0)`–`(2r,2r)`).
    pub fn aabb(&self) -> Result<Rect2, GeomError> {
        let d = 2.0 * self.radius;
        Rect2::new(Vector2::zeros(), Vector2::new(d, d))
    }

    pub fn contains(&self, pos: Vector2<f64>, point: Vector2<f64>, strict: bool) -> bool {
        let dist = (point - self.center(pos)).norm();
        if strict {
            dist < self.radius - DEFAULT_EPSILON
        } else {
            dist <= self.radius + DEFAULT_EPSILON
        }
    }

    /// Projection onto a unit `axis`.
    #[inline]
    pub fn project(&self, pos: Vector2<f64>, axis: Vector2<f64>) -> AxisAlignedLine2 {
        let c = self.center(pos).dot(&axis);
        AxisAlignedLine2 {
            axis,
            min: c - self.radius,
            max: c + self.radius,
        }
    }

    pub fn intersects(
        a: &Circle2,
        b: &Circle2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        strict: bool,
    ) -> bool {
        let dist = (a.center(pos1) - b.center(pos2)).norm();
        let reach = a.radius + b.radius;
        if strict {
            reach - dist > DEFAULT_EPSILON
        } else {
            dist - reach <= DEFAULT_EPSILON
        }
    }

    /// Push for `a` along the center line; concentric circles push along `+x`.
    pub fn intersect_mtv(a: &Circle2, b: &Circle2, pos1: Vector2<f64>, pos2: Vector2<f64>) -> Option<Mtv> {
        let delta = a.center(pos1) - b.center(pos2);
        let dist = delta.norm();
        let depth = a.radius + b.radius - dist;
        if depth <= DEFAULT_EPSILON {
            return None;
        }
        let axis = if dist > 0.0 {
            delta / dist
        } else {
            Vector2::new(1.0, 0.0)
        };
        Some(Mtv { axis, depth })
    }

    pub fn min_distance(a: &Circle2, b: &Circle2, pos1: Vector2<f64>, pos2: Vector2<f64>) -> Option<Distance> {
        let delta = b.center(pos2) - a.center(pos1);
        let dist = delta.norm();
        let gap = dist - a.radius - b.radius;
        if gap <= DEFAULT_EPSILON {
            return None;
        }
        Some(Distance {
            axis: delta / dist,
            distance: gap,
        })
    }

    /// Gap from the circle to `point`; `None` if the point is (non-strictly) inside.
    pub fn min_distance_to_point(&self, pos: Vector2<f64>, point: Vector2<f64>) -> Option<Distance> {
        let delta = point - self.center(pos);
        let dist = delta.norm();
        let gap = dist - self.radius;
        if gap <= DEFAULT_EPSILON {
            return None;
        }
        Some(Distance {
            axis: delta / dist,
            distance: gap,
        })
    }
}
