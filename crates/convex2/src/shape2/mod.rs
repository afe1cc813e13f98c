//! Cross-type dispatch over polygon, rectangle, circle and segment.
//!
//! The free functions in `cross` cover each mixed pair; [`Shape`] wraps any of
//! the four kinds and routes a pair query to the right routine, including the
//! same-kind ones defined on the shapes themselves.
//!
//! Only polygons carry a live rotation through the SAT routines. A non-zero
//! rotation on any other operand is baked first via [`Shape::rotated`]: a
//! rectangle becomes a polygon turned about its center, a segment has its
//! endpoints turned about its midpoint, and a circle is unchanged.

mod cross;

pub use cross::*;

use nalgebra::Vector2;
use std::borrow::Cow;

use crate::error::GeomError;
use crate::math::Rotation2;
use crate::polygon::Polygon2;
use crate::shapes::{Circle2, Line2, Mtv, Rect2};

/// Any collidable shape.
#[derive(Clone, Debug)]
pub enum Shape {
    Polygon(Polygon2),
    Rect(Rect2),
    Circle(Circle2),
    Line(Line2),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "polygon",
            Shape::Rect(_) => "rect",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
        }
    }

    /// Copy with `rot` applied about the shape's own center. The result needs
    /// no further rotation.
    pub fn rotated(&self, rot: Rotation2) -> Result<Shape, GeomError> {
        if rot.is_zero() {
            return Ok(self.clone());
        }
        match self {
            Shape::Polygon(p) => Ok(Shape::Polygon(p.rotated(rot)?)),
            Shape::Rect(r) => Ok(Shape::Polygon(Polygon2::from_rect(r)?.rotated(rot)?)),
            Shape::Circle(c) => Ok(Shape::Circle(*c)),
            Shape::Line(l) => {
                let mid = (l.start + l.end) * 0.5;
                Ok(Shape::Line(Line2::new(
                    rot.rotate_about(l.start, mid),
                    rot.rotate_about(l.end, mid),
                )?))
            }
        }
    }

    /// Operand ready for dispatch: polygons keep `rot`, everything else has it baked in.
    fn settled(&self, rot: Rotation2) -> (Cow<'_, Shape>, Rotation2) {
        match self {
            Shape::Polygon(_) | Shape::Circle(_) => (Cow::Borrowed(self), rot),
            _ if rot.is_zero() => (Cow::Borrowed(self), rot),
            _ => match self.rotated(rot) {
                Ok(shape) => (Cow::Owned(shape), Rotation2::ZERO),
                Err(e) => {
                    tracing::warn!(kind = self.kind(), error = %e, "rotation could not be applied");
                    (Cow::Borrowed(self), Rotation2::ZERO)
                }
            },
        }
    }

    pub fn contains(&self, pos: Vector2<f64>, rot: Rotation2, point: Vector2<f64>, strict: bool) -> bool {
        let (shape, rot) = self.settled(rot);
        match shape.as_ref() {
            Shape::Polygon(p) => p.contains(pos, rot, point, strict),
            Shape::Rect(r) => r.contains(pos, point, strict),
            Shape::Circle(c) => c.contains(pos, point, strict),
            Shape::Line(l) => l.contains(pos, point, strict),
        }
    }

    pub fn intersects(
        a: &Shape,
        b: &Shape,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        rot1: Rotation2,
        rot2: Rotation2,
        strict: bool,
    ) -> bool {
        use Shape::*;
        let ((a, rot1), (b, rot2)) = (a.settled(rot1), b.settled(rot2));
        match (a.as_ref(), b.as_ref()) {
            (Polygon(p), Polygon(q)) => Polygon2::intersects(p, q, pos1, pos2, rot1, rot2, strict),
            (Polygon(p), Rect(r)) => intersects_poly_rect(p, r, pos1, pos2, rot1, strict),
            (Polygon(p), Circle(c)) => intersects_poly_circle(p, c, pos1, pos2, rot1, strict),
            (Polygon(p), Line(l)) => intersects_poly_line(p, l, pos1, pos2, rot1, strict),
            (Rect(r), Polygon(p)) => intersects_rect_poly(r, p, pos1, pos2, rot2, strict),
            (Rect(r), Rect(s)) => Rect2::intersects(r, s, pos1, pos2, strict),
            (Rect(r), Circle(c)) => intersects_rect_circle(r, c, pos1, pos2, strict),
            (Rect(r), Line(l)) => intersects_rect_line(r, l, pos1, pos2, strict),
            (Circle(c), Polygon(p)) => intersects_circle_poly(c, p, pos1, pos2, rot2, strict),
            (Circle(c), Rect(r)) => intersects_circle_rect(c, r, pos1, pos2, strict),
            (Circle(c), Circle(d)) => Circle2::intersects(c, d, pos1, pos2, strict),
            (Circle(c), Line(l)) => intersects_circle_line(c, l, pos1, pos2, strict),
            (Line(l), Polygon(p)) => intersects_line_poly(l, p, pos1, pos2, rot2, strict),
            (Line(l), Rect(r)) => intersects_line_rect(l, r, pos1, pos2, strict),
            (Line(l), Circle(c)) => intersects_line_circle(l, c, pos1, pos2, strict),
            (Line(l), Line(m)) => Line2::intersects(l, m, pos1, pos2, strict),
        }
    }

    /// MTV moving `a` out of `b`. Two segments have no area to resolve, so
    /// that pair always yields `None`.
    pub fn intersect_mtv(
        a: &Shape,
        b: &Shape,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        rot1: Rotation2,
        rot2: Rotation2,
    ) -> Option<Mtv> {
        use Shape::*;
        let ((a, rot1), (b, rot2)) = (a.settled(rot1), b.settled(rot2));
        match (a.as_ref(), b.as_ref()) {
            (Polygon(p), Polygon(q)) => Polygon2::intersect_mtv(p, q, pos1, pos2, rot1, rot2),
            (Polygon(p), Rect(r)) => intersect_mtv_poly_rect(p, r, pos1, pos2, rot1),
            (Polygon(p), Circle(c)) => intersect_mtv_poly_circle(p, c, pos1, pos2, rot1),
            (Polygon(p), Line(l)) => intersect_mtv_poly_line(p, l, pos1, pos2, rot1),
            (Rect(r), Polygon(p)) => intersect_mtv_rect_poly(r, p, pos1, pos2, rot2),
            (Rect(r), Rect(s)) => Rect2::intersect_mtv(r, s, pos1, pos2),
            (Rect(r), Circle(c)) => intersect_mtv_rect_circle(r, c, pos1, pos2),
            (Rect(r), Line(l)) => intersect_mtv_rect_line(r, l, pos1, pos2),
            (Circle(c), Polygon(p)) => intersect_mtv_circle_poly(c, p, pos1, pos2, rot2),
            (Circle(c), Rect(r)) => intersect_mtv_circle_rect(c, r, pos1, pos2),
            (Circle(c), Circle(d)) => Circle2::intersect_mtv(c, d, pos1, pos2),
            (Circle(c), Line(l)) => intersect_mtv_circle_line(c, l, pos1, pos2),
            (Line(l), Polygon(p)) => intersect_mtv_line_poly(l, p, pos1, pos2, rot2),
            (Line(l), Rect(r)) => intersect_mtv_line_rect(l, r, pos1, pos2),
            (Line(l), Circle(c)) => intersect_mtv_line_circle(l, c, pos1, pos2),
            (Line(_), Line(_)) => None,
        }
    }
}

impl From<Polygon2> for Shape {
    fn from(p: Polygon2) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Rect2> for Shape {
    fn from(r: Rect2) -> Self {
        Shape::Rect(r)
    }
}

impl From<Circle2> for Shape {
    fn from(c: Circle2) -> Self {
        Shape::Circle(c)
    }
}

impl From<Line2> for Shape {
    fn from(l: Line2) -> Self {
        Shape::Line(l)
    }
}

#[cfg(test)]
mod tests;
