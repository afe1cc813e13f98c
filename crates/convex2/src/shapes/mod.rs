//! Primitive shapes and the result types shared by every query.
//!
//! Shapes hold only their definition; positions and rotations are passed to
//! each query. `Mtv` and `Distance` describe a translation of the *first*
//! operand.

mod axis_line;
mod circle;
mod line;
mod rect;
mod triangle;

pub use axis_line::{
    interval_contains, intervals_intersect, intervals_min_distance, intervals_mtv,
    AxisAlignedLine2,
};
pub use circle::Circle2;
pub use line::{Line2, LineRelation};
pub use rect::Rect2;
pub use triangle::Triangle2;

use nalgebra::Vector2;

/// Minimum translation vector.
///
/// Invariants: `axis` is unit length, `depth > DEFAULT_EPSILON`. Translating the
/// first shape by `axis * depth` leaves the pair touching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mtv {
    pub axis: Vector2<f64>,
    pub depth: f64,
}

impl Mtv {
    /// Build from a unit axis and a signed push along it.
    #[inline]
    pub(crate) fn from_signed(axis: Vector2<f64>, signed: f64) -> Self {
        if signed < 0.0 {
            Self {
                axis: -axis,
                depth: -signed,
            }
        } else {
            Self {
                axis,
                depth: signed,
            }
        }
    }

    #[inline]
    pub fn translation(&self) -> Vector2<f64> {
        self.axis * self.depth
    }

    /// The same separation seen from the second shape.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            axis: -self.axis,
            depth: self.depth,
        }
    }
}

/// Shortest separation between two non-touching shapes.
///
/// Invariants: `axis` is unit length and points from the first shape toward the
/// second; translating the first shape by `axis * distance` makes them touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance {
    pub axis: Vector2<f64>,
    pub distance: f64,
}

impl Distance {
    #[inline]
    pub(crate) fn from_signed(axis: Vector2<f64>, signed: f64) -> Self {
        if signed < 0.0 {
            Self {
                axis: -axis,
                distance: -signed,
            }
        } else {
            Self {
                axis,
                distance: signed,
            }
        }
    }

    #[inline]
    pub fn translation(&self) -> Vector2<f64> {
        self.axis * self.distance
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            axis: -self.axis,
            distance: self.distance,
        }
    }
}
