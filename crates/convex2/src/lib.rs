//! Convex 2D collision queries for games and simulations.
//!
//! Shapes (polygon, axis-aligned rectangle, circle, segment, triangle) are
//! immutable definitions; every query takes positions and rotations as
//! arguments, so one shape can serve many entities.
//!
//! Layout
//! - `math`: vector helpers, `Rotation2`, tolerances (`math::cfg`).
//! - `shapes`: primitives plus the `Mtv`/`Distance` result types.
//! - `polygon`: `Polygon2` with SAT, GJK, distances and sweep quads.
//! - `shape2`: cross-type pairs and the `Shape` enum.
//! - `generators`: regular, rectangular and random convex polygons.
//!
//! Conventions
//! - Screen coordinates (y down). A rectangle's `min` is its top-left corner;
//!   a circle's position is the top-left of its bounding box.
//! - Non-strict queries count touching (within `DEFAULT_EPSILON`) as
//!   intersecting; strict queries require overlap deeper than epsilon.
//! - MTV and distance results always describe a translation of the first operand.

pub mod api;
pub mod error;
pub mod generators;
pub mod math;
pub mod polygon;
pub(crate) mod sat;
pub mod shape2;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use math::{GjkCfg, Rotation2, DEFAULT_EPSILON};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::Polygon2;
pub use shape2::Shape;
pub use shapes::{Circle2, Distance, Line2, Mtv, Rect2, Triangle2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::generators::{rectangle_polygon, regular_polygon};
    pub use crate::math::{Rotation2, DEFAULT_EPSILON};
    pub use crate::polygon::Polygon2;
    pub use crate::shape2::Shape;
    pub use crate::shapes::{Circle2, Distance, Line2, Mtv, Rect2};
    pub use nalgebra::Vector2 as Vec2;
}
