//! Flat re-export surface for callers that prefer one import path.
//!
//! Mirrors the module tree without renaming, except where two modules would
//! otherwise collide.

// Primitives and results
pub use crate::shapes::{
    interval_contains, intervals_intersect, intervals_min_distance, intervals_mtv,
    AxisAlignedLine2, Circle2, Distance, Line2, LineRelation, Mtv, Rect2, Triangle2,
};
// Polygons
pub use crate::polygon::{MinkowskiDifference, Polygon2};
// Cross-type pairs
pub use crate::shape2::{
    intersect_mtv_circle_line, intersect_mtv_circle_poly, intersect_mtv_circle_rect,
    intersect_mtv_line_circle, intersect_mtv_line_poly, intersect_mtv_line_rect,
    intersect_mtv_poly_circle, intersect_mtv_poly_line, intersect_mtv_poly_rect,
    intersect_mtv_rect_circle, intersect_mtv_rect_line, intersect_mtv_rect_poly,
    intersects_circle_line, intersects_circle_poly, intersects_circle_rect,
    intersects_line_circle, intersects_line_poly, intersects_line_rect, intersects_poly_circle,
    intersects_poly_line, intersects_poly_rect, intersects_rect_circle, intersects_rect_line,
    intersects_rect_poly, Shape,
};
// Math
pub use crate::math::{
    approx_eq, approx_eq_eps, approx_eq_vec, are_parallel, are_points_collinear, cross,
    perpendicular, same_axis, standard_normal, triple_cross, GjkCfg, Rotation2, DEFAULT_EPSILON,
};
// Generators
pub use crate::generators::{
    convex_hull, random_convex, rectangle_polygon, regular_polygon, RadialCfg,
    ReplayToken as PolygonReplay, VertexCount,
};
pub use crate::error::GeomError;
