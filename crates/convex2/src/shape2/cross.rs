//! Cross-type pair queries.
//!
//! Every pair except circle/segment runs the shared SAT driver with its own
//! axis set. Circle/segment is solved exactly from the closest point on the
//! segment. Swapped variants reverse the MTV so it always moves the first
//! operand.

use nalgebra::Vector2;

use crate::math::{Rotation2, DEFAULT_EPSILON};
use crate::polygon::Polygon2;
use crate::sat::{min_overlap, overlaps_on_all, push_unique_axis, unit_between};
use crate::shapes::{Circle2, Line2, Mtv, Rect2};

#[inline]
fn x_axis() -> Vector2<f64> {
    Vector2::new(1.0, 0.0)
}

#[inline]
fn y_axis() -> Vector2<f64> {
    Vector2::new(0.0, 1.0)
}

fn rotated_normals(poly: &Polygon2, rot: Rotation2, extra: usize) -> Vec<Vector2<f64>> {
    let mut axes = Vec::with_capacity(poly.normals().len() + extra);
    for n in poly.normals() {
        push_unique_axis(&mut axes, rot.rotate(*n));
    }
    axes
}

/// Unit axis from the point of `points` nearest `target` toward `target`.
fn nearest_point_axis(points: &[Vector2<f64>], target: Vector2<f64>) -> Option<Vector2<f64>> {
    let nearest = points.iter().min_by(|a, b| {
        (*a - target)
            .norm_squared()
            .partial_cmp(&(*b - target).norm_squared())
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;
    unit_between(*nearest, target)
}

// ---------- polygon / rectangle ----------

fn poly_rect_axes(poly: &Polygon2, rot_poly: Rotation2) -> Vec<Vector2<f64>> {
    let mut axes = rotated_normals(poly, rot_poly, 2);
    push_unique_axis(&mut axes, x_axis());
    push_unique_axis(&mut axes, y_axis());
    axes
}

pub fn intersects_poly_rect(
    poly: &Polygon2,
    rect: &Rect2,
    pos_poly: Vector2<f64>,
    pos_rect: Vector2<f64>,
    rot_poly: Rotation2,
    strict: bool,
) -> bool {
    overlaps_on_all(
        &poly_rect_axes(poly, rot_poly),
        |axis| poly.project(pos_poly, rot_poly, axis),
        |axis| rect.project(pos_rect, axis),
        strict,
    )
}

pub fn intersect_mtv_poly_rect(
    poly: &Polygon2,
    rect: &Rect2,
    pos_poly: Vector2<f64>,
    pos_rect: Vector2<f64>,
    rot_poly: Rotation2,
) -> Option<Mtv> {
    min_overlap(
        &poly_rect_axes(poly, rot_poly),
        |axis| poly.project(pos_poly, rot_poly, axis),
        |axis| rect.project(pos_rect, axis),
    )
}

pub fn intersects_rect_poly(
    rect: &Rect2,
    poly: &Polygon2,
    pos_rect: Vector2<f64>,
    pos_poly: Vector2<f64>,
    rot_poly: Rotation2,
    strict: bool,
) -> bool {
    intersects_poly_rect(poly, rect, pos_poly, pos_rect, rot_poly, strict)
}

pub fn intersect_mtv_rect_poly(
    rect: &Rect2,
    poly: &Polygon2,
    pos_rect: Vector2<f64>,
    pos_poly: Vector2<f64>,
    rot_poly: Rotation2,
) -> Option<Mtv> {
    intersect_mtv_poly_rect(poly, rect, pos_poly, pos_rect, rot_poly).map(Mtv::reversed)
}

// ---------- polygon / circle ----------

fn poly_circle_axes(
    poly: &Polygon2,
    circle: &Circle2,
    pos_poly: Vector2<f64>,
    pos_circle: Vector2<f64>,
    rot_poly: Rotation2,
) -> Vec<Vector2<f64>> {
    let mut axes = rotated_normals(poly, rot_poly, 1);
    let world = poly.actualize(pos_poly, rot_poly);
    if let Some(axis) = nearest_point_axis(&world, circle.center(pos_circle)) {
        push_unique_axis(&mut axes, axis);
    }
    axes
}

pub fn intersects_poly_circle(
    poly: &Polygon2,
    circle: &Circle2,
    pos_poly: Vector2<f64>,
    pos_circle: Vector2<f64>,
    rot_poly: Rotation2,
    strict: bool,
) -> bool {
    overlaps_on_all(
        &poly_circle_axes(poly, circle, pos_poly, pos_circle, rot_poly),
        |axis| poly.project(pos_poly, rot_poly, axis),
        |axis| circle.project(pos_circle, axis),
        strict,
    )
}

pub fn intersect_mtv_poly_circle(
    poly: &Polygon2,
    circle: &Circle2,
    pos_poly: Vector2<f64>,
    pos_circle: Vector2<f64>,
    rot_poly: Rotation2,
) -> Option<Mtv> {
    min_overlap(
        &poly_circle_axes(poly, circle, pos_poly, pos_circle, rot_poly),
        |axis| poly.project(pos_poly, rot_poly, axis),
        |axis| circle.project(pos_circle, axis),
    )
}

pub fn intersects_circle_poly(
    circle: &Circle2,
    poly: &Polygon2,
    pos_circle: Vector2<f64>,
    pos_poly: Vector2<f64>,
    rot_poly: Rotation2,
    strict: bool,
) -> bool {
    intersects_poly_circle(poly, circle, pos_poly, pos_circle, rot_poly, strict)
}

pub fn intersect_mtv_circle_poly(
    circle: &Circle2,
    poly: &Polygon2,
    pos_circle: Vector2<f64>,
    pos_poly: Vector2<f64>,
    rot_poly: Rotation2,
) -> Option<Mtv> {
    intersect_mtv_poly_circle(poly, circle, pos_poly, pos_circle, rot_poly).map(Mtv::reversed)
}

// ---------- rectangle / circle ----------

fn rect_circle_axes(rect: &Rect2, circle: &Circle2, pos_rect: Vector2<f64>, pos_circle: Vector2<f64>) -> Vec<Vector2<f64>> {
    let mut axes = vec![x_axis(), y_axis()];
    if let Some(axis) = nearest_point_axis(&rect.corners(pos_rect), circle.center(pos_circle)) {
        push_unique_axis(&mut axes, axis);
    }
    axes
}

pub fn intersects_rect_circle(
    rect: &Rect2,
    circle: &Circle2,
    pos_rect: Vector2<f64>,
    pos_circle: Vector2<f64>,
    strict: bool,
) -> bool {
    overlaps_on_all(
        &rect_circle_axes(rect, circle, pos_rect, pos_circle),
        |axis| rect.project(pos_rect, axis),
        |axis| circle.project(pos_circle, axis),
        strict,
    )
}

pub fn intersect_mtv_rect_circle(
    rect: &Rect2,
    circle: &Circle2,
    pos_rect: Vector2<f64>,
    pos_circle: Vector2<f64>,
) -> Option<Mtv> {
    min_overlap(
        &rect_circle_axes(rect, circle, pos_rect, pos_circle),
        |axis| rect.project(pos_rect, axis),
        |axis| circle.project(pos_circle, axis),
    )
}

pub fn intersects_circle_rect(
    circle: &Circle2,
    rect: &Rect2,
    pos_circle: Vector2<f64>,
    pos_rect: Vector2<f64>,
    strict: bool,
) -> bool {
    intersects_rect_circle(rect, circle, pos_rect, pos_circle, strict)
}

pub fn intersect_mtv_circle_rect(
    circle: &Circle2,
    rect: &Rect2,
    pos_circle: Vector2<f64>,
    pos_rect: Vector2<f64>,
) -> Option<Mtv> {
    intersect_mtv_rect_circle(rect, circle, pos_rect, pos_circle).map(Mtv::reversed)
}

// ---------- circle / segment ----------

/// Exact test against the closest point on the segment.
pub fn intersects_circle_line(
    circle: &Circle2,
    line: &Line2,
    pos_circle: Vector2<f64>,
    pos_line: Vector2<f64>,
    strict: bool,
) -> bool {
    let dist_sq = line.distance_squared_to(pos_line, circle.center(pos_circle));
    if strict {
        let inner = circle.radius - DEFAULT_EPSILON;
        inner > 0.0 && dist_sq < inner * inner
    } else {
        let outer = circle.radius + DEFAULT_EPSILON;
        dist_sq <= outer * outer
    }
}

/// Push the circle straight away from the closest segment point; a center on
/// the segment leaves along the segment normal.
pub fn intersect_mtv_circle_line(
    circle: &Circle2,
    line: &Line2,
    pos_circle: Vector2<f64>,
    pos_line: Vector2<f64>,
) -> Option<Mtv> {
    let center = circle.center(pos_circle);
    let closest = line.closest_point(pos_line, center);
    let dist = (center - closest).norm();
    let depth = circle.radius - dist;
    if depth <= DEFAULT_EPSILON {
        return None;
    }
    let axis = unit_between(closest, center).unwrap_or(line.normal);
    Some(Mtv { axis, depth })
}

pub fn intersects_line_circle(
    line: &Line2,
    circle: &Circle2,
    pos_line: Vector2<f64>,
    pos_circle: Vector2<f64>,
    strict: bool,
) -> bool {
    intersects_circle_line(circle, line, pos_circle, pos_line, strict)
}

pub fn intersect_mtv_line_circle(
    line: &Line2,
    circle: &Circle2,
    pos_line: Vector2<f64>,
    pos_circle: Vector2<f64>,
) -> Option<Mtv> {
    intersect_mtv_circle_line(circle, line, pos_circle, pos_line).map(Mtv::reversed)
}

// ---------- polygon or rectangle / segment ----------

// A segment is a degenerate convex set with a single normal.
fn poly_line_axes(poly: &Polygon2, line: &Line2, rot_poly: Rotation2) -> Vec<Vector2<f64>> {
    let mut axes = rotated_normals(poly, rot_poly, 1);
    push_unique_axis(&mut axes, line.normal);
    axes
}

pub fn intersects_poly_line(
    poly: &Polygon2,
    line: &Line2,
    pos_poly: Vector2<f64>,
    pos_line: Vector2<f64>,
    rot_poly: Rotation2,
    strict: bool,
) -> bool {
    overlaps_on_all(
        &poly_line_axes(poly, line, rot_poly),
        |axis| poly.project(pos_poly, rot_poly, axis),
        |axis| line.project(pos_line, axis),
        strict,
    )
}

pub fn intersect_mtv_poly_line(
    poly: &Polygon2,
    line: &Line2,
    pos_poly: Vector2<f64>,
    pos_line: Vector2<f64>,
    rot_poly: Rotation2,
) -> Option<Mtv> {
    min_overlap(
        &poly_line_axes(poly, line, rot_poly),
        |axis| poly.project(pos_poly, rot_poly, axis),
        |axis| line.project(pos_line, axis),
    )
}

pub fn intersects_line_poly(
    line: &Line2,
    poly: &Polygon2,
    pos_line: Vector2<f64>,
    pos_poly: Vector2<f64>,
    rot_poly: Rotation2,
    strict: bool,
) -> bool {
    intersects_poly_line(poly, line, pos_poly, pos_line, rot_poly, strict)
}

pub fn intersect_mtv_line_poly(
    line: &Line2,
    poly: &Polygon2,
    pos_line: Vector2<f64>,
    pos_poly: Vector2<f64>,
    rot_poly: Rotation2,
) -> Option<Mtv> {
    intersect_mtv_poly_line(poly, line, pos_poly, pos_line, rot_poly).map(Mtv::reversed)
}

fn rect_line_axes(line: &Line2) -> Vec<Vector2<f64>> {
    let mut axes = vec![x_axis(), y_axis()];
    push_unique_axis(&mut axes, line.normal);
    axes
}

pub fn intersects_rect_line(
    rect: &Rect2,
    line: &Line2,
    pos_rect: Vector2<f64>,
    pos_line: Vector2<f64>,
    strict: bool,
) -> bool {
    overlaps_on_all(
        &rect_line_axes(line),
        |axis| rect.project(pos_rect, axis),
        |axis| line.project(pos_line, axis),
        strict,
    )
}

pub fn intersect_mtv_rect_line(
    rect: &Rect2,
    line: &Line2,
    pos_rect: Vector2<f64>,
    pos_line: Vector2<f64>,
) -> Option<Mtv> {
    min_overlap(
        &rect_line_axes(line),
        |axis| rect.project(pos_rect, axis),
        |axis| line.project(pos_line, axis),
    )
}

pub fn intersects_line_rect(
    line: &Line2,
    rect: &Rect2,
    pos_line: Vector2<f64>,
    pos_rect: Vector2<f64>,
    strict: bool,
) -> bool {
    intersects_rect_line(rect, line, pos_rect, pos_line, strict)
}

pub fn intersect_mtv_line_rect(
    line: &Line2,
    rect: &Rect2,
    pos_line: Vector2<f64>,
    pos_rect: Vector2<f64>,
) -> Option<Mtv> {
    intersect_mtv_rect_line(rect, line, pos_rect, pos_line).map(Mtv::reversed)
}
