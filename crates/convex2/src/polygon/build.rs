//! Construction helpers: everything `Polygon2::new` precomputes.

use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

use crate::error::GeomError;
use crate::math::{same_axis, standard_normal, DEFAULT_EPSILON};
use crate::shapes::{Line2, Rect2, Triangle2};

pub(super) fn ring_lines(vertices: &[Vector2<f64>]) -> Result<Vec<Line2>, GeomError> {
    let n = vertices.len();
    (0..n)
        .map(|i| Line2::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// Canonical normal per distinct edge direction (first occurrence wins).
pub(super) fn unique_normals(lines: &[Line2]) -> Vec<Vector2<f64>> {
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(lines.len());
    for l in lines {
        let n = standard_normal(l.normal);
        if !out.iter().any(|m| same_axis(*m, n)) {
            out.push(n);
        }
    }
    out
}

/// Fan from vertex 0, degenerate slivers dropped, sorted by descending |area|.
pub(super) fn fan_partition(vertices: &[Vector2<f64>]) -> Vec<Triangle2> {
    let mut tris = Vec::with_capacity(vertices.len().saturating_sub(2));
    for i in 1..vertices.len() - 1 {
        match Triangle2::new(vertices[0], vertices[i], vertices[i + 1]) {
            Ok(t) => tris.push(t),
            Err(e) => tracing::debug!(fan_index = i, error = %e, "skipping degenerate fan triangle"),
        }
    }
    tris.sort_by(|a, b| {
        b.area
            .abs()
            .partial_cmp(&a.area.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    tris
}

/// Area-weighted centroid and total area of a non-empty partition.
pub(super) fn centroid_and_area(partition: &[Triangle2]) -> (Vector2<f64>, f64) {
    let mut area = 0.0;
    let mut weighted = Vector2::zeros();
    for t in partition {
        let a = t.area.abs();
        area += a;
        weighted += t.center * a;
    }
    (weighted / area, area)
}

/// Ring order as seen on screen (y down): `true` when the centroid-to-vertex
/// angle increases along the ring.
///
/// Takes the first turn larger than epsilon; a ring whose every turn is below
/// epsilon falls back to a majority vote of the turn signs.
pub(super) fn winding(vertices: &[Vector2<f64>], center: Vector2<f64>) -> bool {
    let angles: Vec<f64> = vertices
        .iter()
        .map(|v| (v.y - center.y).atan2(v.x - center.x))
        .collect();
    let n = angles.len();
    let mut votes: i64 = 0;
    for i in 0..n {
        let turn = wrap_angle(angles[(i + 1) % n] - angles[i]);
        if turn.abs() > DEFAULT_EPSILON {
            return turn > 0.0;
        }
        if turn > 0.0 {
            votes += 1;
        } else if turn < 0.0 {
            votes -= 1;
        }
    }
    votes > 0
}

/// Wrap into `(-π, π]`.
#[inline]
fn wrap_angle(a: f64) -> f64 {
    let mut x = a;
    while x <= -PI {
        x += TAU;
    }
    while x > PI {
        x -= TAU;
    }
    x
}

pub(super) fn bounds(vertices: &[Vector2<f64>]) -> Result<Rect2, GeomError> {
    let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for v in vertices {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    Rect2::new(min, max)
}

/// Max pairwise vertex distance.
pub(super) fn longest_axis(vertices: &[Vector2<f64>]) -> f64 {
    let mut best = 0.0f64;
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            best = best.max((a - b).norm_squared());
        }
    }
    best.sqrt()
}
