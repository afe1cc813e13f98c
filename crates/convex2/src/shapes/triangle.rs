//! Triangles used as the polygon partition primitive.

use nalgebra::{Matrix2, Vector2};

use super::Line2;
use crate::error::GeomError;
use crate::math::cfg::{BARYCENTRIC_EPS, DEGENERATE_AREA_REL};
use crate::math::cross;

/// Triangle with a precomputed inverse basis for O(1) barycentric tests.
///
/// Invariants:
/// - Vertices are not collinear (relative to the edge lengths).
/// - `area` is signed: positive when the ring turns from +x toward +y.
/// - `inv_basis` inverts `[v1 - v0 | v2 - v0]`.
#[derive(Clone, Debug)]
pub struct Triangle2 {
    pub vertices: [Vector2<f64>; 3],
    pub center: Vector2<f64>,
    pub area: f64,
    pub edges: [Line2; 3],
    inv_basis: Matrix2<f64>,
}

impl Triangle2 {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Result<Self, GeomError> {
        let ab = b - a;
        let ac = c - a;
        let det = cross(ab, ac);
        if !det.is_finite() || det.abs() <= DEGENERATE_AREA_REL * ab.norm() * ac.norm() {
            return Err(GeomError::DegenerateTriangle);
        }
        let inv_basis = Matrix2::from_columns(&[ab, ac])
            .try_inverse()
            .ok_or(GeomError::DegenerateTriangle)?;
        let edges = [Line2::new(a, b)?, Line2::new(b, c)?, Line2::new(c, a)?];
        Ok(Self {
            vertices: [a, b, c],
            center: (a + b + c) / 3.0,
            area: 0.5 * det,
            edges,
            inv_basis,
        })
    }

    /// Barycentric weights `(s, t)` of `point` relative to `v1 - v0`, `v2 - v0`.
    #[inline]
    pub fn barycentric(&self, pos: Vector2<f64>, point: Vector2<f64>) -> (f64, f64) {
        let st = self.inv_basis * (point - pos - self.vertices[0]);
        (st.x, st.y)
    }

    /// Membership test; `strict` also rejects points on any edge.
    pub fn contains(&self, pos: Vector2<f64>, point: Vector2<f64>, strict: bool) -> bool {
        let (s, t) = self.barycentric(pos, point);
        let inside = s >= -BARYCENTRIC_EPS && t >= -BARYCENTRIC_EPS && s + t <= 1.0 + BARYCENTRIC_EPS;
        if !inside {
            return false;
        }
        !strict || !self.edges.iter().any(|e| e.contains(pos, point, false))
    }
}
