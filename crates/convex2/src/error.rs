//! Errors surfaced by shape construction and unsupported queries.
//!
//! Absent results (no intersection, no MTV, contained point) are never errors;
//! they are `Option::None` on the query side.

use std::fmt;

use nalgebra::Vector2;

/// Errors surfaced by shape constructors and the few queries with preconditions.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A polygon needs at least three vertices.
    TooFewVertices { count: usize },
    /// Vertex `index` approximately equals its successor in the ring.
    DuplicateVertex { index: usize },
    /// All fan triangles are degenerate (collinear ring).
    ZeroAreaPolygon,
    /// Segment endpoints coincide within epsilon.
    DegenerateSegment { start: Vector2<f64>, end: Vector2<f64> },
    /// Rectangle collapses to a line or point (needs `min < max` on both axes).
    DegenerateRect { min: Vector2<f64>, max: Vector2<f64> },
    /// Triangle vertices are collinear; no barycentric basis exists.
    DegenerateTriangle,
    /// Circle radius must be finite and positive.
    InvalidRadius { radius: f64 },
    /// An input coordinate is NaN or infinite.
    NonFinite,
    /// Polygon min-distance only accepts zero rotations.
    RotatedDistanceUnsupported,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {}", count)
            }
            GeomError::DuplicateVertex { index } => write!(
                f,
                "vertex {} approximately equals the next vertex in the ring",
                index
            ),
            GeomError::ZeroAreaPolygon => write!(f, "polygon has zero area (collinear vertices)"),
            GeomError::DegenerateSegment { start, end } => write!(
                f,
                "segment ({}, {}) -> ({}, {}) collapses to a point",
                start.x, start.y, end.x, end.y
            ),
            GeomError::DegenerateRect { min, max } => write!(
                f,
                "rectangle ({}, {}) - ({}, {}) needs min < max on both axes",
                min.x, min.y, max.x, max.y
            ),
            GeomError::DegenerateTriangle => write!(f, "triangle vertices are collinear"),
            GeomError::InvalidRadius { radius } => {
                write!(f, "circle radius must be finite and positive, got {}", radius)
            }
            GeomError::NonFinite => write!(f, "input contains a NaN or infinite coordinate"),
            GeomError::RotatedDistanceUnsupported => write!(
                f,
                "polygon min-distance requires zero rotations; pre-rotate with \
                 Polygon2::rotated and pass Rotation2::ZERO"
            ),
        }
    }
}

impl std::error::Error for GeomError {}

#[inline]
pub(crate) fn ensure_finite(v: Vector2<f64>) -> Result<(), GeomError> {
    if v.x.is_finite() && v.y.is_finite() {
        Ok(())
    } else {
        Err(GeomError::NonFinite)
    }
}
