//! Finite line segments.
//!
//! Positions are external: every query takes an offset per segment. Derived
//! data (axis, normal, bounds, slope) is computed once in `Line2::new`.

use nalgebra::Vector2;

use super::axis_line::{interval_contains, AxisAlignedLine2};
use crate::error::{ensure_finite, GeomError};
use crate::math::cfg::{PARALLEL_SIN_EPS, SEGMENT_PARAM_EPS};
use crate::math::{approx_eq_vec, cross, perpendicular, DEFAULT_EPSILON};

/// Segment from `start` to `end` with precomputed geometry.
///
/// Invariants:
/// - `start` and `end` differ by more than `DEFAULT_EPSILON` in some component.
/// - `axis` is the unit direction, `normal` is `axis` turned a quarter counterclockwise.
/// - `slope`/`y_intercept` describe the infinite line; for vertical segments
///   `slope` is infinite and `y_intercept` is NaN.
#[derive(Clone, Debug)]
pub struct Line2 {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    pub delta: Vector2<f64>,
    pub axis: Vector2<f64>,
    pub normal: Vector2<f64>,
    pub magnitude: f64,
    pub magnitude_squared: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub slope: f64,
    pub y_intercept: f64,
    pub horizontal: bool,
    pub vertical: bool,
}

/// How two segments relate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineRelation {
    /// Not parallel; the segments cross at this point.
    Point(Vector2<f64>),
    /// Not parallel; the infinite lines cross outside at least one segment.
    NonParallelNone,
    /// Parallel, on distinct lines.
    ParallelNone,
    /// Same infinite line, disjoint extents.
    CoincidentNone,
    /// Same infinite line, extents meet at exactly one point.
    CoincidentPoint(Vector2<f64>),
    /// Same infinite line, extents share the sub-segment `start..end`.
    CoincidentLine {
        start: Vector2<f64>,
        end: Vector2<f64>,
    },
}

impl Line2 {
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Result<Self, GeomError> {
        ensure_finite(start)?;
        ensure_finite(end)?;
        if approx_eq_vec(start, end) {
            return Err(GeomError::DegenerateSegment { start, end });
        }
        let delta = end - start;
        let magnitude_squared = delta.norm_squared();
        let magnitude = magnitude_squared.sqrt();
        let axis = delta / magnitude;
        let vertical = delta.x == 0.0;
        let horizontal = delta.y == 0.0;
        let (slope, y_intercept) = if vertical {
            (f64::INFINITY, f64::NAN)
        } else {
            let m = delta.y / delta.x;
            (m, start.y - m * start.x)
        };
        Ok(Self {
            start,
            end,
            delta,
            axis,
            normal: perpendicular(axis),
            magnitude,
            magnitude_squared,
            min_x: start.x.min(end.x),
            max_x: start.x.max(end.x),
            min_y: start.y.min(end.y),
            max_y: start.y.max(end.y),
            slope,
            y_intercept,
            horizontal,
            vertical,
        })
    }

    /// Axes equal up to sign.
    #[inline]
    pub fn is_parallel(&self, other: &Line2) -> bool {
        cross(self.axis, other.axis).abs() <= PARALLEL_SIN_EPS
    }

    /// Parallel, and `b`'s start lies on `a`'s infinite extension.
    pub fn is_coincident(a: &Line2, b: &Line2, pos1: Vector2<f64>, pos2: Vector2<f64>) -> bool {
        a.is_parallel(b) && cross(a.axis, (b.start + pos2) - (a.start + pos1)).abs() <= DEFAULT_EPSILON
    }

    /// Classify how `a` (at `pos1`) and `b` (at `pos2`) meet.
    ///
    /// `strict` only narrows the non-parallel case: crossings at (or within
    /// epsilon of) an endpoint parameter are reported as `NonParallelNone`.
    pub fn classify(
        a: &Line2,
        b: &Line2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        strict: bool,
    ) -> LineRelation {
        let s1 = a.start + pos1;
        let s2 = b.start + pos2;
        if !a.is_parallel(b) {
            // s1 + t*r == s2 + u*s
            let r = a.delta;
            let s = b.delta;
            let denom = cross(r, s);
            let qp = s2 - s1;
            let t = cross(qp, s) / denom;
            let u = cross(qp, r) / denom;
            let in_range = |x: f64| {
                if strict {
                    x > DEFAULT_EPSILON && x < 1.0 - DEFAULT_EPSILON
                } else {
                    (-SEGMENT_PARAM_EPS..=1.0 + SEGMENT_PARAM_EPS).contains(&x)
                }
            };
            return if in_range(t) && in_range(u) {
                LineRelation::Point(s1 + r * t)
            } else {
                LineRelation::NonParallelNone
            };
        }
        if cross(a.axis, s2 - s1).abs() > DEFAULT_EPSILON {
            return LineRelation::ParallelNone;
        }
        classify_coincident(a, b, s1, s2)
    }

    pub fn intersects(
        a: &Line2,
        b: &Line2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        strict: bool,
    ) -> bool {
        match Line2::classify(a, b, pos1, pos2, strict) {
            LineRelation::Point(_) | LineRelation::CoincidentLine { .. } => true,
            LineRelation::CoincidentPoint(_) => !strict,
            _ => false,
        }
    }

    /// The single intersection point, if the segments meet at exactly one.
    pub fn intersection(
        a: &Line2,
        b: &Line2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        strict: bool,
    ) -> Option<Vector2<f64>> {
        match Line2::classify(a, b, pos1, pos2, strict) {
            LineRelation::Point(p) => Some(p),
            LineRelation::CoincidentPoint(p) if !strict => Some(p),
            _ => None,
        }
    }

    /// Overlapping sub-segment of two coincident segments (world coordinates).
    pub fn line_overlap(a: &Line2, b: &Line2, pos1: Vector2<f64>, pos2: Vector2<f64>) -> Option<Line2> {
        match Line2::classify(a, b, pos1, pos2, false) {
            LineRelation::CoincidentLine { start, end } => Line2::new(start, end).ok(),
            _ => None,
        }
    }

    /// Point lies on the segment (within epsilon); `strict` excludes the endpoints.
    pub fn contains(&self, pos: Vector2<f64>, point: Vector2<f64>, strict: bool) -> bool {
        let rel = point - (self.start + pos);
        if cross(self.axis, rel).abs() > DEFAULT_EPSILON {
            return false;
        }
        interval_contains(0.0, self.magnitude, rel.dot(&self.axis), strict, false)
    }

    /// Closest point on the segment to `point`.
    ///
    /// Horizontal and vertical segments clamp one coordinate; other segments
    /// drop a perpendicular onto the infinite line `y = slope*x + b` and clamp
    /// the foot to the segment's x-extent.
    pub fn closest_point(&self, pos: Vector2<f64>, point: Vector2<f64>) -> Vector2<f64> {
        let min_x = self.min_x + pos.x;
        let max_x = self.max_x + pos.x;
        if self.horizontal {
            return Vector2::new(point.x.clamp(min_x, max_x), self.start.y + pos.y);
        }
        if self.vertical {
            let min_y = self.min_y + pos.y;
            let max_y = self.max_y + pos.y;
            return Vector2::new(self.start.x + pos.x, point.y.clamp(min_y, max_y));
        }
        let m = self.slope;
        let b = self.y_intercept + pos.y - m * pos.x;
        let foot_x = (point.x + m * (point.y - b)) / (1.0 + m * m);
        let x = foot_x.clamp(min_x, max_x);
        Vector2::new(x, m * x + b)
    }

    #[inline]
    pub fn distance_squared_to(&self, pos: Vector2<f64>, point: Vector2<f64>) -> f64 {
        (self.closest_point(pos, point) - point).norm_squared()
    }

    #[inline]
    pub fn project(&self, pos: Vector2<f64>, axis: Vector2<f64>) -> AxisAlignedLine2 {
        AxisAlignedLine2::new(axis, (self.start + pos).dot(&axis), (self.end + pos).dot(&axis))
    }
}

/// Sort the four endpoints along the shared axis (stable, source-tagged) and
/// read the relation off the two middle entries.
fn classify_coincident(a: &Line2, b: &Line2, s1: Vector2<f64>, s2: Vector2<f64>) -> LineRelation {
    let axis = a.axis;
    let e1 = s1 + a.delta;
    let e2 = s2 + b.delta;
    let mut pts = [
        (s1.dot(&axis), 0u8, s1),
        (e1.dot(&axis), 0u8, e1),
        (s2.dot(&axis), 1u8, s2),
        (e2.dot(&axis), 1u8, e2),
    ];
    for i in 1..pts.len() {
        let mut j = i;
        while j > 0 && pts[j - 1].0 > pts[j].0 {
            pts.swap(j - 1, j);
            j -= 1;
        }
    }
    let (lo, hi) = (pts[1], pts[2]);
    let span = hi.0 - lo.0;
    if pts[0].1 == pts[1].1 {
        // One segment ends before the other starts.
        if span <= DEFAULT_EPSILON {
            LineRelation::CoincidentPoint((lo.2 + hi.2) * 0.5)
        } else {
            LineRelation::CoincidentNone
        }
    } else if span <= DEFAULT_EPSILON {
        LineRelation::CoincidentPoint((lo.2 + hi.2) * 0.5)
    } else {
        LineRelation::CoincidentLine {
            start: lo.2,
            end: hi.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Line2 {
        Line2::new(vector![ax, ay], vector![bx, by]).unwrap()
    }

    fn o() -> Vector2<f64> {
        Vector2::zeros()
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let err = Line2::new(vector![1.0, 1.0], vector![1.0, 1.0005]).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateSegment { .. }));
        assert_eq!(
            Line2::new(vector![f64::NAN, 0.0], vector![1.0, 0.0]).unwrap_err(),
            GeomError::NonFinite
        );
    }

    #[test]
    fn derived_fields() {
        let l = seg(0.0, 1.0, 2.0, 5.0);
        assert!((l.slope - 2.0).abs() < 1e-12);
        assert!((l.y_intercept - 1.0).abs() < 1e-12);
        assert!((l.axis.norm() - 1.0).abs() < 1e-12);
        assert!(l.axis.dot(&l.normal).abs() < 1e-12);
        assert!(seg(0.0, 0.0, 0.0, 3.0).vertical);
        assert!(seg(0.0, 2.0, 3.0, 2.0).horizontal);
    }

    #[test]
    fn crossing_segments() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        let p = Line2::intersection(&a, &b, o(), o(), true).unwrap();
        assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
        // Shift b away: lines still cross, segments do not.
        assert_eq!(
            Line2::classify(&a, &b, o(), vector![5.0, 0.0], false),
            LineRelation::NonParallelNone
        );
    }

    #[test]
    fn endpoint_touch_is_not_strict() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 1.0);
        assert!(Line2::intersects(&a, &b, o(), o(), false));
        assert!(!Line2::intersects(&a, &b, o(), o(), true));
    }

    #[test]
    fn parallel_and_coincident_cases() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(0.0, 1.0, 1.0, 1.0);
        assert_eq!(Line2::classify(&a, &b, o(), o(), false), LineRelation::ParallelNone);

        let far = seg(3.0, 0.0, 4.0, 0.0);
        assert!(Line2::is_coincident(&a, &far, o(), o()));
        assert_eq!(Line2::classify(&a, &far, o(), o(), false), LineRelation::CoincidentNone);

        let touching = seg(2.0, 0.0, 1.0, 0.0);
        match Line2::classify(&a, &touching, o(), o(), false) {
            LineRelation::CoincidentPoint(p) => assert!((p - vector![1.0, 0.0]).norm() < 1e-12),
            other => panic!("expected coincident point, got {:?}", other),
        }
        assert!(Line2::intersects(&a, &touching, o(), o(), false));
        assert!(!Line2::intersects(&a, &touching, o(), o(), true));

        let overlapping = seg(0.5, 0.0, 3.0, 0.0);
        assert!(Line2::intersects(&a, &overlapping, o(), o(), true));
        let ov = Line2::line_overlap(&a, &overlapping, o(), o()).unwrap();
        assert!((ov.start - vector![0.5, 0.0]).norm() < 1e-12);
        assert!((ov.end - vector![1.0, 0.0]).norm() < 1e-12);
        assert!(Line2::line_overlap(&a, &touching, o(), o()).is_none());
        assert!(Line2::line_overlap(&a, &b, o(), o()).is_none());
    }

    #[test]
    fn nested_coincident_segment_overlaps_fully() {
        let outer = seg(0.0, 0.0, 10.0, 0.0);
        let inner = seg(7.0, 0.0, 4.0, 0.0);
        let ov = Line2::line_overlap(&outer, &inner, o(), o()).unwrap();
        assert!((ov.magnitude - 3.0).abs() < 1e-12);
    }

    #[test]
    fn containment_and_closest_point() {
        let l = seg(0.0, 0.0, 4.0, 0.0);
        assert!(l.contains(o(), vector![2.0, 0.0], true));
        assert!(l.contains(o(), vector![4.0, 0.0], false));
        assert!(!l.contains(o(), vector![4.0, 0.0], true));
        assert!(!l.contains(o(), vector![2.0, 0.5], false));
        assert_eq!(l.closest_point(o(), vector![5.0, 3.0]), vector![4.0, 0.0]);

        let v = seg(1.0, 0.0, 1.0, 2.0);
        assert_eq!(v.closest_point(vector![1.0, 0.0], vector![0.0, 1.5]), vector![2.0, 1.5]);

        let d = seg(0.0, 0.0, 2.0, 2.0);
        let c = d.closest_point(o(), vector![0.0, 2.0]);
        assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
        let c = d.closest_point(vector![1.0, 0.0], vector![5.0, 5.0]);
        assert!((c - vector![3.0, 2.0]).norm() < 1e-12);
        assert!((d.distance_squared_to(o(), vector![0.0, 2.0]) - 2.0).abs() < 1e-12);
    }
}
