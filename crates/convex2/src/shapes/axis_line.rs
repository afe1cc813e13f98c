//! 1D intervals produced by projecting a shape onto an axis.
//!
//! Every SAT test reduces to the functions here. Signed results always describe
//! a displacement of interval 1 along the shared axis.

use nalgebra::Vector2;

use crate::math::DEFAULT_EPSILON;

/// Interval `[min, max]` along `axis`.
///
/// Invariants:
/// - `min <= max` (the constructor swaps if needed).
/// - Ephemeral: produced by `project`, consumed by an interval test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAlignedLine2 {
    pub axis: Vector2<f64>,
    pub min: f64,
    pub max: f64,
}

impl AxisAlignedLine2 {
    #[inline]
    pub fn new(axis: Vector2<f64>, a: f64, b: f64) -> Self {
        let (min, max) = ordered(a, b);
        Self { axis, min, max }
    }

    /// Overlap test; the axes are assumed to match.
    #[inline]
    pub fn intersects(&self, other: &Self, strict: bool) -> bool {
        intervals_intersect(self.min, self.max, other.min, other.max, strict, false)
    }

    /// Signed push that separates `self` from `other`, if they strictly overlap.
    #[inline]
    pub fn intersect_mtv(&self, other: &Self) -> Option<f64> {
        intervals_mtv(self.min, self.max, other.min, other.max, false)
    }

    #[inline]
    pub fn contains(&self, point: f64, strict: bool) -> bool {
        interval_contains(self.min, self.max, point, strict, false)
    }

    /// Signed displacement that brings `self` onto `point`; `None` if already there.
    ///
    /// Positive when the point lies beyond `max`, negative when below `min`.
    pub fn min_distance_to_point(&self, point: f64) -> Option<f64> {
        if point > self.max + DEFAULT_EPSILON {
            Some(point - self.max)
        } else if point < self.min - DEFAULT_EPSILON {
            Some(point - self.min)
        } else {
            None
        }
    }

    /// Signed gap to `other`; `None` iff the intervals intersect non-strictly.
    #[inline]
    pub fn min_distance(&self, other: &Self) -> Option<f64> {
        intervals_min_distance(self.min, self.max, other.min, other.max, false)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
fn corrected(min1: f64, max1: f64, min2: f64, max2: f64, correct: bool) -> (f64, f64, f64, f64) {
    if correct {
        let (a, b) = ordered(min1, max1);
        let (c, d) = ordered(min2, max2);
        (a, b, c, d)
    } else {
        (min1, max1, min2, max2)
    }
}

/// Raw-pair overlap test.
///
/// - Non-strict: the gap between the intervals is at most `DEFAULT_EPSILON`.
/// - Strict: both pushes needed to separate them exceed `DEFAULT_EPSILON`, so
///   intervals that only share an endpoint do not count.
///
/// `correct_min_max` swaps each pair into order first, for callers that built
/// the pairs from two arbitrary projected scalars.
pub fn intervals_intersect(
    min1: f64,
    max1: f64,
    min2: f64,
    max2: f64,
    strict: bool,
    correct_min_max: bool,
) -> bool {
    let (min1, max1, min2, max2) = corrected(min1, max1, min2, max2, correct_min_max);
    if strict {
        max1 - min2 > DEFAULT_EPSILON && max2 - min1 > DEFAULT_EPSILON
    } else {
        min1 <= max2 + DEFAULT_EPSILON && min2 <= max1 + DEFAULT_EPSILON
    }
}

/// Signed minimum push of interval 1 out of interval 2.
///
/// `min2 - max1` (push toward -axis) or `max2 - min1` (push toward +axis),
/// whichever is shorter; `None` unless the intervals strictly overlap.
pub fn intervals_mtv(
    min1: f64,
    max1: f64,
    min2: f64,
    max2: f64,
    correct_min_max: bool,
) -> Option<f64> {
    let (min1, max1, min2, max2) = corrected(min1, max1, min2, max2, correct_min_max);
    if !intervals_intersect(min1, max1, min2, max2, true, false) {
        return None;
    }
    let down = min2 - max1;
    let up = max2 - min1;
    if -down <= up {
        Some(down)
    } else {
        Some(up)
    }
}

/// Signed gap moving interval 1 onto interval 2; `None` if they touch or overlap.
pub fn intervals_min_distance(
    min1: f64,
    max1: f64,
    min2: f64,
    max2: f64,
    correct_min_max: bool,
) -> Option<f64> {
    let (min1, max1, min2, max2) = corrected(min1, max1, min2, max2, correct_min_max);
    if min2 - max1 > DEFAULT_EPSILON {
        Some(min2 - max1)
    } else if min1 - max2 > DEFAULT_EPSILON {
        Some(max2 - min1)
    } else {
        None
    }
}

pub fn interval_contains(min: f64, max: f64, point: f64, strict: bool, correct_min_max: bool) -> bool {
    let (min, max) = if correct_min_max {
        ordered(min, max)
    } else {
        (min, max)
    };
    if strict {
        min + DEFAULT_EPSILON < point && point < max - DEFAULT_EPSILON
    } else {
        min - DEFAULT_EPSILON <= point && point <= max + DEFAULT_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn line(a: f64, b: f64) -> AxisAlignedLine2 {
        AxisAlignedLine2::new(vector![1.0, 0.0], a, b)
    }

    #[test]
    fn constructor_orders_endpoints() {
        let l = line(3.0, -1.0);
        assert_eq!((l.min, l.max), (-1.0, 3.0));
        assert_eq!(l.length(), 4.0);
    }

    #[test]
    fn touching_is_non_strict_only() {
        let a = line(0.0, 1.0);
        let b = line(1.0, 2.0);
        assert!(a.intersects(&b, false));
        assert!(!a.intersects(&b, true));
        assert!(a.intersect_mtv(&b).is_none());
        assert!(a.min_distance(&b).is_none());
    }

    #[test]
    fn overlap_mtv_sign_displaces_first_interval() {
        let a = line(0.0, 2.0);
        let b = line(1.0, 3.0);
        assert_eq!(a.intersect_mtv(&b), Some(-1.0));
        assert_eq!(b.intersect_mtv(&a), Some(1.0));
        // Containment: the shorter push wins.
        let outer = line(0.0, 10.0);
        let inner = line(7.0, 8.0);
        assert_eq!(inner.intersect_mtv(&outer), Some(3.0));
        assert_eq!(outer.intersect_mtv(&inner), Some(-3.0));
    }

    #[test]
    fn gaps_are_signed() {
        let a = line(0.0, 1.0);
        let b = line(3.0, 4.0);
        assert_eq!(a.min_distance(&b), Some(2.0));
        assert_eq!(b.min_distance(&a), Some(-2.0));
        assert!(!a.intersects(&b, false));
        assert_eq!(a.min_distance_to_point(5.0), Some(4.0));
        assert_eq!(a.min_distance_to_point(-2.0), Some(-2.0));
        assert_eq!(a.min_distance_to_point(0.5), None);
    }

    #[test]
    fn raw_pairs_can_be_corrected() {
        assert!(intervals_intersect(2.0, 0.0, 3.0, 1.0, true, true));
        assert!(!intervals_intersect(2.0, 0.0, 3.0, 1.0, true, false));
        assert_eq!(intervals_mtv(2.0, 0.0, 3.0, 1.0, true), Some(-1.0));
        assert!(interval_contains(5.0, 1.0, 2.0, true, true));
    }

    #[test]
    fn containment_respects_strictness() {
        let a = line(0.0, 1.0);
        assert!(a.contains(1.0, false));
        assert!(!a.contains(1.0, true));
        assert!(a.contains(0.5, true));
        assert!(!a.contains(1.5, false));
    }
}
