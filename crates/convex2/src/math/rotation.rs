use nalgebra::{Matrix2, Vector2};
use std::f64::consts::TAU;

/// Rotation by `theta` radians with cos/sin computed once.
///
/// Invariants:
/// - `theta ∈ [0, 2π)`.
/// - `cos_theta == theta.cos()`, `sin_theta == theta.sin()` (computed at construction).
/// - `Rotation2::ZERO` is the identity; consumers take a trig-free fast path on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation2 {
    pub theta: f64,
    pub cos_theta: f64,
    pub sin_theta: f64,
}

impl Default for Rotation2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Rotation2 {
    pub const ZERO: Rotation2 = Rotation2 {
        theta: 0.0,
        cos_theta: 1.0,
        sin_theta: 0.0,
    };

    /// Normalize `theta` into `[0, 2π)` and cache its trig.
    pub fn new(theta: f64) -> Self {
        let mut t = theta.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if t >= TAU {
            t = 0.0;
        }
        if t == 0.0 {
            return Self::ZERO;
        }
        let (sin_theta, cos_theta) = t.sin_cos();
        Self {
            theta: t,
            cos_theta,
            sin_theta,
        }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self::new(deg.to_radians())
    }

    /// True for the identity rotation (the fast path every query checks).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.theta == 0.0
    }

    /// Rotation by `-theta`.
    #[inline]
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        Self {
            theta: TAU - self.theta,
            cos_theta: self.cos_theta,
            sin_theta: -self.sin_theta,
        }
    }

    /// Rotate `v` about the origin, turning +x toward +y.
    #[inline]
    pub fn rotate(&self, v: Vector2<f64>) -> Vector2<f64> {
        if self.is_zero() {
            return v;
        }
        Vector2::new(
            v.x * self.cos_theta - v.y * self.sin_theta,
            v.x * self.sin_theta + v.y * self.cos_theta,
        )
    }

    /// Rotate `v` by `-theta` without building the inverse.
    #[inline]
    pub fn unrotate(&self, v: Vector2<f64>) -> Vector2<f64> {
        if self.is_zero() {
            return v;
        }
        Vector2::new(
            v.x * self.cos_theta + v.y * self.sin_theta,
            -v.x * self.sin_theta + v.y * self.cos_theta,
        )
    }

    /// Rotate `v` about `about`.
    #[inline]
    pub fn rotate_about(&self, v: Vector2<f64>, about: Vector2<f64>) -> Vector2<f64> {
        if self.is_zero() {
            return v;
        }
        self.rotate(v - about) + about
    }

    #[inline]
    pub fn matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.cos_theta, -self.sin_theta, self.sin_theta, self.cos_theta)
    }
}
