//! Shape factories for tests, benches and the CLI.
//!
//! Purpose
//! - Produce valid convex `Polygon2` rings: regular polygons (circle
//!   approximations), rectangles, and a seeded random convex sampler.
//!
//! Model
//! - `regular_polygon` follows the circle convention: the AABB's top-left
//!   corner sits at the origin, so the center is `(radius, radius)`.
//! - The random sampler starts from `n` equally spaced angles, adds bounded
//!   angular and radial jitter, and keeps the convex hull. Draws are replayable
//!   from a `(seed, index)` token.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::error::GeomError;
use crate::math::{approx_eq_vec, cross};
use crate::polygon::Polygon2;
use crate::shapes::Rect2;

/// `segments`-gon inscribed in the circle of `radius` centered at `(radius, radius)`.
pub fn regular_polygon(radius: f64, segments: usize) -> Result<Polygon2, GeomError> {
    if segments < 3 {
        return Err(GeomError::TooFewVertices { count: segments });
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeomError::InvalidRadius { radius });
    }
    let step = TAU / segments as f64;
    let vertices = (0..segments)
        .map(|k| {
            let th = k as f64 * step;
            Vector2::new(radius + radius * th.cos(), radius + radius * th.sin())
        })
        .collect();
    Polygon2::new(vertices)
}

/// Axis-aligned `width × height` box with its top-left corner at the origin.
pub fn rectangle_polygon(width: f64, height: f64) -> Result<Polygon2, GeomError> {
    Polygon2::from_rect(&Rect2::new(Vector2::zeros(), Vector2::new(width, height))?)
}

/// Vertex count distribution (before hulling).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π) instead of starting at angle 0.
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Random convex polygon around the origin.
///
/// Hull vertices closer than epsilon to their neighbour are merged, so the
/// ring may end up with fewer vertices than sampled (never fewer than 3, or
/// the draw fails with `TooFewVertices`).
pub fn random_convex(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon2, GeomError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-6);
    let delta = TAU / n as f64;
    let phase = if cfg.random_phase { rng.gen::<f64>() * TAU } else { 0.0 };
    let points: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let hull = convex_hull(&points);
    if hull.len() < 3 {
        return Err(GeomError::TooFewVertices { count: hull.len() });
    }
    Polygon2::new(hull)
}

/// Andrew's monotone chain; collinear points dropped, ring turns from +x toward +y.
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.iter().copied().filter(|p| p.x.is_finite() && p.y.is_finite()).collect();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| approx_eq_vec(*a, *b));
    if pts.len() < 3 {
        return pts;
    }
    let turn = |a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>| cross(b - a, c - a);
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    // Approximate dedup on sorted input can still leave close neighbours across the chains.
    let mut ring: Vec<Vector2<f64>> = Vec::with_capacity(hull.len());
    for p in hull {
        if ring.last().map_or(true, |q| !approx_eq_vec(*q, p)) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && approx_eq_vec(ring[0], ring[ring.len() - 1]) {
        ring.pop();
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::DEFAULT_EPSILON;

    #[test]
    fn regular_polygon_sits_in_circle_aabb() {
        let p = regular_polygon(5.0, 32).unwrap();
        assert_eq!(p.vertices().len(), 32);
        assert!((p.center() - Vector2::new(5.0, 5.0)).norm() < 1e-9);
        let aabb = p.aabb();
        assert!(aabb.min.x.abs() < 1e-9 && aabb.min.y.abs() < 1e-9);
        assert!((aabb.max.x - 10.0).abs() < 1e-9 && (aabb.max.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn regular_polygon_rejects_bad_input() {
        assert_eq!(regular_polygon(1.0, 2).unwrap_err(), GeomError::TooFewVertices { count: 2 });
        assert!(matches!(regular_polygon(-1.0, 5), Err(GeomError::InvalidRadius { .. })));
    }

    #[test]
    fn rectangle_polygon_area() {
        let p = rectangle_polygon(3.0, 2.0).unwrap();
        assert!((p.area() - 6.0).abs() < 1e-12);
        assert!((p.center() - Vector2::new(1.5, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let pts = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(0.0, 2.0),
            Vector2::new(1.0, 1.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Vector2::new(1.0, 0.0)));
        assert!(!hull.contains(&Vector2::new(1.0, 1.0)));
    }

    #[test]
    fn random_convex_is_replayable() {
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = random_convex(RadialCfg::default(), tok).unwrap();
        let b = random_convex(RadialCfg::default(), tok).unwrap();
        assert_eq!(a.vertices(), b.vertices());
        let c = random_convex(RadialCfg::default(), ReplayToken { seed: 7, index: 4 }).unwrap();
        assert_ne!(a.vertices(), c.vertices());
    }

    #[test]
    fn random_convex_draws_are_convex() {
        for index in 0..50 {
            let p = random_convex(RadialCfg::default(), ReplayToken { seed: 1, index }).unwrap();
            let v = p.vertices();
            let n = v.len();
            for i in 0..n {
                let t = cross(v[(i + 1) % n] - v[i], v[(i + 2) % n] - v[(i + 1) % n]);
                assert!(t > -DEFAULT_EPSILON, "draw {index} turns the wrong way at {i}");
            }
        }
    }
}
