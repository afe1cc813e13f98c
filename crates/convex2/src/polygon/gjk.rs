//! Intersection by walking a simplex over the Minkowski difference `A - B`.
//!
//! The difference is never materialised: `support(d)` combines the furthest
//! vertex of `A` along `d` with the furthest vertex of `B` along `-d`. The
//! shapes intersect iff the origin lies in the difference.
//!
//! - Non-strict: the origin is within `DEFAULT_EPSILON` of the difference.
//! - Strict: the origin is deeper than `DEFAULT_EPSILON` inside it. Once the
//!   simplex encloses the origin, the enclosure is grown with support points
//!   (polytope expansion) until its closest edge clears epsilon or the
//!   difference itself is shown to be that thin.

use nalgebra::Vector2;

use super::Polygon2;
use crate::math::cfg::{BARYCENTRIC_EPS, ORIGIN_EPS_SQ};
use crate::math::{cross, perpendicular, triple_cross, GjkCfg, Rotation2, DEFAULT_EPSILON};

impl Polygon2 {
    /// Same contract as [`Polygon2::intersects`], decided by GJK.
    ///
    /// Answers agree with SAT except for configurations within epsilon of
    /// touching, where the two tests measure slack differently.
    pub fn intersects_gjk(
        a: &Polygon2,
        b: &Polygon2,
        pos1: Vector2<f64>,
        pos2: Vector2<f64>,
        rot1: Rotation2,
        rot2: Rotation2,
        strict: bool,
    ) -> bool {
        MinkowskiDifference::new(a.actualize(pos1, rot1), b.actualize(pos2, rot2))
            .with_initial_axis((a.center + pos1) - (b.center + pos2))
            .intersects(strict, &GjkCfg::default())
    }
}

/// Implicit Minkowski difference of two world-space convex vertex sets.
#[derive(Clone, Debug)]
pub struct MinkowskiDifference {
    a: Vec<Vector2<f64>>,
    b: Vec<Vector2<f64>>,
    initial_axis: Vector2<f64>,
}

impl MinkowskiDifference {
    /// The first search direction defaults to `mean(a) - mean(b)`.
    pub fn new(a: Vec<Vector2<f64>>, b: Vec<Vector2<f64>>) -> Self {
        let initial_axis = mean(&a) - mean(&b);
        Self { a, b, initial_axis }
    }

    pub fn with_initial_axis(mut self, axis: Vector2<f64>) -> Self {
        self.initial_axis = axis;
        self
    }

    /// Furthest point of the difference along `dir`.
    #[inline]
    pub fn support(&self, dir: Vector2<f64>) -> Vector2<f64> {
        furthest(&self.a, dir) - furthest(&self.b, -dir)
    }

    pub fn intersects(&self, strict: bool, cfg: &GjkCfg) -> bool {
        let mut dir = self.initial_axis;
        if dir.norm_squared() <= ORIGIN_EPS_SQ {
            dir = Vector2::new(1.0, 0.0);
        }
        let mut simplex = Simplex::from_points(&[self.support(dir)]);
        for _ in 0..cfg.max_iterations {
            let closest = simplex.reduce();
            let dist_sq = closest.norm_squared();
            if dist_sq <= ORIGIN_EPS_SQ {
                return !strict || self.exceeds_depth(&simplex, cfg);
            }
            let dist = dist_sq.sqrt();
            if !strict && dist <= DEFAULT_EPSILON {
                return true;
            }
            let toward = -closest / dist;
            let p = self.support(toward);
            let reach = p.dot(&toward);
            // `reach` bounds how far past the origin the difference extends along `toward`.
            if strict && reach <= DEFAULT_EPSILON {
                return false;
            }
            if !strict && reach < -DEFAULT_EPSILON {
                return false;
            }
            if reach + dist <= cfg.convergence_tol || simplex.has_point(p) {
                return false;
            }
            simplex.push(p);
        }
        tracing::warn!(
            max_iterations = cfg.max_iterations,
            "GJK iteration cap reached; reporting no intersection"
        );
        false
    }

    /// Whether the origin is deeper than epsilon, given a simplex touching it.
    fn exceeds_depth(&self, simplex: &Simplex, cfg: &GjkCfg) -> bool {
        let mut hull: Vec<Vector2<f64>> = match *simplex.points() {
            // The origin is a support point, hence on the boundary.
            [_] => return false,
            [a, b] => {
                let n = perpendicular(b - a).normalize();
                let up = self.support(n);
                let down = self.support(-n);
                if up.dot(&n) <= DEFAULT_EPSILON || -down.dot(&n) <= DEFAULT_EPSILON {
                    return false;
                }
                vec![a, down, b, up]
            }
            [a, b, c] => {
                if cross(b - a, c - a) >= 0.0 {
                    vec![a, b, c]
                } else {
                    vec![a, c, b]
                }
            }
            _ => return false,
        };
        // `hull` is counterclockwise in the math frame and contains the origin.
        for _ in 0..cfg.max_iterations {
            let Some((i, normal, dist)) = closest_edge(&hull) else {
                return false;
            };
            if dist > DEFAULT_EPSILON {
                return true;
            }
            let p = self.support(normal);
            let reach = p.dot(&normal);
            if reach <= DEFAULT_EPSILON || reach - dist <= cfg.convergence_tol {
                return false;
            }
            hull.insert(i + 1, p);
        }
        tracing::warn!(
            max_iterations = cfg.max_iterations,
            "depth expansion cap reached; treating contact as touching"
        );
        false
    }
}

/// Up to three support points, reduced each step to the feature nearest the origin.
#[derive(Clone, Copy, Debug)]
struct Simplex {
    pts: [Vector2<f64>; 3],
    len: usize,
}

impl Simplex {
    fn from_points(points: &[Vector2<f64>]) -> Self {
        let mut s = Simplex {
            pts: [Vector2::zeros(); 3],
            len: 0,
        };
        for p in points.iter().take(3) {
            s.push(*p);
        }
        s
    }

    #[inline]
    fn points(&self) -> &[Vector2<f64>] {
        &self.pts[..self.len]
    }

    #[inline]
    fn push(&mut self, p: Vector2<f64>) {
        debug_assert!(self.len < 3, "simplex overflow");
        self.pts[self.len] = p;
        self.len += 1;
    }

    fn has_point(&self, p: Vector2<f64>) -> bool {
        self.points()
            .iter()
            .any(|q| (q - p).norm_squared() <= ORIGIN_EPS_SQ)
    }

    /// Keep only the sub-feature closest to the origin; return that closest point.
    fn reduce(&mut self) -> Vector2<f64> {
        let [a, b, c] = self.pts;
        match self.len {
            1 => a,
            2 => self.reduce_segment(a, b),
            3 => self.reduce_triangle(a, b, c),
            _ => Vector2::zeros(),
        }
    }

    fn reduce_segment(&mut self, a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
        let ab = b - a;
        let len_sq = ab.norm_squared();
        let t = if len_sq > 0.0 { -a.dot(&ab) / len_sq } else { 0.0 };
        if t <= 0.0 {
            *self = Simplex::from_points(&[a]);
            a
        } else if t >= 1.0 {
            *self = Simplex::from_points(&[b]);
            b
        } else {
            // (ab × ao) × ab is the perpendicular from the segment toward the origin, scaled by |ab|².
            -triple_cross(ab, -a, ab) / len_sq
        }
    }

    fn reduce_triangle(&mut self, a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Vector2<f64> {
        let area2 = cross(b - a, c - a);
        if area2.abs() > BARYCENTRIC_EPS * (b - a).norm() * (c - a).norm() {
            let s = area2.signum();
            let inside = cross(b - a, -a) * s >= 0.0 && cross(c - b, -b) * s >= 0.0 && cross(a - c, -c) * s >= 0.0;
            if inside {
                return Vector2::zeros();
            }
        }
        let edges = [[a, b], [b, c], [c, a]];
        let mut best = Simplex::from_points(&edges[0]);
        let mut best_v = best.reduce();
        for e in &edges[1..] {
            let mut s = Simplex::from_points(e);
            let v = s.reduce();
            if v.norm_squared() < best_v.norm_squared() {
                best = s;
                best_v = v;
            }
        }
        *self = best;
        best_v
    }
}

/// Edge of a counterclockwise ring nearest the origin: `(index, outward normal, distance)`.
fn closest_edge(hull: &[Vector2<f64>]) -> Option<(usize, Vector2<f64>, f64)> {
    let n = hull.len();
    let mut best: Option<(usize, Vector2<f64>, f64)> = None;
    for i in 0..n {
        let p = hull[i];
        let e = hull[(i + 1) % n] - p;
        let len = e.norm();
        if len <= 0.0 {
            continue;
        }
        let normal = Vector2::new(e.y, -e.x) / len;
        let dist = normal.dot(&p);
        if best.map_or(true, |(_, _, d)| dist < d) {
            best = Some((i, normal, dist));
        }
    }
    best
}

/// First vertex with the largest projection on `dir`.
#[inline]
fn furthest(points: &[Vector2<f64>], dir: Vector2<f64>) -> Vector2<f64> {
    let mut iter = points.iter();
    let Some(&first) = iter.next() else {
        return Vector2::zeros();
    };
    let mut best = first;
    let mut best_d = first.dot(&dir);
    for p in iter {
        let d = p.dot(&dir);
        if d > best_d {
            best = *p;
            best_d = d;
        }
    }
    best
}

fn mean(points: &[Vector2<f64>]) -> Vector2<f64> {
    if points.is_empty() {
        return Vector2::zeros();
    }
    points.iter().sum::<Vector2<f64>>() / points.len() as f64
}
