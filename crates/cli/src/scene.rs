//! JSON scene format and the query runner behind `cli check`.
//!
//! A scene holds two bodies; each body is a shape plus a pose:
//!
//! ```json
//! {
//!   "a": { "shape": { "kind": "polygon", "vertices": [[0, 0], [1, 0], [0, 1]] },
//!          "position": [0, 0], "rotation_deg": 15 },
//!   "b": { "shape": { "kind": "circle", "radius": 1 }, "position": [2, 0] }
//! }
//! ```

use anyhow::{Context, Result};
use convex2::generators::regular_polygon;
use convex2::{Circle2, Distance, Line2, Mtv, Polygon2, Rect2, Rotation2, Shape, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Polygon { vertices: Vec<[f64; 2]> },
    RegularPolygon { radius: f64, segments: usize },
    Rect { min: [f64; 2], max: [f64; 2] },
    Circle { radius: f64 },
    Line { start: [f64; 2], end: [f64; 2] },
}

#[derive(Clone, Debug, Deserialize)]
pub struct Body {
    pub shape: ShapeSpec,
    #[serde(default)]
    pub position: [f64; 2],
    #[serde(default)]
    pub rotation_deg: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    pub a: Body,
    pub b: Body,
}

/// A body resolved into library types.
pub struct Placed {
    pub shape: Shape,
    pub pos: Vec2<f64>,
    pub rot: Rotation2,
}

#[inline]
fn v(p: [f64; 2]) -> Vec2<f64> {
    Vec2::new(p[0], p[1])
}

impl Body {
    /// Rotated rectangles become polygons and rotated segments get their
    /// endpoints turned about the midpoint; only polygons keep a live rotation.
    pub fn place(&self) -> Result<Placed> {
        let pos = v(self.position);
        let rot = Rotation2::from_degrees(self.rotation_deg);
        let shape = match &self.shape {
            ShapeSpec::Polygon { vertices } => {
                Shape::Polygon(Polygon2::new(vertices.iter().copied().map(v).collect()).context("invalid polygon")?)
            }
            ShapeSpec::RegularPolygon { radius, segments } => {
                Shape::Polygon(regular_polygon(*radius, *segments).context("invalid regular polygon")?)
            }
            ShapeSpec::Rect { min, max } => Shape::Rect(Rect2::new(v(*min), v(*max)).context("invalid rect")?),
            ShapeSpec::Circle { radius } => Shape::Circle(Circle2::new(*radius).context("invalid circle")?),
            ShapeSpec::Line { start, end } => Shape::Line(Line2::new(v(*start), v(*end)).context("invalid line")?),
        };
        let (shape, rot) = match shape {
            Shape::Polygon(_) => (shape, rot),
            other => {
                let baked = other.rotated(rot).with_context(|| format!("rotating {}", other.kind()))?;
                (baked, Rotation2::ZERO)
            }
        };
        Ok(Placed { shape, pos, rot })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Push {
    pub axis: [f64; 2],
    pub amount: f64,
}

impl From<Mtv> for Push {
    fn from(m: Mtv) -> Self {
        Self {
            axis: [m.axis.x, m.axis.y],
            amount: m.depth,
        }
    }
}

impl From<Distance> for Push {
    fn from(d: Distance) -> Self {
        Self {
            axis: [d.axis.x, d.axis.y],
            amount: d.distance,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GjkReport {
    pub intersects: bool,
    pub intersects_strict: bool,
}

/// Everything `check` can say about the pair; absent entries do not apply.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckReport {
    pub a: &'static str,
    pub b: &'static str,
    pub intersects: bool,
    pub intersects_strict: bool,
    pub mtv: Option<Push>,
    pub gjk: Option<GjkReport>,
    pub distance: Option<Push>,
}

pub fn evaluate(scene: &Scene) -> Result<CheckReport> {
    let a = scene.a.place().context("body a")?;
    let b = scene.b.place().context("body b")?;
    let hit = |strict| Shape::intersects(&a.shape, &b.shape, a.pos, b.pos, a.rot, b.rot, strict);
    let intersects = hit(false);
    let intersects_strict = hit(true);
    let mtv = Shape::intersect_mtv(&a.shape, &b.shape, a.pos, b.pos, a.rot, b.rot).map(Push::from);
    let (gjk, distance) = match (&a.shape, &b.shape) {
        (Shape::Polygon(p), Shape::Polygon(q)) => {
            let gjk = |strict| Polygon2::intersects_gjk(p, q, a.pos, b.pos, a.rot, b.rot, strict);
            let report = GjkReport {
                intersects: gjk(false),
                intersects_strict: gjk(true),
            };
            // Distance wants unrotated operands: bake the rotations first.
            let (p, q) = (p.rotated(a.rot)?, q.rotated(b.rot)?);
            let d = Polygon2::min_distance(&p, &q, a.pos, b.pos, Rotation2::ZERO, Rotation2::ZERO)?;
            (Some(report), d)
        }
        (Shape::Rect(r), Shape::Rect(s)) => (None, Rect2::min_distance(r, s, a.pos, b.pos)),
        (Shape::Circle(c), Shape::Circle(d)) => (None, Circle2::min_distance(c, d, a.pos, b.pos)),
        _ => (None, None),
    };
    tracing::debug!(a = a.shape.kind(), b = b.shape.kind(), intersects, intersects_strict, "evaluated");
    Ok(CheckReport {
        a: a.shape.kind(),
        b: b.shape.kind(),
        intersects,
        intersects_strict,
        mtv,
        gjk,
        distance: distance.map(Push::from),
    })
}
