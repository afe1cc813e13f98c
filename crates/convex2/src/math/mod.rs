//! Scalar/vector primitives shared by every shape.
//!
//! Purpose
//! - Fix the vector type (`nalgebra::Vector2<f64>`), the rotation value type
//!   (`Rotation2`, trig cached once), and the small vector helpers that SAT and
//!   GJK lean on (perpendicular, triple cross, standard normal).
//! - Keep all tolerances in one place (`cfg`).
//!
//! Conventions
//! - Exact `==` on vectors is only used for identity-style checks. Geometric
//!   comparisons always go through `approx_eq*` with an explicit epsilon.
//! - Angles are radians. Screen convention: y points down, so positive angles
//!   turn from +x toward +y and read as clockwise on screen.

pub mod cfg;
mod rotation;
mod util;

pub use cfg::{GjkCfg, DEFAULT_EPSILON};
pub use rotation::Rotation2;
pub use util::{
    approx_eq, approx_eq_eps, approx_eq_vec, are_parallel, are_points_collinear, cross,
    perpendicular, same_axis, standard_normal, triple_cross,
};

#[cfg(test)]
mod tests;
