//! Tolerance defaults (shared by every shape and query).
//!
//! Policy
//! - One geometric epsilon (`DEFAULT_EPSILON`) decides touching vs. overlapping
//!   everywhere. The remaining constants are numerical guards that never change
//!   a classification on well-scaled input.

/// Geometric tolerance: gaps up to this size count as touching, penetrations
/// must exceed it to count as overlap.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Slack on barycentric coordinates for fan-triangle membership.
pub(crate) const BARYCENTRIC_EPS: f64 = 1e-9;

/// Relative threshold below which a triangle's area counts as zero.
pub(crate) const DEGENERATE_AREA_REL: f64 = 1e-12;

/// Squared length under which a simplex feature is taken to pass through the origin.
pub(crate) const ORIGIN_EPS_SQ: f64 = 1e-20;

/// GJK/expansion configuration.
///
/// The walk terminates on its own for convex polygons; the cap only guards
/// against cycling on badly conditioned input.
#[derive(Clone, Copy, Debug)]
pub struct GjkCfg {
    pub max_iterations: usize,
    /// Minimum progress (along the search direction) a new support point must
    /// make before the walk is considered converged.
    pub convergence_tol: f64,
}

impl Default for GjkCfg {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            convergence_tol: 1e-10,
        }
    }
}

/// Slack on segment parameters `t, u ∈ [0, 1]` for non-strict crossings.
pub(crate) const SEGMENT_PARAM_EPS: f64 = 1e-12;

/// Sine of the angle under which two segment axes count as parallel.
pub(crate) const PARALLEL_SIN_EPS: f64 = 1e-9;
