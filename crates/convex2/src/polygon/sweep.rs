//! Swept-edge decomposition for ray/motion tests.

use nalgebra::Vector2;

use super::Polygon2;
use crate::math::{are_parallel, DEFAULT_EPSILON};

impl Polygon2 {
    /// One parallelogram per edge swept along `offset`: `[start, end, end + offset, start + offset]`.
    ///
    /// Edges parallel to `offset` sweep no area and are skipped, as are quads
    /// too thin to form a valid polygon; a negligible offset yields no quads.
    pub fn create_raytrace_ables(&self, offset: Vector2<f64>) -> Vec<Polygon2> {
        if offset.norm() <= DEFAULT_EPSILON {
            return Vec::new();
        }
        self.lines
            .iter()
            .filter(|l| !are_parallel(l.axis, offset))
            .filter_map(|l| {
                match Polygon2::new(vec![l.start, l.end, l.end + offset, l.start + offset]) {
                    Ok(quad) => Some(quad),
                    Err(e) => {
                        tracing::debug!(error = %e, "dropping degenerate sweep quad");
                        None
                    }
                }
            })
            .collect()
    }
}
