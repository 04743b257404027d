//! Direct pairwise Newtonian gravity (O(n²)).

use nalgebra::Vector2;

use super::{ForceModel, G};
use crate::body::Body;

/// Direct O(n²) gravitational force between point masses.
///
/// `F = G·m_a·m_b / d²` along the separation vector. Body counts here are
/// tens, not thousands, so the quadratic pairwise sum is the right tool.
///
/// Coincident bodies (`d == 0`) contribute the zero vector instead of a
/// division fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonianGravity;

impl NewtonianGravity {
    pub fn new() -> Self {
        Self
    }
}

impl ForceModel for NewtonianGravity {
    fn force(&self, a: &Body, b: &Body) -> Vector2<f64> {
        let dr = b.position() - a.position();
        let d2 = dr.magnitude_squared();

        if d2 == 0.0 {
            return Vector2::zeros();
        }

        let d = d2.sqrt();
        let magnitude = G * a.mass_kg() * b.mass_kg() / d2;
        // dr / d is the unit vector from a toward b
        dr * (magnitude / d)
    }
}
