//! Force models for the twin simulation core.
//!
//! This module provides the `ForceModel` trait and the direct Newtonian
//! gravity implementation used to accumulate per-body net forces.

use nalgebra::Vector2;

use crate::body::Body;

pub mod gravity;


pub use gravity::NewtonianGravity;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67428e-11;

/// A source of pairwise force between bodies.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use orrery::body::Body;
/// use orrery::forces::{ForceModel, NewtonianGravity};
///
/// let sun = Body::new(
///     "Sun", 1.98892e30, 30.0,
///     Point2::origin(), Vector2::zeros(), true,
/// ).unwrap();
/// let earth = Body::new(
///     "Earth", 5.9742e24, 10.0,
///     Point2::new(1.496e11, 0.0), Vector2::new(0.0, 29_783.0), false,
/// ).unwrap();
///
/// let gravity = NewtonianGravity::new();
/// let f = gravity.force(&earth, &sun);
///
/// // Pull is toward the Sun (negative x)
/// assert!(f.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Force exerted on `a` by `b`, in Newtons, directed from `a` toward
    /// `b`. Coincident bodies must yield the zero vector.
    fn force(&self, a: &Body, b: &Body) -> Vector2<f64>;

    /// Net force on `bodies[idx]`, summed over every other body.
    ///
    /// Alongside the sum, reports the scalar distance to the anchor
    /// observed while accumulating. The distance is a display/metrics side
    /// channel and plays no part in integration.
    fn net_force(&self, idx: usize, bodies: &[Body]) -> NetForce {
        let target = &bodies[idx];
        let mut total = Vector2::zeros();
        let mut anchor_distance = None;

        for (j, other) in bodies.iter().enumerate() {
            if j == idx {
                continue;
            }
            total += self.force(target, other);
            if other.is_anchor() {
                anchor_distance = Some((other.position() - target.position()).magnitude());
            }
        }

        NetForce {
            total,
            anchor_distance,
        }
    }
}

/// Accumulated per-body force plus the anchor-distance side channel.
#[derive(Debug, Clone, Copy)]
pub struct NetForce {
    /// Sum of pairwise forces, in Newtons.
    pub total: Vector2<f64>,
    /// Distance to the anchor in meters, if an anchor was among the others.
    pub anchor_distance: Option<f64>,
}
