//! Time integration for the twin simulation.
//!
//! Advances every non-anchor body by one timestep from forces accumulated
//! against a pre-update snapshot of the whole system, so the pairwise force
//! model stays symmetric within a step.

use units::Time;

use crate::forces::{ForceModel, NetForce};
use crate::state::SystemState;

/// A time integrator for the twin simulation.
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep.
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep
    /// * `force` - Force model used to accumulate per-body net forces
    fn step(&self, state: &mut SystemState, dt: Time, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps.
    ///
    /// # Returns
    ///
    /// Elapsed simulation time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: Time,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Time {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
        state.elapsed()
    }
}

/// Semi-implicit (symplectic) Euler integrator (1st order).
///
/// Per non-anchor body and step:
///
/// 1. Accumulate net force from the pre-update positions of all bodies
/// 2. Kick: `v += (F / m) * dt`
/// 3. Drift: `x += v * dt` (using the already-updated velocity)
/// 4. Append the new position to the body's trail
///
/// Updating velocity before position makes the method symplectic, which
/// bounds energy drift at orbital timescales. Given identical initial state
/// and `dt` sequence the trajectory replays bit-for-bit; there is no hidden
/// randomness anywhere in the step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEuler;

impl SymplecticEuler {
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEuler {
    fn step(&self, state: &mut SystemState, dt: Time, force: &dyn ForceModel) {
        let dt_s = dt.to_seconds();

        // Forces for the whole step come from a consistent snapshot taken
        // before any position mutates.
        let forces: Vec<Option<NetForce>> = {
            let bodies = state.bodies();
            bodies
                .iter()
                .enumerate()
                .map(|(i, body)| {
                    if body.is_anchor() {
                        None
                    } else {
                        Some(force.net_force(i, bodies))
                    }
                })
                .collect()
        };

        for (body, net) in state.bodies_mut().iter_mut().zip(forces) {
            let Some(net) = net else {
                continue; // the anchor is never integrated
            };
            body.advance(net.total, dt_s);
            if let Some(distance) = net.anchor_distance {
                body.set_anchor_distance(distance);
            }
        }

        state.advance_elapsed(dt);
    }
}
