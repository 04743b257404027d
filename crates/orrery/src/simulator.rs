//! Simulation orchestrator.
//!
//! One step = force accumulation → integration → deviation recomputation
//! for every non-anchor body. Synchronization replaces reference state from
//! a freshly supplied ephemeris snapshot on demand, without touching the
//! clock.
//!
//! The core is single-threaded and synchronous: a step never suspends, and
//! a sync either fully applies or (on a validation error) changes nothing.
//! Embedding in a concurrent host requires a single coarse lock around
//! `step` and `sync`.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;
use units::Time;

use crate::body::Body;
use crate::clock::SimulationClock;
use crate::deviation::{DeviationTracker, Health};
use crate::ephemeris::EphemerisSnapshot;
use crate::error::SyncError;
use crate::forces::NewtonianGravity;
use crate::integrator::{Integrator, SymplecticEuler};
use crate::state::SystemState;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SyncMode {
    /// Update the reference slice only; simulated state keeps evolving.
    Reference,
    /// Also reset the simulated slice to the feed's state.
    Hard,
}

/// Drives the twin simulation: owns the body collection, the clock, the
/// force model and the integrator.
pub struct Simulator {
    state: SystemState,
    clock: SimulationClock,
    force: NewtonianGravity,
    integrator: SymplecticEuler,
    tracker: DeviationTracker,
    last_sync: Option<DateTime<Utc>>,
}

impl Simulator {
    /// Builds a simulator from a first ("hard") sync: simulated state,
    /// velocity and reference state are all seeded from the snapshot, so
    /// every deviation starts at zero.
    pub fn from_snapshot(snapshot: &EphemerisSnapshot) -> Result<Self, SyncError> {
        let state = SystemState::from_snapshot(snapshot)?;
        info!(
            "synchronized {} bodies from {}",
            state.body_count(),
            snapshot.source
        );
        Ok(Self {
            state,
            clock: SimulationClock::new(),
            force: NewtonianGravity::new(),
            integrator: SymplecticEuler::new(),
            tracker: DeviationTracker::new(),
            last_sync: Some(snapshot.timestamp),
        })
    }

    /// Advances the simulation by one timestep at the clock's current step
    /// size, then recomputes every non-anchor body's deviation.
    ///
    /// A no-op while the clock is paused. Never mutates the anchor.
    pub fn step(&mut self) {
        if self.clock.is_paused() {
            return;
        }
        let dt = self.clock.step_size();
        self.integrator.step(&mut self.state, dt, &self.force);
        for body in self.state.bodies_mut() {
            self.tracker.recompute(body);
        }
    }

    /// Merges a fresh snapshot into the body set, keyed by name: existing
    /// bodies get their reference slice (and mass/radius) updated while
    /// their simulated state keeps evolving; unseen names become new
    /// bodies; bodies the feed no longer reports are removed.
    ///
    /// Records the sync timestamp and leaves the clock untouched. On a
    /// validation error the prior state is left exactly as it was.
    pub fn sync(&mut self, snapshot: &EphemerisSnapshot) -> Result<(), SyncError> {
        self.apply_sync(snapshot, SyncMode::Reference)
    }

    /// Like [`Simulator::sync`], but also resets each body's simulated
    /// position and velocity to the feed's state. Trails are preserved;
    /// only [`Simulator::clear_trails`] empties them.
    pub fn sync_hard(&mut self, snapshot: &EphemerisSnapshot) -> Result<(), SyncError> {
        self.apply_sync(snapshot, SyncMode::Hard)
    }

    fn apply_sync(&mut self, snapshot: &EphemerisSnapshot, mode: SyncMode) -> Result<(), SyncError> {
        // Sole failure gate; everything past this point applies cleanly.
        snapshot.validate()?;
        let at = snapshot.timestamp;

        // Drop bodies the feed no longer reports, and bodies whose anchor
        // role changed (those are rebuilt from scratch below).
        self.state.retain(|body| {
            snapshot
                .record(body.name())
                .is_some_and(|r| r.anchor == body.is_anchor())
        });

        for record in &snapshot.bodies {
            match self.state.index_of(&record.name) {
                Some(i) => {
                    let body = &mut self.state.bodies_mut()[i];
                    body.sync_attributes(record.mass_kg, record.radius);
                    body.sync_reference(record.position_m(), at);
                    if mode == SyncMode::Hard {
                        body.sync_simulated(record.position_m(), record.velocity_ms());
                    }
                }
                None => {
                    // New bodies are always seeded hard from the feed.
                    let mut body = Body::new(
                        record.name.clone(),
                        record.mass_kg,
                        record.radius,
                        record.position_m(),
                        record.velocity_ms(),
                        record.anchor,
                    )?;
                    body.sync_reference(record.position_m(), at);
                    self.state.push_body(body);
                }
            }
        }

        for body in self.state.bodies_mut() {
            self.tracker.recompute(body);
        }
        self.last_sync = Some(at);
        info!(
            "synchronized {} bodies from {}",
            self.state.body_count(),
            snapshot.source
        );
        Ok(())
    }

    /// Empties every body's trail. Positions, velocities and deviations
    /// are unaffected. Works while paused.
    pub fn clear_trails(&mut self) {
        for body in self.state.bodies_mut() {
            body.clear_trail();
        }
        debug!("trails cleared");
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn bodies(&self) -> &[Body] {
        self.state.bodies()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// All timestep rescaling and pausing goes through the clock, which
    /// enforces the clamp invariants.
    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    pub fn elapsed(&self) -> Time {
        self.state.elapsed()
    }

    /// Mean precision over the non-anchor bodies.
    pub fn aggregate_precision(&self) -> f64 {
        self.tracker.aggregate_precision(self.state.bodies())
    }

    /// Read-only status for reporting layers. The core never writes to a
    /// display surface; consumers render this however they like.
    pub fn status(&self) -> StatusReport {
        StatusReport {
            body_count: self.state.body_count(),
            step_seconds: self.clock.step_size().to_seconds(),
            paused: self.clock.is_paused(),
            elapsed_days: self.state.elapsed().to_days(),
            last_sync: self.last_sync,
            aggregate_precision: self.aggregate_precision(),
            bodies: self
                .state
                .bodies()
                .iter()
                .map(|body| BodyStatus {
                    name: body.name().to_string(),
                    anchor: body.is_anchor(),
                    deviation_m: body.deviation_m(),
                    precision: self.tracker.precision(body),
                    health: self.tracker.health(body),
                    speed_kms: body.speed_kms(),
                    orbital_radius_au: body.orbital_radius_au(),
                })
                .collect(),
        }
    }
}

/// Snapshot of the simulation's health for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub body_count: usize,
    pub step_seconds: f64,
    pub paused: bool,
    pub elapsed_days: f64,
    pub last_sync: Option<DateTime<Utc>>,
    pub aggregate_precision: f64,
    pub bodies: Vec<BodyStatus>,
}

/// Per-body row of a [`StatusReport`].
#[derive(Debug, Clone, Serialize)]
pub struct BodyStatus {
    pub name: String,
    pub anchor: bool,
    pub deviation_m: f64,
    pub precision: f64,
    pub health: Health,
    pub speed_kms: f64,
    pub orbital_radius_au: f64,
}
