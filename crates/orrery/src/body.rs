//! Celestial body entity.
//!
//! A `Body` carries two coexisting state streams: the simulated slice
//! (position and velocity evolved by the integrator) and the reference
//! slice (the externally supplied ephemeris position). The cached
//! deviation between the two is what the digital twin validates.
//!
//! The two slices have separate mutation entry points: only the integrator
//! path touches the simulated slice, only the sync path touches the
//! reference slice. Fields are private so that discipline is enforced by
//! the compiler rather than by convention.

use chrono::{DateTime, Utc};
use nalgebra::{Point2, Vector2};
use units::length::{AU_TO_M, KM_TO_M};
use units::velocity::KMS_TO_MS;

use crate::error::SyncError;

/// Maximum number of trail samples handed out by [`Body::recent_trail`].
///
/// The stored trail grows without bound until explicitly cleared; reads are
/// capped to this suffix so per-frame consumers stay bounded.
pub const TRAIL_READ_CAP: usize = 20_000;

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    anchor: bool,
    mass: f64,   // kg
    radius: f64, // display size token, consumed only by renderers

    // Simulated slice (integrator-owned)
    position: Point2<f64>,  // m
    velocity: Vector2<f64>, // m/s

    // Reference slice (sync-owned)
    reference_position: Point2<f64>, // m
    last_sync: Option<DateTime<Utc>>,

    // Derived, recomputed rather than independently mutated
    deviation: f64,        // m
    anchor_distance: f64,  // m, recorded during force accumulation
    trail: Vec<Point2<f64>>,
}

impl Body {
    /// Creates a body with its reference position seeded from the simulated
    /// position (zero deviation).
    ///
    /// Returns [`SyncError::NonPositiveMass`] for a zero or negative mass.
    pub fn new(
        name: impl Into<String>,
        mass_kg: f64,
        radius: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        anchor: bool,
    ) -> Result<Self, SyncError> {
        let name = name.into();
        if mass_kg <= 0.0 {
            return Err(SyncError::NonPositiveMass { name, mass_kg });
        }
        Ok(Self {
            name,
            anchor,
            mass: mass_kg,
            radius,
            position,
            velocity,
            reference_position: position,
            last_sync: None,
            deviation: 0.0,
            anchor_distance: 0.0,
            trail: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_anchor(&self) -> bool {
        self.anchor
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Simulated position in meters.
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Simulated velocity in m/s.
    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    /// Reference position in meters, as of the last sync.
    pub fn reference_position(&self) -> Point2<f64> {
        self.reference_position
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    /// Euclidean distance between simulated and reference positions, in
    /// meters, as of the last recomputation. Always 0 for the anchor.
    pub fn deviation_m(&self) -> f64 {
        self.deviation
    }

    pub fn deviation_km(&self) -> f64 {
        self.deviation / KM_TO_M
    }

    pub fn deviation_au(&self) -> f64 {
        self.deviation / AU_TO_M
    }

    /// Scalar distance to the anchor in meters, recorded as a side effect
    /// of force accumulation. Zero until the first step.
    pub fn anchor_distance_m(&self) -> f64 {
        self.anchor_distance
    }

    /// Simulated speed in m/s.
    pub fn speed_ms(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn speed_kms(&self) -> f64 {
        self.speed_ms() / KMS_TO_MS
    }

    /// Distance from the coordinate origin in meters.
    pub fn orbital_radius_m(&self) -> f64 {
        self.position.coords.magnitude()
    }

    pub fn orbital_radius_au(&self) -> f64 {
        self.orbital_radius_m() / AU_TO_M
    }

    /// The most recent trail samples, capped at [`TRAIL_READ_CAP`].
    ///
    /// This is the only slice accessor over the trail; the full unbounded
    /// history is never handed out.
    pub fn recent_trail(&self) -> &[Point2<f64>] {
        let start = self.trail.len().saturating_sub(TRAIL_READ_CAP);
        &self.trail[start..]
    }

    /// Number of samples accumulated since the last clear.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    // --- integrator-facing entry points (simulated slice) ---

    /// Applies one semi-implicit Euler update and records the new position
    /// on the trail. Never called for the anchor.
    pub(crate) fn advance(&mut self, net_force: Vector2<f64>, dt_s: f64) {
        debug_assert!(!self.anchor, "anchor bodies are never integrated");
        self.velocity += net_force * (dt_s / self.mass);
        self.position += self.velocity * dt_s;
        self.trail.push(self.position);
    }

    pub(crate) fn set_anchor_distance(&mut self, meters: f64) {
        self.anchor_distance = meters;
    }

    pub(crate) fn set_deviation(&mut self, meters: f64) {
        self.deviation = meters;
    }

    // --- sync-facing entry points (reference slice) ---

    pub(crate) fn sync_reference(&mut self, position: Point2<f64>, at: DateTime<Utc>) {
        self.reference_position = position;
        self.last_sync = Some(at);
    }

    /// Overwrites physical attributes from an authoritative feed record.
    pub(crate) fn sync_attributes(&mut self, mass_kg: f64, radius: f64) {
        debug_assert!(mass_kg > 0.0, "snapshot validated before application");
        self.mass = mass_kg;
        self.radius = radius;
    }

    /// Hard-sync entry point: resets the simulated slice to the reference
    /// feed's state. The trail is deliberately left alone; only
    /// [`Body::clear_trail`] empties it.
    pub(crate) fn sync_simulated(&mut self, position: Point2<f64>, velocity: Vector2<f64>) {
        self.position = position;
        self.velocity = velocity;
    }

    pub(crate) fn clear_trail(&mut self) {
        self.trail.clear();
    }
}
