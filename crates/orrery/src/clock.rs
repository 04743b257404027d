//! Simulation clock: the owned timestep and pause flag.
//!
//! The timestep is deliberately not a shared global. All rescaling funnels
//! through the clock's two bounded operations so the clamp invariants hold
//! everywhere, and the value is passed explicitly into each step.

use log::{debug, info};
use units::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_YEAR};
use units::Time;

/// Lower clamp: rescaling below one hour would degenerate into a no-op.
const MIN_STEP_SECONDS: f64 = SECONDS_PER_HOUR;
/// Upper clamp: steps beyond a simulated year are numerically unstable
/// giant leaps.
const MAX_STEP_SECONDS: f64 = SECONDS_PER_YEAR;
/// Default timestep: one simulated day per step.
const DEFAULT_STEP_SECONDS: f64 = SECONDS_PER_DAY;

/// Owns the timestep and the paused flag.
///
/// # Examples
///
/// ```
/// use orrery::SimulationClock;
///
/// let mut clock = SimulationClock::new();
/// assert_eq!(clock.step_size().to_days(), 1.0);
///
/// clock.double_step();
/// assert_eq!(clock.step_size().to_days(), 2.0);
///
/// // Halving saturates at one hour no matter how often it is called
/// for _ in 0..100 {
///     clock.halve_step();
/// }
/// assert_eq!(clock.step_size().to_hours(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationClock {
    dt: Time,
    paused: bool,
}

impl SimulationClock {
    /// Creates a running clock with the default one-day timestep.
    pub fn new() -> Self {
        Self {
            dt: Time::from_seconds(DEFAULT_STEP_SECONDS),
            paused: false,
        }
    }

    /// Creates a running clock with a specific timestep, clamped into the
    /// valid range.
    pub fn with_step(dt: Time) -> Self {
        let clamped = dt
            .max(Time::from_seconds(MIN_STEP_SECONDS))
            .min(Time::from_seconds(MAX_STEP_SECONDS));
        Self {
            dt: clamped,
            paused: false,
        }
    }

    /// The current timestep.
    pub fn step_size(&self) -> Time {
        self.dt
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Doubles the timestep, saturating at one simulated year.
    pub fn double_step(&mut self) -> Time {
        self.dt = (self.dt * 2.0).min(Time::from_seconds(MAX_STEP_SECONDS));
        debug!("timestep doubled to {} s", self.dt.to_seconds());
        self.dt
    }

    /// Halves the timestep, saturating at one hour.
    pub fn halve_step(&mut self) -> Time {
        self.dt = (self.dt / 2.0).max(Time::from_seconds(MIN_STEP_SECONDS));
        debug!("timestep halved to {} s", self.dt.to_seconds());
        self.dt
    }

    /// Flips the paused flag and returns the new value.
    ///
    /// While paused, `Simulator::step` is a no-op; synchronization and
    /// trail clearing still work.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!(
            "simulation {}",
            if self.paused { "paused" } else { "resumed" }
        );
        self.paused
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
