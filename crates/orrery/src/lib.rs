//! Digital-twin validation core for planetary N-body simulation.
//!
//! The crate advances a simulated planetary model forward in time under
//! Newtonian gravity while holding, on the same bodies, a reference
//! trajectory supplied by an external ephemeris feed. Every step it
//! quantifies how far the simulation has drifted from the reference and
//! condenses that into per-body and aggregate precision scores.
//!
//! Rendering, input handling and the transport used to fetch ephemeris data
//! are external collaborators; this crate owns only the physics, the
//! deviation metrics and the synchronization boundary.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use orrery::{EphemerisRecord, EphemerisSnapshot, Simulator};
//!
//! let snapshot = EphemerisSnapshot {
//!     source: "test fixture".into(),
//!     timestamp: Utc::now(),
//!     bodies: vec![
//!         EphemerisRecord {
//!             name: "Sun".into(),
//!             x_au: 0.0,
//!             y_au: 0.0,
//!             vx_kms: 0.0,
//!             vy_kms: 0.0,
//!             mass_kg: 1.98892e30,
//!             anchor: true,
//!             radius: 30.0,
//!         },
//!         EphemerisRecord {
//!             name: "Earth".into(),
//!             x_au: 1.0,
//!             y_au: 0.0,
//!             vx_kms: 0.0,
//!             vy_kms: 29.783,
//!             mass_kg: 5.9742e24,
//!             anchor: false,
//!             radius: 10.0,
//!         },
//!     ],
//! };
//!
//! let mut sim = Simulator::from_snapshot(&snapshot).unwrap();
//! sim.step();
//!
//! let status = sim.status();
//! assert_eq!(status.body_count, 2);
//! assert!(status.aggregate_precision <= 100.0);
//! ```

pub mod body;
pub mod clock;
pub mod deviation;
pub mod ephemeris;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod simulator;
pub mod state;

#[cfg(test)]
mod deviation_test;
#[cfg(test)]
mod integrator_test;

pub use body::{Body, TRAIL_READ_CAP};
pub use clock::SimulationClock;
pub use deviation::{DeviationTracker, Health};
pub use ephemeris::{EphemerisRecord, EphemerisSnapshot};
pub use error::SyncError;
pub use forces::{ForceModel, NewtonianGravity, G};
pub use integrator::{Integrator, SymplecticEuler};
pub use simulator::{BodyStatus, Simulator, StatusReport};
pub use state::SystemState;
