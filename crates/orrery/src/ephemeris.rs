//! Inbound ephemeris boundary.
//!
//! Snapshot types as supplied by an external reference feed, plus the
//! validation and unit conversion that turn feed records into core SI
//! state. The integrator never sees feed units: AU→meters and km/s→m/s
//! conversion happens here, nowhere else.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use units::{Length, Velocity};

use crate::error::SyncError;

/// One body's state as reported by the reference feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemerisRecord {
    pub name: String,
    /// Position in astronomical units
    pub x_au: f64,
    pub y_au: f64,
    /// Velocity in km/s
    pub vx_kms: f64,
    pub vy_kms: f64,
    /// Mass in kilograms
    pub mass_kg: f64,
    /// True for the central mass
    #[serde(default)]
    pub anchor: bool,
    /// Display size token, passed through for renderers
    #[serde(default)]
    pub radius: f64,
}

impl EphemerisRecord {
    /// Position converted from AU to meters.
    pub fn position_m(&self) -> Point2<f64> {
        Point2::new(
            Length::from_au(self.x_au).to_m(),
            Length::from_au(self.y_au).to_m(),
        )
    }

    /// Velocity converted from km/s to m/s.
    ///
    /// The y component is negated: feed velocities are given in a y-up
    /// frame while the simulation plane follows the y-down plotting
    /// convention of its consumers.
    pub fn velocity_ms(&self) -> Vector2<f64> {
        Vector2::new(
            Velocity::from_kms(self.vx_kms).to_ms(),
            -Velocity::from_kms(self.vy_kms).to_ms(),
        )
    }
}

/// An externally supplied set of body states representing ground truth at
/// a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    /// Feed identifier, e.g. the upstream service name
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub bodies: Vec<EphemerisRecord>,
}

impl EphemerisSnapshot {
    /// Checks the configuration invariants without building any state:
    /// at least one body, exactly one anchor, unique names, positive
    /// masses.
    ///
    /// Sync paths call this before touching existing state so a rejected
    /// snapshot leaves the simulation exactly as it was.
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.bodies.is_empty() {
            return Err(SyncError::EmptySnapshot);
        }

        let mut anchor: Option<&str> = None;
        let mut seen = HashSet::new();
        for record in &self.bodies {
            if record.mass_kg <= 0.0 {
                return Err(SyncError::NonPositiveMass {
                    name: record.name.clone(),
                    mass_kg: record.mass_kg,
                });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(SyncError::DuplicateName {
                    name: record.name.clone(),
                });
            }
            if record.anchor {
                if let Some(first) = anchor {
                    return Err(SyncError::MultipleAnchors {
                        first: first.to_string(),
                        second: record.name.clone(),
                    });
                }
                anchor = Some(&record.name);
            }
        }

        if anchor.is_none() {
            return Err(SyncError::MissingAnchor);
        }
        Ok(())
    }

    /// Name-keyed record lookup.
    pub fn record(&self, name: &str) -> Option<&EphemerisRecord> {
        self.bodies.iter().find(|r| r.name == name)
    }
}
