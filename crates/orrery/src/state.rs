//! Complete state of the twin simulation at a given time.

use units::Time;

use crate::body::Body;
use crate::ephemeris::EphemerisSnapshot;
use crate::error::SyncError;

/// The validated, ordered body collection plus elapsed simulation time.
///
/// A `SystemState` can only be built from a body set that satisfies the
/// configuration invariants: at least one body, exactly one anchor, unique
/// names, positive masses (the last enforced by [`Body::new`]).
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Simulated time elapsed since construction
    elapsed: Time,
    bodies: Vec<Body>,
}

impl SystemState {
    /// Builds a state from already-constructed bodies, enforcing the
    /// anchor and uniqueness invariants.
    pub fn new(bodies: Vec<Body>) -> Result<Self, SyncError> {
        if bodies.is_empty() {
            return Err(SyncError::EmptySnapshot);
        }

        let mut anchor: Option<&Body> = None;
        for body in &bodies {
            if !body.is_anchor() {
                continue;
            }
            if let Some(first) = anchor {
                return Err(SyncError::MultipleAnchors {
                    first: first.name().to_string(),
                    second: body.name().to_string(),
                });
            }
            anchor = Some(body);
        }
        if anchor.is_none() {
            return Err(SyncError::MissingAnchor);
        }

        for (i, body) in bodies.iter().enumerate() {
            if bodies[..i].iter().any(|b| b.name() == body.name()) {
                return Err(SyncError::DuplicateName {
                    name: body.name().to_string(),
                });
            }
        }

        Ok(Self {
            elapsed: Time::zero(),
            bodies,
        })
    }

    /// Builds a state directly from an ephemeris snapshot (hard seed:
    /// reference and simulated slices both come from the feed).
    pub fn from_snapshot(snapshot: &EphemerisSnapshot) -> Result<Self, SyncError> {
        snapshot.validate()?;

        let mut bodies = Vec::with_capacity(snapshot.bodies.len());
        for record in &snapshot.bodies {
            let mut body = Body::new(
                record.name.clone(),
                record.mass_kg,
                record.radius,
                record.position_m(),
                record.velocity_ms(),
                record.anchor,
            )?;
            body.sync_reference(record.position_m(), snapshot.timestamp);
            bodies.push(body);
        }

        Self::new(bodies)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Name-keyed lookup.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// The central mass.
    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_anchor())
    }

    /// Iterator over the non-anchor bodies.
    pub fn planets(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| !b.is_anchor())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name() == name)
    }

    pub(crate) fn retain<F: FnMut(&Body) -> bool>(&mut self, keep: F) {
        self.bodies.retain(keep);
    }

    pub(crate) fn push_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub(crate) fn advance_elapsed(&mut self, dt: Time) {
        self.elapsed = self.elapsed + dt;
    }
}
