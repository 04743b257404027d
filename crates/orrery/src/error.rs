//! Error types for snapshot validation and synchronization.
//!
//! All failures here are configuration errors raised at construction or
//! sync time. They fail fast and leave any prior valid state untouched;
//! the surrounding CLI/UI decides how to report them. Runtime numerical
//! degeneracies (coincident bodies) are not errors and are handled locally
//! by the force model.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    #[error("ephemeris snapshot contains no bodies")]
    EmptySnapshot,

    #[error("ephemeris snapshot has no anchor body")]
    MissingAnchor,

    #[error("ephemeris snapshot flags more than one anchor: {first} and {second}")]
    MultipleAnchors { first: String, second: String },

    #[error("body '{name}' has non-positive mass {mass_kg} kg")]
    NonPositiveMass { name: String, mass_kg: f64 },

    #[error("duplicate body name in snapshot: {name}")]
    DuplicateName { name: String },
}
