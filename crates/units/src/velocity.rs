use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::length::Length;
use crate::time::Time;

/// Kilometers per second to meters per second
pub const KMS_TO_MS: f64 = 1.0e3;

/// A physical velocity quantity using f64 precision.
///
/// The `Velocity` struct represents velocity with meters per second as the
/// base unit. Ephemeris feeds report velocities in km/s, so that conversion
/// lives here rather than in the integrator.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// // Earth's orbital velocity
/// let v = Velocity::from_kms(29.783);
///
/// assert_eq!(v.to_ms(), 29_783.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: meters per second

impl Velocity {
    /// Creates a zero velocity value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Velocity` from a value in meters per second.
    pub fn from_ms(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Velocity` from a value in kilometers per second.
    pub fn from_kms(value: f64) -> Self {
        Self(value * KMS_TO_MS)
    }

    /// Returns the velocity in meters per second.
    pub fn to_ms(&self) -> f64 {
        self.0
    }

    /// Converts the velocity to kilometers per second.
    pub fn to_kms(&self) -> f64 {
        self.0 / KMS_TO_MS
    }

    /// Distance covered at this velocity over `t`.
    pub fn over(self, t: Time) -> Length {
        Length::from_m(self.0 * t.to_seconds())
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}

/// Division of Velocity by Velocity returns a dimensionless ratio
impl Div for Velocity {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Velocity (commutative multiplication)
impl Mul<Velocity> for f64 {
    type Output = Velocity;

    fn mul(self, rhs: Velocity) -> Velocity {
        rhs * self
    }
}
