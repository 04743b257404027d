//! Deviation and precision metrics.
//!
//! Quantifies how far each body's simulated position has drifted from its
//! reference position and condenses that into a normalized precision score.

use serde::Serialize;
use units::length::AU_TO_M;

use crate::body::Body;

/// Deviation below which a body is graded [`Health::Nominal`], in AU.
const NOMINAL_DEVIATION_AU: f64 = 0.01;
/// Deviation below which a body is graded [`Health::Drifting`], in AU.
const DRIFTING_DEVIATION_AU: f64 = 0.1;

/// Coarse health grade derived from a body's deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Health {
    Nominal,
    Drifting,
    Diverged,
}

/// Recomputes per-body deviation and derives precision scores.
///
/// The precision score is `max(0, 100 - deviation_au * 1000)` percent: a
/// heuristic that encodes "acceptable" drift at the AU scale. It is a
/// UI-facing health signal, not an error bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviationTracker;

impl DeviationTracker {
    pub fn new() -> Self {
        Self
    }

    /// Recomputes the body's cached deviation from its current simulated
    /// and reference positions. The anchor never deviates and stays at 0.
    ///
    /// Idempotent: recomputing without an intervening state change yields
    /// the same value.
    pub fn recompute(&self, body: &mut Body) {
        if body.is_anchor() {
            return;
        }
        let deviation = (body.position() - body.reference_position()).magnitude();
        body.set_deviation(deviation);
    }

    /// Normalized precision percentage for one body, clamped at 0.
    pub fn precision(&self, body: &Body) -> f64 {
        precision_from_deviation(body.deviation_m())
    }

    /// Arithmetic mean of per-body precision over the non-anchor bodies.
    ///
    /// An anchor-only system has nothing to validate and reports 100.
    pub fn aggregate_precision<'a>(&self, bodies: impl IntoIterator<Item = &'a Body>) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for body in bodies {
            if body.is_anchor() {
                continue;
            }
            sum += self.precision(body);
            count += 1;
        }
        if count == 0 {
            100.0
        } else {
            sum / count as f64
        }
    }

    /// Grades a body's deviation against the nominal/drifting thresholds.
    pub fn health(&self, body: &Body) -> Health {
        let deviation_au = body.deviation_m() / AU_TO_M;
        if deviation_au < NOMINAL_DEVIATION_AU {
            Health::Nominal
        } else if deviation_au < DRIFTING_DEVIATION_AU {
            Health::Drifting
        } else {
            Health::Diverged
        }
    }
}

/// Precision score for a deviation given in meters.
///
/// # Examples
///
/// ```
/// use orrery::deviation::precision_from_deviation;
///
/// // No drift: perfect score
/// assert_eq!(precision_from_deviation(0.0), 100.0);
///
/// // 0.05 AU of drift costs 50 points
/// let p = precision_from_deviation(0.05 * 1.496e11);
/// assert!((p - 50.0).abs() < 1e-9);
///
/// // The score saturates at 0 rather than going negative
/// assert_eq!(precision_from_deviation(1.496e11), 0.0);
/// ```
pub fn precision_from_deviation(deviation_m: f64) -> f64 {
    let deviation_au = deviation_m / AU_TO_M;
    (100.0 - deviation_au * 1000.0).max(0.0)
}
