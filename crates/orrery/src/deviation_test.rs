use approx::assert_relative_eq;
use chrono::Utc;
use nalgebra::{Point2, Vector2};
use units::length::AU_TO_M;
use units::mass::SOLAR_MASS_KG;

use crate::body::Body;
use crate::deviation::{precision_from_deviation, DeviationTracker, Health};

fn planet_at(x: f64, y: f64) -> Body {
    Body::new(
        "planet",
        5.9742e24,
        10.0,
        Point2::new(x, y),
        Vector2::zeros(),
        false,
    )
    .unwrap()
}

#[test]
fn test_recompute_is_euclidean_distance() {
    let mut body = planet_at(0.0, 0.0);
    body.sync_reference(Point2::new(3.0e6, 4.0e6), Utc::now());

    let tracker = DeviationTracker::new();
    tracker.recompute(&mut body);

    assert_relative_eq!(body.deviation_m(), 5.0e6);
}

#[test]
fn test_recompute_is_idempotent() {
    let mut body = planet_at(AU_TO_M, 0.0);
    body.sync_reference(Point2::new(AU_TO_M, 1.0e9), Utc::now());

    let tracker = DeviationTracker::new();
    tracker.recompute(&mut body);
    let first = body.deviation_m();
    tracker.recompute(&mut body);

    assert_eq!(body.deviation_m(), first);
}

#[test]
fn test_anchor_never_deviates() {
    let mut anchor = Body::new(
        "Sun",
        SOLAR_MASS_KG,
        30.0,
        Point2::origin(),
        Vector2::zeros(),
        true,
    )
    .unwrap();
    anchor.sync_reference(Point2::new(1.0e9, 0.0), Utc::now());

    let tracker = DeviationTracker::new();
    tracker.recompute(&mut anchor);

    assert_eq!(anchor.deviation_m(), 0.0);
}

#[test]
fn test_precision_formula() {
    assert_eq!(precision_from_deviation(0.0), 100.0);

    // 0.05 AU costs 50 points
    assert_relative_eq!(precision_from_deviation(0.05 * AU_TO_M), 50.0, epsilon = 1e-9);

    // 0.1 AU exhausts the scale
    assert!(precision_from_deviation(0.1 * AU_TO_M) < 1e-9);

    // Beyond that the score clamps at 0 instead of going negative
    assert_eq!(precision_from_deviation(2.0 * AU_TO_M), 0.0);
}

#[test]
fn test_aggregate_excludes_anchor() {
    let anchor = Body::new(
        "Sun",
        SOLAR_MASS_KG,
        30.0,
        Point2::origin(),
        Vector2::zeros(),
        true,
    )
    .unwrap();

    let mut a = planet_at(AU_TO_M, 0.0);
    a.set_deviation(0.02 * AU_TO_M); // precision 80
    let mut b = planet_at(2.0 * AU_TO_M, 0.0);
    b.set_deviation(0.06 * AU_TO_M); // precision 40

    let tracker = DeviationTracker::new();
    let bodies = vec![anchor, a, b];

    assert_relative_eq!(tracker.aggregate_precision(&bodies), 60.0, epsilon = 1e-9);
}

#[test]
fn test_aggregate_of_anchor_only_system_is_perfect() {
    let anchor = Body::new(
        "Sun",
        SOLAR_MASS_KG,
        30.0,
        Point2::origin(),
        Vector2::zeros(),
        true,
    )
    .unwrap();

    let tracker = DeviationTracker::new();
    assert_eq!(tracker.aggregate_precision(std::iter::once(&anchor)), 100.0);
}

#[test]
fn test_health_thresholds() {
    let tracker = DeviationTracker::new();
    let mut body = planet_at(AU_TO_M, 0.0);

    body.set_deviation(0.005 * AU_TO_M);
    assert_eq!(tracker.health(&body), Health::Nominal);

    body.set_deviation(0.05 * AU_TO_M);
    assert_eq!(tracker.health(&body), Health::Drifting);

    body.set_deviation(0.2 * AU_TO_M);
    assert_eq!(tracker.health(&body), Health::Diverged);
}
