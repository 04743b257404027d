use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use units::length::AU_TO_M;
use units::mass::SOLAR_MASS_KG;
use units::Time;

use crate::body::Body;
use crate::forces::{NewtonianGravity, G};
use crate::integrator::{Integrator, SymplecticEuler};
use crate::state::SystemState;

fn sun() -> Body {
    Body::new(
        "Sun",
        SOLAR_MASS_KG,
        30.0,
        Point2::origin(),
        Vector2::zeros(),
        true,
    )
    .unwrap()
}

/// Earth on +x at 1 AU with its near-circular orbital velocity.
fn earth() -> Body {
    Body::new(
        "Earth",
        5.9742e24,
        10.0,
        Point2::new(AU_TO_M, 0.0),
        Vector2::new(0.0, 29_783.0),
        false,
    )
    .unwrap()
}

fn sun_earth() -> SystemState {
    SystemState::new(vec![sun(), earth()]).unwrap()
}

#[test]
fn test_step_advances_elapsed() {
    let mut state = sun_earth();
    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();

    assert_eq!(state.elapsed(), Time::zero());

    integrator.step(&mut state, Time::from_days(1.0), &force);

    assert_relative_eq!(state.elapsed().to_days(), 1.0);
}

#[test]
fn test_anchor_is_never_integrated() {
    let mut state = sun_earth();
    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();

    integrator.integrate(&mut state, Time::from_days(1.0), 10, &force);

    let anchor = state.anchor().unwrap();
    assert_eq!(anchor.position(), Point2::origin());
    assert_eq!(anchor.velocity(), Vector2::zeros());
    assert_eq!(anchor.trail_len(), 0);
}

#[test]
fn test_one_day_step_matches_orbital_acceleration() {
    let mut state = sun_earth();
    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();

    let dt = 86_400.0;
    integrator.step(&mut state, Time::from_seconds(dt), &force);

    let body = state.body("Earth").unwrap();

    // The velocity kick encodes the acceleration at the pre-step position:
    // a = GM/r² ≈ 5.9e-3 m/s² toward the anchor
    let accel = (body.velocity() - Vector2::new(0.0, 29_783.0)) / dt;
    let expected = G * SOLAR_MASS_KG / (AU_TO_M * AU_TO_M);

    assert!(accel.x < 0.0);
    assert_relative_eq!(accel.magnitude(), expected, max_relative = 1e-12);
    assert!(accel.magnitude() > 5.8e-3 && accel.magnitude() < 6.0e-3);

    // The body has moved prograde and slightly inward
    assert!(body.position().x < AU_TO_M);
    assert_relative_eq!(body.position().y, body.velocity().y * dt);
}

#[test]
fn test_forces_come_from_pre_step_snapshot() {
    // Two identical planets placed symmetrically about the anchor. If any
    // body read another's already-updated position mid-step, the symmetry
    // would break.
    let a = Body::new(
        "a",
        5.9742e24,
        10.0,
        Point2::new(AU_TO_M, 0.0),
        Vector2::new(0.0, 29_783.0),
        false,
    )
    .unwrap();
    let b = Body::new(
        "b",
        5.9742e24,
        10.0,
        Point2::new(-AU_TO_M, 0.0),
        Vector2::new(0.0, -29_783.0),
        false,
    )
    .unwrap();
    let mut state = SystemState::new(vec![sun(), a, b]).unwrap();

    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();
    integrator.integrate(&mut state, Time::from_days(1.0), 25, &force);

    let pos_a = state.body("a").unwrap().position();
    let pos_b = state.body("b").unwrap().position();

    assert_relative_eq!(pos_a.x, -pos_b.x, max_relative = 1e-12);
    assert_relative_eq!(pos_a.y, -pos_b.y, max_relative = 1e-12);
}

#[test]
fn test_integration_is_deterministic() {
    let mut first = sun_earth();
    let mut second = sun_earth();

    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();

    integrator.integrate(&mut first, Time::from_days(1.0), 100, &force);
    integrator.integrate(&mut second, Time::from_days(1.0), 100, &force);

    // Bit-for-bit identical replay
    assert_eq!(
        first.body("Earth").unwrap().position(),
        second.body("Earth").unwrap().position()
    );
    assert_eq!(
        first.body("Earth").unwrap().velocity(),
        second.body("Earth").unwrap().velocity()
    );
}

#[test]
fn test_each_step_appends_one_trail_sample() {
    let mut state = sun_earth();
    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();

    integrator.integrate(&mut state, Time::from_days(1.0), 7, &force);

    assert_eq!(state.body("Earth").unwrap().trail_len(), 7);
}

#[test]
fn test_step_records_anchor_distance() {
    let mut state = sun_earth();
    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();

    integrator.step(&mut state, Time::from_days(1.0), &force);

    let distance = state.body("Earth").unwrap().anchor_distance_m();
    // Recorded from the pre-step snapshot: exactly 1 AU
    assert_relative_eq!(distance, AU_TO_M);
}

#[test]
fn test_orbit_stays_bounded_over_a_year() {
    let mut state = sun_earth();
    let integrator = SymplecticEuler::new();
    let force = NewtonianGravity::new();

    integrator.integrate(&mut state, Time::from_days(1.0), 365, &force);

    // Semi-implicit Euler holds a near-circular orbit to a few percent at
    // a one-day step
    let r = state.body("Earth").unwrap().orbital_radius_au();
    assert!(r > 0.9 && r < 1.1, "orbital radius drifted to {r} AU");
}
