//! Digital-twin validation demo: a year of the solar system
//!
//! Seeds the simulation from an ephemeris-style snapshot, integrates one
//! simulated day per step, and reports how far the model drifts from the
//! (frozen) reference before re-synchronizing.
//!
//! Run with: cargo run --package orrery --example solar_twin

use chrono::Utc;
use orrery::{EphemerisRecord, EphemerisSnapshot, Simulator};
use units::Mass;

fn planet(
    name: &str,
    x_au: f64,
    y_au: f64,
    vx_kms: f64,
    vy_kms: f64,
    mass_kg: f64,
    radius: f64,
    anchor: bool,
) -> EphemerisRecord {
    EphemerisRecord {
        name: name.into(),
        x_au,
        y_au,
        vx_kms,
        vy_kms,
        mass_kg,
        anchor,
        radius,
    }
}

fn main() {
    env_logger::init();

    let snapshot = EphemerisSnapshot {
        source: "demo ephemeris".into(),
        timestamp: Utc::now(),
        bodies: vec![
            planet("Sun", 0.0, 0.0, 0.0, 0.0, 1.98892e30, 30.0, true),
            planet("Mercury", 0.387, 0.0, 0.0, 47.4, 3.30e23, 5.0, false),
            planet("Venus", -0.723, 0.0, 0.0, -35.02, 4.8685e24, 9.0, false),
            planet("Earth", 0.0, 1.0, 29.783, 0.0, 5.9742e24, 10.0, false),
            planet("Mars", 1.524, 0.0, 0.0, 24.077, 6.39e23, 7.0, false),
            planet("Jupiter", 0.0, -5.2, -13.07, 0.0, 1.898e27, 20.0, false),
            planet("Saturn", 9.5, 0.0, 0.0, 9.69, 5.683e26, 18.0, false),
        ],
    };

    let mut sim = Simulator::from_snapshot(&snapshot).expect("well-formed snapshot");

    println!("Digital Twin: Solar System vs Reference Ephemeris\n");
    println!("{}", "=".repeat(64));
    println!(
        "{} bodies, {} s per step",
        sim.bodies().len(),
        sim.clock().step_size().to_seconds()
    );
    for body in sim.bodies() {
        println!(
            "  {:<8} {:>12.2} M⊕{}",
            body.name(),
            Mass::from_kg(body.mass_kg()).to_earth_masses(),
            if body.is_anchor() { "  (anchor)" } else { "" }
        );
    }
    println!();

    // One simulated year at a day per step, reporting monthly
    for day in 1..=365 {
        sim.step();

        if day % 30 == 0 {
            println!(
                "day {:>3} | aggregate precision {:6.2}%",
                day,
                sim.aggregate_precision()
            );
            for body in sim.bodies().iter().filter(|b| !b.is_anchor()) {
                println!(
                    "    {:<8} r = {:>6.3} AU  v = {:>6.2} km/s  deviation = {:>11.0} km",
                    body.name(),
                    body.orbital_radius_au(),
                    body.speed_kms(),
                    body.deviation_km(),
                );
            }
        }
    }

    println!("\nRe-synchronizing against the reference feed...");
    sim.sync_hard(&snapshot).expect("same snapshot still valid");
    println!(
        "aggregate precision after hard sync: {:.2}%",
        sim.aggregate_precision()
    );

    let status = sim.status();
    println!(
        "\nfinal status: {} bodies, {:.0} simulated days elapsed, paused: {}",
        status.body_count, status.elapsed_days, status.paused
    );
}
