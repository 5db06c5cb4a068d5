//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::math::DVec3;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use gravity_well::SimulationPlugin;
use gravity_well::types::{Body, BodyKind};

/// Central mass at rest plus an orbiter on +x moving in +z at circular speed.
pub fn circular_pair(central_mass: f64, orbiter_mass: f64, radius: f64, g: f64) -> Vec<Body> {
    let speed = (g * central_mass / radius).sqrt();
    vec![
        Body::new(central_mass, DVec3::ZERO, DVec3::ZERO, BodyKind::Primary).unwrap(),
        Body::new(
            orbiter_mass,
            DVec3::new(radius, 0.0, 0.0),
            DVec3::new(0.0, 0.0, speed),
            BodyKind::Secondary,
        )
        .unwrap(),
    ]
}

/// Total linear momentum `Σ m·v`.
pub fn total_momentum(bodies: &[Body]) -> DVec3 {
    bodies.iter().map(Body::momentum).sum()
}

/// Mass-weighted mean position.
pub fn center_of_mass(bodies: &[Body]) -> DVec3 {
    let total: f64 = bodies.iter().map(Body::mass).sum();
    bodies.iter().map(|b| b.pos * b.mass()).sum::<DVec3>() / total
}

/// Orbital period of a light body on a circular orbit.
pub fn circular_period(central_mass: f64, radius: f64, g: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (radius.powi(3) / (g * central_mass)).sqrt()
}

/// Headless app running the simulation plugins with a fixed 1/60 s frame.
pub fn simulation_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .add_plugins(SimulationPlugin);
    app
}
