//! Preset scenario definitions.
//!
//! Units are render units and simulated seconds, with G = 1 for the orbits.

use std::f64::consts::PI;

use crate::field::{FieldConfig, GridSpec};
use crate::physics::PhysicsConfig;
use crate::types::BodyKind;

use super::{BodySpec, OrbitalSpeed, Scenario};

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[LONE_PLANET, STAR_SYSTEM, BINARY_STAR];

const ORBITS: PhysicsConfig = PhysicsConfig {
    gravitational_constant: 1.0,
    softening: 0.1,
    max_substep: 1.0 / 240.0,
};

const WELLS: FieldConfig = FieldConfig {
    gravitational_constant: 0.1,
    softening: 0.5,
    parallel: false,
};

const STAR: BodySpec = BodySpec {
    name: "Sun",
    kind: BodyKind::Primary,
    mass: 50.0,
    radius: 0.8,
    rotation_speed: 0.3,
    color: [1.0, 0.85, 0.4],
    ..BodySpec::BASE
};

/// Scenario 1: Lone Planet
///
/// One planet on a hand-tuned orbit around a light star. The speed is a
/// fixed constant rather than the circular speed, so the orbit is slightly
/// eccentric.
pub static LONE_PLANET: Scenario = Scenario {
    id: "lone_planet",
    name: "Lone Planet",
    description: "A single planet on a hand-tuned, slightly eccentric orbit.",
    bodies: &[
        BodySpec {
            mass: 20.0,
            radius: 0.6,
            ..STAR
        },
        BodySpec {
            name: "Earth",
            mass: 1.0,
            distance: 5.0,
            orbit_angle: PI,
            speed: OrbitalSpeed::Fixed(1.8),
            radius: 0.5,
            rotation_speed: 2.0,
            color: [0.3, 0.2, 0.2],
            ..BodySpec::BASE
        },
    ],
    grid: GridSpec::centered(50, 0.4),
    physics: ORBITS,
    field: WELLS,
    time_scale: 1.0,
    start_paused: false,
};

/// Scenario 2: Star System (default)
///
/// A star with three planets launched at circular speed.
pub static STAR_SYSTEM: Scenario = Scenario {
    id: "star_system",
    name: "Star System",
    description: "A star with three planets on near-circular orbits.",
    bodies: &[
        STAR,
        BodySpec {
            name: "Ember",
            mass: 0.5,
            distance: 3.0,
            orbit_angle: 0.0,
            speed: OrbitalSpeed::Circular,
            radius: 0.25,
            rotation_speed: 1.5,
            color: [0.8, 0.4, 0.2],
            ..BodySpec::BASE
        },
        BodySpec {
            name: "Terra",
            mass: 1.0,
            distance: 5.5,
            orbit_angle: 2.0 * PI / 3.0,
            speed: OrbitalSpeed::Circular,
            radius: 0.4,
            rotation_speed: 2.0,
            color: [0.2, 0.5, 0.8],
            ..BodySpec::BASE
        },
        BodySpec {
            name: "Glacier",
            mass: 0.8,
            distance: 8.0,
            orbit_angle: 4.0 * PI / 3.0,
            speed: OrbitalSpeed::Circular,
            radius: 0.35,
            rotation_speed: 1.0,
            color: [0.6, 0.8, 0.9],
            ..BodySpec::BASE
        },
    ],
    grid: GridSpec::centered(80, 0.25),
    physics: ORBITS,
    field: FieldConfig {
        parallel: true,
        ..WELLS
    },
    time_scale: 1.0,
    start_paused: false,
};

/// Scenario 3: Binary Star
///
/// Two equal stars on a mutual circular orbit with a circumbinary planet.
/// Each star moves at `sqrt(G·m·r) / d` for separation `d = 2r`.
pub static BINARY_STAR: Scenario = Scenario {
    id: "binary_star",
    name: "Binary Star",
    description: "Two equal stars in mutual orbit with a distant planet.",
    bodies: &[
        BodySpec {
            name: "Alpha",
            mass: 20.0,
            distance: 2.0,
            orbit_angle: 0.0,
            speed: OrbitalSpeed::Fixed(1.581_138_830_084_189_8),
            radius: 0.6,
            color: [1.0, 0.7, 0.4],
            ..STAR
        },
        BodySpec {
            name: "Beta",
            mass: 20.0,
            distance: 2.0,
            orbit_angle: PI,
            speed: OrbitalSpeed::Fixed(1.581_138_830_084_189_8),
            radius: 0.6,
            color: [0.6, 0.7, 1.0],
            ..STAR
        },
        BodySpec {
            name: "Wanderer",
            mass: 0.5,
            distance: 9.0,
            orbit_angle: PI / 2.0,
            speed: OrbitalSpeed::Circular,
            radius: 0.3,
            rotation_speed: 1.2,
            color: [0.5, 0.8, 0.5],
            ..BodySpec::BASE
        },
    ],
    grid: GridSpec::centered(60, 0.4),
    physics: ORBITS,
    field: WELLS,
    time_scale: 1.0,
    start_paused: false,
};
