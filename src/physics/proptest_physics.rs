//! Property-based tests for the orbit integrator using proptest.
//!
//! These tests verify conservation and symmetry properties across random
//! body configurations.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use proptest::prelude::*;

use super::{Integrator, PhysicsConfig, advance, recenter};
use crate::test_utils::{assertions, fixtures};
use crate::types::{Body, BodyKind};

fn arb_body() -> impl Strategy<Value = Body> {
    (
        0.1f64..100.0,
        (-50.0f64..50.0, -1.0f64..1.0, -50.0f64..50.0),
        (-5.0f64..5.0, -0.5f64..0.5, -5.0f64..5.0),
    )
        .prop_map(|(mass, (px, py, pz), (vx, vy, vz))| {
            fixtures::body(mass, DVec3::new(px, py, pz), DVec3::new(vx, vy, vz))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Stepping plus recentering leaves zero net momentum.
    #[test]
    fn prop_momentum_zero_after_recentering(
        bodies in prop::collection::vec(arb_body(), 1..8),
        steps in 1usize..50,
    ) {
        let mut bodies = bodies;
        let config = PhysicsConfig { gravitational_constant: 1.0, softening: 0.1, max_substep: 0.01 };
        let mut integrator = Integrator::new();

        for _ in 0..steps {
            integrator.step(&mut bodies, 0.01, config.gravitational_constant, config.softening);
            recenter(&mut bodies);
        }

        let momentum = assertions::total_momentum(&bodies);
        let scale = assertions::momentum_scale(&bodies);
        prop_assert!(
            momentum.length() <= 1e-9 * scale,
            "net momentum {:?} (scale {})", momentum, scale
        );
    }

    /// The pairwise pass alone conserves momentum (third law in
    /// acceleration space).
    #[test]
    fn prop_integrator_conserves_momentum(
        bodies in prop::collection::vec(arb_body(), 2..8),
    ) {
        let mut bodies = bodies;
        let initial = assertions::total_momentum(&bodies);
        let mut integrator = Integrator::new();
        for _ in 0..20 {
            integrator.step(&mut bodies, 0.01, 1.0, 0.1);
        }

        let drift = (assertions::total_momentum(&bodies) - initial).length();
        let scale = assertions::momentum_scale(&bodies);
        prop_assert!(drift <= 1e-9 * scale, "momentum drift {} (scale {})", drift, scale);
    }

    /// Mirrored equal-mass pairs stay mirrored.
    #[test]
    fn prop_mirror_symmetry(
        mass in 0.5f64..20.0,
        half_separation in 0.5f64..10.0,
        speed in 0.0f64..3.0,
    ) {
        let mut bodies = fixtures::mirrored_pair(mass, half_separation, speed);
        let config = PhysicsConfig { gravitational_constant: 1.0, softening: 0.05, max_substep: 0.005 };
        let mut integrator = Integrator::new();

        for _ in 0..200 {
            advance(&mut integrator, &mut bodies, 0.005, &config);
            let sum = bodies[0].pos + bodies[1].pos;
            let vel_sum = bodies[0].vel + bodies[1].vel;
            prop_assert!(sum.length() < 1e-9, "positions not mirrored: {:?}", sum);
            prop_assert!(vel_sum.length() < 1e-9, "velocities not mirrored: {:?}", vel_sum);
        }
    }

    /// Trajectories ignore whether a body is a primary or a secondary.
    #[test]
    fn prop_kind_does_not_affect_motion(
        bodies in prop::collection::vec((arb_body(), any::<bool>()), 1..6),
    ) {
        let tagged: Vec<Body> = bodies
            .into_iter()
            .map(|(mut body, primary)| {
                body.kind = if primary { BodyKind::Primary } else { BodyKind::Secondary };
                body
            })
            .collect();
        let mut swapped = tagged.clone();
        for body in &mut swapped {
            body.kind = match body.kind {
                BodyKind::Primary => BodyKind::Secondary,
                BodyKind::Secondary => BodyKind::Primary,
            };
        }
        let mut tagged = tagged;

        let config = PhysicsConfig::default();
        let mut integrator = Integrator::new();
        for _ in 0..30 {
            advance(&mut integrator, &mut tagged, 1.0 / 60.0, &config);
            advance(&mut integrator, &mut swapped, 1.0 / 60.0, &config);
        }

        for (a, b) in tagged.iter().zip(&swapped) {
            prop_assert_eq!(a.pos, b.pos);
            prop_assert_eq!(a.vel, b.vel);
            prop_assert_ne!(a.kind, b.kind);
        }
    }

    /// A lone body keeps its velocity and moves in a straight line.
    #[test]
    fn prop_single_body_coasts(
        body in arb_body(),
        dt in 0.0f64..1.0,
    ) {
        let mut bodies = vec![body.clone()];
        super::step(&mut bodies, dt, 1.0, 0.1);

        prop_assert_eq!(bodies[0].vel, body.vel);
        assertions::assert_vec_close(bodies[0].pos, body.pos + body.vel * dt, 1e-12);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_circular_orbit_one_period() {
        let g = 1.0;
        let central_mass = 1000.0;
        let radius: f64 = 10.0;
        let mut bodies = fixtures::circular_pair(central_mass, 1e-3, radius, g);
        recenter(&mut bodies);
        let start = bodies[1].pos;

        let period = TAU * (radius.powi(3) / (g * (central_mass + 1e-3))).sqrt();
        let steps = 20_000;
        let dt = period / steps as f64;

        let mut integrator = Integrator::new();
        for _ in 0..steps {
            integrator.step(&mut bodies, dt, g, 1e-3);
            recenter(&mut bodies);
        }

        let miss = (bodies[1].pos - start).length();
        assert!(
            miss < 0.05,
            "orbiter should return near its start after one period, missed by {miss}"
        );
    }

    #[test]
    fn test_energy_bounded_over_one_period() {
        let g = 1.0;
        let softening = 1e-3;
        let mut bodies = fixtures::circular_pair(1000.0, 1e-3, 10.0, g);
        let initial = assertions::total_energy(&bodies, g, softening);

        // r³ = 1000 and G·M = 1000, so T = 2π
        let period = TAU;
        let steps = 10_000;
        let dt = period / steps as f64;
        let mut integrator = Integrator::new();
        for _ in 0..steps {
            integrator.step(&mut bodies, dt, g, softening);
            recenter(&mut bodies);
        }

        let drift = ((assertions::total_energy(&bodies, g, softening) - initial) / initial).abs();
        assert!(drift < 1e-3, "energy drift {drift} over one period");
    }

    #[test]
    fn test_substeps_match_manual_steps() {
        let config = PhysicsConfig { gravitational_constant: 2.0, softening: 0.2, max_substep: 0.01 };
        let mut stepped = fixtures::circular_pair(50.0, 1.0, 3.0, 2.0);
        let mut manual = stepped.clone();

        // 3.5 substeps round up to 4
        advance(&mut Integrator::new(), &mut stepped, 0.035, &config);

        let h = 0.035 / 4.0;
        let mut integrator = Integrator::new();
        for _ in 0..4 {
            integrator.step(&mut manual, h, 2.0, 0.2);
            recenter(&mut manual);
        }

        for (a, b) in stepped.iter().zip(&manual) {
            assertions::assert_vec_close(a.pos, b.pos, 1e-12);
            assertions::assert_vec_close(a.vel, b.vel, 1e-12);
        }
    }
}
