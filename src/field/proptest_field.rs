//! Property-based tests for the field deformation engine.

use bevy::math::{DVec2, DVec3};
use proptest::prelude::*;

use super::{FieldConfig, GridSpec, HeightField, deform, potential_at};
use crate::types::GravitySource;

fn arb_source() -> impl Strategy<Value = GravitySource> {
    (-8.0f64..8.0, 0.0f64..1.0, -8.0f64..8.0, 0.1f64..80.0).prop_map(|(x, y, z, mass)| {
        GravitySource {
            pos: DVec3::new(x, y, z),
            mass,
        }
    })
}

fn arb_config() -> impl Strategy<Value = FieldConfig> {
    (0.01f64..2.0, 0.05f64..2.0).prop_map(|(g, softening)| FieldConfig {
        gravitational_constant: g,
        softening,
        parallel: false,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Deforming with two sources equals the sum of each alone.
    #[test]
    fn prop_superposition(
        a in arb_source(),
        b in arb_source(),
        config in arb_config(),
    ) {
        let spec = GridSpec::centered(12, 0.8);
        let mut both = HeightField::new(spec).unwrap();
        let mut only_a = both.clone();
        let mut only_b = both.clone();

        deform(&mut both, &[a, b], &config);
        deform(&mut only_a, &[a], &config);
        deform(&mut only_b, &[b], &config);

        for i in 0..both.vertex_count() {
            let sum = only_a.heights()[i] + only_b.heights()[i];
            let h = both.heights()[i];
            prop_assert!(
                (h - sum).abs() <= 1e-12 * sum.abs().max(1.0),
                "vertex {}: {} != {}", i, h, sum
            );
        }
    }

    /// A single well gets shallower with horizontal distance.
    #[test]
    fn prop_monotonic_decay(
        src in arb_source(),
        config in arb_config(),
        angle in 0.0f64..std::f64::consts::TAU,
        near in 0.0f64..10.0,
        gap in 0.01f64..10.0,
    ) {
        let center = DVec2::new(src.pos.x, src.pos.z);
        let dir = DVec2::from_angle(angle);
        let h_near = potential_at(center + dir * near, &[src], &config);
        let h_far = potential_at(center + dir * (near + gap), &[src], &config);

        prop_assert!(h_near < 0.0);
        prop_assert!(h_far.abs() < h_near.abs(), "{} !< {}", h_far.abs(), h_near.abs());
    }

    /// Deformation never moves vertices horizontally.
    #[test]
    fn prop_topology_fixed(
        sources in prop::collection::vec(arb_source(), 0..5),
        config in arb_config(),
    ) {
        let mut field = HeightField::new(GridSpec::centered(9, 0.5)).unwrap();
        let before = field.xz().to_vec();
        deform(&mut field, &sources, &config);

        prop_assert_eq!(field.xz(), &before[..]);
        prop_assert!(field.heights().iter().all(|h| h.is_finite() && *h <= 0.0));
    }
}
