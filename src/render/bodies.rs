//! Body rendering and spawning.
//!
//! Handles the visual representation of stars and planets. Display
//! attributes come from the scenario's body specs, matched by index.

use bevy::prelude::*;

use crate::registry::BodyRegistry;
use crate::scenarios::{ActiveScenario, BodySpec};
use crate::types::BodyKind;

/// Component linking a sphere to its body in the registry.
#[derive(Component, Debug)]
pub struct BodyVisual {
    /// Index into [`BodyRegistry`]
    pub index: usize,
    /// Spin in radians per simulated second
    pub rotation_speed: f32,
}

/// Sphere base color for a body spec.
pub fn body_color(spec: &BodySpec) -> Color {
    let [r, g, b] = spec.color;
    Color::srgb(r, g, b)
}

/// Material for a body; primaries glow.
fn body_material(spec: &BodySpec) -> StandardMaterial {
    let color = body_color(spec);
    StandardMaterial {
        base_color: color,
        emissive: if spec.kind == BodyKind::Primary {
            color.to_linear() * 4.0
        } else {
            LinearRgba::BLACK
        },
        ..default()
    }
}

/// Despawn old body spheres and spawn one per body of the active scenario.
pub fn rebuild_body_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<BodyVisual>>,
    active: Res<ActiveScenario>,
    registry: Res<BodyRegistry>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    for (index, spec) in active.0.bodies.iter().enumerate() {
        let pos = registry
            .get(index)
            .map(|b| b.pos.as_vec3())
            .unwrap_or_default();

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(spec.radius))),
            MeshMaterial3d(materials.add(body_material(spec))),
            Transform::from_translation(pos),
            BodyVisual {
                index,
                rotation_speed: spec.rotation_speed,
            },
            Name::new(spec.name),
        ));

        if spec.kind == BodyKind::Primary {
            entity.insert(PointLight {
                color: body_color(spec),
                intensity: 2_000_000.0,
                range: 100.0,
                ..default()
            });
        }
    }

    info!("Spawned {} body visuals", active.0.bodies.len());
}
