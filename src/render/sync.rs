//! Position synchronization between physics and rendering.
//!
//! Converts f64 physics positions to f32 transforms and applies the
//! cosmetic spin of each body.

use bevy::prelude::*;

use crate::registry::BodyRegistry;
use crate::render::bodies::BodyVisual;
use crate::types::SimulationClock;

/// Sync body sphere transforms from the registry.
pub fn sync_body_transforms(
    mut query: Query<(&mut Transform, &BodyVisual)>,
    registry: Res<BodyRegistry>,
    clock: Res<SimulationClock>,
) {
    for (mut transform, visual) in query.iter_mut() {
        let Some(body) = registry.get(visual.index) else {
            continue;
        };

        transform.translation = body.pos.as_vec3();
        transform.rotation = Quat::from_rotation_y(clock.elapsed as f32 * visual.rotation_speed);
    }
}
