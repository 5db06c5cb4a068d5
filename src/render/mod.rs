//! Rendering systems for the gravity well visualizer.
//!
//! Bodies are drawn as spheres, the deformed grid as gizmo line strips.
//! Nothing here feeds back into the simulation.

pub mod bodies;
pub mod grid;
mod sync;

use bevy::prelude::*;

use crate::scenarios::ActiveScenario;
use crate::types::SimulationSet;

use self::bodies::rebuild_body_visuals;
use self::grid::draw_grid;
use self::sync::sync_body_transforms;

pub use self::bodies::BodyVisual;
pub use self::grid::GridStyle;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<GridStyle>()
            // 1. rebuild_body_visuals - respawn spheres when a scenario loads
            // 2. sync_body_transforms - place spheres at physics positions
            // 3. draw_grid - line strips over the fresh heights
            .add_systems(
                Update,
                (
                    rebuild_body_visuals.run_if(resource_changed::<ActiveScenario>),
                    sync_body_transforms,
                    draw_grid,
                )
                    .chain()
                    .in_set(SimulationSet::Render),
            );
    }
}
