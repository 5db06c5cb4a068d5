//! Gravity Well - N-body gravity visualizer
//!
//! A library crate providing the simulation core (bodies, integrator,
//! frame stabilizer, deformable grid) and the Bevy plugins that drive it.

pub mod camera;
pub mod error;
pub mod field;
pub mod input;
pub mod physics;
pub mod registry;
pub mod render;
pub mod scenarios;
pub mod time;
pub mod types;
pub mod ui;


use bevy::prelude::*;

/// Everything needed to run the simulation without a window.
///
/// Rendering, camera, input and UI are added separately by the binary.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            scenarios::ScenarioPlugin,
            time::TimePlugin,
            physics::PhysicsPlugin,
            field::FieldPlugin,
        ));
    }
}
