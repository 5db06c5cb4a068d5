//! Gravity Well - N-body gravity visualizer
//!
//! Bodies orbit each other while a grid beneath them sags into the
//! potential wells they create. Pass a scenario id as the first argument
//! to pick a preset.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use gravity_well::SimulationPlugin;
use gravity_well::camera::CameraPlugin;
use gravity_well::input::InputPlugin;
use gravity_well::render::RenderPlugin;
use gravity_well::scenarios::RequestedScenario;
use gravity_well::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity Well".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Resolved against the presets by ScenarioPlugin at startup
        .insert_resource(RequestedScenario(std::env::args().nth(1)))
        .add_plugins(SimulationPlugin)
        .add_plugins((CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
