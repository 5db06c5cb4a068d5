//! Keyboard shortcuts for simulation control.
//!
//! Camera movement lives in [`crate::camera`]. G toggles the grid.

use bevy::prelude::*;

use crate::render::GridStyle;
use crate::scenarios::{ActiveScenario, LoadScenario, SCENARIOS};
use crate::types::SimulationClock;

/// Slowest selectable time scale.
pub const MIN_TIME_SCALE: f64 = 0.125;

/// Fastest selectable time scale.
pub const MAX_TIME_SCALE: f64 = 16.0;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (keyboard_shortcuts, toggle_grid));
    }
}

/// Halve or double `scale`, clamped to the selectable range.
pub fn step_time_scale(scale: f64, faster: bool) -> f64 {
    let next = if faster { scale * 2.0 } else { scale * 0.5 };
    next.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    active: Res<ActiveScenario>,
    mut load_events: MessageWriter<LoadScenario>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    // [ and ] adjust simulation speed
    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.scale = step_time_scale(clock.scale, false);
        info!("Time scale: {}x", clock.scale);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        clock.scale = step_time_scale(clock.scale, true);
        info!("Time scale: {}x", clock.scale);
    }

    // R: reload the current scenario
    if keys.just_pressed(KeyCode::KeyR) {
        info!("Resetting simulation...");
        load_events.write(LoadScenario {
            scenario_id: active.0.id.to_string(),
        });
    }

    // Number keys pick a preset
    let digits = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];
    for (key, scenario) in digits.iter().zip(SCENARIOS) {
        if keys.just_pressed(*key) {
            load_events.write(LoadScenario {
                scenario_id: scenario.id.to_string(),
            });
        }
    }
}

/// G: show or hide the deformed grid.
fn toggle_grid(keys: Res<ButtonInput<KeyCode>>, mut style: ResMut<GridStyle>) {
    if keys.just_pressed(KeyCode::KeyG) {
        style.visible = !style.visible;
        info!("Grid {}", if style.visible { "shown" } else { "hidden" });
    }
}
