//! Floating panel for live tuning of the simulation.
//!
//! Orbit and field constants are edited independently; the field sliders
//! only change how deep the wells look.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::field::FieldConfig;
use crate::input::{MAX_TIME_SCALE, MIN_TIME_SCALE};
use crate::physics::PhysicsConfig;
use crate::render::bodies::BodyVisual;
use crate::scenarios::{ActiveScenario, LoadScenario, SCENARIOS};
use crate::types::SimulationClock;

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const RUNNING: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSED: Color32 = Color32::from_rgb(221, 170, 85);
}

/// System that renders the tuning panel.
pub fn tuning_panel_system(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut physics: ResMut<PhysicsConfig>,
    mut field: ResMut<FieldConfig>,
    active: Res<ActiveScenario>,
    mut load_events: MessageWriter<LoadScenario>,
    visuals: Query<&BodyVisual>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::Window::new("Gravity Well")
        .resizable(false)
        .default_pos(egui::pos2(12.0, 12.0))
        .show(ctx, |ui| {
            render_clock(ui, &mut clock);
            ui.separator();
            render_orbit_controls(ui, &mut physics);
            ui.separator();
            render_field_controls(ui, &mut field);
            ui.separator();
            render_scenarios(ui, active.0.id, &mut load_events);
            ui.label(format!("{} bodies", visuals.iter().count()));
        });
}

/// Play/pause, elapsed time and time scale.
fn render_clock(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    ui.horizontal(|ui| {
        let (label, color) = if clock.paused {
            ("\u{25B6} Play", colors::PAUSED)
        } else {
            ("\u{23F8} Pause", colors::RUNNING)
        };
        if ui
            .button(egui::RichText::new(label).color(color))
            .on_hover_text("Space")
            .clicked()
        {
            clock.paused = !clock.paused;
        }
        ui.label(egui::RichText::new(format!("t = {:.1} s", clock.elapsed)).monospace());
    });

    ui.add(
        egui::Slider::new(&mut clock.scale, MIN_TIME_SCALE..=MAX_TIME_SCALE)
            .logarithmic(true)
            .text("time scale"),
    );
}

/// Orbit softening; G stays fixed so presets keep their circular speeds.
fn render_orbit_controls(ui: &mut egui::Ui, physics: &mut PhysicsConfig) {
    ui.label("Orbits");
    ui.add(
        egui::Slider::new(&mut physics.softening, 0.01..=1.0)
            .logarithmic(true)
            .text("softening"),
    );
}

/// Field constant, softening and the parallel toggle.
fn render_field_controls(ui: &mut egui::Ui, field: &mut FieldConfig) {
    ui.label("Grid wells");
    ui.add(
        egui::Slider::new(&mut field.gravitational_constant, 0.0..=1.0).text("G (field)"),
    );
    ui.add(
        egui::Slider::new(&mut field.softening, 0.05..=3.0)
            .logarithmic(true)
            .text("softening"),
    );
    ui.checkbox(&mut field.parallel, "parallel evaluation");
}

/// One button per preset; the active one is highlighted.
fn render_scenarios(
    ui: &mut egui::Ui,
    active_id: &str,
    load_events: &mut MessageWriter<LoadScenario>,
) {
    ui.label("Scenarios");
    for (i, scenario) in SCENARIOS.iter().enumerate() {
        let text = egui::RichText::new(format!("{} {}", i + 1, scenario.name));
        let text = if scenario.id == active_id {
            text.strong()
        } else {
            text
        };
        if ui
            .button(text)
            .on_hover_text(scenario.description)
            .clicked()
        {
            load_events.write(LoadScenario {
                scenario_id: scenario.id.to_string(),
            });
        }
    }
}
