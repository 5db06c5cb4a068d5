//! Simulation clock advancement.
//!
//! Converts the frame's wall-clock delta into simulated seconds according to
//! the clock's scale and pause state.

use bevy::prelude::*;

use crate::types::{SimulationClock, SimulationSet};

/// Plugin providing time advancement and frame ordering.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Clock,
                    SimulationSet::Integrate,
                    SimulationSet::Deform,
                    SimulationSet::Render,
                )
                    .chain(),
            )
            .add_systems(Update, advance_clock.in_set(SimulationSet::Clock));
    }
}

/// Advance the simulation clock by this frame's real delta.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta_secs_f64());
}
