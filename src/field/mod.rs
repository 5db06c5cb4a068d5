//! Gravity-well deformation of the reference grid.
//!
//! Every frame each grid vertex is lowered by the softened potential of all
//! bodies. The field uses its own gravitational constant and softening so
//! the visual depth of the wells can be tuned without touching the orbits.

mod grid;
mod potential;

#[cfg(test)]
mod proptest_field;

use bevy::prelude::*;

pub use grid::{GridSpec, HeightField};
pub use potential::{deform, deform_parallel, potential_at};

use crate::error::{ConfigError, is_positive};
use crate::physics::PhysicsConfig;
use crate::registry::BodyRegistry;
use crate::types::SimulationSet;

/// Parameters of the visual potential.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    /// Gravitational constant scaling the well depth
    pub gravitational_constant: f64,
    /// Softening length bounding the depth under a source
    pub softening: f64,
    /// Evaluate vertices on the rayon pool
    pub parallel: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.1,
            softening: 0.5,
            parallel: false,
        }
    }
}

impl FieldConfig {
    /// Field constants mirroring the orbit integrator's.
    pub fn coupled_to(physics: &PhysicsConfig) -> Self {
        Self {
            gravitational_constant: physics.gravitational_constant,
            softening: physics.softening,
            ..default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = self.gravitational_constant;
        if !g.is_finite() || g < 0.0 {
            return Err(ConfigError::InvalidGravitationalConstant {
                context: "field",
                value: g,
            });
        }
        if !is_positive(self.softening) {
            return Err(ConfigError::InvalidSoftening {
                context: "field",
                value: self.softening,
            });
        }
        Ok(())
    }
}

/// Plugin recomputing the grid heights after each integration.
pub struct FieldPlugin;

impl Plugin for FieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, deform_field.in_set(SimulationSet::Deform));
    }
}

/// Rebuild heights from a snapshot of the current bodies.
fn deform_field(
    registry: Res<BodyRegistry>,
    config: Res<FieldConfig>,
    mut field: ResMut<HeightField>,
) {
    let sources = registry.gravity_sources();
    if config.parallel {
        deform_parallel(&mut field, &sources, &config);
    } else {
        deform(&mut field, &sources, &config);
    }
}
