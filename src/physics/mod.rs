//! Orbital dynamics for the bodies of the running scenario.
//!
//! Each frame the simulated delta is split into equal substeps no longer
//! than [`PhysicsConfig::max_substep`]. Every substep integrates with
//! semi-implicit Euler and then recenters the system on its center of
//! mass, so the field engine and renderer always see a drift-free frame.

mod gravity;
mod integrator;
mod stabilizer;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::compute_accelerations;
pub use integrator::{Integrator, step};
pub use stabilizer::recenter;

use crate::error::{ConfigError, is_positive};
use crate::registry::BodyRegistry;
use crate::types::{Body, SimulationClock, SimulationSet};

/// Orbit integration parameters.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravitational constant for orbital forces
    pub gravitational_constant: f64,
    /// Softening length added to every pair separation
    pub softening: f64,
    /// Longest single integration step in simulated seconds
    pub max_substep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1.0,
            softening: 0.1,
            max_substep: 1.0 / 240.0,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = self.gravitational_constant;
        if !g.is_finite() || g < 0.0 {
            return Err(ConfigError::InvalidGravitationalConstant {
                context: "orbit",
                value: g,
            });
        }
        if !is_positive(self.softening) {
            return Err(ConfigError::InvalidSoftening {
                context: "orbit",
                value: self.softening,
            });
        }
        if !is_positive(self.max_substep) {
            return Err(ConfigError::InvalidSubstep(self.max_substep));
        }
        Ok(())
    }

    /// Number of equal substeps needed to cover `dt`.
    pub fn substeps(&self, dt: f64) -> usize {
        if dt <= 0.0 {
            return 0;
        }
        (dt / self.max_substep).ceil().max(1.0) as usize
    }
}

/// Advance `bodies` by `dt` simulated seconds.
///
/// Runs [`PhysicsConfig::substeps`] integrator steps, each followed by a
/// center-of-mass recentering.
pub fn advance(integrator: &mut Integrator, bodies: &mut [Body], dt: f64, config: &PhysicsConfig) {
    let n = config.substeps(dt);
    if n == 0 {
        return;
    }

    let h = dt / n as f64;
    for _ in 0..n {
        integrator.step(bodies, h, config.gravitational_constant, config.softening);
        recenter(bodies);
    }
}

/// Scratch state reused by the physics system between frames.
#[derive(Resource, Default)]
pub struct FrameIntegrator(pub Integrator);

/// Plugin advancing the bodies every frame.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameIntegrator>()
            .add_systems(Update, physics_step.in_set(SimulationSet::Integrate));
    }
}

/// Integrate the registry over the clock's latest delta.
fn physics_step(
    clock: Res<SimulationClock>,
    config: Res<PhysicsConfig>,
    mut registry: ResMut<BodyRegistry>,
    mut integrator: ResMut<FrameIntegrator>,
) {
    let dt = clock.last_delta;
    if dt <= 0.0 {
        return;
    }

    advance(&mut integrator.0, registry.bodies_mut(), dt, &config);
}
