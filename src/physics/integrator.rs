//! Semi-implicit (symplectic) Euler integration.
//!
//! Each step first accumulates every pairwise acceleration, then kicks all
//! velocities and finally drifts all positions with the updated velocities.
//! Moving a body before the accumulation pass finishes would corrupt the
//! distances used for the remaining pairs.

use bevy::math::DVec3;

use super::gravity::compute_accelerations;
use crate::types::Body;

/// Reusable integrator holding the acceleration scratch buffer.
#[derive(Clone, Debug, Default)]
pub struct Integrator {
    acc: Vec<DVec3>,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `bodies` by `dt`.
    ///
    /// Mutates positions and velocities only; masses and kinds are untouched.
    /// `dt` must be non-negative and `softening` positive.
    pub fn step(&mut self, bodies: &mut [Body], dt: f64, g: f64, softening: f64) {
        debug_assert!(dt >= 0.0, "negative timestep {dt}");
        debug_assert!(softening > 0.0, "softening must be positive, got {softening}");

        if bodies.is_empty() {
            return;
        }

        compute_accelerations(bodies, g, softening, &mut self.acc);

        // Kick
        for (body, acc) in bodies.iter_mut().zip(&self.acc) {
            body.vel += *acc * dt;
        }

        // Drift with the new velocity
        for body in bodies.iter_mut() {
            body.pos += body.vel * dt;
        }
    }
}

/// One-shot step that allocates its own scratch buffer.
pub fn step(bodies: &mut [Body], dt: f64, g: f64, softening: f64) {
    Integrator::new().step(bodies, dt, g, softening);
}
