//! Core simulation types shared by the physics, field and render layers.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::error::{ConfigError, is_positive};

/// System set for ordering the per-frame pipeline.
///
/// Each frame runs the sets strictly in declaration order; field
/// deformation must see the positions produced by this frame's integration.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Advance the simulation clock
    Clock,
    /// Integrate bodies and recenter the frame
    Integrate,
    /// Recompute grid heights from the new body positions
    Deform,
    /// Push positions and heights to the renderer
    Render,
}

/// Display category of a body.
///
/// Only the renderer looks at this; gravity treats every body the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Star-like body, drawn emissive
    Primary,
    /// Orbiter
    #[default]
    Secondary,
}

/// A massive body.
///
/// Positions and velocities are in render units (and per second). The y
/// axis is up; orbits live in the XZ plane and y only lifts a body off
/// the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    mass: f64,
    pub pos: DVec3,
    pub vel: DVec3,
    pub kind: BodyKind,
}

impl Body {
    /// Create a body, rejecting non-positive or non-finite mass.
    pub fn new(mass: f64, pos: DVec3, vel: DVec3, kind: BodyKind) -> Result<Self, ConfigError> {
        if !is_positive(mass) {
            return Err(ConfigError::InvalidMass(mass));
        }
        Ok(Self {
            mass,
            pos,
            vel,
            kind,
        })
    }

    /// Mass (always positive).
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Linear momentum `m·v`.
    #[inline]
    pub fn momentum(&self) -> DVec3 {
        self.vel * self.mass
    }

    /// Read-only projection used by the field engine.
    #[inline]
    pub fn as_source(&self) -> GravitySource {
        GravitySource {
            pos: self.pos,
            mass: self.mass,
        }
    }
}

/// Position and mass snapshot of a body, consumed by field evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravitySource {
    pub pos: DVec3,
    pub mass: f64,
}

/// Simulation clock resource.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Simulated seconds since the scenario was loaded
    pub elapsed: f64,
    /// Simulated seconds per real second
    pub scale: f64,
    /// Whether the simulation is paused
    pub paused: bool,
    /// Simulated seconds added by the most recent frame
    pub last_delta: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            scale: 1.0,
            paused: false,
            last_delta: 0.0,
        }
    }
}

impl SimulationClock {
    /// Clock for a freshly loaded scenario.
    pub fn new(scale: f64, paused: bool) -> Self {
        Self {
            scale,
            paused,
            ..default()
        }
    }

    /// Advance by `real_delta` wall-clock seconds, returning the simulated
    /// delta (zero while paused).
    pub fn tick(&mut self, real_delta: f64) -> f64 {
        let dt = if self.paused {
            0.0
        } else {
            (real_delta * self.scale).max(0.0)
        };
        self.elapsed += dt;
        self.last_delta = dt;
        dt
    }
}
