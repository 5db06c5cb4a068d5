//! Ordered collection of the bodies in the running scenario.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::types::{Body, GravitySource};

/// Resource holding every body, in scenario order.
///
/// Bodies are never removed while a scenario runs, so an index stays valid
/// until the next scenario load.
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn push(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Snapshot of positions and masses for field evaluation.
    pub fn gravity_sources(&self) -> Vec<GravitySource> {
        self.bodies.iter().map(Body::as_source).collect()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    /// Total linear momentum `Σ m·v`.
    pub fn total_momentum(&self) -> DVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Mass-weighted mean position, or `None` for an empty registry.
    pub fn center_of_mass(&self) -> Option<DVec3> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted: DVec3 = self.bodies.iter().map(|b| b.pos * b.mass()).sum();
        Some(weighted / total)
    }
}
