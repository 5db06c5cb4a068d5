//! Fixed-topology height grid in the XZ plane.

use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;

use crate::error::{ConfigError, is_positive};

/// Grid dimensions as written in a scenario.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Vertices per side
    pub count: usize,
    /// Distance between neighbouring vertices
    pub spacing: f64,
    /// World XZ of the grid center
    pub origin: DVec2,
}

impl GridSpec {
    /// Grid centered on the world origin.
    pub const fn centered(count: usize, spacing: f64) -> Self {
        Self {
            count,
            spacing,
            origin: DVec2::ZERO,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidGridCount(self.count));
        }
        if !is_positive(self.spacing) {
            return Err(ConfigError::InvalidGridSpacing(self.spacing));
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::InvalidGridOrigin(self.origin.x, self.origin.y));
        }
        Ok(())
    }
}

/// `count × count` lattice of vertices with one mutable height each.
///
/// Vertex `i` sits at row `i / count` (z) and column `i % count` (x). The
/// XZ layout is fixed at construction; only heights change from frame to
/// frame.
#[derive(Resource, Clone, Debug)]
pub struct HeightField {
    count: usize,
    spacing: f64,
    origin: DVec2,
    xz: Vec<DVec2>,
    heights: Vec<f64>,
}

impl HeightField {
    /// Build a flat grid centered on `spec.origin`.
    pub fn new(spec: GridSpec) -> Result<Self, ConfigError> {
        spec.validate()?;

        let half = spec.count as f64 / 2.0;
        let xz = (0..spec.count)
            .flat_map(|z| (0..spec.count).map(move |x| (x, z)))
            .map(|(x, z)| spec.origin + DVec2::new(x as f64 - half, z as f64 - half) * spec.spacing)
            .collect();

        Ok(Self {
            count: spec.count,
            spacing: spec.spacing,
            origin: spec.origin,
            xz,
            heights: vec![0.0; spec.count * spec.count],
        })
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn vertex_count(&self) -> usize {
        self.heights.len()
    }

    /// World XZ coordinates of every vertex, row-major.
    pub fn xz(&self) -> &[DVec2] {
        &self.xz
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Heights alongside the (immutable) XZ coordinates.
    pub fn split_mut(&mut self) -> (&[DVec2], &mut [f64]) {
        (&self.xz, &mut self.heights)
    }

    /// Index of the vertex at column `x`, row `z`.
    #[inline]
    pub fn index(&self, x: usize, z: usize) -> usize {
        z * self.count + x
    }

    /// Full world position of vertex `i`, with its current height as y.
    pub fn vertex(&self, i: usize) -> DVec3 {
        let p = self.xz[i];
        DVec3::new(p.x, self.heights[i], p.y)
    }

    /// Vertices of row `z` in increasing x.
    pub fn row(&self, z: usize) -> impl Iterator<Item = DVec3> + '_ {
        (0..self.count).map(move |x| self.vertex(self.index(x, z)))
    }

    /// Vertices of column `x` in increasing z.
    pub fn column(&self, x: usize) -> impl Iterator<Item = DVec3> + '_ {
        (0..self.count).map(move |z| self.vertex(self.index(x, z)))
    }
}
