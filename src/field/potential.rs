//! Softened potential evaluation over the height grid.

use bevy::math::DVec2;
use rayon::prelude::*;

use super::FieldConfig;
use super::grid::HeightField;
use crate::types::GravitySource;

/// Superposed softened potential at ground-plane point `(xz.x, 0, xz.y)`.
///
/// `Σ -G·m / sqrt(dx² + dy² + dz² + ε²)` with `dy = -source.y`: a source's
/// height above the plane only flattens its well.
#[inline]
pub fn potential_at(xz: DVec2, sources: &[GravitySource], config: &FieldConfig) -> f64 {
    let soft2 = config.softening * config.softening;
    let mut height = 0.0;

    for src in sources {
        let dx = xz.x - src.pos.x;
        let dy = -src.pos.y;
        let dz = xz.y - src.pos.z;
        let dist = (dx * dx + dy * dy + dz * dz + soft2).sqrt();
        height -= config.gravitational_constant * src.mass / dist;
    }

    height
}

/// Recompute every grid height from `sources`.
///
/// Overwrites all heights; nothing carries over from the previous frame.
pub fn deform(field: &mut HeightField, sources: &[GravitySource], config: &FieldConfig) {
    let (xz, heights) = field.split_mut();
    for (h, p) in heights.iter_mut().zip(xz) {
        *h = potential_at(*p, sources, config);
    }
}

/// [`deform`] fanned out across the rayon pool.
///
/// Vertices are independent; `sources` is a shared read-only snapshot.
pub fn deform_parallel(field: &mut HeightField, sources: &[GravitySource], config: &FieldConfig) {
    let (xz, heights) = field.split_mut();
    heights
        .par_iter_mut()
        .zip(xz.par_iter())
        .for_each(|(h, p)| *h = potential_at(*p, sources, config));
}
