//! Pairwise softened Newtonian gravity.
//!
//! Direct O(n²) summation over unordered pairs. Scenarios hold tens of
//! bodies, and a tree approximation would change trajectories.

use bevy::math::DVec3;

use crate::types::Body;

/// Compute the gravitational acceleration of every body.
///
/// `out` is cleared and refilled with one entry per body, in body order.
/// For each pair the softened squared distance is `|d|² + softening²`, so
/// coincident bodies produce zero acceleration instead of a singularity.
///
/// # Arguments
/// * `bodies` - Bodies to evaluate (positions are only read)
/// * `g` - Gravitational constant
/// * `softening` - Softening length, must be positive
/// * `out` - Scratch buffer receiving the accelerations
pub fn compute_accelerations(bodies: &[Body], g: f64, softening: f64, out: &mut Vec<DVec3>) {
    out.clear();
    out.resize(bodies.len(), DVec3::ZERO);

    let soft2 = softening * softening;

    for i in 0..bodies.len() {
        let bi = &bodies[i];
        let mi = bi.mass();

        for j in (i + 1)..bodies.len() {
            let bj = &bodies[j];
            let mj = bj.mass();

            // d points from i to j: i is pulled along +u, j along -u
            let d = bj.pos - bi.pos;
            let r2 = d.length_squared() + soft2;
            let u = d / r2.sqrt();

            let force = g * mi * mj / r2;

            out[i] += u * (force / mi);
            out[j] -= u * (force / mj);
        }
    }
}
