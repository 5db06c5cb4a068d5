//! Center-of-mass frame correction.

use bevy::math::DVec3;

use crate::types::Body;

/// Shift `bodies` into their zero-momentum, origin-centered frame.
///
/// Subtracts the mass-weighted mean position from every position and the
/// mass-weighted mean velocity from every velocity. Does nothing for an
/// empty slice.
pub fn recenter(bodies: &mut [Body]) {
    let total_mass: f64 = bodies.iter().map(Body::mass).sum();
    if bodies.is_empty() || total_mass <= 0.0 {
        return;
    }

    let (weighted_pos, weighted_vel) = bodies.iter().fold(
        (DVec3::ZERO, DVec3::ZERO),
        |(p, v), b| (p + b.pos * b.mass(), v + b.vel * b.mass()),
    );
    let center_pos = weighted_pos / total_mass;
    let center_vel = weighted_vel / total_mass;

    for body in bodies.iter_mut() {
        body.pos -= center_pos;
        body.vel -= center_vel;
    }
}
