//! Configuration errors.
//!
//! Everything the simulation can reject is rejected while a scenario is
//! being built. Stepping and field evaluation never fail.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid mass {0} (must be positive and finite)")]
    InvalidMass(f64),

    #[error("invalid {context} softening {value} (must be positive and finite)")]
    InvalidSoftening { context: &'static str, value: f64 },

    #[error("invalid {context} gravitational constant {value} (must be non-negative and finite)")]
    InvalidGravitationalConstant { context: &'static str, value: f64 },

    #[error("invalid grid vertex count {0} (must be at least 1)")]
    InvalidGridCount(usize),

    #[error("invalid grid spacing {0} (must be positive and finite)")]
    InvalidGridSpacing(f64),

    #[error("invalid grid origin ({0}, {1}) (must be finite)")]
    InvalidGridOrigin(f64, f64),

    #[error("invalid max substep {0} (must be positive and finite)")]
    InvalidSubstep(f64),

    #[error("body '{name}' has invalid placement (distance {distance}, speed {speed})")]
    InvalidPlacement {
        name: &'static str,
        distance: f64,
        speed: f64,
    },

    #[error("circular orbit for '{0}' needs another primary body to orbit")]
    NoCentralMass(&'static str),

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
}

/// Positive and finite.
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
