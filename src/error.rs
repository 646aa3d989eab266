/*
 * Error Module
 *
 * Configuration errors reported by the simulation. The engine itself has no
 * runtime failure modes; everything here is caught when a plane, a tick or a
 * parameter set is built from caller input.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    // Plane dimensions must be finite and strictly positive
    #[error("invalid plane {width}x{height}: dimensions must be positive")]
    InvalidPlane { width: f32, height: f32 },

    #[error("invalid speed limit {0}: must be positive")]
    InvalidSpeedLimit(f32),

    // Any other numeric parameter (radius, tick rate, boid count)
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: String },
}

impl SimError {
    pub fn parameter(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}

// Shared check for "finite and > 0"
pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
