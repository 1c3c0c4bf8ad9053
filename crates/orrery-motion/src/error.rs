//! Error types for orrery-motion.

use thiserror::Error;

/// Errors produced by the motion integrators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MotionError {
    /// Two bodies are closer than the integrator's minimum distance, so the
    /// inverse-square pull has no direction.
    #[error("undefined acceleration: bodies are {distance} apart")]
    UndefinedAcceleration { distance: f64 },
}

pub type Result<T> = core::result::Result<T, MotionError>;
