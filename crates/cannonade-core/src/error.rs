//! Error types for the duel core.
//!
//! Only two things can fail here: assembling a turret from an incomplete
//! builder, and feeding the physics engine a nonsensical timestep.
//! Out-of-range aim/power requests are deliberately not errors; they are
//! silent no-ops at the bound.

use thiserror::Error;

/// A `TurretBuilder` was finalized without its required configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// `build()` was called before a side was selected.
    #[error("turret side was never set")]
    MissingSide,
    /// `build()` was called before a launch power was attached.
    #[error("launch power was never set")]
    MissingPower,
}

/// The physics engine was driven with an invalid argument.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TickError {
    /// Elapsed time must be finite and non-negative.
    #[error("invalid physics timestep: {0} ms")]
    InvalidTimestep(f64),
}
