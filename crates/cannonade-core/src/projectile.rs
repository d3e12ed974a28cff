//! In-flight projectile state.
//!
//! A [`Projectile`] is a position/velocity pair. It is created by
//! [`Turret::fire`](crate::turret::Turret::fire) and advanced in place by
//! the [`PhysicsEngine`](crate::engine::PhysicsEngine) once the driver has
//! registered it. The projectile itself carries no behavior beyond
//! exposing its state for rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{Point2, Vector2};

/// Unique identifier for a live projectile.
///
/// Assigned by the engine at registration, monotonically increasing.
/// Ordering by numeric value gives deterministic iteration over the live
/// set, which tests rely on.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(u64);

impl ProjectileId {
    /// Creates a `ProjectileId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectileId({})", self.0)
    }
}

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectileId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// A fired shell: current location plus current velocity.
///
/// Both fields are replaced each tick by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Current world position.
    pub location: Point2,
    /// Current velocity.
    pub velocity: Vector2,
}

impl Projectile {
    /// Creates a projectile at `location` moving with `velocity`.
    #[must_use]
    pub const fn new(location: Point2, velocity: Vector2) -> Self {
        Self { location, velocity }
    }

    /// Current speed (velocity magnitude).
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}
