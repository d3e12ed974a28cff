//! Physics engine: advances every live projectile each tick.
//!
//! The engine owns the live set of projectiles in a `BTreeMap` keyed by
//! [`ProjectileId`], so iteration order is deterministic. Each call to
//! [`PhysicsEngine::update`] integrates velocity then position with
//! semi-implicit Euler:
//!
//! ```text
//! v' = v + a * dt        (a = gravity, plus drag when configured)
//! p' = p + v' * dt
//! ```
//!
//! with `dt` the elapsed time in seconds. Drag, when enabled, opposes
//! motion with magnitude proportional to speed squared:
//! `drag = -v * |v| * coefficient`.
//!
//! # Retirement
//!
//! Left alone, a fired shell would be advanced forever and the live set
//! would grow without bound. The engine therefore retires projectiles per
//! a configurable [`Retirement`] policy (fell below a floor while
//! descending, or exceeded a maximum age) and reports the retired ids
//! from `update` so the driver can drop them from its render list.
//! [`Retirement::NONE`] restores keep-forever behavior for drivers that
//! manage lifetime themselves.
//!
//! # Example
//!
//! ```
//! use cannonade_core::engine::PhysicsEngine;
//! use cannonade_core::math::{Point2, Vector2};
//! use cannonade_core::projectile::Projectile;
//!
//! let mut engine = PhysicsEngine::default();
//! let id = engine.spawn(Projectile::new(Point2::ORIGIN, Vector2::new(50.0, 50.0)));
//!
//! engine.update(30.0).unwrap();
//! assert!(engine.get(id).unwrap().location.x > 0.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::TickError;
use crate::math::Vector2;
use crate::projectile::{Projectile, ProjectileId};

/// Default downward gravitational acceleration, world units per second².
pub const DEFAULT_GRAVITY_Y: f64 = -98.1;

// =============================================================================
// Retirement policy
// =============================================================================

/// When the engine removes a projectile from the live set.
///
/// A projectile is retired when it is descending below `floor_y`, or when
/// its age exceeds `max_age_secs`. Either criterion may be disabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Retirement {
    /// Retire once below this height while moving downward.
    pub floor_y: Option<f64>,
    /// Retire once older than this many seconds of simulated time.
    pub max_age_secs: Option<f64>,
}

impl Retirement {
    /// Never retire; the caller manages projectile lifetime.
    pub const NONE: Self = Self {
        floor_y: None,
        max_age_secs: None,
    };

    fn applies(&self, body: &Projectile, age_secs: f64) -> bool {
        if let Some(floor) = self.floor_y {
            if body.location.y < floor && body.velocity.y() < 0.0 {
                return true;
            }
        }
        if let Some(max_age) = self.max_age_secs {
            if age_secs > max_age {
                return true;
            }
        }
        false
    }
}

impl Default for Retirement {
    /// No floor; retire after 60 seconds of flight.
    fn default() -> Self {
        Self {
            floor_y: None,
            max_age_secs: Some(60.0),
        }
    }
}

// =============================================================================
// PhysicsEngine
// =============================================================================

/// A live projectile plus the bookkeeping the engine keeps for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Tracked {
    body: Projectile,
    age_secs: f64,
}

/// Advances all live projectiles under gravity and optional drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsEngine {
    projectiles: BTreeMap<ProjectileId, Tracked>,
    next_id: u64,
    gravity: Vector2,
    drag_coefficient: Option<f64>,
    retirement: Retirement,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(Vector2::new(0.0, DEFAULT_GRAVITY_Y))
    }
}

impl PhysicsEngine {
    /// Creates an engine with the given constant gravity, no drag, and
    /// the default retirement policy.
    #[must_use]
    pub fn new(gravity: Vector2) -> Self {
        Self {
            projectiles: BTreeMap::new(),
            next_id: 0,
            gravity,
            drag_coefficient: None,
            retirement: Retirement::default(),
        }
    }

    /// Enables speed-squared drag with the given coefficient.
    #[must_use]
    pub fn with_drag(mut self, coefficient: f64) -> Self {
        self.drag_coefficient = Some(coefficient);
        self
    }

    /// Replaces the retirement policy.
    #[must_use]
    pub fn with_retirement(mut self, retirement: Retirement) -> Self {
        self.retirement = retirement;
        self
    }

    /// The configured gravity vector.
    #[must_use]
    pub const fn gravity(&self) -> Vector2 {
        self.gravity
    }

    /// The configured drag coefficient, if drag is enabled.
    #[must_use]
    pub const fn drag_coefficient(&self) -> Option<f64> {
        self.drag_coefficient
    }

    /// The configured retirement policy.
    #[must_use]
    pub const fn retirement(&self) -> Retirement {
        self.retirement
    }

    /// Registers a projectile with the live set and returns its id.
    pub fn spawn(&mut self, projectile: Projectile) -> ProjectileId {
        let id = ProjectileId::new(self.next_id);
        self.next_id += 1;
        self.projectiles.insert(
            id,
            Tracked {
                body: projectile,
                age_secs: 0.0,
            },
        );
        debug!(%id, "projectile registered");
        id
    }

    /// Removes a projectile from the live set, returning it if present.
    pub fn remove(&mut self, id: ProjectileId) -> Option<Projectile> {
        self.projectiles.remove(&id).map(|tracked| tracked.body)
    }

    /// Looks up a live projectile by id.
    #[must_use]
    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.projectiles.get(&id).map(|tracked| &tracked.body)
    }

    /// Iterates the live set in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProjectileId, &Projectile)> {
        self.projectiles.iter().map(|(id, tracked)| (*id, &tracked.body))
    }

    /// Number of live projectiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    /// Whether the live set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Advances every live projectile by `dt_millis` of simulated time.
    ///
    /// Integration is semi-implicit Euler: the new velocity is computed
    /// first and the position update uses it. Projectiles that meet the
    /// retirement policy are removed and their ids returned.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::InvalidTimestep`] if `dt_millis` is negative
    /// or non-finite.
    pub fn update(&mut self, dt_millis: f64) -> Result<Vec<ProjectileId>, TickError> {
        if !dt_millis.is_finite() || dt_millis < 0.0 {
            return Err(TickError::InvalidTimestep(dt_millis));
        }
        let dt = dt_millis / 1000.0;
        trace!(dt_millis, live = self.projectiles.len(), "physics tick");

        let mut retired = Vec::new();
        for (id, tracked) in &mut self.projectiles {
            let velocity = tracked.body.velocity;
            let mut accel = self.gravity;
            if let Some(coefficient) = self.drag_coefficient {
                accel = accel.add(velocity.scale(-velocity.magnitude() * coefficient));
            }
            let next_velocity = velocity.add(accel.scale(dt));
            tracked.body.location = tracked.body.location.translate(next_velocity.scale(dt));
            tracked.body.velocity = next_velocity;
            tracked.age_secs += dt;

            if self.retirement.applies(&tracked.body, tracked.age_secs) {
                retired.push(*id);
            }
        }

        for id in &retired {
            self.projectiles.remove(id);
            debug!(id = %id, "projectile retired");
        }
        Ok(retired)
    }
}
