//! Two-sided match container.
//!
//! A [`Duel`] holds both turrets, their key maps, and the shared physics
//! engine. It is the state the external loop drives: input callbacks feed
//! [`Duel::handle_key`], the fixed-interval timer feeds [`Duel::tick`],
//! and the render pass reads turret and projectile state through the
//! accessors. The duel performs no I/O of its own.
//!
//! Turrets are addressed by their [`Side`] (the direction they face):
//! the right-facing turret stands on the left edge of the field, the
//! left-facing turret on the right edge. `duel.turret(side).side()` is
//! always `side`.
//!
//! Firing routes the returned shell straight into the engine, so drivers
//! that render from [`Duel::projectiles`] need no bookkeeping of their
//! own beyond reacting to retired ids.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aim::Side;
use crate::controls::{KeyMap, TurretAction};
use crate::engine::PhysicsEngine;
use crate::error::TickError;
use crate::math::Point2;
use crate::power::LaunchPower;
use crate::projectile::{Projectile, ProjectileId};
use crate::turret::Turret;

/// A running artillery duel: two turrets and the shared engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duel {
    engine: PhysicsEngine,
    right_facing: Turret,
    left_facing: Turret,
    right_keys: KeyMap,
    left_keys: KeyMap,
}

impl Duel {
    /// Assembles a duel from two prebuilt turrets and an engine.
    ///
    /// `right_facing` must be a [`Side::Right`] turret and `left_facing`
    /// a [`Side::Left`] one; turrets are addressed by facing from here on.
    /// Default key maps: arrows for the right-facing player, WASD for the
    /// left-facing player.
    #[must_use]
    pub fn new(right_facing: Turret, left_facing: Turret, engine: PhysicsEngine) -> Self {
        debug_assert_eq!(right_facing.side(), Side::Right);
        debug_assert_eq!(left_facing.side(), Side::Left);
        Self {
            engine,
            right_facing,
            left_facing,
            right_keys: KeyMap::arrows(),
            left_keys: KeyMap::wasd(),
        }
    }

    /// The stock two-player setup: right-facing turret at x = 50,
    /// left-facing turret at x = 750, power range 20–110 starting at 50,
    /// default engine.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // both builders are fully configured
    pub fn standard() -> Self {
        let power = LaunchPower::new(20.0, 110.0, 50.0);
        let right_facing = Turret::builder()
            .side(Side::Right)
            .power(power)
            .position(Point2::new(50.0, 0.0))
            .build()
            .expect("side and power are set");
        let left_facing = Turret::builder()
            .side(Side::Left)
            .power(power)
            .position(Point2::new(750.0, 0.0))
            .build()
            .expect("side and power are set");
        Self::new(right_facing, left_facing, PhysicsEngine::default())
    }

    /// Replaces both key maps.
    #[must_use]
    pub fn with_key_maps(mut self, right_facing: KeyMap, left_facing: KeyMap) -> Self {
        self.right_keys = right_facing;
        self.left_keys = left_facing;
        self
    }

    /// The turret facing `side`.
    #[must_use]
    pub const fn turret(&self, side: Side) -> &Turret {
        match side {
            Side::Right => &self.right_facing,
            Side::Left => &self.left_facing,
        }
    }

    /// Read access to the engine, for render-side queries.
    #[must_use]
    pub const fn engine(&self) -> &PhysicsEngine {
        &self.engine
    }

    /// Iterates live projectiles in id order, for the render pass.
    pub fn projectiles(&self) -> impl Iterator<Item = (ProjectileId, &Projectile)> {
        self.engine.iter()
    }

    /// Applies an action to the turret facing `side`.
    ///
    /// `Fire` spawns the shell into the engine and returns its id; the
    /// other actions mutate aim or power and return `None`.
    pub fn apply(&mut self, side: Side, action: TurretAction) -> Option<ProjectileId> {
        let turret = match side {
            Side::Right => &mut self.right_facing,
            Side::Left => &mut self.left_facing,
        };
        match action {
            TurretAction::Fire => {
                let shell = turret.fire();
                Some(self.engine.spawn(shell))
            }
            TurretAction::AimUp => {
                turret.aim_up();
                None
            }
            TurretAction::AimDown => {
                turret.aim_down();
                None
            }
            TurretAction::PowerUp => {
                turret.power_up();
                None
            }
            TurretAction::PowerDown => {
                turret.power_down();
                None
            }
        }
    }

    /// Resolves a key code through `side`'s key map and applies it.
    ///
    /// Unmapped codes are logged at debug level and ignored.
    pub fn handle_key(&mut self, side: Side, code: u32) -> Option<ProjectileId> {
        let keys = match side {
            Side::Right => &self.right_keys,
            Side::Left => &self.left_keys,
        };
        match keys.action(code) {
            Some(action) => self.apply(side, action),
            None => {
                debug!(%side, code, "ignoring unmapped key code");
                None
            }
        }
    }

    /// Advances the shared engine by `dt_millis`.
    ///
    /// Returns the ids of projectiles retired this tick so the driver can
    /// drop them from its render list.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::InvalidTimestep`] for a negative or
    /// non-finite `dt_millis`.
    pub fn tick(&mut self, dt_millis: f64) -> Result<Vec<ProjectileId>, TickError> {
        self.engine.update(dt_millis)
    }
}
