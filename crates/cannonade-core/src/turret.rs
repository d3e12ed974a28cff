//! Turret assembly: barrel geometry, the turret itself, and its builder.
//!
//! A [`Turret`] composes a world position, an [`AimController`], a
//! [`LaunchPower`], and a per-side [`BarrelGeometry`]. All side-specific
//! behavior lives in the two composed strategies; the turret itself never
//! branches on side.
//!
//! [`Turret::fire`] returns the spawned [`Projectile`] synchronously. The
//! driver is responsible for registering it with the physics engine and
//! with whatever render list it keeps; the turret holds no such list.
//!
//! # Example
//!
//! ```
//! use cannonade_core::aim::Side;
//! use cannonade_core::math::Point2;
//! use cannonade_core::power::LaunchPower;
//! use cannonade_core::turret::Turret;
//!
//! let turret = Turret::builder()
//!     .side(Side::Right)
//!     .power(LaunchPower::new(20.0, 110.0, 50.0))
//!     .position(Point2::new(50.0, 0.0))
//!     .build()
//!     .unwrap();
//!
//! let shell = turret.fire();
//! assert!((shell.velocity.magnitude() - 50.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aim::{AimController, Side};
use crate::error::BuildError;
use crate::math::{Point2, Vector2};
use crate::power::LaunchPower;
use crate::projectile::Projectile;

/// Barrel length from pivot to tip, in world units.
pub const BARREL_LENGTH: f64 = 37.5;

/// Barrel pivot offset from the turret position, right-side variant.
/// The left-side pivot mirrors the x offset.
const PIVOT_OFFSET: Point2 = Point2::new(31.25, 23.5);

// =============================================================================
// BarrelGeometry
// =============================================================================

/// Per-side barrel pivot and length.
///
/// The two variants differ only in the pivot's x sign; the launch-point
/// computation is shared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrelGeometry {
    pivot: Point2,
    length: f64,
}

impl BarrelGeometry {
    /// Creates the geometry variant for `side`.
    #[must_use]
    pub fn for_side(side: Side) -> Self {
        let pivot = match side {
            Side::Right => PIVOT_OFFSET,
            Side::Left => Point2::new(-PIVOT_OFFSET.x, PIVOT_OFFSET.y),
        };
        Self {
            pivot,
            length: BARREL_LENGTH,
        }
    }

    /// Pivot point in turret-local space.
    #[must_use]
    pub const fn pivot(&self) -> Point2 {
        self.pivot
    }

    /// Barrel length from pivot to tip.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Barrel tip in turret-local space for the given aim angle.
    #[must_use]
    pub fn tip(&self, angle: f64) -> Point2 {
        self.pivot.translate(Vector2::from_polar(self.length, angle))
    }
}

// =============================================================================
// Turret
// =============================================================================

/// A side-specific artillery turret.
///
/// Built via [`Turret::builder`]; the shape is immutable after
/// construction, only the composed aim and power state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    position: Point2,
    aim: AimController,
    power: LaunchPower,
    barrel: BarrelGeometry,
}

impl Turret {
    /// Starts assembling a turret.
    #[must_use]
    pub fn builder() -> TurretBuilder {
        TurretBuilder::new()
    }

    /// World position of the turret base.
    #[must_use]
    pub const fn position(&self) -> Point2 {
        self.position
    }

    /// The side this turret fights for.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.aim.side()
    }

    /// Read access to the aim state, for rendering the barrel.
    #[must_use]
    pub const fn aim(&self) -> &AimController {
        &self.aim
    }

    /// Read access to the power state, for rendering the gauge.
    #[must_use]
    pub const fn power(&self) -> &LaunchPower {
        &self.power
    }

    /// Steps the barrel toward vertical; no-op at the limit.
    pub fn aim_up(&mut self) {
        self.aim.raise();
    }

    /// Steps the barrel toward horizontal; no-op at the limit.
    pub fn aim_down(&mut self) {
        self.aim.lower();
    }

    /// Steps launch power up; no-op at the limit.
    pub fn power_up(&mut self) {
        self.power.increase();
    }

    /// Steps launch power down; no-op at the limit.
    pub fn power_down(&mut self) {
        self.power.decrease();
    }

    /// World-space position of the barrel tip.
    ///
    /// Computed as `position + pivot + (cos(angle)·length, sin(angle)·length)`,
    /// with no additional scale factor.
    #[must_use]
    pub fn launch_point(&self) -> Point2 {
        let tip = self.barrel.tip(self.aim.angle());
        self.position.translate(Vector2::new(tip.x, tip.y))
    }

    /// Fires a shell from the barrel tip at the current power and angle.
    ///
    /// Returns the new projectile; the caller must register it with the
    /// physics engine and any render list.
    #[must_use]
    pub fn fire(&self) -> Projectile {
        let velocity = Vector2::from_polar(self.power.value(), self.aim.angle());
        let shell = Projectile::new(self.launch_point(), velocity);
        debug!(
            side = %self.side(),
            angle = self.aim.angle(),
            power = self.power.value(),
            "turret fired"
        );
        shell
    }
}

// =============================================================================
// TurretBuilder
// =============================================================================

/// Fluent assembly of a [`Turret`].
///
/// Selecting a side picks the aim controller variant and the barrel
/// geometry variant together, since they are coupled by convention.
/// [`build`](Self::build) validates that side and power were both set;
/// a partially configured turret never exists.
#[derive(Debug, Clone, Default)]
pub struct TurretBuilder {
    side: Option<Side>,
    power: Option<LaunchPower>,
    position: Point2,
}

impl TurretBuilder {
    /// Creates an empty builder. Position defaults to the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the side, fixing both per-side strategies.
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Attaches the launch power gauge.
    #[must_use]
    pub fn power(mut self, power: LaunchPower) -> Self {
        self.power = Some(power);
        self
    }

    /// Places the turret base in the world.
    #[must_use]
    pub fn position(mut self, position: Point2) -> Self {
        self.position = position;
        self
    }

    /// Finalizes the turret.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingSide`] or [`BuildError::MissingPower`]
    /// if the corresponding required field was never set.
    pub fn build(self) -> Result<Turret, BuildError> {
        let side = self.side.ok_or(BuildError::MissingSide)?;
        let power = self.power.ok_or(BuildError::MissingPower)?;
        Ok(Turret {
            position: self.position,
            aim: AimController::for_side(side),
            power,
            barrel: BarrelGeometry::for_side(side),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn test_power() -> LaunchPower {
        LaunchPower::new(20.0, 110.0, 100.0)
    }

    #[test]
    fn build_requires_side() {
        let err = Turret::builder().power(test_power()).build().unwrap_err();
        assert_eq!(err, BuildError::MissingSide);
    }

    #[test]
    fn build_requires_power() {
        let err = Turret::builder().side(Side::Right).build().unwrap_err();
        assert_eq!(err, BuildError::MissingPower);
    }

    #[test]
    fn build_defaults_position_to_origin() {
        let turret = Turret::builder()
            .side(Side::Right)
            .power(test_power())
            .build()
            .unwrap();
        assert_eq!(turret.position(), Point2::ORIGIN);
    }

    #[test]
    fn side_selects_both_strategies() {
        let left = Turret::builder()
            .side(Side::Left)
            .power(test_power())
            .build()
            .unwrap();
        assert_eq!(left.side(), Side::Left);
        assert!(left.aim().angle() > PI / 2.0);
        assert!(BarrelGeometry::for_side(Side::Left).pivot().x < 0.0);
    }

    #[test]
    fn launch_point_follows_angle() {
        let turret = Turret::builder()
            .side(Side::Right)
            .power(test_power())
            .position(Point2::new(100.0, 0.0))
            .build()
            .unwrap();
        let angle = turret.aim().angle();
        let tip = turret.launch_point();
        let expected_x = 100.0 + PIVOT_OFFSET.x + angle.cos() * BARREL_LENGTH;
        let expected_y = PIVOT_OFFSET.y + angle.sin() * BARREL_LENGTH;
        assert!((tip.x - expected_x).abs() < 1e-9);
        assert!((tip.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn left_launch_point_mirrors_right() {
        let power = test_power();
        let right = Turret::builder()
            .side(Side::Right)
            .power(power)
            .build()
            .unwrap();
        let left = Turret::builder()
            .side(Side::Left)
            .power(power)
            .build()
            .unwrap();
        let r = right.launch_point();
        let l = left.launch_point();
        assert!((l.x + r.x).abs() < 1e-9);
        assert!((l.y - r.y).abs() < 1e-9);
    }

    #[test]
    fn fire_at_angle_zero_is_horizontal() {
        let mut turret = Turret::builder()
            .side(Side::Right)
            .power(LaunchPower::new(0.0, 200.0, 100.0))
            .build()
            .unwrap();
        // Lower the barrel to the 0-radian bound.
        for _ in 0..100 {
            turret.aim_down();
        }
        assert_eq!(turret.aim().angle(), 0.0);

        let shell = turret.fire();
        assert!((shell.velocity.magnitude() - 100.0).abs() < 1e-9);
        assert!(shell.velocity.direction().abs() < 1e-9);
    }

    #[test]
    fn fire_spawns_at_launch_point() {
        let turret = Turret::builder()
            .side(Side::Right)
            .power(test_power())
            .position(Point2::new(50.0, 398.0))
            .build()
            .unwrap();
        let shell = turret.fire();
        assert_eq!(shell.location, turret.launch_point());
    }

    #[test]
    fn left_turret_fires_leftward() {
        let turret = Turret::builder()
            .side(Side::Left)
            .power(test_power())
            .build()
            .unwrap();
        let shell = turret.fire();
        assert!(shell.velocity.x() < 0.0);
        assert!(shell.velocity.y() > 0.0);
    }
}
