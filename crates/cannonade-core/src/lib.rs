//! # Cannonade Core
//!
//! Real-time artillery duel core simulation for Cannonade.
//!
//! This crate provides the headless heart of a turn-free artillery duel:
//! two turrets aim and fire shells that fly under gravity (and optional
//! drag) until an external collaborator decides they hit something.
//!
//! ## Architecture
//!
//! - **Math**: immutable [`Vector2`]/[`Point2`] value types with cached
//!   polar form
//! - **Turrets**: clamped aim and power state machines composed per side
//!   by a validating builder
//! - **Engine**: semi-implicit Euler integration over the live projectile
//!   set, with a configurable retirement policy
//! - **Controls**: key-code dispatch tables at the input interface
//!
//! Rendering, keyboard wiring, and the fixed-interval loop live in the
//! embedding. The driver calls [`Duel::tick`] (or
//! [`PhysicsEngine::update`] directly) once per tick, routes key codes
//! through [`Duel::handle_key`], and reads state back for drawing.
//!
//! ## Usage
//!
//! ```
//! use cannonade_core::{Duel, Side, TurretAction};
//!
//! let mut duel = Duel::standard();
//! duel.apply(Side::Right, TurretAction::AimUp);
//! let shell = duel.apply(Side::Right, TurretAction::Fire).unwrap();
//!
//! duel.tick(30.0).unwrap();
//! assert!(duel.engine().get(shell).is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aim;
pub mod controls;
pub mod duel;
pub mod engine;
pub mod error;
pub mod math;
pub mod power;
pub mod projectile;
pub mod turret;

pub use aim::{AimController, Side};
pub use controls::{KeyMap, TurretAction};
pub use duel::Duel;
pub use engine::{PhysicsEngine, Retirement};
pub use error::{BuildError, TickError};
pub use math::{Point2, Vector2};
pub use power::LaunchPower;
pub use projectile::{Projectile, ProjectileId};
pub use turret::{BarrelGeometry, Turret, TurretBuilder};

#[cfg(test)]
mod tests;
