//! Test helper functions for setting up turrets and engines.

use crate::aim::Side;
use crate::engine::{PhysicsEngine, Retirement};
use crate::math::{Point2, Vector2};
use crate::power::LaunchPower;
use crate::turret::Turret;

/// Builds a turret for `side` at `position` with a 20–110 power gauge
/// starting at `power`.
pub fn make_turret(side: Side, position: Point2, power: f64) -> Turret {
    Turret::builder()
        .side(side)
        .power(LaunchPower::new(20.0, 110.0, power))
        .position(position)
        .build()
        .expect("side and power are set")
}

/// An engine with the given gravity, no drag, and retirement disabled,
/// so trajectories can be observed for as long as a test needs.
pub fn engine_no_retire(gravity_y: f64) -> PhysicsEngine {
    PhysicsEngine::new(Vector2::new(0.0, gravity_y)).with_retirement(Retirement::NONE)
}

/// Steps `engine` in fixed `step_millis` increments until `total_millis`
/// of simulated time have elapsed.
pub fn run_for(engine: &mut PhysicsEngine, total_millis: f64, step_millis: f64) {
    let mut elapsed = 0.0;
    while elapsed < total_millis {
        engine.update(step_millis).expect("valid timestep");
        elapsed += step_millis;
    }
}
