//! End-to-end tests driving the core the way an embedding would:
//! interleaved input events and fixed-interval physics ticks.

use super::helpers::make_turret;
use crate::aim::Side;
use crate::controls::{KEY_ENTER, KEY_LEFT, KEY_SPACE, KEY_UP, KEY_W};
use crate::duel::Duel;
use crate::engine::{PhysicsEngine, Retirement};
use crate::math::Point2;
use crate::turret::Turret;

const TICK_MILLIS: f64 = 30.0;

fn ground_duel() -> Duel {
    let engine = PhysicsEngine::default().with_retirement(Retirement {
        floor_y: Some(0.0),
        max_age_secs: Some(60.0),
    });
    Duel::new(
        make_turret(Side::Right, Point2::new(50.0, 0.0), 100.0),
        make_turret(Side::Left, Point2::new(750.0, 0.0), 100.0),
        engine,
    )
}

#[test]
fn volley_crosses_the_field_and_lands() {
    let mut duel = ground_duel();

    // Both players raise a little, right-facing player charges power.
    for _ in 0..10 {
        duel.handle_key(Side::Right, KEY_LEFT);
        duel.handle_key(Side::Right, KEY_UP);
    }
    let right_shell = duel.handle_key(Side::Right, KEY_ENTER).unwrap();
    let left_shell = duel.handle_key(Side::Left, KEY_SPACE).unwrap();
    assert_eq!(duel.engine().len(), 2);

    let mut landed = Vec::new();
    for _ in 0..2_000 {
        let retired = duel.tick(TICK_MILLIS).unwrap();
        landed.extend(retired);
        if landed.len() == 2 {
            break;
        }
    }

    assert!(landed.contains(&right_shell));
    assert!(landed.contains(&left_shell));
    assert!(duel.engine().is_empty());
}

#[test]
fn opposing_shells_travel_toward_each_other() {
    let mut duel = ground_duel();
    let right_shell = duel.handle_key(Side::Right, KEY_ENTER).unwrap();
    let left_shell = duel.handle_key(Side::Left, KEY_SPACE).unwrap();

    duel.tick(TICK_MILLIS).unwrap();

    let right_pos = duel.engine().get(right_shell).unwrap();
    let left_pos = duel.engine().get(left_shell).unwrap();
    assert!(right_pos.velocity.x() > 0.0);
    assert!(left_pos.velocity.x() < 0.0);
    assert!(right_pos.location.x < left_pos.location.x);
}

#[test]
fn input_between_ticks_changes_the_next_shot() {
    let mut duel = ground_duel();

    let flat = duel.handle_key(Side::Right, KEY_ENTER).unwrap();
    let flat_velocity = duel.engine().get(flat).unwrap().velocity;

    for _ in 0..10 {
        duel.tick(TICK_MILLIS).unwrap();
        duel.handle_key(Side::Right, KEY_LEFT);
    }
    let raised = duel.handle_key(Side::Right, KEY_ENTER).unwrap();
    let raised_velocity = duel.engine().get(raised).unwrap().velocity;

    // Same speed, steeper angle.
    assert!((raised_velocity.magnitude() - flat_velocity.magnitude()).abs() < 1e-9);
    assert!(raised_velocity.direction() > flat_velocity.direction());
}

#[test]
fn power_gauge_feeds_launch_speed() {
    let mut duel = ground_duel();
    for _ in 0..5 {
        duel.handle_key(Side::Left, KEY_W);
    }
    let expected = duel.turret(Side::Left).power().value();
    let shell = duel.handle_key(Side::Left, KEY_SPACE).unwrap();
    let speed = duel.engine().get(shell).unwrap().speed();
    assert!((speed - expected).abs() < 1e-9);
}

#[test]
fn shared_logic_mirrors_across_sides() {
    let mut right = make_turret(Side::Right, Point2::ORIGIN, 90.0);
    let mut left = make_turret(Side::Left, Point2::ORIGIN, 90.0);
    for _ in 0..7 {
        right.aim_up();
        left.aim_up();
        right.power_down();
        left.power_down();
    }

    let r = right.fire();
    let l = left.fire();
    assert!((r.velocity.magnitude() - l.velocity.magnitude()).abs() < 1e-9);
    assert!((r.velocity.x() + l.velocity.x()).abs() < 1e-9);
    assert!((r.velocity.y() - l.velocity.y()).abs() < 1e-9);
}

#[test]
fn duel_state_survives_a_serde_round_trip() {
    let mut duel = ground_duel();
    duel.handle_key(Side::Right, KEY_ENTER).unwrap();
    duel.tick(TICK_MILLIS).unwrap();

    let json = serde_json::to_string(&duel).unwrap();
    let mut restored: Duel = serde_json::from_str(&json).unwrap();

    // Both copies evolve identically from the restored point.
    duel.tick(TICK_MILLIS).unwrap();
    restored.tick(TICK_MILLIS).unwrap();
    let a: Vec<_> = duel.projectiles().collect();
    let b: Vec<_> = restored.projectiles().collect();
    assert_eq!(a, b);
}

#[test]
fn turret_can_be_driven_without_a_duel() {
    // The core contract: fire() returns the projectile, the driver
    // registers it wherever it likes.
    let turret: Turret = make_turret(Side::Right, Point2::new(50.0, 398.0), 100.0);
    let mut engine = PhysicsEngine::default();
    let shell = turret.fire();
    let id = engine.spawn(shell);
    engine.update(TICK_MILLIS).unwrap();
    assert!(engine.get(id).unwrap().location.x > shell.location.x);
}
