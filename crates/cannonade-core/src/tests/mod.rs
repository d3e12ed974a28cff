//! Cross-module test suites for the duel core.
//!
//! - `trajectory.rs`: integration accuracy against closed-form motion,
//!   drag behavior, retirement
//! - `integration.rs`: end-to-end duels driven the way an embedding
//!   would drive them
//! - `helpers.rs`: factory functions shared by the suites

mod helpers;
mod integration;

pub use helpers::*;
