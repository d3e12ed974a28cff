//! Launch power: the clamped scalar imparted to a fired shell.
//!
//! The step size is fixed at construction as 1/50th of the range. A step
//! that would pass a bound lands exactly on the bound instead; once at
//! the bound further calls in that direction do nothing. Out-of-range
//! requests are never errors, matching the aim controller's policy.

use serde::{Deserialize, Serialize};

/// Number of steps the power range is divided into.
pub const POWER_STEPS: f64 = 50.0;

/// Clamped launch power with a fixed step size.
///
/// # Invariant
///
/// `value ∈ [min, max]` at all times; `step = (max - min) / 50` never
/// changes after construction.
///
/// # Example
///
/// ```
/// use cannonade_core::power::LaunchPower;
///
/// let mut power = LaunchPower::new(20.0, 110.0, 50.0);
/// assert!((power.step() - 1.8).abs() < 1e-12);
/// power.increase();
/// assert!((power.value() - 51.8).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchPower {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl LaunchPower {
    /// Creates a power gauge over `[min, max]` starting at `initial`.
    ///
    /// `initial` is clamped into the range.
    #[must_use]
    pub fn new(min: f64, max: f64, initial: f64) -> Self {
        Self {
            value: initial.clamp(min, max),
            min,
            max,
            step: (max - min) / POWER_STEPS,
        }
    }

    /// Current power value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Fixed step size, `(max - min) / 50`.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Position of the value within the range, in `[0, 1]`. Read by
    /// external gauge displays.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    /// Steps the value up; the last step lands exactly on `max`, after
    /// which calls are no-ops.
    pub fn increase(&mut self) {
        if self.value < self.max {
            self.value = (self.value + self.step).min(self.max);
        }
    }

    /// Steps the value down; the last step lands exactly on `min`, after
    /// which calls are no-ops.
    pub fn decrease(&mut self) {
        if self.value > self.min {
            self.value = (self.value - self.step).max(self.min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn step_is_one_fiftieth_of_range() {
        let power = LaunchPower::new(20.0, 110.0, 50.0);
        assert!((power.step() - 1.8).abs() < 1e-12);
    }

    #[test]
    fn thirty_four_decreases_clamp_at_min() {
        let mut power = LaunchPower::new(20.0, 110.0, 50.0);
        for _ in 0..34 {
            power.decrease();
        }
        assert_eq!(power.value(), 20.0);
        power.decrease();
        assert_eq!(power.value(), 20.0);
    }

    #[test]
    fn increases_from_min_reach_exactly_max() {
        let mut power = LaunchPower::new(0.0, 100.0, 0.0);
        for _ in 0..50 {
            power.increase();
        }
        assert_eq!(power.value(), 100.0);
        power.increase();
        assert_eq!(power.value(), 100.0);
    }

    #[test]
    fn initial_value_is_clamped() {
        let power = LaunchPower::new(20.0, 110.0, 500.0);
        assert_eq!(power.value(), 110.0);
    }

    #[test]
    fn fraction_spans_unit_interval() {
        let mut power = LaunchPower::new(20.0, 110.0, 20.0);
        assert_eq!(power.fraction(), 0.0);
        for _ in 0..50 {
            power.increase();
        }
        assert!((power.fraction() - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn value_stays_in_bounds(
            min in -100.0..100.0_f64,
            width in 0.1..500.0_f64,
            start in 0.0..1.0_f64,
            ops in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let max = min + width;
            let mut power = LaunchPower::new(min, max, min + start * width);
            for &up in &ops {
                if up {
                    power.increase();
                } else {
                    power.decrease();
                }
                prop_assert!(power.value() >= power.min());
                prop_assert!(power.value() <= power.max());
            }
        }
    }
}
