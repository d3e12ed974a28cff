//! Aim angle state machine, one variant per side of the duel.
//!
//! The aim controller owns a clamped angle and its two transitions,
//! [`raise`](AimController::raise) and [`lower`](AimController::lower).
//! A step whose result would cross a bound is a silent no-op, never
//! clamp-and-continue: the player feels a hard stop at the limit.
//!
//! The two sides are mirrored about the vertical (π/2):
//!
//! - **Right**: starts at `0.1π`, bounds `[0, π/2]`; raising increases
//!   the angle toward vertical.
//! - **Left**: starts at `π − 0.1π`, bounds `[π/2, π]`; raising decreases
//!   the angle toward vertical.
//!
//! Mirroring here is what lets [`Turret`](crate::turret::Turret) serve
//! both sides without branching on side anywhere else.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Angular step applied by one `raise`/`lower` invocation, in radians.
pub const AIM_STEP: f64 = 0.005 * PI;

/// Rounding slack for bound checks. The step grid lands on the bounds
/// exactly in real arithmetic (0.1π is 20 steps from 0, 80 from π/2);
/// the slack keeps accumulated rounding noise from rejecting that final
/// step. It is nine orders of magnitude below [`AIM_STEP`], so it never
/// admits a real overshoot.
const BOUND_SLACK: f64 = 1e-9;

/// Which side of the duel a turret occupies.
///
/// The side selects the aim controller variant and the barrel geometry
/// variant together; the two are coupled by convention.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left-facing turret on the right edge of the field.
    Left,
    /// Right-facing turret on the left edge of the field.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Clamped aim angle with per-side step transitions.
///
/// # Invariant
///
/// `angle ∈ [lower_bound, upper_bound]` at all times. Transitions that
/// would leave the interval do nothing.
///
/// # Example
///
/// ```
/// use cannonade_core::aim::{AimController, Side};
/// use std::f64::consts::PI;
///
/// let mut aim = AimController::for_side(Side::Right);
/// for _ in 0..20 {
///     aim.raise();
/// }
/// assert!((aim.angle() - 0.2 * PI).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimController {
    side: Side,
    angle: f64,
    lower_bound: f64,
    upper_bound: f64,
}

impl AimController {
    /// Creates the controller variant for `side`, at its initial angle.
    #[must_use]
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Right => Self {
                side,
                angle: 0.1 * PI,
                lower_bound: 0.0,
                upper_bound: FRAC_PI_2,
            },
            Side::Left => Self {
                side,
                angle: PI - 0.1 * PI,
                lower_bound: FRAC_PI_2,
                upper_bound: PI,
            },
        }
    }

    /// The side this controller serves.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Current aim angle in radians.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Inclusive lower bound of the angle.
    #[must_use]
    pub const fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Inclusive upper bound of the angle.
    #[must_use]
    pub const fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Steps the barrel toward vertical; no-op at the limit.
    pub fn raise(&mut self) {
        let next = match self.side {
            Side::Right => self.angle + AIM_STEP,
            Side::Left => self.angle - AIM_STEP,
        };
        self.step_to(next);
    }

    /// Steps the barrel toward horizontal; no-op at the limit.
    pub fn lower(&mut self) {
        let next = match self.side {
            Side::Right => self.angle - AIM_STEP,
            Side::Left => self.angle + AIM_STEP,
        };
        self.step_to(next);
    }

    /// Applies `next` only if it stays within bounds (up to rounding).
    fn step_to(&mut self, next: f64) {
        if next >= self.lower_bound - BOUND_SLACK && next <= self.upper_bound + BOUND_SLACK {
            self.angle = next.clamp(self.lower_bound, self.upper_bound);
        }
    }
}
