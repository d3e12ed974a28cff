//! Immutable 2D math primitives for the duel simulation.
//!
//! This module provides the two value types everything else is built on:
//!
//! - [`Vector2`]: a displacement/velocity/force with its polar form
//!   (magnitude and direction) computed once at construction and cached
//! - [`Point2`]: a position, translated by vectors
//!
//! # Cached Polar Form
//!
//! `Vector2` stores magnitude and direction alongside its Cartesian
//! components. They are derived exactly once, in the constructor, and are
//! never recomputed afterwards. Every arithmetic operation returns a new
//! vector, so the cached fields can never drift out of sync with `(x, y)`.
//!
//! Serialized form carries only `(x, y)`; the polar fields are rebuilt on
//! deserialization so decoded data upholds the same invariant.
//!
//! # Example
//!
//! ```
//! use cannonade_core::math::{Point2, Vector2};
//!
//! let velocity = Vector2::from_polar(100.0, 0.0);
//! assert!((velocity.x() - 100.0).abs() < 1e-9);
//!
//! let position = Point2::ORIGIN.translate(velocity.scale(0.5));
//! assert!((position.x - 50.0).abs() < 1e-9);
//! ```

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

// =============================================================================
// Vector2
// =============================================================================

/// An immutable 2D vector with cached magnitude and direction.
///
/// The zero vector is valid (a projectile at rest); its direction is `0.0`
/// by the `atan2(0, 0)` convention.
///
/// # Example
///
/// ```
/// use cannonade_core::math::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert!((v.magnitude() - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Components", into = "Components")]
pub struct Vector2 {
    x: f64,
    y: f64,
    magnitude: f64,
    direction: f64,
}

/// Cartesian parts of a [`Vector2`], used as its wire representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Components {
    x: f64,
    y: f64,
}

impl From<Components> for Vector2 {
    fn from(c: Components) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<Vector2> for Components {
    fn from(v: Vector2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        magnitude: 0.0,
        direction: 0.0,
    };

    /// Creates a vector from Cartesian components, caching its polar form.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            magnitude: x.hypot(y),
            direction: y.atan2(x),
        }
    }

    /// Creates a vector from its polar form.
    ///
    /// This is the canonical construction used by firing: the components
    /// are `(cos(direction) * magnitude, sin(direction) * magnitude)`.
    /// For positive magnitudes it round-trips through [`Self::magnitude`]
    /// and [`Self::direction`] (mod 2π).
    #[must_use]
    pub fn from_polar(magnitude: f64, direction: f64) -> Self {
        Self::new(direction.cos() * magnitude, direction.sin() * magnitude)
    }

    /// The x component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y component.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The cached magnitude, `sqrt(x² + y²)`.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The cached direction in radians, `atan2(y, x)`, in `(-π, π]`.
    #[must_use]
    pub const fn direction(&self) -> f64 {
        self.direction
    }

    /// Returns the sum of this vector and `other`.
    #[must_use]
    pub fn add(&self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Returns this vector uniformly scaled by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.scale(factor)
    }
}

// =============================================================================
// Point2
// =============================================================================

/// An immutable 2D position.
///
/// Points are translated by [`Vector2`]s and scaled about the origin; both
/// operations return new values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2 {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point displaced by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vector2) -> Self {
        Self::new(self.x + offset.x(), self.y + offset.y())
    }

    /// Returns this point uniformly scaled about the origin.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add<Vector2> for Point2 {
    type Output = Self;

    fn add(self, offset: Vector2) -> Self {
        self.translate(offset)
    }
}
