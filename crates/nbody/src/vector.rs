//! Planar vector value type
//!
//! `Vector2D` is a thin `Copy` wrapper over `nalgebra::Vector2<f64>` that only
//! exposes pure operations. Every method returns a new vector; callers reassign
//! instead of mutating shared values in place.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D Euclidean vector in AU, AU/year or AU/year² depending on context
///
/// # Examples
///
/// ```
/// use nbody::vector::Vector2D;
///
/// let a = Vector2D::new(1.0, 0.0);
/// let b = Vector2D::new(3.0, 4.0);
///
/// // `difference` points from `a` to `b`
/// assert_eq!(a.difference(b), Vector2D::new(2.0, 4.0));
/// assert_eq!((b - a).magnitude(), 20.0_f64.sqrt());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2D(Vector2<f64>);

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    pub fn zeros() -> Self {
        Self(Vector2::zeros())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn plus(self, other: Vector2D) -> Vector2D {
        Self(self.0 + other.0)
    }

    /// `self - other`
    pub fn minus(self, other: Vector2D) -> Vector2D {
        Self(self.0 - other.0)
    }

    /// `other - self`, the vector pointing from `self` to `other`
    ///
    /// This is the reverse of [`Vector2D::minus`]. Gravity and relative
    /// projection both rely on it to get "from me towards them".
    pub fn difference(self, other: Vector2D) -> Vector2D {
        Self(other.0 - self.0)
    }

    pub fn scaled(self, scalar: f64) -> Vector2D {
        Self(self.0 * scalar)
    }

    /// Divide each component by `scalar`; the caller guarantees `scalar != 0`
    pub fn quotient(self, scalar: f64) -> Vector2D {
        Self(self.0 / scalar)
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.0.magnitude_squared()
    }

    pub fn magnitude(&self) -> f64 {
        self.0.magnitude()
    }

    /// `sqrt(x² + y² + softening)`
    ///
    /// The softening factor is added under the root, not squared first.
    pub fn softened_magnitude(&self, softening: f64) -> f64 {
        (self.0.magnitude_squared() + softening).sqrt()
    }

    /// Polar angle `atan2(y, x)` in radians
    pub fn direction(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// 2D cross product (z component of the 3D cross product)
    pub fn perp_dot(&self, other: Vector2D) -> f64 {
        self.0.perp(&other.0)
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.0.dot(&other.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.0.x, self.0.y]
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<Vector2<f64>> for Vector2D {
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl From<Vector2D> for Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        v.0
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        self.plus(other)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        self.minus(other)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f64) -> Vector2D {
        self.scaled(scalar)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, scalar: f64) -> Vector2D {
        self.quotient(scalar)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Self(-self.0)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}
