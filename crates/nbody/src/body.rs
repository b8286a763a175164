use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NBodyError, Result};
use crate::forces::DirectGravity;
use crate::vector::Vector2D;

/// Stable handle of a body: its insertion index in the owning system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display color of a body, parsed from a `#RRGGBB` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex token
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Color;
    ///
    /// let sun = Color::from_hex("#FDB813").unwrap();
    /// assert_eq!(sun, Color::rgb(0xFD, 0xB8, 0x13));
    /// assert!(Color::from_hex("FDB813").is_err());
    /// ```
    pub fn from_hex(token: &str) -> Result<Self> {
        let invalid = || NBodyError::InvalidColor(token.to_string());

        let hex = token.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = NBodyError;

    fn try_from(token: String) -> Result<Self> {
        Self::from_hex(&token)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A gravitating point mass
///
/// Units follow the astronomical system used throughout the crate: positions
/// in AU, velocities in AU/year, accelerations in AU/year², masses in solar
/// masses. `radius` and `color` are display attributes and never enter the
/// physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    #[serde(default)]
    pub name: String,
    pub mass: f64,   // Solar masses
    pub radius: f64, // Display radius in pixels
    #[serde(default)]
    pub color: Color,
    pub position: Vector2D, // AU
    pub velocity: Vector2D, // AU/year
    #[serde(default)]
    pub acceleration: Vector2D, // AU/year², recomputed every step
}

impl Body {
    /// Creates a body with zero acceleration
    ///
    /// The id is a placeholder until the body is pushed into a system, which
    /// assigns its insertion index.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::{Body, Color};
    /// use nbody::vector::Vector2D;
    ///
    /// let earth = Body::new(
    ///     3.003e-6,
    ///     20.0,
    ///     Color::from_hex("#0F5720").unwrap(),
    ///     Vector2D::new(1.0, 0.0),
    ///     Vector2D::new(0.0, 6.283),
    /// )
    /// .unwrap()
    /// .with_name("earth");
    ///
    /// assert_eq!(earth.name, "earth");
    /// assert!(Body::new(0.0, 1.0, Color::WHITE, Vector2D::zeros(), Vector2D::zeros()).is_err());
    /// ```
    pub fn new(
        mass: f64,
        radius: f64,
        color: Color,
        position: Vector2D,
        velocity: Vector2D,
    ) -> Result<Self> {
        let body = Body {
            id: BodyId(0),
            name: String::new(),
            mass,
            radius,
            color,
            position,
            velocity,
            acceleration: Vector2D::zeros(),
        };
        body.validate()?;
        Ok(body)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Checks the physical and display attributes supplied at construction
    pub fn validate(&self) -> Result<()> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(NBodyError::InvalidMass { mass: self.mass });
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(NBodyError::InvalidRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// Label used in reports: the name if one was given, otherwise the id
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }

    /// Acceleration this body feels from `other` alone
    ///
    /// Follows the softened inverse-square law: the separation points from
    /// `self` towards `other`, and the magnitude is `G * m_other / d²` where
    /// `d` is the softened separation.
    pub fn pairwise_acceleration(&self, other: &Body, gravity: &DirectGravity) -> Result<Vector2D> {
        let separation = self.position.difference(other.position);
        let distance = separation.softened_magnitude(gravity.softening);
        if distance == 0.0 {
            return Err(NBodyError::DegenerateSeparation {
                first: self.id,
                second: other.id,
            });
        }

        let direction = separation.quotient(distance);
        let magnitude = gravity.g * other.mass / (distance * distance);
        Ok(direction.scaled(magnitude))
    }

    /// Symplectic Euler: velocity first, then position with the new velocity
    pub fn euler_step(&mut self, dt: f64) {
        self.velocity = self.velocity + self.acceleration * dt;
        self.position = self.position + self.velocity * dt;
    }

    /// Half (or any partial) velocity update from the current acceleration
    pub fn kick(&mut self, dt: f64) {
        self.velocity = self.velocity + self.acceleration * dt;
    }

    /// Position update from the current velocity
    pub fn drift(&mut self, dt: f64) {
        self.position = self.position + self.velocity * dt;
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.difference(other.position).magnitude()
    }

    /// Angular momentum scalar (r × v, not multiplied by mass)
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.perp_dot(self.velocity)
    }
}
