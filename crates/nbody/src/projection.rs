//! Mapping from simulation coordinates (AU) to pixel coordinates
//!
//! The core never draws. A renderer asks the system for [`RenderPoint`]s and
//! draws a filled circle of `radius` and `color` at each `pixel`.
//!
//! Orbital radii in a planetary system span two orders of magnitude, so the
//! log modes squash the radial distance through `log10(r + 1)` while keeping
//! the direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::body::{BodyId, Color};
use crate::state::NBodySystem;
use crate::vector::Vector2D;

/// `pixel = position * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Pixels per AU (or per log-AU in the log modes)
    pub scale: f64,
    /// Pixel coordinate of the origin
    pub offset: Vector2D,
}

impl Projection {
    pub fn new(scale: f64, offset: Vector2D) -> Self {
        Self { scale, offset }
    }

    /// Origin at the centre of a `width` x `height` screen
    pub fn centered(width: f64, height: f64, scale: f64) -> Self {
        Self::new(scale, Vector2D::new(width / 2.0, height / 2.0))
    }

    pub fn linear(&self, position: Vector2D) -> Vector2D {
        position * self.scale + self.offset
    }

    /// Radially log-scaled projection about the origin
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::projection::Projection;
    /// use nbody::vector::Vector2D;
    ///
    /// let projection = Projection::centered(1200.0, 1200.0, 100.0);
    ///
    /// // 9 AU out along +x lands log10(10) * 100 = 100 px right of centre
    /// let pixel = projection.log_scaled(Vector2D::new(9.0, 0.0));
    /// assert!((pixel.x() - 700.0).abs() < 1e-9);
    /// assert_eq!(pixel.y(), 600.0);
    ///
    /// // The origin stays at the centre
    /// assert_eq!(projection.log_scaled(Vector2D::zeros()), Vector2D::new(600.0, 600.0));
    /// ```
    pub fn log_scaled(&self, position: Vector2D) -> Vector2D {
        self.log_radial(position) + self.offset
    }

    /// Log-scaled projection of `position` about `reference`
    ///
    /// The reference itself is placed linearly; the offset from it is then
    /// log-scaled.
    pub fn log_relative(&self, position: Vector2D, reference: Vector2D) -> Vector2D {
        let relative = reference.difference(position);
        self.log_radial(relative) + self.linear(reference)
    }

    /// `v * (log10(|v| + 1) * scale / |v|)`, with zero for a zero vector
    fn log_radial(&self, v: Vector2D) -> Vector2D {
        let r = v.magnitude();
        if r == 0.0 {
            return Vector2D::zeros();
        }

        let scaled = (r + 1.0).log10() * self.scale;
        v * (scaled / r)
    }
}

/// How body positions are turned into pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    Linear,
    Log,
    /// Body 0 linear, every other body log-scaled relative to body 0
    #[default]
    LogRelative,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Linear => write!(f, "linear"),
            RenderMode::Log => write!(f, "log"),
            RenderMode::LogRelative => write!(f, "log-relative"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(RenderMode::Linear),
            "log" => Ok(RenderMode::Log),
            "log-relative" => Ok(RenderMode::LogRelative),
            other => Err(format!(
                "unknown render mode {other:?}, expected linear, log or log-relative"
            )),
        }
    }
}

/// What a renderer needs to draw one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPoint {
    pub id: BodyId,
    pub name: String,
    pub pixel: Vector2D,
    pub radius: f64,
    pub color: Color,
}

impl NBodySystem {
    /// Projects every body, in insertion order
    pub fn render_points(&self, mode: RenderMode, projection: &Projection) -> Vec<RenderPoint> {
        let reference = self.body(0).map(|b| b.position);

        self.bodies()
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let pixel = match (mode, reference) {
                    (RenderMode::Linear, _) => projection.linear(body.position),
                    (RenderMode::Log, _) => projection.log_scaled(body.position),
                    (RenderMode::LogRelative, Some(reference)) if i > 0 => {
                        projection.log_relative(body.position, reference)
                    }
                    (RenderMode::LogRelative, _) => projection.linear(body.position),
                };

                RenderPoint {
                    id: body.id,
                    name: body.name.clone(),
                    pixel,
                    radius: body.radius,
                    color: body.color,
                }
            })
            .collect()
    }
}
