//! Configuration types for building systems and loading scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`SimulationConfig`] – physical constants and integration settings
//! - [`BodyConfig`]       – initial state and display attributes of one body
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   time_step: 0.001          # years
//!   softening: 0.001          # AU², added under the square root
//!   substeps_per_frame: 1
//!   integrator: euler         # or leapfrog
//!   # gravitational_constant defaults to 4π²
//!
//! bodies:
//!   - name: sun
//!     orbit: { distance: 0.0, period_days: 0.0 }
//!     mass: 1.0
//!     radius: 30
//!     color: "#FDB813"
//!   - name: probe
//!     position: [1.5, 0.0]
//!     velocity: [0.0, 5.0]
//!     mass: 1.0e-9
//!     radius: 4
//!     color: "#FFFFFF"
//! ```
//!
//! Settings are fixed once a system is built; nothing here is read again at
//! run time.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::body::{Body, Color};
use crate::error::{NBodyError, Result};
use crate::forces::gravity::circular_speed;
use crate::forces::{DirectGravity, G};
use crate::integrator::IntegratorKind;
use crate::state::NBodySystem;
use crate::vector::Vector2D;

fn default_gravitational_constant() -> f64 {
    G
}

fn default_substeps() -> u32 {
    1
}

/// Physical constants and integration settings of a system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// AU³ M☉⁻¹ year⁻²
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    /// Fixed step in years
    pub time_step: f64,
    /// Added to the squared separation before the square root
    #[serde(default)]
    pub softening: f64,
    /// Number of `update()` calls per rendered frame
    #[serde(default = "default_substeps")]
    pub substeps_per_frame: u32,
    #[serde(default)]
    pub integrator: IntegratorKind,
}

impl SimulationConfig {
    pub fn new(time_step: f64, integrator: IntegratorKind) -> Self {
        Self {
            time_step,
            integrator,
            ..Self::default()
        }
    }

    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    pub fn with_substeps(mut self, substeps_per_frame: u32) -> Self {
        self.substeps_per_frame = substeps_per_frame;
        self
    }

    /// Rejects settings that would only show up later as NaN or infinity
    pub fn validate(&self) -> Result<()> {
        let dt = self.time_step;
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(NBodyError::InvalidTimeStep { dt });
        }

        let softening = self.softening;
        if !(softening >= 0.0 && softening.is_finite()) {
            return Err(NBodyError::InvalidSoftening { softening });
        }

        let g = self.gravitational_constant;
        if !(g > 0.0 && g.is_finite()) {
            return Err(NBodyError::InvalidGravitationalConstant { g });
        }

        if self.substeps_per_frame == 0 {
            return Err(NBodyError::InvalidSubsteps);
        }

        Ok(())
    }

    pub fn gravity(&self) -> DirectGravity {
        DirectGravity::with_softening(self.gravitational_constant, self.softening)
    }
}

impl Default for SimulationConfig {
    /// Leapfrog at 0.001 years per step, no softening, one step per frame
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            time_step: 0.001,
            softening: 0.0,
            substeps_per_frame: 1,
            integrator: IntegratorKind::Leapfrog,
        }
    }
}

/// Circular-orbit shorthand: placed on the +x axis moving in +y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// AU from the origin
    pub distance: f64,
    /// Orbital period in Earth days, 0 for a body at rest
    pub period_days: f64,
}

/// Initial state for a single body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Option<[f64; 2]>, // AU
    #[serde(default)]
    pub velocity: Option<[f64; 2]>, // AU/year
    #[serde(default)]
    pub orbit: Option<OrbitConfig>,
    pub mass: f64,   // Solar masses
    pub radius: f64, // Display radius
    pub color: String,
}

impl BodyConfig {
    /// Body on a circular orbit, the way the built-in presets are described
    pub fn orbiting(
        name: &str,
        distance: f64,
        period_days: f64,
        mass: f64,
        radius: f64,
        color: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            position: None,
            velocity: None,
            orbit: Some(OrbitConfig {
                distance,
                period_days,
            }),
            mass,
            radius,
            color: color.to_string(),
        }
    }

    /// Resolves the initial position and velocity
    ///
    /// An explicit `position` wins over `orbit`; an explicit `velocity` wins
    /// over the orbit's circular speed.
    pub fn initial_state(&self) -> Result<(Vector2D, Vector2D)> {
        let orbit_position = self.orbit.map(|o| Vector2D::new(o.distance, 0.0));
        let orbit_velocity = self
            .orbit
            .map(|o| Vector2D::new(0.0, circular_speed(o.distance, o.period_days)));

        let position = self
            .position
            .map(Vector2D::from)
            .or(orbit_position)
            .ok_or_else(|| NBodyError::InvalidBodyConfig {
                name: self.name.clone(),
                reason: "either `position` or `orbit` is required".to_string(),
            })?;

        let velocity = self
            .velocity
            .map(Vector2D::from)
            .or(orbit_velocity)
            .unwrap_or_default();

        Ok((position, velocity))
    }

    pub fn to_body(&self) -> Result<Body> {
        let (position, velocity) = self.initial_state()?;
        let color = Color::from_hex(&self.color)?;
        Ok(Body::new(self.mass, self.radius, color, position, velocity)?.with_name(&self.name))
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading scenario from {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validates everything and pushes the bodies in file order
    pub fn build(&self) -> Result<NBodySystem> {
        let mut system = NBodySystem::new(self.simulation)?;
        for body in &self.bodies {
            system.push(body.to_body()?)?;
        }
        Ok(system)
    }
}
