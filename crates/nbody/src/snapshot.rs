//! Serializable copy of a running system
//!
//! A snapshot carries everything the next step depends on, so restoring one
//! and continuing gives the same trajectory, bit for bit, as never stopping.
//! JSON encoding goes through `serde_json` with exact float round-tripping.
//! JSON has no NaN or infinity, so a diverged state is refused at encoding
//! time instead of being written as `null`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::{NBodyError, Result};
use crate::state::NBodySystem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub time: f64,
    pub steps: u64,
    pub config: SimulationConfig,
    pub bodies: Vec<Body>,
}

impl SystemSnapshot {
    pub fn to_json(&self) -> Result<String> {
        self.check_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fails on the first NaN or infinite value that JSON cannot carry
    pub fn check_finite(&self) -> Result<()> {
        let non_finite = |body: String, field| NBodyError::NonFiniteState { body, field };

        if !self.time.is_finite() {
            return Err(non_finite("system".to_string(), "time"));
        }

        for body in &self.bodies {
            let fields = [
                ("mass", body.mass.is_finite()),
                ("radius", body.radius.is_finite()),
                ("position", body.position.is_finite()),
                ("velocity", body.velocity.is_finite()),
                ("acceleration", body.acceleration.is_finite()),
            ];
            if let Some((field, _)) = fields.into_iter().find(|(_, finite)| !finite) {
                return Err(non_finite(body.label(), field));
            }
        }

        Ok(())
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

impl NBodySystem {
    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            time: self.time(),
            steps: self.steps(),
            config: *self.config(),
            bodies: self.bodies().to_vec(),
        }
    }

    /// Rebuilds a system from a snapshot, re-running all validation
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::config::SimulationConfig;
    /// use nbody::snapshot::SystemSnapshot;
    /// use nbody::state::NBodySystem;
    /// use nbody::vector::Vector2D;
    ///
    /// let mut system = NBodySystem::new(SimulationConfig::default()).unwrap();
    /// system.add_body(1.0, 30.0, Vector2D::zeros(), Vector2D::zeros()).unwrap();
    /// system.add_body(3.0e-6, 10.0, Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 6.28)).unwrap();
    /// system.update().unwrap();
    ///
    /// let json = system.snapshot().to_json().unwrap();
    /// let restored = NBodySystem::restore(SystemSnapshot::from_json(&json).unwrap()).unwrap();
    /// assert_eq!(restored.bodies(), system.bodies());
    /// assert_eq!(restored.time(), system.time());
    /// ```
    pub fn restore(snapshot: SystemSnapshot) -> Result<Self> {
        let mut system = NBodySystem::new(snapshot.config)?;
        for body in snapshot.bodies {
            system.push(body)?;
        }
        system.set_clock(snapshot.time, snapshot.steps);
        debug!(
            "restored {} bodies at t={} (step {})",
            system.len(),
            system.time(),
            system.steps()
        );
        Ok(system)
    }
}
