//! Observational read-outs: per-body dumps and the energy line
//!
//! Nothing in here feeds back into the simulation.

use log::{debug, warn};
use serde::Serialize;
use std::fmt;

use crate::body::{Body, BodyId, Color};
use crate::state::NBodySystem;
use crate::vector::Vector2D;

/// Snapshot of one body's state for printing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyReport {
    pub id: BodyId,
    pub name: String,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
}

impl From<&Body> for BodyReport {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            name: body.label(),
            position: body.position,
            velocity: body.velocity,
            acceleration: body.acceleration,
            mass: body.mass,
            radius: body.radius,
            color: body.color,
        }
    }
}

impl fmt::Display for BodyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id: {} ({})", self.id, self.name)?;
        writeln!(f, "position: {}", self.position)?;
        writeln!(f, "velocity: {}", self.velocity)?;
        writeln!(f, "acceleration: {}", self.acceleration)?;
        writeln!(f, "mass: {}", self.mass)?;
        writeln!(f, "radius: {}", self.radius)?;
        write!(f, "color: {}", self.color)
    }
}

/// Energy line shown next to the frame counter
///
/// `kinetic` is the headline "Energy" figure. `potential` and `total` are
/// `None` when the potential cannot be evaluated (coincident bodies without
/// softening).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyReadout {
    pub time: f64,
    pub steps: u64,
    pub kinetic: f64,
    pub potential: Option<f64>,
    pub total: Option<f64>,
}

impl fmt::Display for EnergyReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:.6} yr step={} Energy: {:e}",
            self.time, self.steps, self.kinetic
        )?;
        if let (Some(potential), Some(total)) = (self.potential, self.total) {
            write!(f, " (potential {:e}, total {:e})", potential, total)?;
        }
        Ok(())
    }
}

impl NBodySystem {
    /// One report per body, in insertion order
    pub fn report(&self) -> Vec<BodyReport> {
        let reports: Vec<BodyReport> = self.bodies().iter().map(BodyReport::from).collect();
        for report in &reports {
            debug!(
                "{} pos={} vel={} acc={}",
                report.name, report.position, report.velocity, report.acceleration
            );
        }
        reports
    }

    pub fn energy_readout(&self) -> EnergyReadout {
        let kinetic = self.energy();
        let potential = self.potential_energy().ok();
        let readout = EnergyReadout {
            time: self.time(),
            steps: self.steps(),
            kinetic,
            potential,
            total: potential.map(|p| kinetic + p),
        };

        // Divergence is reported, never repaired
        if !kinetic.is_finite() || potential.is_some_and(|p| !p.is_finite()) {
            warn!("non-finite energy at step {}: {}", readout.steps, readout);
        }

        readout
    }
}
