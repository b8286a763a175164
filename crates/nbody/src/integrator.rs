//! Time integration for N-body systems
//!
//! Two fixed-step schemes are provided. `SymplecticEuler` does one
//! acceleration pass and one integration pass per step. `Leapfrog` uses the
//! kick-drift-kick form with two of each, and keeps the energy error bounded
//! over long runs.
//!
//! Every pass over the bodies completes before the next one starts: all
//! accelerations are collected from an immutable view of the bodies before any
//! of them is written, and no body drifts before every body has been kicked.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::forces::ForceModel;
use crate::state::NBodySystem;

/// A time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `system` - Current system (modified in place)
    /// * `dt` - Timestep in years
    /// * `force` - Force model to compute accelerations
    ///
    /// If the force model fails part-way, the step is abandoned and the
    /// system holds whatever the completed passes wrote.
    fn step(&self, system: &mut NBodySystem, dt: f64, force: &dyn ForceModel) -> Result<()>;

    /// Advance the system by multiple timesteps
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        system: &mut NBodySystem,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Result<f64> {
        for _ in 0..n_steps {
            self.step(system, dt, force)?;
        }
        Ok(system.time())
    }
}

/// Which integrator a system steps with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegratorKind {
    /// Symplectic Euler, one force evaluation per step
    Euler,
    /// Kick-drift-kick leapfrog, two force evaluations per step
    #[default]
    Leapfrog,
}

impl IntegratorKind {
    pub fn integrator(&self) -> &'static dyn Integrator {
        match self {
            IntegratorKind::Euler => &SymplecticEuler,
            IntegratorKind::Leapfrog => &Leapfrog,
        }
    }
}

impl fmt::Display for IntegratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegratorKind::Euler => write!(f, "euler"),
            IntegratorKind::Leapfrog => write!(f, "leapfrog"),
        }
    }
}

/// Recompute every body's acceleration from the current positions
fn update_accelerations(system: &mut NBodySystem, force: &dyn ForceModel) -> Result<()> {
    let accelerations = force.accelerations(system.bodies())?;

    system
        .bodies_mut()
        .iter_mut()
        .zip(accelerations)
        .for_each(|(body, accel)| body.acceleration = accel);

    Ok(())
}

/// Symplectic leapfrog integrator (2nd order, kick-drift-kick)
///
/// 1. Kick: v(t + dt/2) = v(t) + a(t) * dt/2
/// 2. Drift: x(t + dt) = x(t) + v(t + dt/2) * dt
/// 3. Kick: v(t + dt) = v(t + dt/2) + a(t + dt) * dt/2
///
/// `a(t)` is always recomputed at the start of the step, so the acceleration
/// left on the bodies by a previous step (or a fresh zero) is never used.
///
/// # Examples
///
/// ```
/// use nbody::config::SimulationConfig;
/// use nbody::forces::DirectGravity;
/// use nbody::integrator::{Integrator, Leapfrog};
/// use nbody::state::NBodySystem;
/// use nbody::vector::Vector2D;
///
/// let mut system = NBodySystem::new(SimulationConfig::default()).unwrap();
/// system.add_body(1.0, 30.0, Vector2D::zeros(), Vector2D::zeros()).unwrap();
/// system.add_body(3.0e-6, 10.0, Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 6.28)).unwrap();
///
/// let force = DirectGravity::default();
/// Leapfrog.step(&mut system, 0.01, &force).unwrap();
/// assert!(system.time() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl Leapfrog {
    fn kick(system: &mut NBodySystem, dt_half: f64) {
        system
            .bodies_mut()
            .iter_mut()
            .for_each(|body| body.kick(dt_half));
    }

    fn drift(system: &mut NBodySystem, dt: f64) {
        system
            .bodies_mut()
            .iter_mut()
            .for_each(|body| body.drift(dt));
    }
}

impl Integrator for Leapfrog {
    fn step(&self, system: &mut NBodySystem, dt: f64, force: &dyn ForceModel) -> Result<()> {
        update_accelerations(system, force)?;
        Self::kick(system, dt / 2.0);
        Self::drift(system, dt);

        // Positions moved, so the second kick needs fresh accelerations
        update_accelerations(system, force)?;
        Self::kick(system, dt / 2.0);

        system.advance_clock(dt);
        Ok(())
    }
}

/// Symplectic (semi-implicit) Euler integrator, 1st order
///
/// `v += a dt` then `x += v dt` with the updated velocity. Cheaper than
/// leapfrog per step but its energy error is first order in `dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn step(&self, system: &mut NBodySystem, dt: f64, force: &dyn ForceModel) -> Result<()> {
        update_accelerations(system, force)?;

        system
            .bodies_mut()
            .iter_mut()
            .for_each(|body| body.euler_step(dt));

        system.advance_clock(dt);
        Ok(())
    }
}
