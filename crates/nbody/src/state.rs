use log::{debug, trace};

use crate::body::{Body, BodyId, Color};
use crate::config::SimulationConfig;
use crate::error::{NBodyError, Result};
use crate::forces::{DirectGravity, ForceModel};
use crate::vector::Vector2D;

/// Complete state of an N-body system at a given time
///
/// Bodies are owned by value in insertion order. The index of a body is its
/// identity: self-exclusion during the force pass is an index comparison, and
/// body 0 is the reference body for relative rendering.
#[derive(Debug, Clone)]
pub struct NBodySystem {
    config: SimulationConfig,
    gravity: DirectGravity,
    bodies: Vec<Body>,
    /// Current simulation time in years
    time: f64,
    /// Number of completed `update()` calls
    steps: u64,
}

impl NBodySystem {
    /// Creates an empty system after validating the configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::config::SimulationConfig;
    /// use nbody::error::NBodyError;
    /// use nbody::integrator::IntegratorKind;
    /// use nbody::state::NBodySystem;
    ///
    /// let system = NBodySystem::new(SimulationConfig::default()).unwrap();
    /// assert!(system.is_empty());
    /// assert_eq!(system.time(), 0.0);
    ///
    /// let bad = SimulationConfig::new(0.0, IntegratorKind::Euler);
    /// assert!(matches!(
    ///     NBodySystem::new(bad),
    ///     Err(NBodyError::InvalidTimeStep { .. })
    /// ));
    /// ```
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "new system: integrator={} dt={} softening={} substeps={}",
            config.integrator, config.time_step, config.softening, config.substeps_per_frame
        );

        Ok(Self {
            config,
            gravity: config.gravity(),
            bodies: Vec::new(),
            time: 0.0,
            steps: 0,
        })
    }

    /// Appends a body and returns the id it was given
    ///
    /// The id is the insertion index. Rejects invalid mass or radius, a name
    /// already in use, and (without softening) a body placed exactly on top of
    /// an existing one.
    pub fn push(&mut self, mut body: Body) -> Result<BodyId> {
        body.validate()?;

        let id = BodyId(self.bodies.len() as u32);
        body.id = id;

        if !body.name.is_empty() && self.bodies.iter().any(|b| b.name == body.name) {
            return Err(NBodyError::DuplicateBody(body.name));
        }

        if self.gravity.softening == 0.0 {
            if let Some(other) = self.bodies.iter().find(|b| b.position == body.position) {
                return Err(NBodyError::DegenerateSeparation {
                    first: other.id,
                    second: id,
                });
            }
        }

        debug!(
            "push body {} ({}) m={} at {} moving {}",
            id,
            body.label(),
            body.mass,
            body.position,
            body.velocity
        );
        self.bodies.push(body);
        Ok(id)
    }

    /// Adds a new unnamed white body and returns its ID
    ///
    /// # Arguments
    ///
    /// * `mass` - Body mass in solar masses
    /// * `radius` - Display radius
    /// * `position` - Position in AU
    /// * `velocity` - Velocity in AU/year
    pub fn add_body(
        &mut self,
        mass: f64,
        radius: f64,
        position: Vector2D,
        velocity: Vector2D,
    ) -> Result<BodyId> {
        self.push(Body::new(mass, radius, Color::WHITE, position, velocity)?)
    }

    /// Advances the system by one time step with the configured integrator
    pub fn update(&mut self) -> Result<()> {
        let integrator = self.config.integrator.integrator();
        let dt = self.config.time_step;
        let gravity = self.gravity;
        integrator.step(self, dt, &gravity)?;
        trace!("step {} t={}", self.steps, self.time);
        Ok(())
    }

    /// Runs `substeps_per_frame` updates, the work done between two renders
    pub fn advance_frame(&mut self) -> Result<()> {
        for _ in 0..self.config.substeps_per_frame {
            self.update()?;
        }
        Ok(())
    }

    /// Moves the clock forward after an integrator step
    pub(crate) fn advance_clock(&mut self, dt: f64) {
        self.time += dt;
        self.steps += 1;
    }

    /// Total kinetic energy of all bodies
    ///
    /// This is the "Energy" readout. It deliberately leaves out gravitational
    /// potential energy, so it is not conserved even by a perfect integrator.
    /// Use [`NBodySystem::total_energy`] to check conservation.
    pub fn energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Pairwise gravitational potential energy, with the configured softening
    pub fn potential_energy(&self) -> Result<f64> {
        self.gravity.potential_energy(&self.bodies)
    }

    /// Kinetic plus potential energy
    pub fn total_energy(&self) -> Result<f64> {
        Ok(self.energy() + self.potential_energy()?)
    }

    /// Returns the total momentum of all bodies
    ///
    /// Zero drift is expected for an isolated system
    pub fn total_momentum(&self) -> Vector2D {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2D::zeros(), |acc, p| acc + p)
    }

    /// Returns the total angular momentum of all bodies about the origin
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .sum()
    }

    /// Mass-weighted mean position, `None` for an empty system
    pub fn center_of_mass(&self) -> Option<Vector2D> {
        if self.bodies.is_empty() {
            return None;
        }

        let total_mass: f64 = self.bodies.iter().map(|b| b.mass).sum();
        let weighted = self
            .bodies
            .iter()
            .fold(Vector2D::zeros(), |acc, b| acc + b.position * b.mass);
        Some(weighted / total_mass)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn gravity(&self) -> &DirectGravity {
        &self.gravity
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Direct access for integrators; mass and radius are not re-validated
    ///
    /// Only the crate's own integrators write body state. Outside callers
    /// cannot reach it:
    ///
    /// ```compile_fail
    /// use nbody::config::SimulationConfig;
    /// use nbody::state::NBodySystem;
    ///
    /// let mut system = NBodySystem::new(SimulationConfig::default()).unwrap();
    /// system.bodies_mut();
    /// ```
    ///
    /// ```compile_fail
    /// use nbody::config::SimulationConfig;
    /// use nbody::state::NBodySystem;
    ///
    /// let mut system = NBodySystem::new(SimulationConfig::default()).unwrap();
    /// system.advance_clock(1.0);
    /// ```
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_by_id(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index()).filter(|b| b.id == id)
    }

    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn positions(&self) -> Vec<Vector2D> {
        self.bodies.iter().map(|b| b.position).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Restores the clock of a resumed run
    pub(crate) fn set_clock(&mut self, time: f64, steps: u64) {
        self.time = time;
        self.steps = steps;
    }
}
