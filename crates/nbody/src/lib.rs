//! Planar N-body gravity
//!
//! Direct O(n²) summation of softened Newtonian gravity between a handful of
//! point masses, integrated with symplectic Euler or kick-drift-kick leapfrog.
//! Units are astronomical: AU, solar masses and years, which makes the
//! gravitational constant exactly 4π².

pub mod body;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod presets;
pub mod projection;
pub mod snapshot;
pub mod state;
pub mod vector;

#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod projection_test;

pub use body::{Body, BodyId, Color};
pub use config::{BodyConfig, ScenarioConfig, SimulationConfig};
pub use error::{NBodyError, Result};
pub use integrator::IntegratorKind;
pub use state::NBodySystem;
pub use vector::Vector2D;
