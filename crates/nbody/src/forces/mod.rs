//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the direct pairwise
//! gravity implementation used by the integrators.

use crate::body::Body;
use crate::error::Result;
use crate::vector::Vector2D;

pub mod gravity;


pub use gravity::DirectGravity;

/// Gravitational constant in AU³ M☉⁻¹ year⁻²
///
/// With distances in AU, masses in solar masses and time in years the constant
/// is exactly 4π².
pub const G: f64 = 4.0 * std::f64::consts::PI * std::f64::consts::PI;

/// A source of acceleration on bodies in an N-body system
///
/// # Examples
///
/// ```
/// use nbody::body::{Body, Color};
/// use nbody::forces::{DirectGravity, ForceModel, G};
/// use nbody::vector::Vector2D;
///
/// let bodies = vec![
///     Body::new(1.0, 30.0, Color::WHITE, Vector2D::zeros(), Vector2D::zeros()).unwrap(),
///     Body::new(3.0e-6, 10.0, Color::WHITE, Vector2D::new(1.0, 0.0), Vector2D::zeros()).unwrap(),
/// ];
///
/// let gravity = DirectGravity::new(G);
/// let accel = gravity.acceleration(1, &bodies).unwrap();
///
/// // Pulled back towards the heavy body at the origin
/// assert!(accel.x() < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Acceleration on the body at `idx` from every other body in `bodies`
    ///
    /// Returns AU/year².
    fn acceleration(&self, idx: usize, bodies: &[Body]) -> Result<Vector2D>;

    /// Potential energy of the whole configuration in M☉ AU² year⁻²
    ///
    /// Default implementation returns 0.0 for models without a potential.
    fn potential_energy(&self, _bodies: &[Body]) -> Result<f64> {
        Ok(0.0)
    }

    /// One full acceleration pass, in insertion order
    fn accelerations(&self, bodies: &[Body]) -> Result<Vec<Vector2D>> {
        (0..bodies.len())
            .map(|i| self.acceleration(i, bodies))
            .collect()
    }
}
