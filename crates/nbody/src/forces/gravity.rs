//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::error::{NBodyError, Result};
use crate::forces::{ForceModel, G};
use crate::vector::Vector2D;

/// Direct O(N²) gravitational force computation
///
/// Sums the softened inverse-square pull of every other body. The softening
/// factor is added to the squared separation before the square root, so a
/// value of `0.001` bounds the acceleration at roughly `G m / 0.001`.
///
/// With zero softening two bodies at exactly the same position cannot be
/// resolved and produce [`NBodyError::DegenerateSeparation`].
///
/// # Examples
///
/// ```
/// use nbody::forces::{DirectGravity, G};
///
/// let gravity = DirectGravity::new(G);
/// assert_eq!(gravity.softening, 0.0);
///
/// // Softened variant for close encounters
/// let chaotic = DirectGravity::with_softening(G, 0.001);
/// assert_eq!(chaotic.softening, 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectGravity {
    /// Gravitational constant, 4π² in astronomical units
    pub g: f64,
    /// Additive softening under the square root (AU²)
    pub softening: f64,
}

impl DirectGravity {
    /// Creates a new direct gravity force with no softening
    pub fn new(g: f64) -> Self {
        Self { g, softening: 0.0 }
    }

    /// Creates a new direct gravity force with the given softening factor
    pub fn with_softening(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }

    /// Softened distance between two bodies, rejecting exact coincidence
    fn separation(&self, a: &Body, b: &Body) -> Result<f64> {
        let d = a.position.difference(b.position).softened_magnitude(self.softening);
        if d == 0.0 {
            return Err(NBodyError::DegenerateSeparation {
                first: a.id,
                second: b.id,
            });
        }
        Ok(d)
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new(G)
    }
}

impl ForceModel for DirectGravity {
    fn acceleration(&self, idx: usize, bodies: &[Body]) -> Result<Vector2D> {
        let body = &bodies[idx];

        bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .try_fold(Vector2D::zeros(), |acc, (_, other)| -> Result<Vector2D> {
                Ok(acc + body.pairwise_acceleration(other, self)?)
            })
    }

    fn potential_energy(&self, bodies: &[Body]) -> Result<f64> {
        // Each pair counted once
        let mut potential = 0.0;
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                potential -= self.g * a.mass * b.mass / self.separation(a, b)?;
            }
        }
        Ok(potential)
    }
}

/// Speed of a circular orbit of `distance_au` completed in `period_days`
///
/// Uses the Earth year (365 days) as the time unit, so a body at 1 AU with a
/// 365-day period moves at 2π AU/year. A zero period means the body is at
/// rest (the central body of a preset).
///
/// # Examples
///
/// ```
/// use nbody::forces::gravity::circular_speed;
///
/// let earth = circular_speed(1.0, 365.0);
/// assert!((earth - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(circular_speed(0.0, 0.0), 0.0);
/// ```
pub fn circular_speed(distance_au: f64, period_days: f64) -> f64 {
    if period_days == 0.0 {
        return 0.0;
    }
    2.0 * std::f64::consts::PI * distance_au * DAYS_PER_YEAR / period_days
}

/// Length of the reference (Earth) year in days
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Circular speed from Kepler's third law, `sqrt(G M / r)`
pub fn keplerian_speed(central_mass: f64, distance_au: f64) -> f64 {
    (G * central_mass / distance_au).sqrt()
}
