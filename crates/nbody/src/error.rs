//! Error type shared by the whole crate

use thiserror::Error;

use crate::body::BodyId;

pub type Result<T> = std::result::Result<T, NBodyError>;

/// Everything that can go wrong while configuring or stepping a system
///
/// All variants except `DegenerateSeparation` are raised while the system is
/// being built. Once a run has started, divergence (NaN or infinite state)
/// is not detected; only an exact zero separation without softening is.
#[derive(Debug, Error)]
pub enum NBodyError {
    #[error("bodies {first} and {second} are at zero separation and no softening is configured")]
    DegenerateSeparation { first: BodyId, second: BodyId },

    #[error("mass must be positive and finite, got {mass}")]
    InvalidMass { mass: f64 },

    #[error("display radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("time step must be positive and finite, got {dt}")]
    InvalidTimeStep { dt: f64 },

    #[error("softening factor must be non-negative and finite, got {softening}")]
    InvalidSoftening { softening: f64 },

    #[error("gravitational constant must be positive and finite, got {g}")]
    InvalidGravitationalConstant { g: f64 },

    #[error("at least one sub-step per frame is required")]
    InvalidSubsteps,

    #[error("a body named {0:?} already exists")]
    DuplicateBody(String),

    #[error("invalid color token {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("body {name:?}: {reason}")]
    InvalidBodyConfig { name: String, reason: String },

    #[error("failed to parse scenario: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("cannot snapshot non-finite {field} of {body}")]
    NonFiniteState { body: String, field: &'static str },

    #[error("failed to encode or decode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
