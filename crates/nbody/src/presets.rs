//! Built-in scenarios
//!
//! Three configurations share the same engine and differ only in bodies,
//! integrator and sub-steps per frame:
//!
//! - [`three_body`]: a star, an Earth-like planet and a close companion just
//!   outside its orbit. Softened, because the two light bodies pass very
//!   close to each other.
//! - [`solar_system`]: the Sun and eight planets with symplectic Euler, one
//!   step per frame.
//! - [`solar_system_leapfrog`]: the same bodies with leapfrog and ten thousand
//!   tiny steps per frame, for the energy read-out.
//!
//! Every body starts on the +x axis with the circular speed implied by its
//! year length, moving in +y.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{BodyConfig, ScenarioConfig, SimulationConfig};
use crate::integrator::IntegratorKind;
use crate::projection::RenderMode;

/// A scenario together with how it is meant to be looked at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub scenario: ScenarioConfig,
    pub render_mode: RenderMode,
    /// Pixels per (log-)AU
    pub pixel_scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    ThreeBody,
    SolarSystem,
    SolarSystemLeapfrog,
}

impl PresetKind {
    pub const ALL: [PresetKind; 3] = [
        PresetKind::ThreeBody,
        PresetKind::SolarSystem,
        PresetKind::SolarSystemLeapfrog,
    ];

    pub fn preset(&self) -> Preset {
        match self {
            PresetKind::ThreeBody => three_body(),
            PresetKind::SolarSystem => solar_system(),
            PresetKind::SolarSystemLeapfrog => solar_system_leapfrog(),
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PresetKind::ThreeBody => "three-body",
            PresetKind::SolarSystem => "solar-system",
            PresetKind::SolarSystemLeapfrog => "solar-system-leapfrog",
        };
        f.write_str(name)
    }
}

impl FromStr for PresetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| format!("unknown preset {s:?}"))
    }
}

pub fn three_body() -> Preset {
    let simulation = SimulationConfig::new(0.001, IntegratorKind::Euler).with_softening(0.001);

    let bodies = vec![
        BodyConfig::orbiting("star", 0.0, 365.0, 1.0, 30.0, "#FDB813"),
        BodyConfig::orbiting("planet", 1.0, 365.0, 3.003e-6, 10.0, "#0F5720"),
        BodyConfig::orbiting("companion", 1.00257, 365.0, 3.69432e-8, 5.0, "#FF7E47"),
    ];

    Preset {
        scenario: ScenarioConfig { simulation, bodies },
        render_mode: RenderMode::Log,
        pixel_scale: 1800.0,
    }
}

/// Sun and planets: (name, distance AU, year length days, mass M☉, radius, color)
const SOLAR_BODIES: [(&str, f64, f64, f64, f64, &str); 9] = [
    ("sun", 0.0, 0.0, 1.0, 30.0, "#FDB813"),
    ("mercury", 0.4, 88.0, 1.656e-7, 17.0, "#B7B8B9"),
    ("venus", 0.72, 225.0, 2.447e-6, 19.0, "#928590"),
    ("earth", 1.0, 365.0, 3.003e-6, 20.0, "#0F5720"),
    ("mars", 1.5, 687.0, 3.213e-7, 18.0, "#FF7E47"),
    ("jupiter", 5.2, 4333.0, 9.546e-4, 25.0, "#EBF3F6"),
    ("saturn", 9.0, 10759.0, 2.857e-4, 24.0, "#E2BF7D"),
    ("uranus", 19.0, 30687.0, 4.365e-5, 23.0, "#ACE5EE"),
    ("neptune", 30.1, 60190.0, 5.149e-5, 22.0, "#2E5D9D"),
];

fn solar_bodies() -> Vec<BodyConfig> {
    SOLAR_BODIES
        .iter()
        .map(|&(name, distance, period, mass, radius, color)| {
            BodyConfig::orbiting(name, distance, period, mass, radius, color)
        })
        .collect()
}

pub fn solar_system() -> Preset {
    Preset {
        scenario: ScenarioConfig {
            simulation: SimulationConfig::new(0.001, IntegratorKind::Euler),
            bodies: solar_bodies(),
        },
        render_mode: RenderMode::LogRelative,
        pixel_scale: 350.0,
    }
}

pub fn solar_system_leapfrog() -> Preset {
    let simulation =
        SimulationConfig::new(0.000001, IntegratorKind::Leapfrog).with_substeps(10_000);

    Preset {
        scenario: ScenarioConfig {
            simulation,
            bodies: solar_bodies(),
        },
        render_mode: RenderMode::LogRelative,
        pixel_scale: 350.0,
    }
}
