//! The shipped scenario files load, build and run a frame.

use nbody::presets::{three_body, PresetKind};
use nbody::ScenarioConfig;
use std::path::PathBuf;

fn scenario(name: &str) -> ScenarioConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name);
    ScenarioConfig::from_path(&path).unwrap()
}

#[test]
fn shipped_scenarios_run_a_frame() {
    for name in ["three_body.yaml", "solar_system.yaml", "binary_star.yaml"] {
        let mut system = scenario(name).build().unwrap();
        system.advance_frame().unwrap();

        assert_eq!(system.steps(), u64::from(system.config().substeps_per_frame));
        assert!(system.energy().is_finite(), "{name}");
        assert!(system.total_energy().unwrap().is_finite(), "{name}");
    }
}

#[test]
fn three_body_file_matches_preset() {
    assert_eq!(scenario("three_body.yaml"), three_body().scenario);
}

#[test]
fn solar_system_file_has_the_preset_bodies() {
    let file = scenario("solar_system.yaml");
    let preset = PresetKind::SolarSystem.preset().scenario;
    assert_eq!(file.bodies, preset.bodies);
}

#[test]
fn binary_stars_keep_their_separation() {
    let mut system = scenario("binary_star.yaml").build().unwrap();
    for _ in 0..20 {
        system.advance_frame().unwrap();
    }

    let [alpha, beta] = [&system.bodies()[0], &system.bodies()[1]];
    assert!((alpha.distance_to(beta) - 1.0).abs() < 1e-3);
    assert!(system.center_of_mass().unwrap().magnitude() < 1e-12);
}
