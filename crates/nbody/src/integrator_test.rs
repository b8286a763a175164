use std::sync::atomic::{AtomicUsize, Ordering};

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::{NBodyError, Result};
use crate::forces::{DirectGravity, ForceModel, G};
use crate::integrator::{Integrator, IntegratorKind, Leapfrog, SymplecticEuler};
use crate::state::NBodySystem;
use crate::vector::Vector2D;

/// Sun at the origin and an Earth-mass planet at 1 AU
///
/// `speed_factor` scales the circular speed; 1.0 gives a circular orbit.
fn make_test_system(integrator: IntegratorKind, speed_factor: f64) -> NBodySystem {
    let mut system = NBodySystem::new(SimulationConfig::new(0.001, integrator)).unwrap();

    // v_circular = sqrt(GM/r) = sqrt(G*1.0/1.0) = 2π AU/year
    let v_circular = (G * 1.0 / 1.0).sqrt();
    system
        .add_body(1.0, 30.0, Vector2D::zeros(), Vector2D::zeros())
        .unwrap();
    system
        .add_body(
            3.0e-6, // Earth mass in solar masses
            10.0,
            Vector2D::new(1.0, 0.0),
            Vector2D::new(0.0, v_circular * speed_factor),
        )
        .unwrap();

    system
}

/// Largest relative deviation of total energy over `n_steps` updates
fn max_energy_error(system: &mut NBodySystem, n_steps: usize) -> f64 {
    let initial = system.total_energy().unwrap();
    let mut worst: f64 = 0.0;
    for _ in 0..n_steps {
        system.update().unwrap();
        let error = ((system.total_energy().unwrap() - initial) / initial).abs();
        worst = worst.max(error);
    }
    worst
}

/// Counts calls to the wrapped force model
struct CountingForce {
    inner: DirectGravity,
    calls: AtomicUsize,
}

impl CountingForce {
    fn new() -> Self {
        Self {
            inner: DirectGravity::new(G),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ForceModel for CountingForce {
    fn acceleration(&self, idx: usize, bodies: &[Body]) -> Result<Vector2D> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.acceleration(idx, bodies)
    }
}

#[test]
fn test_leapfrog_advances_time() {
    let mut system = make_test_system(IntegratorKind::Leapfrog, 1.0);
    let force = DirectGravity::default();

    assert_eq!(system.time(), 0.0);

    Leapfrog.step(&mut system, 0.01, &force).unwrap();

    assert!((system.time() - 0.01).abs() < 1e-15);
    assert_eq!(system.steps(), 1);
}

#[test]
fn test_leapfrog_changes_position() {
    let mut system = make_test_system(IntegratorKind::Leapfrog, 1.0);
    let initial_pos = system.bodies()[1].position;

    Leapfrog
        .step(&mut system, 0.01, &DirectGravity::default())
        .unwrap();

    let final_pos = system.bodies()[1].position;
    assert!((final_pos - initial_pos).magnitude() > 0.0);
}

#[test]
fn test_euler_first_step_by_hand() {
    let mut system = make_test_system(IntegratorKind::Euler, 1.0);
    let dt = 0.001;

    SymplecticEuler
        .step(&mut system, dt, &DirectGravity::default())
        .unwrap();

    // Planet: a = (-G, 0), v = (-G dt, 2π), x = (1 - G dt², 2π dt)
    let planet = &system.bodies()[1];
    assert_eq!(planet.acceleration, Vector2D::new(-G, 0.0));
    assert_eq!(planet.velocity, Vector2D::new(-G * dt, G.sqrt()));
    assert!((planet.position.x() - (1.0 - G * dt * dt)).abs() < 1e-15);
    assert!((planet.position.y() - G.sqrt() * dt).abs() < 1e-15);

    // Sun: a = (G * 3e-6, 0)
    let sun = &system.bodies()[0];
    assert!((sun.acceleration.x() - G * 3.0e-6).abs() < 1e-18);
}

#[test]
fn test_pass_counts_per_step() {
    let mut system = make_test_system(IntegratorKind::Euler, 1.0);
    let n = system.len();

    let euler_force = CountingForce::new();
    SymplecticEuler.step(&mut system, 0.001, &euler_force).unwrap();
    assert_eq!(euler_force.calls(), n);

    let leapfrog_force = CountingForce::new();
    Leapfrog.step(&mut system, 0.001, &leapfrog_force).unwrap();
    assert_eq!(leapfrog_force.calls(), 2 * n);
}

#[test]
fn test_leapfrog_ignores_stale_acceleration() {
    let mut clean = make_test_system(IntegratorKind::Leapfrog, 1.0);
    let mut stale = make_test_system(IntegratorKind::Leapfrog, 1.0);
    for body in stale.bodies_mut() {
        body.acceleration = Vector2D::new(1e9, -1e9);
    }

    clean.update().unwrap();
    stale.update().unwrap();

    assert_eq!(clean.bodies(), stale.bodies());
}

#[test]
fn test_leapfrog_circular_orbit() {
    let mut system = make_test_system(IntegratorKind::Leapfrog, 1.0);

    // One orbit at 1 AU around one solar mass takes one year
    let n_steps = 1000;
    Leapfrog
        .integrate(&mut system, 0.001, n_steps, &DirectGravity::default())
        .unwrap();

    let bodies = system.bodies();
    let r = bodies[0].distance_to(&bodies[1]);
    let error = (r - 1.0).abs();
    assert!(error < 1e-3, "Radius error: {:.2e}", error);
}

#[test]
fn test_leapfrog_conserves_energy() {
    let mut system = make_test_system(IntegratorKind::Leapfrog, 1.0);

    // Five orbits
    let error = max_energy_error(&mut system, 5000);
    assert!(error < 1e-4, "Energy error: {:.2e}", error);
}

#[test]
fn test_leapfrog_conserves_angular_momentum() {
    let mut system = make_test_system(IntegratorKind::Leapfrog, 1.0);
    let initial_l = system.total_angular_momentum();

    Leapfrog
        .integrate(&mut system, 0.01, 100, &DirectGravity::default())
        .unwrap();

    let final_l = system.total_angular_momentum();

    // Angular momentum should be conserved to machine precision
    let error = (final_l - initial_l).abs() / initial_l.abs();
    assert!(error < 1e-10, "Angular momentum error: {:.2e}", error);
}

#[test]
fn test_euler_drifts_more_than_leapfrog_on_circular_orbit() {
    let mut euler = make_test_system(IntegratorKind::Euler, 1.0);
    let mut leapfrog = make_test_system(IntegratorKind::Leapfrog, 1.0);

    // Ten orbits at a thousand steps each
    let euler_error = max_energy_error(&mut euler, 10_000);
    let leapfrog_error = max_energy_error(&mut leapfrog, 10_000);

    assert!(leapfrog_error < 1e-8, "Leapfrog error: {:.2e}", leapfrog_error);
    assert!(euler_error > 1e-6, "Euler error: {:.2e}", euler_error);
    assert!(
        euler_error > 1000.0 * leapfrog_error,
        "Euler {:.2e} vs leapfrog {:.2e}",
        euler_error,
        leapfrog_error
    );
}

#[test]
fn test_euler_drifts_more_than_leapfrog_on_eccentric_orbit() {
    // 80% of circular speed: aphelion at 1 AU, perihelion near 0.47 AU
    let mut euler = make_test_system(IntegratorKind::Euler, 0.8);
    let mut leapfrog = make_test_system(IntegratorKind::Leapfrog, 0.8);

    // About three orbits
    let euler_error = max_energy_error(&mut euler, 2000);
    let leapfrog_error = max_energy_error(&mut leapfrog, 2000);

    assert!(leapfrog_error < 1e-3, "Leapfrog error: {:.2e}", leapfrog_error);
    assert!(
        euler_error > 5.0 * leapfrog_error,
        "Euler {:.2e} vs leapfrog {:.2e}",
        euler_error,
        leapfrog_error
    );
}

#[test]
fn test_integrate_returns_final_time() {
    let mut system = make_test_system(IntegratorKind::Euler, 1.0);
    let t = SymplecticEuler
        .integrate(&mut system, 0.002, 10, &DirectGravity::default())
        .unwrap();

    assert!((t - 0.02).abs() < 1e-15);
    assert_eq!(system.steps(), 10);
}

#[test]
fn test_degenerate_separation_aborts_step() {
    let mut system = make_test_system(IntegratorKind::Leapfrog, 1.0);
    system.bodies_mut()[1].position = Vector2D::zeros();

    let result = system.update();
    assert!(matches!(result, Err(NBodyError::DegenerateSeparation { .. })));
    assert_eq!(system.steps(), 0);
}

#[test]
fn test_integrator_kind_selects_scheme() {
    let mut via_kind = make_test_system(IntegratorKind::Euler, 1.0);
    let mut direct = make_test_system(IntegratorKind::Euler, 1.0);

    via_kind.update().unwrap();
    SymplecticEuler
        .step(&mut direct, 0.001, &DirectGravity::default())
        .unwrap();

    assert_eq!(via_kind.bodies(), direct.bodies());
}

#[test]
fn test_integrator_kind_serde_names() {
    assert_eq!(
        serde_json::to_string(&IntegratorKind::Euler).unwrap(),
        "\"euler\""
    );
    let parsed: IntegratorKind = serde_json::from_str("\"leapfrog\"").unwrap();
    assert_eq!(parsed, IntegratorKind::Leapfrog);
    assert_eq!(IntegratorKind::default(), IntegratorKind::Leapfrog);
}
