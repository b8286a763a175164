//! Single planet around a Sun-like star, integrated twice
//!
//! Runs the same slightly eccentric orbit with symplectic Euler and with
//! leapfrog and prints the energy drift of each, once per orbit.
//!
//! Run with: cargo run --package nbody --example simple_orbit

use nbody::forces::gravity::circular_speed;
use nbody::integrator::IntegratorKind;
use nbody::{NBodySystem, Result, SimulationConfig, Vector2D};

const STEPS_PER_ORBIT: u64 = 1000;
const ORBITS: u64 = 10;

fn earth_orbit(integrator: IntegratorKind) -> Result<NBodySystem> {
    let dt = 1.0 / STEPS_PER_ORBIT as f64;
    let mut system = NBodySystem::new(SimulationConfig::new(dt, integrator))?;

    system.add_body(1.0, 30.0, Vector2D::zeros(), Vector2D::zeros())?;
    system.add_body(
        3.003e-6,
        10.0,
        Vector2D::new(1.0, 0.0),
        Vector2D::new(0.0, 0.9 * circular_speed(1.0, 365.0)),
    )?;

    Ok(system)
}

fn main() -> Result<()> {
    println!("Single planet orbit: Euler vs leapfrog\n");
    println!("{}", "=".repeat(60));

    for integrator in [IntegratorKind::Euler, IntegratorKind::Leapfrog] {
        let mut system = earth_orbit(integrator)?;
        let initial_energy = system.total_energy()?;
        let initial_l = system.total_angular_momentum();

        println!("\n{integrator}: dt = {} yr", system.config().time_step);
        println!("  {}", system.energy_readout());

        for orbit in 1..=ORBITS {
            for _ in 0..STEPS_PER_ORBIT {
                system.update()?;
            }

            let planet = &system.bodies()[1];
            let energy_error = ((system.total_energy()? - initial_energy) / initial_energy).abs();
            let l_error = ((system.total_angular_momentum() - initial_l) / initial_l).abs();

            println!(
                "  orbit {:2}: r={:.6} AU, v={:.4} AU/yr, ΔE={:.2e}, ΔL={:.2e}",
                orbit,
                planet.distance_to(&system.bodies()[0]),
                planet.velocity.magnitude(),
                energy_error,
                l_error
            );
        }

        println!("  {}", system.energy_readout());
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}
