use std::time::Instant;

use crate::configuration::config::{EngineConfig, ScenarioConfig};
use crate::simulation::integrator::Integrator;
use crate::simulation::scenario::Scenario;

/// Time every preset under both integrators and print the cost per step
/// Paste output directly into a spreadsheet to compare
pub fn bench_integrators() {
    let presets = [
        ("gaussian", ScenarioConfig::gaussian_well()),
        ("membrane", ScenarioConfig::membrane()),
        ("orbital", ScenarioConfig::orbital()),
    ];
    let repeats = 20; // runs per (preset, integrator) to smooth noise

    println!("preset,integrator,steps,ns_per_step");

    for (name, base) in presets {
        for integrator in [Integrator::Euler, Integrator::VelocityVerlet] {
            let mut cfg = base.clone();
            cfg.engine = EngineConfig { integrator: Some(integrator) };

            let scenario = match Scenario::build_scenario(&cfg) {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("skipping preset {name}: {e}");
                    continue;
                }
            };

            // Warm up
            let _ = scenario.run();

            let mut total_steps = 0usize;
            let t0 = Instant::now();
            for _ in 0..repeats {
                total_steps += scenario.run().steps_run;
            }
            let elapsed = t0.elapsed().as_secs_f64();
            let ns_per_step = elapsed * 1e9 / total_steps.max(1) as f64;

            println!("{},{},{},{:.1}", name, integrator.name(), total_steps / repeats, ns_per_step);
        }
    }
}
