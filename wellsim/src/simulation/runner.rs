//! Time-stepping loop and termination checks
//!
//! One run: prime the acceleration, then per step
//! integrate -> record `(x, y, h)` -> check escape, then collision.
//! The terminal sample is always recorded before the loop stops, and the
//! step budget bounds the loop no matter what.
//!
//! Each sample's `z` is the height at the post-step position, not the pre-step one.

use crate::simulation::field::FieldModel;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{ParticleState, Termination, TrajectoryPoint, TrajectoryResult};

/// Upper bound on the history reserved up front; longer runs grow the buffer as needed
const MAX_PREALLOC: usize = 4096;

/// Run `scenario` from its initial state
pub fn run(scenario: &Scenario) -> TrajectoryResult {
    run_from(scenario, scenario.initial)
}

/// Run `scenario` from an arbitrary starting state (positions are not clamped here)
pub fn run_from(scenario: &Scenario, start: ParticleState) -> TrajectoryResult {
    let params = &scenario.parameters;
    let dt = params.dt;

    // Verlet needs a_0 before its first drift
    let mut state = ParticleState {
        a: scenario.forces.accumulate(&start.x, &start.v),
        ..start
    };
    let initial_state = state;

    let mut points = Vec::with_capacity(params.steps.min(MAX_PREALLOC));
    let mut termination = Termination::BudgetExhausted;

    while points.len() < params.steps {
        state = scenario.integrator.step(state, &scenario.forces, dt);

        points.push(TrajectoryPoint {
            x: state.x.x,
            y: state.x.y,
            z: scenario.field.height(&state.x),
        });

        if let Some(end) = classify(state.radius(), params) {
            termination = end;
            break;
        }
    }

    let steps_run = points.len();
    log::info!(
        "run finished: {:?} after {} of {} steps (r = {:.6})",
        termination,
        steps_run,
        params.steps,
        state.radius()
    );

    TrajectoryResult {
        points,
        steps_run,
        initial_state,
        final_state: state,
        termination,
    }
}

/// Terminal condition for a radius, escape checked first
pub fn classify(r: f64, params: &Parameters) -> Option<Termination> {
    if r >= params.boundary_radius {
        Some(Termination::Escaped)
    } else if r <= params.center_radius {
        Some(Termination::Collided)
    } else {
        None
    }
}
