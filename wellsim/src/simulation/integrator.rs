//! Fixed-step time integrators for the ball
//!
//! Provides explicit Euler (slope descent, damped convergence to a rest point)
//! and velocity-Verlet (orbital motion, where energy drift would be visible),
//! both driven by an `AccelSet`. Each step takes a state by value and returns
//! the next one.

use serde::Deserialize;

use super::forces::AccelSet;
use super::states::ParticleState;

/// Which integration scheme the runner uses
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrator {
    #[serde(rename = "euler")] // explicit Euler, velocity updated before position
    Euler,

    #[serde(rename = "verlet")] // velocity-Verlet, acceleration carried between steps
    VelocityVerlet,
}

impl Integrator {
    /// Advance `state` by one step of size `dt`
    pub fn step(&self, state: ParticleState, forces: &AccelSet, dt: f64) -> ParticleState {
        match self {
            Integrator::Euler => euler_step(state, forces, dt),
            Integrator::VelocityVerlet => verlet_step(state, forces, dt),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Integrator::Euler => "euler",
            Integrator::VelocityVerlet => "verlet",
        }
    }
}

/// One explicit Euler step
/// a_n from (x_n, v_n), then v_n+1 = v_n + dt a_n and x_n+1 = x_n + dt v_n+1
pub fn euler_step(state: ParticleState, forces: &AccelSet, dt: f64) -> ParticleState {
    let a = forces.accumulate(&state.x, &state.v);

    let v = state.v + dt * a;
    let x = state.x + dt * v;

    ParticleState { x, v, a }
}

/// One velocity-Verlet step
/// Uses `state.a` as a_n; the caller primes it once before the first step
pub fn verlet_step(state: ParticleState, forces: &AccelSet, dt: f64) -> ParticleState {
    let half_dt = 0.5 * dt;
    let a = state.a;

    // Drift: x_n+1 = x_n + dt v_n + (dt^2 / 2) a_n
    let x = state.x + dt * state.v + (half_dt * dt) * a;

    // Kick: v_n+1/2 = v_n + (dt/2) a_n
    let v_half = state.v + half_dt * a;

    // a_n+1 from the new position and the half-step velocity (drag needs a velocity)
    let a_next = forces.accumulate(&x, &v_half);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
    let v = v_half + half_dt * a_next;

    ParticleState { x, v, a: a_next }
}
