//! Core state types for the ball simulation.
//!
//! - `ParticleState` is the per-step value (position, velocity, last acceleration)
//! - `TrajectoryPoint` is one recorded `(x, y, z)` sample
//! - `TrajectoryResult` is the finished record handed back to callers
//!
//! States are plain `Copy` values: each step produces a new one instead of
//! mutating the old one through setters.

use nalgebra::Vector2;
use serde::Serialize;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleState {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the last force evaluation
}

impl ParticleState {
    /// Fresh state with zero acceleration; the runner primes `a` before stepping
    pub fn new(x: NVec2, v: NVec2) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
        }
    }

    /// Distance from the central body at the origin
    pub fn radius(&self) -> f64 {
        self.x.norm()
    }
}

/// One history sample: position plus surface height at that position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectoryPoint {
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Collided,        // r <= r_center, touched the central body
    Escaped,         // r >= R, left the domain
    BudgetExhausted, // ran all N steps without either of the above
}

impl Termination {
    /// `true` for collision or escape, `false` when the step budget ran out
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Termination::BudgetExhausted)
    }
}

/// Output of a single run. Samples are in temporal order, one per step;
/// the initial state is not part of `points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub points: Vec<TrajectoryPoint>,
    pub steps_run: usize,
    pub initial_state: ParticleState,
    pub final_state: ParticleState,
    pub termination: Termination,
}

impl TrajectoryResult {
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn zs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.z).collect()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }
}
