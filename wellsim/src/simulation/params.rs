//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - step size and step budget (`dt`, `steps`),
//! - gravity magnitude and linear friction (`g`, `friction`),
//! - central-body radius and outer boundary (`center_radius`, `boundary_radius`)
//!
//! The named defaults below are the single source of the reference values;
//! nothing in the crate keeps process-wide mutable constants.

/// Floor applied to every radius, sigma, tension or mass used as a divisor
pub const EPS: f64 = 1e-12;

/// Distance kept from the boundary when a start position is clamped inward
pub const CLAMP_MARGIN: f64 = 1e-6;

pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_STEPS: usize = 4000;
pub const DEFAULT_GRAVITY: f64 = 9.81; // m/s^2
pub const DEFAULT_FRICTION: f64 = 0.05; // s^-1
pub const DEFAULT_BOUNDARY_RADIUS: f64 = 0.5; // m, outer edge of the surface

pub const DEFAULT_K_DEPTH: f64 = 0.1;
pub const DEFAULT_K_SIGMA: f64 = 2.0;

/// Clamp a divisor away from zero
pub fn guard(value: f64) -> f64 {
    if value > EPS { value } else { EPS }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64,              // time step
    pub steps: usize,         // step budget N, hard upper bound on the loop
    pub g: f64,               // gravity magnitude projected along the slope
    pub friction: f64,        // effective linear drag coefficient (s^-1)
    pub center_radius: f64,   // collision radius of the central body
    pub boundary_radius: f64, // escape radius R
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            steps: DEFAULT_STEPS,
            g: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            center_radius: 0.025,
            boundary_radius: DEFAULT_BOUNDARY_RADIUS,
        }
    }
}
