//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integration scheme (optional, defaults per surface)
//! - [`ParametersConfig`] – step size, step budget, gravity, friction, boundary
//! - [`CenterConfig`]     – central body geometry and mass
//! - [`SurfaceConfig`]    – which height field the ball rolls on
//! - [`BallConfig`]       – initial position and launch
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The membrane reference scenario:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "verlet"
//!
//! parameters:
//!   dt: 0.01                # time step
//!   steps: 800              # step budget
//!   g: 9.81                 # optional, gravity along the slope
//!   friction: 0.3           # optional, kg/s for the membrane (divided by the central mass)
//!
//! center:
//!   radius: 0.05
//!   mass: 0.5               # weight F = mass * g deflects the membrane
//!
//! surface:
//!   membrane:
//!     tension: 10.0
//!     radius: 0.5           # also the escape radius
//!
//! ball:
//!   position: [0.49, 0.0]
//!   launch:
//!     polar: { speed: 0.6, angle: 45.0 }   # degrees from the inward radial direction
//! ```
//!
//! `launch` may instead be `velocity: [vx, vy]`. Gaussian surfaces take either
//! explicit `depth`/`sigma` or the scale factors `k_depth`/`k_sigma`.
//!
//! The scenario builder then maps this configuration into the runtime
//! [`Scenario`](crate::simulation::scenario::Scenario).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::error::{ConfigError, Result};
use crate::simulation::field::GaussianWell;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::{
    DEFAULT_BOUNDARY_RADIUS, DEFAULT_FRICTION, DEFAULT_GRAVITY, DEFAULT_K_DEPTH, DEFAULT_K_SIGMA,
};

/// Engine options; every field falls back to a per-surface default
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub integrator: Option<Integrator>, // euler for the surfaces, verlet for inverse_square
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64,                      // time step size
    pub steps: usize,                 // step budget
    pub g: Option<f64>,               // gravity magnitude
    pub friction: Option<f64>,        // linear friction coefficient
    pub boundary_radius: Option<f64>, // escape radius, ignored for membranes (their radius wins)
}

/// Central body at the origin
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CenterConfig {
    pub radius: f64, // collision radius
    pub mass: f64,   // scales the Gaussian depth and the membrane weight
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GaussianConfig {
    pub depth: Option<f64>,
    pub sigma: Option<f64>,
    pub k_depth: Option<f64>, // depth = k_depth * mass when `depth` is absent
    pub k_sigma: Option<f64>, // sigma = k_sigma * center radius when `sigma` is absent
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MembraneConfig {
    pub tension: f64, // T
    pub radius: f64,  // R
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InverseSquareConfig {
    pub mu: f64, // G M
}

/// Surface shape the ball moves on
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceConfig {
    Gaussian(GaussianConfig),
    Membrane(MembraneConfig),
    InverseSquare(InverseSquareConfig),
}

/// Initial velocity, either explicit or as speed + angle
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LaunchConfig {
    Velocity([f64; 2]),
    Polar { speed: f64, angle: f64 }, // angle in degrees, measured from the inward radial unit vector
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BallConfig {
    pub position: [f64; 2],
    #[serde(deserialize_with = "serde_yaml::with::singleton_map::deserialize")]
    pub launch: LaunchConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub center: CenterConfig,
    #[serde(deserialize_with = "serde_yaml::with::singleton_map::deserialize")]
    pub surface: SurfaceConfig,
    pub ball: BallConfig,
}

impl ScenarioConfig {
    /// Load and validate a scenario file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Integrator to use, defaulting to Verlet for orbits and Euler otherwise
    pub fn integrator(&self) -> Integrator {
        match (self.engine.integrator, &self.surface) {
            (Some(integrator), _) => integrator,
            (None, SurfaceConfig::InverseSquare(_)) => Integrator::VelocityVerlet,
            (None, _) => Integrator::Euler,
        }
    }

    /// Gravity along the slope. Inverse-square potentials already carry their
    /// strength in `mu`, so they default to a unit scale.
    pub fn gravity(&self) -> f64 {
        match (self.parameters.g, &self.surface) {
            (Some(g), _) => g,
            (None, SurfaceConfig::InverseSquare(_)) => 1.0,
            (None, _) => DEFAULT_GRAVITY,
        }
    }

    pub fn friction(&self) -> f64 {
        self.parameters.friction.unwrap_or(DEFAULT_FRICTION)
    }

    /// Escape radius: the membrane's own edge, otherwise the configured boundary
    pub fn boundary_radius(&self) -> f64 {
        match &self.surface {
            SurfaceConfig::Membrane(m) => m.radius,
            _ => self.parameters.boundary_radius.unwrap_or(DEFAULT_BOUNDARY_RADIUS),
        }
    }

    /// Reject configurations no run could make sense of
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        if !(p.dt.is_finite() && p.dt > 0.0) {
            return Err(invalid(format!("dt must be positive and finite, got {}", p.dt)));
        }
        if p.steps == 0 {
            return Err(invalid("steps must be at least 1".to_string()));
        }
        if !self.gravity().is_finite() {
            return Err(invalid(format!("g must be finite, got {}", self.gravity())));
        }
        let c = self.friction();
        if !(c.is_finite() && c >= 0.0) {
            return Err(invalid(format!("friction must be >= 0, got {c}")));
        }

        let center = &self.center;
        if !(center.radius.is_finite() && center.radius > 0.0) {
            return Err(invalid(format!("center radius must be positive, got {}", center.radius)));
        }
        if !center.mass.is_finite() {
            return Err(invalid(format!("center mass must be finite, got {}", center.mass)));
        }

        let boundary = self.boundary_radius();
        if !(boundary.is_finite() && boundary > center.radius) {
            return Err(invalid(format!(
                "boundary radius {boundary} must exceed the center radius {}",
                center.radius
            )));
        }

        match &self.surface {
            SurfaceConfig::Gaussian(gc) => {
                let values = [gc.depth, gc.sigma, gc.k_depth, gc.k_sigma];
                if values.iter().flatten().any(|v| !v.is_finite()) {
                    return Err(invalid("gaussian surface parameters must be finite".to_string()));
                }
            }
            SurfaceConfig::Membrane(mc) => {
                if !(mc.tension.is_finite() && mc.tension >= 0.0) {
                    return Err(invalid(format!("membrane tension must be >= 0, got {}", mc.tension)));
                }
            }
            SurfaceConfig::InverseSquare(ic) => {
                if !ic.mu.is_finite() {
                    return Err(invalid(format!("mu must be finite, got {}", ic.mu)));
                }
            }
        }

        let [x, y] = self.ball.position;
        if !(x.is_finite() && y.is_finite()) {
            return Err(invalid("ball position must be finite".to_string()));
        }
        let launch_ok = match self.ball.launch {
            LaunchConfig::Velocity([vx, vy]) => vx.is_finite() && vy.is_finite(),
            LaunchConfig::Polar { speed, angle } => speed.is_finite() && angle.is_finite(),
        };
        if !launch_ok {
            return Err(invalid("ball launch must be finite".to_string()));
        }

        Ok(())
    }

    // presets ==========================================================================

    /// Gaussian well, explicit Euler: the ball spirals in and hits the central body
    pub fn gaussian_well() -> Self {
        Self {
            engine: EngineConfig { integrator: Some(Integrator::Euler) },
            parameters: ParametersConfig {
                dt: 0.01,
                steps: 4000,
                g: Some(9.81),
                friction: Some(0.3),
                boundary_radius: Some(0.5),
            },
            center: CenterConfig { radius: 0.025, mass: 1.0 },
            surface: SurfaceConfig::Gaussian(GaussianConfig {
                depth: Some(0.2),
                sigma: Some(0.6),
                ..Default::default()
            }),
            ball: BallConfig {
                position: [0.25, 0.0],
                launch: LaunchConfig::Velocity([0.0, 1.0]),
            },
        }
    }

    /// Logarithmic membrane under a 0.5 kg central sphere, explicit Euler
    pub fn membrane() -> Self {
        Self {
            engine: EngineConfig { integrator: Some(Integrator::Euler) },
            parameters: ParametersConfig {
                dt: 0.01,
                steps: 800,
                g: Some(9.81),
                friction: Some(0.3),
                boundary_radius: None,
            },
            center: CenterConfig { radius: 0.05, mass: 0.5 },
            surface: SurfaceConfig::Membrane(MembraneConfig { tension: 10.0, radius: 0.5 }),
            ball: BallConfig {
                position: [0.49, 0.0],
                launch: LaunchConfig::Polar { speed: 0.6, angle: 45.0 },
            },
        }
    }

    /// Near-circular orbit around `mu = 1000` with weak drag, velocity-Verlet
    pub fn orbital() -> Self {
        let mu = 1000.0;
        let r0: f64 = 50.0;
        Self {
            engine: EngineConfig { integrator: Some(Integrator::VelocityVerlet) },
            parameters: ParametersConfig {
                dt: 0.02,
                steps: 10_000,
                g: Some(1.0),
                friction: Some(1e-4),
                boundary_radius: Some(200.0),
            },
            // contact distance: central body (6) plus ball (2)
            center: CenterConfig { radius: 8.0, mass: mu },
            surface: SurfaceConfig::InverseSquare(InverseSquareConfig { mu }),
            ball: BallConfig {
                position: [r0, 0.0],
                launch: LaunchConfig::Polar { speed: (mu / r0).sqrt(), angle: 90.0 },
            },
        }
    }

    /// Resolved Gaussian depth and sigma for the current center body
    pub fn gaussian_shape(&self, gc: &GaussianConfig) -> (f64, f64) {
        let scaled = GaussianWell::from_body(
            gc.k_depth.unwrap_or(DEFAULT_K_DEPTH),
            gc.k_sigma.unwrap_or(DEFAULT_K_SIGMA),
            self.center.mass,
            self.center.radius,
        );
        (gc.depth.unwrap_or(scaled.depth), gc.sigma.unwrap_or(scaled.sigma))
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::InvalidParameter(msg)
}
