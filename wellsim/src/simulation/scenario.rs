//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - integration scheme (`Integrator`)
//! - numerical parameters (`Parameters`)
//! - the height field (`Field`)
//! - active force set (`AccelSet`: surface gravity + linear drag)
//! - the starting `ParticleState`, clamped inside the boundary if needed
//!
//! A scenario is immutable once built; every run gets its own particle state,
//! so one scenario can be run from several threads at once.

use crate::configuration::config::{LaunchConfig, ScenarioConfig, SurfaceConfig};
use crate::configuration::error::Result;
use crate::simulation::field::{Field, FieldModel, GaussianWell, InverseSquare, LogMembrane};
use crate::simulation::forces::{AccelSet, LinearDrag, SurfaceGravity};
use crate::simulation::integrator::Integrator;
use crate::simulation::params::{guard, Parameters, CLAMP_MARGIN, EPS};
use crate::simulation::runner;
use crate::simulation::states::{NVec2, ParticleState, TrajectoryResult};

/// Runtime bundle constructed from a [`ScenarioConfig`]
pub struct Scenario {
    pub integrator: Integrator,
    pub parameters: Parameters,
    pub field: Field,
    pub forces: AccelSet,
    pub initial: ParticleState,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        let g = cfg.gravity();
        let center = &cfg.center;
        let boundary = cfg.boundary_radius();

        // Field + effective drag. Membrane friction is a force coefficient (kg/s)
        // acting on the central mass, the others are already per unit mass.
        let (field, drag) = match &cfg.surface {
            SurfaceConfig::Gaussian(gc) => {
                let (depth, sigma) = cfg.gaussian_shape(gc);
                (Field::Gaussian(GaussianWell { depth, sigma }), cfg.friction())
            }
            SurfaceConfig::Membrane(mc) => {
                if let Some(b) = cfg.parameters.boundary_radius {
                    if b != mc.radius {
                        log::warn!("boundary_radius {b} ignored, using membrane radius {}", mc.radius);
                    }
                }
                let membrane = LogMembrane {
                    weight: center.mass * g,
                    tension: mc.tension,
                    radius: mc.radius,
                    center_radius: center.radius,
                };
                (Field::Membrane(membrane), cfg.friction() / guard(center.mass))
            }
            SurfaceConfig::InverseSquare(ic) => {
                (Field::InverseSquare(InverseSquare { mu: ic.mu }), cfg.friction())
            }
        };

        let parameters = Parameters {
            dt: cfg.parameters.dt,
            steps: cfg.parameters.steps,
            g,
            friction: drag,
            center_radius: center.radius,
            boundary_radius: boundary,
        };

        // Forces: surface gravity first, then drag
        let forces = AccelSet::new()
            .with(SurfaceGravity { g, field })
            .with(LinearDrag { c: drag });

        // Initial state: clamp the start position, then derive the launch
        // velocity from the clamped position
        let [x0, y0] = cfg.ball.position;
        let x = clamp_inside(NVec2::new(x0, y0), boundary);
        if x.norm() <= center.radius {
            log::warn!(
                "initial position r = {} is inside the central body (r_center = {})",
                x.norm(),
                center.radius
            );
        }
        let v = match cfg.ball.launch {
            LaunchConfig::Velocity([vx, vy]) => NVec2::new(vx, vy),
            LaunchConfig::Polar { speed, angle } => launch_velocity(&x, speed, angle),
        };

        let integrator = cfg.integrator();
        log::debug!(
            "built scenario: {:?}, integrator = {}, dt = {}, steps = {}",
            field,
            integrator.name(),
            parameters.dt,
            parameters.steps
        );

        Ok(Self {
            integrator,
            parameters,
            field,
            forces,
            initial: ParticleState::new(x, v),
        })
    }

    /// Run from the configured initial state until a terminal condition or the step budget
    pub fn run(&self) -> TrajectoryResult {
        runner::run(self)
    }

    /// Stateless field evaluator, for resampling independently of any run
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mechanical energy per unit mass: `|v|^2 / 2 + g h(x)`
    pub fn specific_energy(&self, state: &ParticleState) -> f64 {
        0.5 * state.v.norm_squared() + self.parameters.g * self.field.height(&state.x)
    }

    /// Surface height at the escape radius, where a renderer draws the rim
    pub fn rim_height(&self) -> f64 {
        let r = self.parameters.boundary_radius;
        self.field.height(&NVec2::new(r, 0.0))
    }
}

/// Pull a start position at or beyond the boundary back to `R - CLAMP_MARGIN`
/// along the same angle. Positions already inside are returned unchanged.
pub fn clamp_inside(x: NVec2, boundary: f64) -> NVec2 {
    let r0 = x.norm();
    if r0 < boundary {
        return x;
    }
    log::warn!("initial position r = {r0} outside surface radius {boundary}, clamping inside");
    x * ((boundary - CLAMP_MARGIN) / r0)
}

/// Velocity of magnitude `speed` at `angle_deg` from the inward radial unit vector.
///
/// `v = speed (cos(theta) r_hat + sin(theta) t_hat)` with `r_hat = -x / |x|`
/// and `t_hat = (-y, x) / |x|`, the counter-clockwise orbital direction.
/// At the origin the basis falls back to `r_hat = (-1, 0)`, `t_hat = (0, 1)`.
pub fn launch_velocity(x: &NVec2, speed: f64, angle_deg: f64) -> NVec2 {
    let r = x.norm();
    let (r_hat, t_hat) = if r > EPS {
        (-x / r, NVec2::new(-x.y / r, x.x / r))
    } else {
        (NVec2::new(-1.0, 0.0), NVec2::new(0.0, 1.0))
    };
    let th = angle_deg.to_radians();
    speed * (th.cos() * r_hat + th.sin() * t_hat)
}
