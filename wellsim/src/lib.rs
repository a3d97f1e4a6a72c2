pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{NVec2, ParticleState, Termination, TrajectoryPoint, TrajectoryResult};
pub use simulation::field::{Field, FieldModel, GaussianWell, LogMembrane, InverseSquare};
pub use simulation::forces::{Acceleration, AccelSet, SurfaceGravity, LinearDrag};
pub use simulation::integrator::{Integrator, euler_step, verlet_step};
pub use simulation::params::Parameters;
pub use simulation::runner::{run, run_from, classify};
pub use simulation::scenario::{Scenario, clamp_inside, launch_velocity};
pub use simulation::surface::SurfaceGrid;

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, CenterConfig, SurfaceConfig, BallConfig, LaunchConfig};
pub use configuration::error::ConfigError;

pub use benchmark::benchmark::bench_integrators;
