pub mod states;
pub mod params;
pub mod field;
pub mod forces;
pub mod integrator;
pub mod runner;
pub mod scenario;
pub mod surface;
