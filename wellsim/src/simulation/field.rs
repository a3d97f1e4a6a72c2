//! Height fields for the surface the ball rolls on
//!
//! Every model exposes `height(p)` and `gradient(p)`, where `gradient` is the
//! mathematical gradient of `height` (pointing uphill). Dynamics use
//! `a = -g * gradient`, so all three models pull the ball toward the origin.
//!
//! - [`GaussianWell`]  : `h = -D exp(-r^2 / 2S^2)`, smooth at the origin
//! - [`LogMembrane`]   : `h = -(F / 2piT) ln(R / max(r, r_center))`, flat inside the central body
//! - [`InverseSquare`] : `h = -mu / r`, the Newtonian potential for the orbital variant

use std::f64::consts::PI;

use super::params::{guard, EPS};
use super::states::NVec2;

/// Stateless scalar field over the plane
pub trait FieldModel {
    fn height(&self, p: &NVec2) -> f64;
    fn gradient(&self, p: &NVec2) -> NVec2;
}

/// Gaussian depression centred on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianWell {
    pub depth: f64, // D
    pub sigma: f64, // S
}

impl GaussianWell {
    /// Depth and width derived from the central body: `D = k_depth M`, `S = k_sigma R_center`
    pub fn from_body(k_depth: f64, k_sigma: f64, mass: f64, center_radius: f64) -> Self {
        Self {
            depth: k_depth * mass,
            sigma: k_sigma * center_radius,
        }
    }
}

impl FieldModel for GaussianWell {
    fn height(&self, p: &NVec2) -> f64 {
        let two_s2 = guard(2.0 * self.sigma * self.sigma);
        -self.depth * (-p.norm_squared() / two_s2).exp()
    }

    fn gradient(&self, p: &NVec2) -> NVec2 {
        // dh/dx = D exp(-r^2 / 2S^2) x / S^2
        let s2 = guard(self.sigma * self.sigma);
        let e = (-p.norm_squared() / (2.0 * s2)).exp();
        p * (self.depth * e / s2)
    }
}

/// Axisymmetric membrane deflected by a central weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogMembrane {
    pub weight: f64,        // F = M g
    pub tension: f64,       // T
    pub radius: f64,        // R, outer edge of the membrane
    pub center_radius: f64, // clamp radius for the log singularity
}

impl LogMembrane {
    /// `F / (2 pi T)`
    pub fn coefficient(&self) -> f64 {
        self.weight / (2.0 * PI * guard(self.tension))
    }

    /// Height as a function of radius alone
    pub fn deformation(&self, r: f64) -> f64 {
        let r_use = guard(r.max(self.center_radius));
        -self.coefficient() * (guard(self.radius) / r_use).ln()
    }
}

impl FieldModel for LogMembrane {
    fn height(&self, p: &NVec2) -> f64 {
        self.deformation(p.norm())
    }

    fn gradient(&self, p: &NVec2) -> NVec2 {
        let r = p.norm();
        // flat inside the central body, where the height is clamped
        if r <= self.center_radius.max(EPS) {
            return NVec2::zeros();
        }
        p * (self.coefficient() / (r * r))
    }
}

/// Newtonian central potential `-mu / r`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSquare {
    pub mu: f64, // G M
}

impl FieldModel for InverseSquare {
    fn height(&self, p: &NVec2) -> f64 {
        -self.mu / guard(p.norm())
    }

    fn gradient(&self, p: &NVec2) -> NVec2 {
        let r = guard(p.norm());
        p * (self.mu / (r * r * r))
    }
}

/// Field chosen at scenario build time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Gaussian(GaussianWell),
    Membrane(LogMembrane),
    InverseSquare(InverseSquare),
}

impl FieldModel for Field {
    fn height(&self, p: &NVec2) -> f64 {
        match self {
            Field::Gaussian(f) => f.height(p),
            Field::Membrane(f) => f.height(p),
            Field::InverseSquare(f) => f.height(p),
        }
    }

    fn gradient(&self, p: &NVec2) -> NVec2 {
        match self {
            Field::Gaussian(f) => f.gradient(p),
            Field::Membrane(f) => f.gradient(p),
            Field::InverseSquare(f) => f.gradient(p),
        }
    }
}
