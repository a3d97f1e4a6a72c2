//! Acceleration contributors for the ball
//!
//! Defines the [`Acceleration`] trait and the two terms every scenario uses:
//! slope-projected gravity over a [`Field`] and linear drag

use super::field::{Field, FieldModel};
use super::states::NVec2;

/// Collection of acceleration terms (surface gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration of a ball at position `x` moving with velocity `v`
    pub fn accumulate(&self, x: &NVec2, v: &NVec2) -> NVec2 {
        let mut out = NVec2::zeros();
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(x, v, &mut out);
        }
        out
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources acting on the ball
/// Implementations add their contribution into `out`
pub trait Acceleration {
    fn acceleration(&self, x: &NVec2, v: &NVec2, out: &mut NVec2);
}

/// Gravity projected along the surface slope: `a = -g grad h`
pub struct SurfaceGravity {
    pub g: f64,       // gravity magnitude
    pub field: Field, // height field the ball rolls on
}

impl Acceleration for SurfaceGravity {
    fn acceleration(&self, x: &NVec2, _v: &NVec2, out: &mut NVec2) {
        *out -= self.g * self.field.gradient(x);
    }
}

/// Linear friction opposing the current velocity: `a = -c v`
pub struct LinearDrag {
    pub c: f64, // s^-1
}

impl Acceleration for LinearDrag {
    fn acceleration(&self, _x: &NVec2, v: &NVec2, out: &mut NVec2) {
        *out -= self.c * *v;
    }
}
