//! Static surface sampling for renderers
//!
//! Samples a field's height on a square grid, masking cells outside a radius
//! so the mesh has a circular edge instead of square corners.

use serde::Serialize;

use super::field::FieldModel;
use super::states::NVec2;

/// Smallest number of samples per axis
pub const MIN_SAMPLES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub z: Vec<Vec<Option<f64>>>, // z[j][i] at (xs[i], ys[j]), None outside the mask
}

impl SurfaceGrid {
    /// Sample `field` over `[-extent, extent]^2` with `samples` points per axis
    pub fn sample<F: FieldModel + ?Sized>(field: &F, extent: f64, samples: usize, mask_radius: f64) -> Self {
        let n = samples.max(MIN_SAMPLES);
        let axis: Vec<f64> = (0..n)
            .map(|i| -extent + 2.0 * extent * i as f64 / (n - 1) as f64)
            .collect();

        let z: Vec<Vec<Option<f64>>> = axis
            .iter()
            .map(|&y| {
                axis.iter()
                    .map(|&x| {
                        let p = NVec2::new(x, y);
                        if p.norm() > mask_radius {
                            None
                        } else {
                            Some(field.height(&p))
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            xs: axis.clone(),
            ys: axis,
            z,
        }
    }

    /// Number of grid cells that lie inside the mask
    pub fn filled(&self) -> usize {
        self.z.iter().flatten().filter(|c| c.is_some()).count()
    }
}
