//! Angle quantization shared by the voting and extraction stages.
//!
//! Angle bin `a` of `A` stands for `θ = a·π/A`, so bins cover `[0, π)`.

use serde::Serialize;
use std::f64::consts::PI;

/// Index into the angle axis, only constructible for a known bin count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AngleBin(pub(crate) usize);

impl AngleBin {
    /// Returns `None` when `index` is outside `[0, angle_bins)`.
    #[inline]
    pub fn new(index: usize, angle_bins: usize) -> Option<Self> {
        (index < angle_bins).then_some(Self(index))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Converts a bin index into radians, `index·π/angle_bins`.
#[inline]
pub fn bin_to_radians(index: usize, angle_bins: usize) -> f64 {
    (index as f64 * PI) / angle_bins as f64
}

/// Cosine and sine of every angle bin, evaluated once per parameter space.
#[derive(Clone, Debug)]
pub struct TrigTable {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl TrigTable {
    pub fn new(angle_bins: usize) -> Self {
        let (cos, sin) = (0..angle_bins)
            .map(|a| {
                let theta = bin_to_radians(a, angle_bins);
                (theta.cos(), theta.sin())
            })
            .unzip();
        Self { cos, sin }
    }

    pub fn len(&self) -> usize {
        self.cos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    #[inline]
    pub fn cos_sin(&self, angle: AngleBin) -> (f64, f64) {
        (self.cos[angle.0], self.sin[angle.0])
    }
}
