//! Discretized (angle, distance) parameter space.
//!
//! A point `(row, col)` and angle bin `a` map to the raw distance
//! `r = row·cos θ + col·sin θ`, which is truncated toward zero and shifted by
//! the bias `D/2` to obtain a distance bin. For points inside a `W × H` frame
//! `|r| < √(W² + H²)`, so `D ≥ 2·⌈√(W² + H²)⌉` keeps every bin in `[0, D)`.
//! That bound is checked once, when the space is built.

use crate::angle::{bin_to_radians, AngleBin, TrigTable};
use crate::error::{HoughError, Result};
use crate::types::{EdgePoint, ImageSize};
use serde::Serialize;

/// Index into the distance axis, only constructible for a known bin count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DistanceBin(pub(crate) usize);

impl DistanceBin {
    /// Returns `None` when `index` is outside `[0, distance_bins)`.
    #[inline]
    pub fn new(index: usize, distance_bins: usize) -> Option<Self> {
        (index < distance_bins).then_some(Self(index))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Smallest distance-bin count that holds every distance of `size`.
pub fn required_distance_bins(size: ImageSize) -> usize {
    2 * size.diagonal().ceil() as usize
}

#[derive(Clone, Debug)]
pub struct ParameterSpace {
    size: ImageSize,
    angle_bins: usize,
    distance_bins: usize,
    bias: i64,
    trig: TrigTable,
}

impl ParameterSpace {
    /// Builds a space for `size`. `distance_bins = None` picks the minimum
    /// valid count for the frame diagonal.
    pub fn new(size: ImageSize, angle_bins: usize, distance_bins: Option<usize>) -> Result<Self> {
        if angle_bins == 0 {
            return Err(HoughError::ZeroAngleBins);
        }
        if size.is_empty() {
            return Err(HoughError::EmptyFrame {
                width: size.width,
                height: size.height,
            });
        }
        let required = required_distance_bins(size);
        let distance_bins = distance_bins.unwrap_or(required);
        if distance_bins < required {
            return Err(HoughError::DistanceBinsTooSmall {
                distance_bins,
                required,
                width: size.width,
                height: size.height,
            });
        }
        let fits = angle_bins
            .checked_mul(distance_bins)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<u32>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(HoughError::AccumulatorTooLarge {
                angle_bins,
                distance_bins,
            });
        }
        Ok(Self {
            size,
            angle_bins,
            distance_bins,
            bias: (distance_bins / 2) as i64,
            trig: TrigTable::new(angle_bins),
        })
    }

    pub fn size(&self) -> ImageSize {
        self.size
    }

    pub fn angle_bins(&self) -> usize {
        self.angle_bins
    }

    pub fn distance_bins(&self) -> usize {
        self.distance_bins
    }

    /// Offset added to truncated distances, `D/2`.
    pub fn bias(&self) -> i64 {
        self.bias
    }

    #[inline]
    pub fn angle_bin(&self, index: usize) -> Option<AngleBin> {
        AngleBin::new(index, self.angle_bins)
    }

    #[inline]
    pub fn distance_bin_at(&self, index: usize) -> Option<DistanceBin> {
        DistanceBin::new(index, self.distance_bins)
    }

    pub fn angles(&self) -> impl Iterator<Item = AngleBin> {
        (0..self.angle_bins).map(AngleBin)
    }

    #[inline]
    pub fn contains(&self, point: EdgePoint) -> bool {
        self.size.contains(point)
    }

    #[inline]
    pub fn angle_radians(&self, angle: AngleBin) -> f64 {
        bin_to_radians(angle.0, self.angle_bins)
    }

    /// Cached `(cos θ, sin θ)` for `angle`.
    #[inline]
    pub fn trig(&self, angle: AngleBin) -> (f64, f64) {
        self.trig.cos_sin(angle)
    }

    /// Unquantized `row·cos θ + col·sin θ`.
    #[inline]
    pub fn raw_distance(&self, point: EdgePoint, angle: AngleBin) -> f64 {
        let (cos, sin) = self.trig(angle);
        point.row as f64 * cos + point.col as f64 * sin
    }

    pub fn distance_bin(&self, point: EdgePoint, angle: AngleBin) -> Result<DistanceBin> {
        let (cos, sin) = self.trig(angle);
        self.distance_bin_with(point, angle, cos, sin)
    }

    /// Same as [`Self::distance_bin`] with the trig pair supplied by the caller,
    /// which lets the voting loop hoist it out of the per-point iteration.
    #[inline]
    pub(crate) fn distance_bin_with(
        &self,
        point: EdgePoint,
        angle: AngleBin,
        cos: f64,
        sin: f64,
    ) -> Result<DistanceBin> {
        // `as` truncates toward zero; rounding would move .5 cases to another bin.
        let r = (point.row as f64 * cos + point.col as f64 * sin) as i64;
        let biased = r + self.bias;
        if biased < 0 || biased as usize >= self.distance_bins {
            return Err(HoughError::DistanceOutOfRange {
                angle: angle.0,
                biased,
                distance_bins: self.distance_bins,
            });
        }
        Ok(DistanceBin(biased as usize))
    }

    /// Inverse of the bias shift, `d − D/2`.
    #[inline]
    pub fn unbiased_distance(&self, distance: DistanceBin) -> i64 {
        distance.0 as i64 - self.bias
    }
}
