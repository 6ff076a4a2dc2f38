//! Dense vote grid over (angle bin, distance bin).
//!
//! Storage is a single heap buffer in row-major order: one row of `D` counts
//! per angle bin. Rows are the unit of parallel work during voting.

use crate::angle::AngleBin;
use crate::space::{DistanceBin, ParameterSpace};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accumulator {
    angle_bins: usize,
    distance_bins: usize,
    counts: Vec<u32>,
}

impl Accumulator {
    /// Zero-initialized grid of `angle_bins × distance_bins` cells.
    pub fn new(angle_bins: usize, distance_bins: usize) -> Self {
        Self {
            angle_bins,
            distance_bins,
            counts: vec![0; angle_bins * distance_bins],
        }
    }

    pub fn for_space(space: &ParameterSpace) -> Self {
        Self::new(space.angle_bins(), space.distance_bins())
    }

    pub fn angle_bins(&self) -> usize {
        self.angle_bins
    }

    pub fn distance_bins(&self) -> usize {
        self.distance_bins
    }

    /// True when the grid has the same shape as `space`.
    pub fn matches(&self, space: &ParameterSpace) -> bool {
        self.angle_bins == space.angle_bins() && self.distance_bins == space.distance_bins()
    }

    #[inline]
    fn offset(&self, angle: AngleBin, distance: DistanceBin) -> usize {
        assert!(
            angle.0 < self.angle_bins && distance.0 < self.distance_bins,
            "cell ({}, {}) outside {}x{} accumulator",
            angle.0,
            distance.0,
            self.angle_bins,
            self.distance_bins
        );
        angle.0 * self.distance_bins + distance.0
    }

    #[inline]
    pub fn vote(&mut self, angle: AngleBin, distance: DistanceBin) {
        let i = self.offset(angle, distance);
        self.counts[i] += 1;
    }

    #[inline]
    pub fn count_at(&self, angle: AngleBin, distance: DistanceBin) -> u32 {
        self.counts[self.offset(angle, distance)]
    }

    /// Counts for every distance bin of `angle`.
    pub fn row(&self, angle: AngleBin) -> &[u32] {
        assert!(angle.0 < self.angle_bins, "angle bin {} out of range", angle.0);
        let start = angle.0 * self.distance_bins;
        &self.counts[start..start + self.distance_bins]
    }

    /// Rows in angle order.
    pub fn rows(&self) -> impl Iterator<Item = (AngleBin, &[u32])> {
        self.counts
            .chunks_exact(self.distance_bins.max(1))
            .take(self.angle_bins)
            .enumerate()
            .map(|(a, row)| (AngleBin(a), row))
    }

    /// Flat row-major view of all counts.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub(crate) fn counts_mut(&mut self) -> &mut [u32] {
        &mut self.counts
    }

    pub fn total_votes(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Cell holding the most votes; ties resolve to the first cell in row-major order.
    pub fn peak(&self) -> Option<(AngleBin, DistanceBin, u32)> {
        if self.distance_bins == 0 {
            return None;
        }
        let mut best: Option<(usize, u32)> = None;
        for (i, &c) in self.counts.iter().enumerate() {
            if best.map_or(true, |(_, b)| c > b) {
                best = Some((i, c));
            }
        }
        best.map(|(i, c)| {
            (
                AngleBin(i / self.distance_bins),
                DistanceBin(i % self.distance_bins),
                c,
            )
        })
    }

    /// Zeroes every cell, keeping the allocation.
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }
}
