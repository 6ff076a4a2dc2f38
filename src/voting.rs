//! Vote casting: one vote per (edge point, angle bin) pair.
//!
//! The outer loop runs over angle bins so the `(cos θ, sin θ)` pair is looked
//! up once per bin. In parallel mode each rayon task owns one accumulator row
//! (one angle bin), so workers never write the same cell and no locking is
//! needed. Both modes produce identical grids.

use crate::accumulator::Accumulator;
use crate::angle::AngleBin;
use crate::error::{HoughError, Result};
use crate::space::ParameterSpace;
use crate::types::EdgePoint;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingMode {
    #[default]
    Sequential,
    /// Angle rows are distributed over the rayon thread pool.
    Parallel,
}

pub struct VotingEngine<'a> {
    space: &'a ParameterSpace,
    mode: VotingMode,
}

impl<'a> VotingEngine<'a> {
    pub fn new(space: &'a ParameterSpace) -> Self {
        Self {
            space,
            mode: VotingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: VotingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> VotingMode {
        self.mode
    }

    /// Votes `points` into a fresh accumulator shaped after the space.
    pub fn accumulate(&self, points: &[EdgePoint]) -> Result<Accumulator> {
        let mut acc = Accumulator::for_space(self.space);
        self.vote_into(points, &mut acc)?;
        Ok(acc)
    }

    /// Adds the votes of `points` to `acc`.
    ///
    /// Every point is checked against the frame before the first vote, so an
    /// out-of-frame point leaves `acc` untouched.
    ///
    /// # Panics
    /// If `acc` was not shaped for this engine's parameter space.
    pub fn vote_into(&self, points: &[EdgePoint], acc: &mut Accumulator) -> Result<()> {
        assert!(
            acc.matches(self.space),
            "accumulator is {}x{}, parameter space is {}x{}",
            acc.angle_bins(),
            acc.distance_bins(),
            self.space.angle_bins(),
            self.space.distance_bins()
        );
        if let Some(p) = points.iter().find(|p| !self.space.contains(**p)) {
            let size = self.space.size();
            return Err(HoughError::PointOutOfFrame {
                row: p.row,
                col: p.col,
                width: size.width,
                height: size.height,
            });
        }

        let start = Instant::now();
        match self.mode {
            VotingMode::Sequential => self.vote_sequential(points, acc)?,
            VotingMode::Parallel => self.vote_parallel(points, acc)?,
        }
        debug!(
            "Hough voting: {} points x {} angle bins ({:?}) in {:.3} ms",
            points.len(),
            self.space.angle_bins(),
            self.mode,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    fn vote_sequential(&self, points: &[EdgePoint], acc: &mut Accumulator) -> Result<()> {
        for angle in self.space.angles() {
            let (cos, sin) = self.space.trig(angle);
            for &p in points {
                let d = self.space.distance_bin_with(p, angle, cos, sin)?;
                acc.vote(angle, d);
            }
        }
        Ok(())
    }

    fn vote_parallel(&self, points: &[EdgePoint], acc: &mut Accumulator) -> Result<()> {
        let space = self.space;
        let row_len = space.distance_bins();
        acc.counts_mut()
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .try_for_each(|(a, row)| -> Result<()> {
                let angle = AngleBin(a);
                let (cos, sin) = space.trig(angle);
                for &p in points {
                    let d = space.distance_bin_with(p, angle, cos, sin)?;
                    row[d.0] += 1;
                }
                Ok(())
            })
    }
}
