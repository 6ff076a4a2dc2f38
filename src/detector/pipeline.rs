use super::params::HoughParams;
use crate::accumulator::Accumulator;
use crate::diagnostics::{AccumulatorStats, DetectionReport, InputDescriptor, TimingBreakdown};
use crate::error::Result;
use crate::extract::LineExtractor;
use crate::space::ParameterSpace;
use crate::types::{EdgePoint, ImageSize};
use crate::voting::VotingEngine;
use log::{debug, warn};
use std::time::Instant;

/// Runs voting then extraction for one frame at a time.
///
/// Holds only configuration; the parameter space and accumulator are built per
/// call and dropped with it.
#[derive(Clone, Debug, Default)]
pub struct HoughDetector {
    params: HoughParams,
}

impl HoughDetector {
    pub fn new(params: HoughParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    /// Validates the configuration against `size`.
    pub fn parameter_space(&self, size: ImageSize) -> Result<ParameterSpace> {
        ParameterSpace::new(size, self.params.angle_bins, self.params.distance_bins)
    }

    fn extractor(&self) -> LineExtractor {
        LineExtractor::new(self.params.vote_threshold)
            .with_reconstruction(self.params.reconstruction)
    }

    /// Voting stage only.
    pub fn accumulate(
        &self,
        size: ImageSize,
        points: &[EdgePoint],
    ) -> Result<(ParameterSpace, Accumulator)> {
        let space = self.parameter_space(size)?;
        let acc = VotingEngine::new(&space)
            .with_mode(self.params.voting)
            .accumulate(points)?;
        Ok((space, acc))
    }

    pub fn detect(&self, size: ImageSize, points: &[EdgePoint]) -> Result<DetectionReport> {
        self.detect_with_accumulator(size, points).map(|(report, _)| report)
    }

    /// Like [`Self::detect`], also handing back the filled accumulator.
    pub fn detect_with_accumulator(
        &self,
        size: ImageSize,
        points: &[EdgePoint],
    ) -> Result<(DetectionReport, Accumulator)> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let space = self.parameter_space(size)?;
        debug!(
            "HoughDetector::detect {}x{} frame, {} points, {}x{} bins (bias {})",
            size.width,
            size.height,
            points.len(),
            space.angle_bins(),
            space.distance_bins(),
            space.bias()
        );
        if points.is_empty() {
            warn!("HoughDetector::detect called without edge points; no lines can be found");
        }

        let engine = VotingEngine::new(&space).with_mode(self.params.voting);
        let acc = timings.measure("voting", || engine.accumulate(points))?;

        let extraction = timings.measure("extraction", || self.extractor().extract(&space, &acc));
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        let stats = AccumulatorStats::new(&space, &acc, self.params.vote_threshold);
        debug!(
            "HoughDetector::detect -> {} lines, {} anomalies, peak {} votes, {:.3} ms",
            extraction.lines.len(),
            extraction.anomalies.len(),
            stats.max_votes,
            timings.total_ms
        );

        let report = DetectionReport {
            input: InputDescriptor {
                width: size.width,
                height: size.height,
                edge_points: points.len(),
            },
            accumulator: stats,
            lines: extraction.lines,
            anomalies: extraction.anomalies,
            timings,
        };
        Ok((report, acc))
    }
}
