use super::timing::TimingBreakdown;
use crate::accumulator::Accumulator;
use crate::extract::{DetectedLine, ExtractionAnomaly};
use crate::space::ParameterSpace;
use serde::Serialize;

/// Frame and input volume of a detection pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub edge_points: usize,
}

/// Shape and vote statistics of the accumulator after voting.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorStats {
    pub angle_bins: usize,
    pub distance_bins: usize,
    pub bias: i64,
    pub vote_threshold: u32,
    pub total_votes: u64,
    pub max_votes: u32,
}

impl AccumulatorStats {
    pub fn new(space: &ParameterSpace, acc: &Accumulator, vote_threshold: u32) -> Self {
        Self {
            angle_bins: space.angle_bins(),
            distance_bins: space.distance_bins(),
            bias: space.bias(),
            vote_threshold,
            total_votes: acc.total_votes(),
            max_votes: acc.max_count(),
        }
    }
}

/// Everything a detection pass produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub input: InputDescriptor,
    pub accumulator: AccumulatorStats,
    pub lines: Vec<DetectedLine>,
    pub anomalies: Vec<ExtractionAnomaly>,
    pub timings: TimingBreakdown,
}
