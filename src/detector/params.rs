//! Parameters configuring a detection pass.
//!
//! Defaults reproduce the reference behaviour: 1° angle resolution, a distance
//! axis sized from the frame diagonal, a vote threshold of 120, axis-intercept
//! reconstruction, and single-threaded voting. The threshold in particular was
//! tuned on 512×512 inputs; scale it with the expected line length.

use crate::extract::{LineReconstruction, DEFAULT_VOTE_THRESHOLD};
use crate::voting::VotingMode;
use serde::{Deserialize, Serialize};

/// Default number of angle bins (1° steps over `[0, π)`).
pub const DEFAULT_ANGLE_BINS: usize = 180;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Number of angle bins `A` over `[0, π)`.
    pub angle_bins: usize,
    /// Number of distance bins `D`; `None` derives `2·⌈√(W² + H²)⌉` per frame.
    pub distance_bins: Option<usize>,
    /// Cells need strictly more votes than this to become lines.
    pub vote_threshold: u32,
    pub reconstruction: LineReconstruction,
    pub voting: VotingMode,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            angle_bins: DEFAULT_ANGLE_BINS,
            distance_bins: None,
            vote_threshold: DEFAULT_VOTE_THRESHOLD,
            reconstruction: LineReconstruction::AxisIntercepts,
            voting: VotingMode::Sequential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let params: HoughParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, HoughParams::default());
        assert_eq!(params.angle_bins, 180);
        assert_eq!(params.vote_threshold, 120);
        assert_eq!(params.distance_bins, None);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let params: HoughParams = serde_json::from_str(
            r#"{ "vote_threshold": 50, "reconstruction": "clip_to_frame", "voting": "parallel", "distance_bins": 400 }"#,
        )
        .unwrap();
        assert_eq!(params.vote_threshold, 50);
        assert_eq!(params.reconstruction, LineReconstruction::ClipToFrame);
        assert_eq!(params.voting, VotingMode::Parallel);
        assert_eq!(params.distance_bins, Some(400));
        assert_eq!(params.angle_bins, 180);
    }
}
