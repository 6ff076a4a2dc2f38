//! Error type for the Hough core.
//!
//! Everything here is a configuration or input defect and is reported before
//! (or instead of) touching the accumulator. Degenerate line geometry is not an
//! error; see [`crate::extract::ExtractionAnomaly`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoughError {
    #[error("angle bin count must be positive")]
    ZeroAngleBins,

    #[error("frame must be non-empty, got {width}x{height}")]
    EmptyFrame { width: usize, height: usize },

    #[error(
        "{distance_bins} distance bins cannot hold every distance of a {width}x{height} frame \
         (need at least {required})"
    )]
    DistanceBinsTooSmall {
        distance_bins: usize,
        required: usize,
        width: usize,
        height: usize,
    },

    #[error("{angle_bins}x{distance_bins} accumulator does not fit in memory")]
    AccumulatorTooLarge {
        angle_bins: usize,
        distance_bins: usize,
    },

    #[error("edge point (row={row}, col={col}) lies outside the {width}x{height} frame")]
    PointOutOfFrame {
        row: u32,
        col: u32,
        width: usize,
        height: usize,
    },

    #[error("biased distance {biased} at angle bin {angle} falls outside [0, {distance_bins})")]
    DistanceOutOfRange {
        angle: usize,
        biased: i64,
        distance_bins: usize,
    },
}

pub type Result<T> = std::result::Result<T, HoughError>;
