//! Serializable detection report.
//!
//! `DetectionReport` is what [`crate::HoughDetector::detect`] returns: the
//! detected lines, the cells that could not be reconstructed, accumulator
//! statistics, and per-stage timings.

pub mod report;
pub mod timing;

pub use report::{AccumulatorStats, DetectionReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
