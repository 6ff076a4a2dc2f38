#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Pipeline stages, usable on their own.
pub mod accumulator;
pub mod angle;
pub mod extract;
pub mod space;
pub mod voting;

// Tool configuration (used by `src/bin`).
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{HoughDetector, HoughParams};
pub use crate::diagnostics::DetectionReport;
pub use crate::error::{HoughError, Result};
pub use crate::types::{EdgePoint, ImageSize};

pub use crate::accumulator::Accumulator;
pub use crate::angle::AngleBin;
pub use crate::extract::{
    AnomalyKind, DetectedLine, Extraction, ExtractionAnomaly, LineExtractor, LineReconstruction,
};
pub use crate::space::{DistanceBin, ParameterSpace};
pub use crate::voting::{VotingEngine, VotingMode};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use hough_lines::prelude::*;
///
/// let points: Vec<EdgePoint> = (0..100).map(|i| EdgePoint::new(i, i)).collect();
/// let det = HoughDetector::new(HoughParams {
///     vote_threshold: 50,
///     ..Default::default()
/// });
/// let report = det.detect(ImageSize::new(100, 100), &points).unwrap();
/// assert_eq!(report.lines.len(), 1);
/// assert_eq!(report.lines[0].angle_bin, 135);
/// ```
pub mod prelude {
    pub use crate::{EdgePoint, HoughDetector, HoughParams, ImageSize};
}
