//! Detector orchestrating one Hough pass.
//!
//! Overview
//! - Builds a [`crate::space::ParameterSpace`] for the frame, rejecting
//!   distance axes too small for the diagonal before any vote is cast.
//! - Votes every edge point at every angle bin into a fresh accumulator,
//!   sequentially or with one rayon task per angle row.
//! - Scans the accumulator for cells above the vote threshold and turns each
//!   into a line; cells with undefined geometry become anomalies.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the CLI.
//! - `pipeline` – the [`HoughDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{HoughParams, DEFAULT_ANGLE_BINS};
pub use pipeline::HoughDetector;
