//! Threshold scan over the accumulator and line reconstruction.
//!
//! Every cell with more than `threshold` votes yields one line; adjacent cells
//! above threshold produce near-duplicate lines. There is no peak suppression
//! or clustering.
//!
//! Coordinates follow the voting frame: `x` is the first edge-point
//! coordinate (row) and `y` the second (col), so a cell `(θ, r)` describes the
//! line `x·cos θ + y·sin θ = r`.
//!
//! Reconstruction modes
//! - [`LineReconstruction::AxisIntercepts`]: `P1 = (0, r / sin θ)` and
//!   `P2 = (r / cos θ, 0)`, the intersections with both axes. When `sin θ` or
//!   `cos θ` vanishes (θ = 0, θ = π/2) the matching intercept does not exist;
//!   the cell is reported as an [`ExtractionAnomaly`] instead of a line.
//!   A line through the origin (`r = 0`) has both intercepts at `(0, 0)` and
//!   is emitted as a zero-length segment; `theta` and `rho` still describe it.
//! - [`LineReconstruction::ClipToFrame`]: the line is clipped to the frame
//!   rectangle `[0, H−1] × [0, W−1]`, which also covers axis-parallel lines. A
//!   line that misses the frame becomes an anomaly.

use crate::accumulator::Accumulator;
use crate::angle::AngleBin;
use crate::space::{DistanceBin, ParameterSpace};
use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Reference vote threshold, tuned for 512×512 inputs.
pub const DEFAULT_VOTE_THRESHOLD: u32 = 120;

/// `|sin θ|` or `|cos θ|` below this counts as zero.
const AXIS_EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineReconstruction {
    #[default]
    AxisIntercepts,
    ClipToFrame,
}

/// Line recovered from one accumulator cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLine {
    pub p1: Point2<f64>,
    pub p2: Point2<f64>,
    pub angle_bin: usize,
    pub distance_bin: usize,
    pub votes: u32,
    /// Line normal angle in radians.
    pub theta: f64,
    /// Signed distance from the origin, bias removed.
    pub rho: f64,
}

impl DetectedLine {
    /// Endpoints in image drawing order `(col, row)`.
    pub fn image_endpoints(&self) -> ([f64; 2], [f64; 2]) {
        ([self.p1.y, self.p1.x], [self.p2.y, self.p2.x])
    }

    /// Perpendicular distance from `(x, y)` to the infinite line.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x * self.theta.cos() + y * self.theta.sin() - self.rho).abs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnomalyKind {
    /// `sin θ ≈ 0`: the line never meets `x = 0` at a single point.
    UndefinedYIntercept,
    /// `cos θ ≈ 0`: the line never meets `y = 0` at a single point.
    UndefinedXIntercept,
    /// The line does not cross the frame rectangle.
    OutsideFrame,
}

/// Qualifying cell that could not be turned into a finite line.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionAnomaly {
    pub angle_bin: usize,
    pub distance_bin: usize,
    pub votes: u32,
    pub theta: f64,
    pub rho: f64,
    pub kind: AnomalyKind,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Extraction {
    pub lines: Vec<DetectedLine>,
    pub anomalies: Vec<ExtractionAnomaly>,
}

#[derive(Clone, Copy, Debug)]
pub struct LineExtractor {
    threshold: u32,
    reconstruction: LineReconstruction,
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_VOTE_THRESHOLD)
    }
}

impl LineExtractor {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            reconstruction: LineReconstruction::default(),
        }
    }

    pub fn with_reconstruction(mut self, reconstruction: LineReconstruction) -> Self {
        self.reconstruction = reconstruction;
        self
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Scans `acc` in angle-major, distance-ascending order.
    pub fn extract(&self, space: &ParameterSpace, acc: &Accumulator) -> Extraction {
        assert!(acc.matches(space), "accumulator does not match parameter space");
        let mut out = Extraction::default();
        for (angle, row) in acc.rows() {
            for (d, &votes) in row.iter().enumerate() {
                if votes <= self.threshold {
                    continue;
                }
                let distance = DistanceBin(d);
                match self.reconstruct(space, angle, distance) {
                    Ok((p1, p2)) => out.lines.push(DetectedLine {
                        p1,
                        p2,
                        angle_bin: angle.index(),
                        distance_bin: d,
                        votes,
                        theta: space.angle_radians(angle),
                        rho: space.unbiased_distance(distance) as f64,
                    }),
                    Err(kind) => {
                        debug!(
                            "Hough extraction: cell ({}, {}) with {} votes skipped: {:?}",
                            angle.index(),
                            d,
                            votes,
                            kind
                        );
                        out.anomalies.push(ExtractionAnomaly {
                            angle_bin: angle.index(),
                            distance_bin: d,
                            votes,
                            theta: space.angle_radians(angle),
                            rho: space.unbiased_distance(distance) as f64,
                            kind,
                        });
                    }
                }
            }
        }
        debug!(
            "Hough extraction: {} lines, {} anomalies above threshold {}",
            out.lines.len(),
            out.anomalies.len(),
            self.threshold
        );
        out
    }

    fn reconstruct(
        &self,
        space: &ParameterSpace,
        angle: AngleBin,
        distance: DistanceBin,
    ) -> Result<(Point2<f64>, Point2<f64>), AnomalyKind> {
        let rho = space.unbiased_distance(distance) as f64;
        let (cos, sin) = space.trig(angle);
        match self.reconstruction {
            LineReconstruction::AxisIntercepts => axis_intercepts(rho, cos, sin),
            LineReconstruction::ClipToFrame => {
                let size = space.size();
                let x_max = size.height.saturating_sub(1) as f64;
                let y_max = size.width.saturating_sub(1) as f64;
                clip_to_frame(rho, cos, sin, x_max, y_max)
            }
        }
    }
}

fn axis_intercepts(
    rho: f64,
    cos: f64,
    sin: f64,
) -> Result<(Point2<f64>, Point2<f64>), AnomalyKind> {
    if sin.abs() < AXIS_EPS {
        return Err(AnomalyKind::UndefinedYIntercept);
    }
    if cos.abs() < AXIS_EPS {
        return Err(AnomalyKind::UndefinedXIntercept);
    }
    Ok((Point2::new(0.0, rho / sin), Point2::new(rho / cos, 0.0)))
}

/// Clips `x·cos + y·sin = rho` to `[0, x_max] × [0, y_max]`, returning the two
/// farthest-apart boundary crossings.
fn clip_to_frame(
    rho: f64,
    cos: f64,
    sin: f64,
    x_max: f64,
    y_max: f64,
) -> Result<(Point2<f64>, Point2<f64>), AnomalyKind> {
    const TOL: f64 = 1e-9;
    let within = |v: f64, hi: f64| v >= -TOL && v <= hi + TOL;
    let mut hits: Vec<Point2<f64>> = Vec::with_capacity(4);

    if sin.abs() >= AXIS_EPS {
        for x in [0.0, x_max] {
            let y = (rho - x * cos) / sin;
            if within(y, y_max) {
                hits.push(Point2::new(x, y.clamp(0.0, y_max)));
            }
        }
    }
    if cos.abs() >= AXIS_EPS {
        for y in [0.0, y_max] {
            let x = (rho - y * sin) / cos;
            if within(x, x_max) {
                hits.push(Point2::new(x.clamp(0.0, x_max), y));
            }
        }
    }

    let mut best: Option<(Point2<f64>, Point2<f64>, f64)> = None;
    for i in 0..hits.len() {
        for j in i + 1..hits.len() {
            let d = nalgebra::distance(&hits[i], &hits[j]);
            if best.map_or(true, |(_, _, bd)| d > bd) {
                best = Some((hits[i], hits[j], d));
            }
        }
    }
    match best {
        Some((p1, p2, d)) if d > TOL => Ok((p1, p2)),
        _ => Err(AnomalyKind::OutsideFrame),
    }
}
