use serde::{Deserialize, Serialize};

/// Edge pixel supplied by the edge-detection stage, `row ∈ [0, H)`, `col ∈ [0, W)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgePoint {
    pub row: u32,
    pub col: u32,
}

impl EdgePoint {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl From<(u32, u32)> for EdgePoint {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Pixel dimensions of the frame the edge points were taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Length of the frame diagonal, `√(W² + H²)`.
    pub fn diagonal(&self) -> f64 {
        let w = self.width as f64;
        let h = self.height as f64;
        (w * w + h * h).sqrt()
    }

    #[inline]
    pub fn contains(&self, p: EdgePoint) -> bool {
        (p.row as usize) < self.height && (p.col as usize) < self.width
    }
}
