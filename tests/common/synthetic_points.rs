use hough_lines::EdgePoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Points `(i, i)` for `i ∈ [0, n)`, the diagonal `y = x`.
pub fn diagonal(n: u32) -> Vec<EdgePoint> {
    (0..n).map(|i| EdgePoint::new(i, i)).collect()
}

/// Full row `row` of a frame `width` pixels wide.
pub fn horizontal_row(row: u32, width: u32) -> Vec<EdgePoint> {
    (0..width).map(|c| EdgePoint::new(row, c)).collect()
}

/// Full column `col` of a frame `height` pixels tall.
pub fn vertical_col(col: u32, height: u32) -> Vec<EdgePoint> {
    (0..height).map(|r| EdgePoint::new(r, col)).collect()
}

/// Seeded uniform scatter inside a `width × height` frame.
pub fn scatter(n: usize, width: u32, height: u32, seed: u64) -> Vec<EdgePoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| EdgePoint::new(rng.gen_range(0..height), rng.gen_range(0..width)))
        .collect()
}

/// Binary edge mask (`255` on edges) holding `points`.
pub fn mask_from_points(points: &[EdgePoint], width: usize, height: usize) -> Vec<u8> {
    let mut mask = vec![0u8; width * height];
    for p in points {
        mask[p.row as usize * width + p.col as usize] = 255;
    }
    mask
}
