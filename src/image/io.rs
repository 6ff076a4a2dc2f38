//! I/O helpers around the detector.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. edge map into an owned 8-bit buffer.
//! - `save_accumulator_png`: write the vote grid as a normalized grayscale PNG,
//!   one image row per angle bin.
//! - `draw_line_overlay` / `save_line_overlay_png`: draw detected lines over
//!   the input edge map.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use crate::accumulator::Accumulator;
use crate::extract::DetectedLine;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Renders the accumulator with the busiest cell at 255 and empty cells at 0.
pub fn accumulator_to_gray(acc: &Accumulator) -> GrayImage {
    let width = acc.distance_bins() as u32;
    let height = acc.angle_bins() as u32;
    let max = acc.max_count().max(1) as f64;
    let mut out = GrayImage::new(width, height);
    for (angle, row) in acc.rows() {
        for (d, &c) in row.iter().enumerate() {
            let v = (c as f64 / max * 255.0).round().clamp(0.0, 255.0);
            out.put_pixel(d as u32, angle.index() as u32, Luma([v as u8]));
        }
    }
    out
}

pub fn save_accumulator_png(acc: &Accumulator, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    accumulator_to_gray(acc)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Colour of lines drawn by [`draw_line_overlay`].
pub const OVERLAY_LINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Copies `base` into an RGB canvas and draws every line segment on it.
///
/// Endpoints outside the canvas are fine; only the visible part is drawn.
pub fn draw_line_overlay(base: &ImageU8<'_>, lines: &[DetectedLine]) -> RgbImage {
    let mut canvas = RgbImage::from_fn(base.w as u32, base.h as u32, |x, y| {
        let v = base.row(y as usize)[x as usize];
        Rgb([v, v, v])
    });
    for line in lines {
        let ([c1, r1], [c2, r2]) = line.image_endpoints();
        draw_line_segment_mut(
            &mut canvas,
            (c1 as f32, r1 as f32),
            (c2 as f32, r2 as f32),
            OVERLAY_LINE_COLOR,
        );
    }
    canvas
}

pub fn save_line_overlay_png(
    base: &ImageU8<'_>,
    lines: &[DetectedLine],
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    draw_line_overlay(base, lines)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
