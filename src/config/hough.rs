use crate::detector::HoughParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration of the `hough_detect` tool.
#[derive(Debug, Deserialize)]
pub struct HoughToolConfig {
    /// Binary edge map produced by an external edge detector.
    pub input: PathBuf,
    #[serde(default)]
    pub edge: EdgeMaskConfig,
    #[serde(default)]
    pub hough: HoughParams,
    pub output: HoughOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EdgeMaskConfig {
    /// Pixel value marking an edge; Canny-style maps use 255.
    pub on_value: u8,
}

impl Default for EdgeMaskConfig {
    fn default() -> Self {
        Self { on_value: 255 }
    }
}

#[derive(Debug, Deserialize)]
pub struct HoughOutputConfig {
    pub lines_json: PathBuf,
    /// Optional grayscale rendering of the accumulator.
    #[serde(default)]
    pub accumulator_image: Option<PathBuf>,
    /// Optional RGB copy of the input with every detected line drawn on it.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<HoughToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<HoughToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
