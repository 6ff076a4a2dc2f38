use hough_lines::config::hough;
use hough_lines::image::io::{
    load_grayscale_image, save_accumulator_png, save_line_overlay_png, write_json_file,
};
use hough_lines::HoughDetector;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = hough::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let view = gray.as_view();
    let points = view.edge_points(config.edge.on_value);
    info!(
        "Loaded {} ({}x{}), {} edge pixels with value {}",
        config.input.display(),
        gray.width(),
        gray.height(),
        points.len(),
        config.edge.on_value
    );

    let detector = HoughDetector::new(config.hough.clone());
    let (report, acc) = detector
        .detect_with_accumulator(view.size(), &points)
        .map_err(|e| format!("Detection failed: {e}"))?;

    write_json_file(&config.output.lines_json, &report)?;
    println!(
        "Saved {} lines ({} anomalies) to {}",
        report.lines.len(),
        report.anomalies.len(),
        config.output.lines_json.display()
    );

    if let Some(path) = &config.output.accumulator_image {
        save_accumulator_png(&acc, path)?;
        println!("Saved accumulator image to {}", path.display());
    }

    if let Some(path) = &config.output.overlay_image {
        save_line_overlay_png(&view, &report.lines, path)?;
        println!("Saved line overlay to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: hough_detect <config.json>".to_string()
}
