use hough_lines::{EdgePoint, HoughDetector, HoughParams, ImageSize};

fn main() {
    // Demo stub: votes a synthetic diagonal and prints the recovered line
    let size = ImageSize::new(100, 100);
    let points: Vec<EdgePoint> = (0..100).map(|i| EdgePoint::new(i, i)).collect();

    let det = HoughDetector::new(HoughParams {
        vote_threshold: 50,
        ..Default::default()
    });
    match det.detect(size, &points) {
        Ok(report) => {
            for line in &report.lines {
                println!(
                    "angle_bin={} rho={} votes={} p1=({:.1}, {:.1}) p2=({:.1}, {:.1})",
                    line.angle_bin,
                    line.rho,
                    line.votes,
                    line.p1.x,
                    line.p1.y,
                    line.p2.x,
                    line.p2.y
                );
            }
            println!("lines={} total_ms={:.3}", report.lines.len(), report.timings.total_ms);
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
