mod common;

use common::synthetic_points::{diagonal, horizontal_row, mask_from_points, vertical_col};
use hough_lines::image::ImageU8;
use nalgebra::Point2;
use hough_lines::{
    AnomalyKind, EdgePoint, HoughDetector, HoughParams, ImageSize, LineReconstruction,
};

fn detector(threshold: u32, reconstruction: LineReconstruction) -> HoughDetector {
    HoughDetector::new(HoughParams {
        vote_threshold: threshold,
        reconstruction,
        ..Default::default()
    })
}

#[test]
fn diagonal_line_is_recovered() {
    let _ = env_logger::builder().is_test(true).try_init();
    let size = ImageSize::new(100, 100);
    let points = diagonal(100);
    let det = detector(50, LineReconstruction::AxisIntercepts);

    let (space, acc) = det.accumulate(size, &points).unwrap();
    let (angle, distance, votes) = acc.peak().expect("non-empty accumulator");
    assert_eq!(angle.index(), 135);
    assert_eq!(space.unbiased_distance(distance), 0);
    assert_eq!(votes, 100);

    let report = det.detect(size, &points).unwrap();
    assert_eq!(report.lines.len(), 1, "lines: {:?}", report.lines);
    assert!(report.anomalies.is_empty());
    let line = &report.lines[0];
    assert_eq!(line.angle_bin, 135);
    assert_eq!(line.votes, 100);
    // r = 0: both axis intercepts are the origin, so the segment is degenerate.
    assert_eq!(line.rho, 0.0);
    assert_eq!(line.p1, Point2::origin());
    assert_eq!(line.p2, Point2::origin());
    assert!(line.distance_to(50.0, 50.0) < 1e-6);
}

#[test]
fn clipped_diagonal_spans_the_frame() {
    let size = ImageSize::new(100, 100);
    let report = detector(50, LineReconstruction::ClipToFrame)
        .detect(size, &diagonal(100))
        .unwrap();
    assert_eq!(report.lines.len(), 1);
    let line = &report.lines[0];
    let mut ends = [line.p1, line.p2];
    ends.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
    assert!(ends[0].x.abs() < 1e-6 && ends[0].y.abs() < 1e-6);
    assert!((ends[1].x - 99.0).abs() < 1e-6 && (ends[1].y - 99.0).abs() < 1e-6);
}

#[test]
fn offset_diagonal_intercepts_lie_near_true_line() {
    // col = row + 10
    let size = ImageSize::new(100, 80);
    let points: Vec<EdgePoint> = (0..70).map(|r| EdgePoint::new(r, r + 10)).collect();
    let report = detector(50, LineReconstruction::AxisIntercepts)
        .detect(size, &points)
        .unwrap();
    assert_eq!(report.lines.len(), 1, "lines: {:?}", report.lines);
    let line = &report.lines[0];
    assert_eq!(line.angle_bin, 135);
    assert_eq!(line.rho, 7.0);
    for p in [line.p1, line.p2] {
        let off = (p.y - p.x - 10.0).abs() / std::f64::consts::SQRT_2;
        assert!(off < 1.0, "endpoint ({}, {}) is {off} px off", p.x, p.y);
    }
}

#[test]
fn axis_parallel_lines_are_anomalies_without_clipping() {
    let size = ImageSize::new(100, 80);
    let det = detector(60, LineReconstruction::AxisIntercepts);

    let report = det.detect(size, &vertical_col(30, 80)).unwrap();
    assert!(report.lines.is_empty());
    assert_eq!(report.anomalies.len(), 1);
    assert_eq!(report.anomalies[0].angle_bin, 90);
    assert_eq!(report.anomalies[0].kind, AnomalyKind::UndefinedXIntercept);

    let report = det.detect(size, &horizontal_row(20, 100)).unwrap();
    assert!(report.lines.is_empty());
    assert_eq!(report.anomalies.len(), 1);
    assert_eq!(report.anomalies[0].angle_bin, 0);
    assert_eq!(report.anomalies[0].kind, AnomalyKind::UndefinedYIntercept);
}

#[test]
fn axis_parallel_lines_are_recovered_with_clipping() {
    let size = ImageSize::new(100, 80);
    let det = detector(60, LineReconstruction::ClipToFrame);

    let report = det.detect(size, &vertical_col(30, 80)).unwrap();
    assert!(report.anomalies.is_empty());
    assert_eq!(report.lines.len(), 1);
    let line = &report.lines[0];
    assert!((line.p1.y - 30.0).abs() < 1e-6 && (line.p2.y - 30.0).abs() < 1e-6);
    assert!(((line.p1.x - line.p2.x).abs() - 79.0).abs() < 1e-6);

    let report = det.detect(size, &horizontal_row(20, 100)).unwrap();
    assert_eq!(report.lines.len(), 1);
    let line = &report.lines[0];
    assert!((line.p1.x - 20.0).abs() < 1e-6 && (line.p2.x - 20.0).abs() < 1e-6);
    let ([c1, r1], [c2, r2]) = line.image_endpoints();
    assert_eq!((r1, r2), (line.p1.x, line.p2.x));
    assert!(((c1 - c2).abs() - 99.0).abs() < 1e-6);
}

#[test]
fn edge_mask_feeds_the_detector() {
    let (w, h) = (100usize, 100usize);
    let mask = mask_from_points(&diagonal(100), w, h);
    let view = ImageU8 {
        w,
        h,
        stride: w,
        data: &mask,
    };
    let points = view.edge_points(255);
    assert_eq!(points, diagonal(100));

    let report = detector(50, LineReconstruction::AxisIntercepts)
        .detect(view.size(), &points)
        .unwrap();
    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.input.edge_points, 100);
}

#[test]
fn report_serializes_to_json() {
    let report = detector(50, LineReconstruction::AxisIntercepts)
        .detect(ImageSize::new(100, 100), &diagonal(100))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["input"]["edgePoints"], 100);
    assert_eq!(json["accumulator"]["angleBins"], 180);
    assert_eq!(json["accumulator"]["voteThreshold"], 50);
    assert_eq!(json["lines"][0]["angleBin"], 135);
    assert_eq!(json["lines"][0]["votes"], 100);
    assert!(json["anomalies"].as_array().unwrap().is_empty());
    assert!(json["timings"]["stages"].as_array().unwrap().len() >= 2);
}
