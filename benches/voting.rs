use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hough_lines::{
    EdgePoint, ImageSize, LineExtractor, ParameterSpace, VotingEngine, VotingMode,
};

/// Edge points of a `size`×`size` chessboard outline with `cell` px cells.
fn chessboard_edges(size: u32, cell: u32) -> Vec<EdgePoint> {
    let mut pts = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if row % cell == 0 || col % cell == 0 {
                pts.push(EdgePoint::new(row, col));
            }
        }
    }
    pts
}

fn bench_voting(c: &mut Criterion) {
    let points = chessboard_edges(512, 64);
    let space = ParameterSpace::new(ImageSize::new(512, 512), 180, None)
        .expect("512x512 space is valid");

    c.bench_function("vote_sequential_512", |b| {
        let engine = VotingEngine::new(&space);
        b.iter(|| black_box(engine.accumulate(black_box(&points)).expect("in frame")))
    });

    c.bench_function("vote_parallel_512", |b| {
        let engine = VotingEngine::new(&space).with_mode(VotingMode::Parallel);
        b.iter(|| black_box(engine.accumulate(black_box(&points)).expect("in frame")))
    });
}

fn bench_extraction(c: &mut Criterion) {
    let points = chessboard_edges(512, 64);
    let space = ParameterSpace::new(ImageSize::new(512, 512), 180, None)
        .expect("512x512 space is valid");
    let acc = VotingEngine::new(&space)
        .accumulate(&points)
        .expect("in frame");
    let extractor = LineExtractor::default();

    c.bench_function("extract_512", |b| {
        b.iter(|| black_box(extractor.extract(&space, black_box(&acc))))
    });
}

criterion_group!(hotpaths, bench_voting, bench_extraction);
criterion_main!(hotpaths);
