//! Criterion benchmarks for the arrangement core at interactive stroke counts.
//! Focus sizes: n in {10, 50, 100, 200}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use triarc::stroke::{draw_stroke, ReplayToken, StrokeCfg};
use triarc::{ArrangementEngine, Point, Segment, TriangleIndex};

fn strokes(n: usize, seed: u64) -> Vec<Segment> {
    let cfg = StrokeCfg::default();
    (0..n)
        .map(|i| draw_stroke(cfg, ReplayToken { seed, index: i as u64 }))
        .collect()
}

fn filled_engine(n: usize, seed: u64) -> ArrangementEngine {
    let mut engine = ArrangementEngine::new(Point::new(200, 200), 400);
    for s in strokes(n, seed) {
        engine.add_segment(s);
    }
    engine
}

fn bench_arrangement(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrangement");
    for &n in &[10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("add_segments", n), &n, |b, &n| {
            b.iter_batched(
                || strokes(n, 43),
                |strokes| {
                    let mut engine = ArrangementEngine::new(Point::new(200, 200), 400);
                    for s in strokes {
                        engine.add_segment(s);
                    }
                    engine
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("rebuild_index", n), &n, |b, &n| {
            let engine = filled_engine(n, 44);
            let segments: Vec<Segment> = engine.segments().collect();
            b.iter_batched(
                TriangleIndex::default,
                |mut index| {
                    index.rebuild(segments.iter());
                    index
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("find_triangles", n), &n, |b, &n| {
            let engine = filled_engine(n, 45);
            let segments: Vec<Segment> = engine.segments().collect();
            let mut index = TriangleIndex::default();
            index.rebuild(segments.iter());
            b.iter(|| index.find_triangles())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arrangement);
criterion_main!(benches);
