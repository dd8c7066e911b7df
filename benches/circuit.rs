//! Criterion benchmarks for the circuit background.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use circuitfx::circuit::CircuitGraph;
use circuitfx::config::CircuitConfig;
use circuitfx::prng::Prng;

/// Regeneration cost (runs on every resize) for a few node counts.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in [30usize, 60, 120, 240].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("nodes", count), count, |b, &count| {
            let cfg = CircuitConfig {
                node_count: count,
                ..CircuitConfig::default()
            };
            let mut rng = Prng::new(42);
            b.iter(|| black_box(CircuitGraph::generate(1920.0, 1080.0, &cfg, &mut rng).len()));
        });
    }

    group.finish();
}

/// Per-frame work that doesn't touch the canvas: flicker plus trace walk.
fn bench_frame(c: &mut Criterion) {
    let cfg = CircuitConfig::default();
    let mut rng = Prng::new(7);
    let mut graph = CircuitGraph::generate(1920.0, 1080.0, &cfg, &mut rng);

    c.bench_function("frame_flicker_and_edges", |b| {
        b.iter(|| {
            graph.flicker(&mut rng, cfg.flicker_threshold);
            let mut acc = 0.0;
            for (from, to) in graph.edges() {
                let path = circuitfx::circuit::trace_path(from, to);
                acc += path[1].x + path[2].y;
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_generate, bench_frame);
criterion_main!(benches);
