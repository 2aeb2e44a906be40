// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the diffusion pass and full runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use amplify_core::{amplify, DiffusionOperator, IterationLoop, StateVector};

// ── DiffusionOperator.apply() ───────────────────────────────────────

fn bench_diffusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("diffusion");
    for n in [16usize, 1024, 65_536] {
        let mut state = StateVector::uniform(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| DiffusionOperator.apply(black_box(&mut state)))
        });
    }
    group.finish();
}

// ── amplify() ───────────────────────────────────────────────────────

fn bench_amplify_demo(c: &mut Criterion) {
    c.bench_function("amplify_16x20", |b| {
        b.iter(|| amplify(black_box(16), black_box(20), black_box(3)))
    });
}

fn bench_amplify_optimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("amplify_optimal");
    for n in [64i64, 1024, 16_384] {
        // ⌊π/4·√N⌋ reflections plus the initial flip.
        let k = (std::f64::consts::FRAC_PI_4 * (n as f64).sqrt()) as i64 + 1;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| IterationLoop::new(n, k, 0).and_then(|l| l.run()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_diffusion,
    bench_amplify_demo,
    bench_amplify_optimal,
);
criterion_main!(benches);
