//! Criterion benchmarks for fastinv-math
//!
//! Measures wall-clock time of the reciprocal square root kernels against the
//! division and square root they replace.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastinv_math::{approx_rsqrt, approx_rsqrt_unrefined, approx_rsqrt_with, checked_rsqrt};
use std::hint::black_box;

/// Single-value latency of each variant
fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsqrt_scalar");
    let x = 42.0f32;

    group.bench_function("std_div_sqrt", |bencher| {
        bencher.iter(|| black_box(1.0 / black_box(x).sqrt()))
    });

    group.bench_function("libm_div_sqrt", |bencher| {
        bencher.iter(|| black_box(1.0 / libm::sqrtf(black_box(x))))
    });

    group.bench_function("approx_unrefined", |bencher| {
        bencher.iter(|| black_box(approx_rsqrt_unrefined(black_box(x))))
    });

    group.bench_function("approx_one_pass", |bencher| {
        bencher.iter(|| black_box(approx_rsqrt(black_box(x))))
    });

    group.bench_function("checked_one_pass", |bencher| {
        bencher.iter(|| black_box(checked_rsqrt(black_box(x))))
    });

    group.finish();
}

/// Cost of each extra refinement pass
fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsqrt_iterations");
    let x = 42.0f32;

    for iterations in [0u32, 1, 2, 3] {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |bencher, &iterations| {
                bencher.iter(|| black_box(approx_rsqrt_with(black_box(x), iterations)))
            },
        );
    }

    group.finish();
}

/// Caller-side loop over a buffer, the shape of a normalization pass
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsqrt_throughput");

    for size in [64usize, 1024, 16384] {
        let input: Vec<f32> = (1..=size).map(|i| i as f32 * 0.37).collect();
        let mut output = vec![0.0f32; size];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("std", size), &size, |bencher, _| {
            bencher.iter(|| {
                for (o, &x) in output.iter_mut().zip(input.iter()) {
                    *o = 1.0 / x.sqrt();
                }
                black_box(&output);
            })
        });

        group.bench_with_input(BenchmarkId::new("approx", size), &size, |bencher, _| {
            bencher.iter(|| {
                for (o, &x) in output.iter_mut().zip(input.iter()) {
                    *o = approx_rsqrt(x);
                }
                black_box(&output);
            })
        });
    }

    group.finish();
}

/// Vector normalization, the motivating workload
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_vec3");
    let v = [1.5f32, -2.25, 3.0];

    group.bench_function("std", |bencher| {
        bencher.iter(|| {
            let v = black_box(v);
            let inv = 1.0 / (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            black_box([v[0] * inv, v[1] * inv, v[2] * inv])
        })
    });

    group.bench_function("approx", |bencher| {
        bencher.iter(|| {
            let v = black_box(v);
            let inv = approx_rsqrt(v[0] * v[0] + v[1] * v[1] + v[2] * v[2]);
            black_box([v[0] * inv, v[1] * inv, v[2] * inv])
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalar,
    bench_iterations,
    bench_throughput,
    bench_normalize
);
criterion_main!(benches);
