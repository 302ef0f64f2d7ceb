// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Fixed-point scalar benchmarks.
//!
//! # Running
//!
//! ```sh
//! cargo bench --package fpm-benches --bench scalar_ops
//! ```
//!
//! # What This Measures
//!
//! - `arith`: default vs saturating multiply, and division.
//! - `transcendental`: interpolated vs fast trig, `sqrt`, `log2`, `pow2`.
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use fpm_core::Fix64;
use std::{hint::black_box, time::Duration};

const SAMPLES: usize = 1_024;

/// Evenly spaced inputs across `[lo, hi)`, identical on every run.
fn inputs(lo: f64, hi: f64) -> Vec<Fix64> {
    (0..SAMPLES)
        .map(|i| Fix64::from_f64(lo + (hi - lo) * i as f64 / SAMPLES as f64))
        .collect()
}

fn bench_arith(c: &mut Criterion) {
    let xs = inputs(-1_000.0, 1_000.0);
    let ys = inputs(0.5, 7.5);
    let mut group = c.benchmark_group("arith");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(4));
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function("mul", |b| {
        b.iter(|| {
            xs.iter()
                .zip(&ys)
                .fold(Fix64::ZERO, |acc, (x, y)| acc + black_box(*x) * black_box(*y))
        });
    });
    group.bench_function("safe_mul", |b| {
        b.iter(|| {
            xs.iter().zip(&ys).fold(Fix64::ZERO, |acc, (x, y)| {
                acc.safe_add(black_box(*x).safe_mul(black_box(*y)))
            })
        });
    });
    group.bench_function("div", |b| {
        b.iter(|| {
            xs.iter()
                .zip(&ys)
                .fold(Fix64::ZERO, |acc, (x, y)| acc + black_box(*x) / black_box(*y))
        });
    });
    group.finish();
}

fn bench_transcendental(c: &mut Criterion) {
    let angles = inputs(-10.0, 10.0);
    let positives = inputs(0.001, 1_000.0);
    let exponents = inputs(-20.0, 20.0);
    let mut group = c.benchmark_group("transcendental");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(4));
    group.throughput(Throughput::Elements(SAMPLES as u64));

    // Build the lookup tables before timing anything.
    black_box(Fix64::ONE.sin());
    black_box(Fix64::ONE.tan());

    group.bench_function("sin", |b| {
        b.iter(|| angles.iter().map(|x| black_box(*x).sin()).sum::<Fix64>());
    });
    group.bench_function("fast_sin", |b| {
        b.iter(|| angles.iter().map(|x| black_box(*x).fast_sin()).sum::<Fix64>());
    });
    group.bench_function("tan", |b| {
        b.iter(|| angles.iter().map(|x| black_box(*x).tan()).sum::<Fix64>());
    });
    group.bench_function("atan2", |b| {
        b.iter(|| {
            angles
                .iter()
                .zip(&positives)
                .map(|(y, x)| black_box(*y).atan2(black_box(*x)))
                .sum::<Fix64>()
        });
    });
    group.bench_function("sqrt", |b| {
        b.iter(|| {
            positives
                .iter()
                .filter_map(|x| black_box(*x).sqrt().ok())
                .sum::<Fix64>()
        });
    });
    group.bench_function("log2", |b| {
        b.iter(|| {
            positives
                .iter()
                .filter_map(|x| black_box(*x).log2().ok())
                .sum::<Fix64>()
        });
    });
    group.bench_function("pow2", |b| {
        b.iter(|| exponents.iter().map(|x| black_box(*x).pow2()).sum::<Fix64>());
    });
    group.finish();
}

criterion_group!(benches, bench_arith, bench_transcendental);
criterion_main!(benches);
