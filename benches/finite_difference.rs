//! Finite Difference Benchmarks: scalar loop vs padded vector loop vs ndarray
//!
//! Each implementation computes central differences of `sin(x)` sampled on a
//! uniform grid, with one-sided differences at both borders.
//!
//! # Implementations
//!
//! - **scalar**: indexed loop over a `Vec<f32>` (baseline)
//! - **padded_simd**: shifted vector windows over `PaddedMemory`, closing with
//!   `last_vector` instead of a scalar tail loop
//! - **padded_simd_prefetch**: the same loop unrolled over four vectors, with
//!   one pair of prefetch hints per iteration ahead of the read and write
//!   streams
//! - **ndarray**: `Zip` over offset slices of an `Array1<f32>`
//!
//! # Memory Hierarchy
//!
//! Sizes run from L1-resident (4 KiB per array) to main memory (64 MiB).

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::{s, Array1, Zip};

use simdpad::prelude::*;

const SIZES: &[usize] = &[
    1_024,      // 4 KiB - L1 cache
    16_384,     // 64 KiB - L1→L2 transition
    262_144,    // 1 MiB - L2 cache
    4_194_304,  // 16 MiB - L3 cache
    16_777_216, // 64 MiB - Main memory
];

const UPPER: f32 = 40_000.0;

// One prefetch pair per UNROLL vectors, PREFETCH_DISTANCE vectors ahead.
const UNROLL: usize = 4;
const PREFETCH_DISTANCE: usize = 24;

fn sample_sine(n: usize) -> Vec<f32> {
    let h = UPPER / n as f32;
    (0..n).map(|i| (i as f32 * h).sin()).collect()
}

fn scalar_difference(y: &[f32], dy: &mut [f32], h: f32) {
    let n = y.len();
    let one_over_2h = 0.5 / h;
    dy[0] = (y[1] - y[0]) / h;
    for i in 1..n - 1 {
        dy[i] = (y[i + 1] - y[i - 1]) * one_over_2h;
    }
    dy[n - 1] = (y[n - 1] - y[n - 2]) / h;
}

fn padded_difference(y: &PaddedMemory<f32>, dy: &mut PaddedMemory<f32>, h: f32, prefetch: bool) {
    let n = y.entries_count();
    let width = PaddedMemory::<f32>::WIDTH;
    let one_over_2h = F32Vector::splat(0.5 / h);

    dy[0] = (y[1] - y[0]) / h;

    let interior = (y.padded_count() - 2) / width;
    let unrolled = if prefetch { interior - interior % UNROLL } else { 0 };
    for i in (0..unrolled).step_by(UNROLL) {
        let ahead = (i + PREFETCH_DISTANCE) * width;
        prefetch_for_one_read(y.as_ptr().wrapping_add(ahead));
        prefetch_for_modify(dy.as_ptr().wrapping_add(ahead));

        for k in i..i + UNROLL {
            let diff = y.vector_shifted(k, 2) - y.vector(k);
            dy.set_vector_shifted(k, 1, diff * one_over_2h);
        }
    }
    for i in unrolled..interior {
        let diff = y.vector_shifted(i, 2) - y.vector(i);
        dy.set_vector_shifted(i, 1, diff * one_over_2h);
    }

    let last = y.vectors_count() - 1;
    let left = y.vector_shifted(last, -2);
    let right = y.last_vector();
    dy.set_vector_shifted(last, -1, (right - left) * one_over_2h);

    dy[n - 1] = (y[n - 1] - y[n - 2]) / h;
}

fn ndarray_difference(y: &Array1<f32>, dy: &mut Array1<f32>, h: f32) {
    let n = y.len();
    let one_over_2h = 0.5 / h;
    dy[0] = (y[1] - y[0]) / h;
    Zip::from(dy.slice_mut(s![1..-1]))
        .and(y.slice(s![2..]))
        .and(y.slice(s![..-2]))
        .for_each(|d, &right, &left| *d = (right - left) * one_over_2h);
    dy[n - 1] = (y[n - 1] - y[n - 2]) / h;
}

fn benchmark_finite_difference(c: &mut Criterion) {
    for &size in SIZES {
        let mut group = c.benchmark_group(format!("FiniteDifference_{}", format_size(size)));
        // One read stream and one write stream of f32.
        group.throughput(Throughput::Bytes((2 * size * std::mem::size_of::<f32>()) as u64));

        let h = UPPER / size as f32;
        let samples = sample_sine(size);

        let mut dy_vec = vec![0.0f32; size];
        group.bench_function(BenchmarkId::new("scalar", size), |b| {
            b.iter(|| scalar_difference(black_box(&samples), black_box(&mut dy_vec), h))
        });

        let y = match PaddedMemory::<f32>::from_slice(&samples) {
            Ok(y) => y,
            Err(e) => panic!("cannot allocate {size} samples: {e}"),
        };
        let mut dy = match PaddedMemory::<f32>::new(size) {
            Ok(dy) => dy,
            Err(e) => panic!("cannot allocate {size} samples: {e}"),
        };
        group.bench_function(BenchmarkId::new("padded_simd", size), |b| {
            b.iter(|| padded_difference(black_box(&y), black_box(&mut dy), h, false))
        });
        group.bench_function(BenchmarkId::new("padded_simd_prefetch", size), |b| {
            b.iter(|| padded_difference(black_box(&y), black_box(&mut dy), h, true))
        });

        let y_nd = Array1::from_vec(samples.clone());
        let mut dy_nd = Array1::<f32>::zeros(size);
        group.bench_function(BenchmarkId::new("ndarray", size), |b| {
            b.iter(|| ndarray_difference(black_box(&y_nd), black_box(&mut dy_nd), h))
        });

        group.finish();
    }
}

fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<f32>();

    if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes}_B")
    }
}

fn all_benchmarks(c: &mut Criterion) {
    println!("backend: {}", simdpad::native_backend());
    benchmark_finite_difference(c);
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
