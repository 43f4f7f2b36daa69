//! # Codec Benchmark
//!
//! TARGET: decode + encode well under 1µs per record; a full tank
//! dump is a handful of records.
//!
//! Run with: `cargo bench --package arsenal_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use arsenal_core::{decode, diff, encode, BarrelDefinition, RECORD_SIZE};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn sample_bytes() -> [u8; RECORD_SIZE] {
    let mut bytes = [0u8; RECORD_SIZE];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(37);
    }
    bytes
}

/// Benchmark: decode one record.
fn bench_decode(c: &mut Criterion) {
    let bytes = sample_bytes();
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(RECORD_SIZE as u64));
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&bytes))));
    group.finish();
}

/// Benchmark: encode one record.
fn bench_encode(c: &mut Criterion) {
    let barrel = decode(&sample_bytes()).unwrap();
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(RECORD_SIZE as u64));
    group.bench_function("encode", |b| b.iter(|| encode(black_box(&barrel))));
    group.finish();
}

/// Benchmark: field diff between two records.
fn bench_diff(c: &mut Criterion) {
    let left = decode(&sample_bytes()).unwrap();
    let right = BarrelDefinition {
        width: 0.5,
        ..left
    };
    c.bench_function("diff_one_field", |b| {
        b.iter(|| diff(black_box(&left), black_box(&right)));
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_diff);
criterion_main!(benches);
