//! Benchmarks for fairdraw
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use fairdraw::{
    entropy_bits, CharacterSet, DoubleRequest, IntegerRequest, RandomEngine, ShuffleEngine,
    ShuffleOptions, StringEngine, StringRequest,
};

fn bench_integer_sampling(c: &mut Criterion) {
    let mut engine = RandomEngine::secure().unwrap();

    let mut group = c.benchmark_group("sample_integer");

    // Range widths from a coin flip up to the full 64-bit span
    for width in [1i64, 100, 1 << 20, i64::MAX].iter() {
        let request = IntegerRequest::new(0, *width);

        group.bench_with_input(BenchmarkId::new("width", width), &request, |b, request| {
            b.iter(|| engine.sample_integer(black_box(request)))
        });
    }

    group.finish();
}

fn bench_double_sampling(c: &mut Criterion) {
    let mut engine = RandomEngine::secure().unwrap();

    let mut group = c.benchmark_group("sample_double");

    for digits in [1u8, 3, 9, 15].iter() {
        let request = DoubleRequest::new(-1.0, 1.0).with_fraction_digits(*digits);

        group.bench_with_input(BenchmarkId::new("digits", digits), &request, |b, request| {
            b.iter(|| engine.sample_double(black_box(request)))
        });
    }

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut engine = ShuffleEngine::secure().unwrap();

    let mut group = c.benchmark_group("shuffle");

    for size in [16usize, 256, 4096].iter() {
        let items: Vec<u64> = (0..*size as u64).collect();

        group.bench_with_input(BenchmarkId::new("copy", size), &items, |b, items| {
            b.iter(|| engine.shuffle_copy(black_box(items), &ShuffleOptions::default()))
        });
    }

    group.finish();
}

fn bench_string_generation(c: &mut Criterion) {
    let mut engine = StringEngine::secure().unwrap();

    let mut group = c.benchmark_group("generate_string");

    for length in [16usize, 64, 256].iter() {
        let request = StringRequest::new(*length);

        group.bench_with_input(BenchmarkId::new("alphanumeric", length), &request, |b, request| {
            b.iter(|| engine.generate(black_box(request)))
        });
    }

    // The no-repeat path goes through the shuffle engine instead
    let distinct = StringRequest::new(32).without_repetition();
    group.bench_function("alphanumeric_no_repeat_32", |b| {
        b.iter(|| engine.generate(black_box(&distinct)))
    });

    group.finish();
}

fn bench_entropy(c: &mut Criterion) {
    let request = StringRequest::new(64)
        .with_charset(CharacterSet::Alphanumeric)
        .without_repetition();

    c.bench_function("entropy_bits", |b| {
        b.iter(|| entropy_bits(black_box(&request)))
    });
}

criterion_group!(
    benches,
    bench_integer_sampling,
    bench_double_sampling,
    bench_shuffle,
    bench_string_generation,
    bench_entropy,
);

criterion_main!(benches);
