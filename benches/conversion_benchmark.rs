// ============================================================================
// Roman Numeral Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Generation - integer to canonical numeral
// 2. Validation - grammar checks on valid and malformed input
// 3. Parsing - numeral to integer
// 4. Batch - lazy parsing over the full [1, 3999] range
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roman_numerals::prelude::*;
use std::hint::black_box;

// ============================================================================
// Single Conversion Benchmarks
// ============================================================================

fn benchmark_to_numeral(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_numeral");

    for n in [1u32, 49, 1984, 3888, 3999].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| black_box(to_numeral(black_box(n))));
        });
    }

    group.finish();
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for numeral in ["MMMDCCCLXXXVIII", "MCMLXXXIV", "IIIX", "IIII", "IC"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(numeral), numeral, |b, s| {
            b.iter(|| black_box(validate(black_box(s))));
        });
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for numeral in ["I", "XLII", "MCMLXXXIV", "MMMDCCCLXXXVIII", "MMMCMXCIX"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(numeral), numeral, |b, s| {
            b.iter(|| black_box(parse(black_box(s))));
        });
    }

    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn benchmark_full_range(c: &mut Criterion) {
    let numerals: Vec<String> = (MIN_VALUE..=MAX_VALUE)
        .map(|n| to_numeral(n).unwrap())
        .collect();

    c.bench_function("round_trip_full_range", |b| {
        b.iter(|| {
            for n in MIN_VALUE..=MAX_VALUE {
                let numeral = to_numeral(n).unwrap();
                black_box(parse(&numeral).unwrap());
            }
        });
    });

    c.bench_function("batch_parse_full_range", |b| {
        b.iter(|| {
            let parser = NumeralParser::new(numerals.iter().cloned());
            black_box(parser.as_parsed_list().unwrap())
        });
    });
}

criterion_group!(
    benches,
    benchmark_to_numeral,
    benchmark_validate,
    benchmark_parse,
    benchmark_full_range
);
criterion_main!(benches);
