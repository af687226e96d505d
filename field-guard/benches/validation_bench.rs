//! Performance benchmarks for rule parsing and record validation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use field_guard::constraints::Constraint;
use field_guard::core::{FieldValue, Validator};
use field_guard::record;
use std::hint::black_box;

record! {
    pub struct Customer {
        pub id: String => "len:36",
        pub name: String => "min:2",
        pub country: String => "in:US,CA,GB,DE,FR,JP",
        pub age: i64 => "min:18",
        pub score: i64 => "max:100",
        pub tier: i64 => "in:1,2,3,4,5",
        pub notes: String,
    }
}

fn customer(valid: bool) -> Customer {
    Customer {
        id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        name: if valid { "Dana" } else { "D" }.to_string(),
        country: if valid { "DE" } else { "XX" }.to_string(),
        age: if valid { 41 } else { 12 },
        score: if valid { 87 } else { 120 },
        tier: if valid { 3 } else { 9 },
        notes: String::new(),
    }
}

/// Benchmark parsing of each rule form
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for rule in ["len:36", "min:18", "max:100", "in:US,CA,GB,DE,FR,JP", "foo:bar"] {
        group.bench_with_input(BenchmarkId::from_parameter(rule), rule, |b, rule| {
            b.iter(|| black_box(Constraint::parse(black_box(rule))))
        });
    }

    group.finish();
}

/// Benchmark membership on text vs integer fields
fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let constraint = Constraint::parse("in:1,2,3,4,5,6,7,8,9,10").unwrap();

    group.bench_function("text", |b| {
        b.iter(|| black_box(constraint.evaluate(black_box(&FieldValue::Str("10")))))
    });
    group.bench_function("integer", |b| {
        b.iter(|| black_box(constraint.evaluate(black_box(&FieldValue::Int(10)))))
    });

    group.finish();
}

/// Benchmark full record validation, passing and failing
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let validator = Validator::new();

    for valid in [true, false] {
        let record = customer(valid);
        let label = if valid { "valid" } else { "invalid" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(validator.report(black_box(&record)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_membership, bench_validate);
criterion_main!(benches);
