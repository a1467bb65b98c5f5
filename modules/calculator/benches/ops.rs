//! Calculator benchmarks.
//!
//! Run with: `cargo bench -p calculator`

use calculator::Service;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_add(c: &mut Criterion) {
    let service = Service::new();
    c.bench_function("calculator_add", |b| {
        b.iter(|| black_box(service.add(black_box(5.0), black_box(3.0))));
    });
}

fn bench_multiply(c: &mut Criterion) {
    let service = Service::new();
    c.bench_function("calculator_multiply", |b| {
        b.iter(|| black_box(service.multiply(black_box(5.0), black_box(3.0))));
    });
}

fn bench_divide(c: &mut Criterion) {
    let service = Service::new();
    c.bench_function("calculator_divide", |b| {
        b.iter(|| black_box(service.divide(black_box(6.0), black_box(3.0))));
    });
}

criterion_group!(benches, bench_add, bench_multiply, bench_divide);
criterion_main!(benches);
