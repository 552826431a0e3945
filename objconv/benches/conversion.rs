//! Conversion benchmarks
//!
//! Measures XML, JSON and deep clone round trips through `ObjectConverter`
//! for small and larger values.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use objconv::ObjectConverter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Line {
    sku: String,
    quantity: u32,
    price_cents: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Order {
    id: u64,
    customer: String,
    lines: Vec<Line>,
}

impl Order {
    fn new(lines: usize) -> Self {
        Self {
            id: 42,
            customer: "Example Customer".to_string(),
            lines: (0..lines)
                .map(|i| Line {
                    sku: format!("SKU-{i:05}"),
                    quantity: (i % 7) as u32 + 1,
                    price_cents: 1_999,
                })
                .collect(),
        }
    }
}

const SIZES: [usize; 3] = [1, 16, 256];

fn bench_xml(c: &mut Criterion) {
    let converter = ObjectConverter::new();
    let mut group = c.benchmark_group("xml_round_trip");

    for lines in SIZES {
        let order = Order::new(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &order, |b, order| {
            b.iter(|| {
                let xml = converter.to_xml(black_box(order)).unwrap();
                black_box(converter.from_xml::<Order>(&xml).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_json(c: &mut Criterion) {
    let converter = ObjectConverter::new();
    let mut group = c.benchmark_group("json_round_trip");

    for lines in SIZES {
        let order = Order::new(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &order, |b, order| {
            b.iter(|| {
                let json = converter.to_json(black_box(order)).unwrap();
                black_box(converter.from_json::<Order>(&json).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_deep_clone(c: &mut Criterion) {
    let converter = ObjectConverter::new();
    let mut group = c.benchmark_group("deep_clone");

    for lines in SIZES {
        let order = Order::new(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("postcard", lines), &order, |b, order| {
            b.iter(|| black_box(converter.deep_clone(black_box(order)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("derived_clone", lines), &order, |b, order| {
            b.iter(|| black_box(black_box(order).clone()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_xml, bench_json, bench_deep_clone);
criterion_main!(benches);
