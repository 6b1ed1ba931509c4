//! Row layout and hit-testing benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hexview_rust::layout::{FontMetrics, MonospaceTemplateFactory, RowTemplateFactory};
use hexview_rust::{CoordinateMapper, RowConfig, RowInsets};
use std::hint::black_box;
use std::sync::Arc;

fn metrics() -> FontMetrics {
    FontMetrics::new(8, 14, 11, 3).unwrap()
}

fn template_creation(c: &mut Criterion) {
    let factory = MonospaceTemplateFactory::default();
    let mut group = c.benchmark_group("create_hex_template");
    for bpr in [16i64, 64, 256] {
        let config = RowConfig::new(bpr, 4, 8, RowInsets::default(), 2).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(bpr), &config, |b, config| {
            b.iter(|| factory.create_hex_template(black_box(config), &metrics()));
        });
    }
    group.finish();
}

fn hit_testing(c: &mut Criterion) {
    let config = RowConfig::new(64, 8, 8, RowInsets::default(), 2).unwrap();
    let template = MonospaceTemplateFactory::default()
        .create_hex_template(&config, &metrics())
        .unwrap();
    let width = i64::from(template.row_width());
    let mapper = CoordinateMapper::new(Arc::new(template), 64, 1 << 30, 0);

    c.bench_function("hit_test_sweep_row", |b| {
        b.iter(|| {
            for px in 0..width {
                black_box(mapper.hit_test(black_box(px)));
            }
        });
    });

    c.bench_function("position_at_deep_row", |b| {
        b.iter(|| mapper.position_at(black_box(width / 2), black_box(14 * 1_000_000)));
    });
}

criterion_group!(benches, template_creation, hit_testing);
criterion_main!(benches);
