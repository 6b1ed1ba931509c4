//! Damage computation and paint-pass benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use hexview_rust::layout::{FontMetrics, MonospaceTemplateFactory, RowTemplateFactory};
use hexview_rust::{
    AreaId, Bias, ByteRange, CoordinateMapper, DamageComputer, HexView, IndexPosition, RowConfig,
    RowData, RowTemplate, ViewConfig,
};
use std::hint::black_box;
use std::sync::Arc;

fn mapper() -> CoordinateMapper {
    let config = RowConfig::default();
    let template = MonospaceTemplateFactory::default()
        .create_hex_template(&config, &FontMetrics::new(8, 14, 11, 3).unwrap())
        .unwrap();
    CoordinateMapper::new(Arc::new(template), 16, 1 << 24, 0)
}

fn damage_rules(c: &mut Criterion) {
    let m = mapper();

    c.bench_function("caret_moved_adjacent_rows", |b| {
        b.iter(|| {
            DamageComputer.caret_moved(
                &m,
                black_box(IndexPosition::forward(1_000)),
                black_box(IndexPosition::backward(1_024)),
            )
        });
    });

    c.bench_function("range_delta_drag_step", |b| {
        b.iter(|| {
            DamageComputer.range_delta(
                &m,
                black_box(ByteRange::new(100, 5_000)),
                black_box(ByteRange::new(100, 5_016)),
            )
        });
    });

    c.bench_function("range_rects_large", |b| {
        b.iter(|| m.range_rects(black_box(ByteRange::new(7, 1_000_003))));
    });
}

fn paint_pass(c: &mut Criterion) {
    let data: Vec<u8> = (0..1 << 16).map(|i| i as u8).collect();
    let metrics = FontMetrics::new(8, 14, 11, 3).unwrap();
    let mut view = HexView::new(data, ViewConfig::default(), metrics).unwrap();
    view.set_viewport_height(16 * 40);
    for i in 0..50 {
        view.add_highlight(i * 97, i * 97 + 40, None);
    }

    c.bench_function("drag_and_repaint", |b| {
        let mut renderer = |_: AreaId, _: &RowTemplate, row: &RowData| {
            black_box(row.cells.len());
        };
        let mut i = 0i64;
        b.iter(|| {
            i = (i + 1) % 600;
            view.set_caret(3, Bias::Forward);
            view.extend_caret(black_box(i), Bias::Backward);
            view.render_damaged(&mut renderer)
        });
    });
}

criterion_group!(benches, damage_rules, paint_pass);
criterion_main!(benches);
