//! Fuzz target for hit testing and pixel-to-position mapping.
//!
//! Layout parameters and probe points are arbitrary; hit tests must never
//! panic and positions must stay inside the data.

#![no_main]

use std::sync::Arc;

use hexview_rust::layout::{FontMetrics, MonospaceTemplateFactory, RowTemplateFactory};
use hexview_rust::{ByteRange, CoordinateMapper, RowConfig, RowInsets};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u8, u8, u8, u8, u32, Vec<(i64, i64)>)| {
    let (bpr, group, gap, caret, cell, len, probes) = input;
    let Ok(insets) = RowInsets::new(i32::from(gap % 7), i32::from(gap % 5), 1, 1) else {
        return;
    };
    let Ok(config) = RowConfig::new(
        i64::from(bpr),
        i64::from(group.max(1)),
        i32::from(gap),
        insets,
        i32::from(caret % 8),
    ) else {
        return;
    };
    let Ok(metrics) = FontMetrics::new(i32::from(cell % 32).max(1), 12, 9, 3) else {
        return;
    };
    let factory = MonospaceTemplateFactory::default();
    let Ok(template) = factory.create_hex_template(&config, &metrics) else {
        return;
    };
    let len = i64::from(len);
    let mapper = CoordinateMapper::new(Arc::new(template), config.bytes_per_row, len, 17);

    for (x, y) in probes.into_iter().take(64) {
        if let Some(hit) = mapper.hit_test(x) {
            assert!(hit.index < mapper.template().len());
        }
        if let Some(pos) = mapper.position_at(x, y) {
            assert!(pos.index >= 0);
            assert!(pos.index <= mapper.row_count() * config.bytes_per_row);
        }
        let _ = mapper.row_range(hexview_rust::Rect::new(x, y, 50, 50));
        let start = x.rem_euclid(len.max(1));
        let end = y.rem_euclid(len.max(1));
        let range = ByteRange::new(start.min(end), start.max(end));
        assert!(mapper.range_rects(range).len() <= 3);
    }
});
