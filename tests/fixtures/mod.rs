//! Test fixtures for hex view tests.
//!
//! - [`RecordingRenderer`] - Records every painted row and caret
//! - [`RecordingPainter`] - Records highlight paint calls
//! - [`SharedSink`] - Damage sink whose log stays readable after boxing
//! - [`init_logging`] - Forwards the crate log callback into `tracing`

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every fixture

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use hexview_rust::{
    AreaId, ByteRange, Damage, DamageSink, FontMetrics, HexView, HighlightPainter, LogLevel,
    Rect, RowConfig, RowData, RowInsets, RowRenderer, RowTemplate, ViewConfig, set_log_callback,
};

/// Install a `tracing` subscriber and route crate logs into it.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
    set_log_callback(|level, message| match level {
        LogLevel::Debug => tracing::debug!(target: "hexview", "{message}"),
        LogLevel::Info => tracing::info!(target: "hexview", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "hexview", "{message}"),
        LogLevel::Error => tracing::error!(target: "hexview", "{message}"),
    });
}

/// 8x14 cells, ascent 11.
pub fn metrics() -> FontMetrics {
    FontMetrics::new(8, 14, 11, 3).unwrap()
}

/// 16 bytes per row in groups of 4, no insets, 2px caret, 10px area gap.
pub fn config() -> ViewConfig {
    ViewConfig {
        row: RowConfig::new(16, 4, 8, RowInsets::zero(), 2).unwrap(),
        area_gap: 10,
        ..ViewConfig::default()
    }
}

/// Bytes `0, 1, 2, ...` wrapping at 256.
pub fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// View over `len` sample bytes with a viewport of `rows` rows and no
/// pending damage.
pub fn view_with(len: usize, rows: i64) -> HexView {
    let mut view = HexView::new(sample_data(len), config(), metrics()).unwrap();
    view.set_viewport_height(rows * 14);
    view.take_damage();
    view
}

/// One painted row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintedRow {
    pub area: AreaId,
    pub row: i64,
    pub cells: Vec<String>,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rows: Vec<PaintedRow>,
    pub carets: Vec<(AreaId, Rect)>,
}

impl RecordingRenderer {
    pub fn rows_of(&self, area: AreaId) -> Vec<i64> {
        self.rows
            .iter()
            .filter(|r| r.area == area)
            .map(|r| r.row)
            .collect()
    }
}

impl RowRenderer for RecordingRenderer {
    fn paint_row(&mut self, area: AreaId, _template: &RowTemplate, row: &RowData) {
        self.rows.push(PaintedRow {
            area,
            row: row.row,
            cells: row.cells.clone(),
        });
    }

    fn paint_caret(&mut self, area: AreaId, rect: Rect) {
        self.carets.push((area, rect));
    }
}

/// One highlight paint call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintCall {
    pub area: AreaId,
    pub bytes: ByteRange,
    pub rects: Vec<Rect>,
}

#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub name: &'static str,
    pub calls: Mutex<Vec<PaintCall>>,
}

impl RecordingPainter {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<PaintCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl HighlightPainter for RecordingPainter {
    fn paint(&self, area: AreaId, bytes: ByteRange, rects: &[Rect]) {
        self.calls.lock().unwrap().push(PaintCall {
            area,
            bytes,
            rects: rects.to_vec(),
        });
    }
}

/// Damage sink sharing its log with the test.
#[derive(Clone, Debug, Default)]
pub struct SharedSink(pub Rc<RefCell<Vec<Damage>>>);

impl SharedSink {
    pub fn take(&self) -> Vec<Damage> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl DamageSink for SharedSink {
    fn damage(&mut self, damage: Damage) {
        self.0.borrow_mut().push(damage);
    }
}
