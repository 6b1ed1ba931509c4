//! Fuzz target for caret and selection state transitions.
//!
//! Drives a view with arbitrary keyboard, pointer, and highlight operations
//! and checks that the caret always stays within the data.

#![no_main]

use arbitrary::Arbitrary;
use hexview_rust::{Bias, FontMetrics, HexView, Modifiers, Motion, RowConfig, RowInsets, ViewConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    SetCaret(i64, bool),
    ExtendCaret(i64, bool),
    Select(i64, i64),
    Move(u8, bool),
    Press(i64, i64, bool),
    Drag(i64, i64),
    Release,
    Highlight(i64, i64),
    ChangeHighlight(u8, i64, i64),
    Scroll(i64),
    Blink,
    Render,
}

#[derive(Arbitrary, Debug)]
struct Input {
    len: u16,
    bytes_per_row: u8,
    viewport_rows: u8,
    ops: Vec<Op>,
}

const MOTIONS: [Motion; 10] = [
    Motion::Left,
    Motion::Right,
    Motion::Up,
    Motion::Down,
    Motion::RowStart,
    Motion::RowEnd,
    Motion::PageUp,
    Motion::PageDown,
    Motion::DocumentStart,
    Motion::DocumentEnd,
];

fn bias(backward: bool) -> Bias {
    if backward { Bias::Backward } else { Bias::Forward }
}

fuzz_target!(|input: Input| {
    let Ok(row) = RowConfig::new(i64::from(input.bytes_per_row), 4, 6, RowInsets::zero(), 2) else {
        return;
    };
    let config = ViewConfig { row, ..ViewConfig::default() };
    let Ok(metrics) = FontMetrics::new(7, 13, 10, 3) else {
        return;
    };
    let len = i64::from(input.len);
    let Ok(mut view) = HexView::new(vec![0xA5u8; input.len as usize], config, metrics) else {
        return;
    };
    view.set_viewport_height(i64::from(input.viewport_rows) * 13);
    let mut ids = Vec::new();
    let mut renderer =
        |_: hexview_rust::AreaId, _: &hexview_rust::RowTemplate, _: &hexview_rust::RowData| {};

    for op in input.ops {
        match op {
            Op::SetCaret(i, b) => view.set_caret(i, bias(b)),
            Op::ExtendCaret(i, b) => view.extend_caret(i, bias(b)),
            Op::Select(a, b) => view.set_selection(a, b),
            Op::Move(m, extend) => view.move_caret(MOTIONS[m as usize % MOTIONS.len()], extend),
            Op::Press(x, y, shift) => {
                let mods = if shift { Modifiers::SHIFT } else { Modifiers::empty() };
                view.mouse_pressed(x, y, mods);
            }
            Op::Drag(x, y) => {
                view.mouse_dragged(x, y);
            }
            Op::Release => {
                view.mouse_released();
            }
            Op::Highlight(a, b) => ids.push(view.add_highlight(a, b, None)),
            Op::ChangeHighlight(k, a, b) => {
                if let Some(id) = ids.get(k as usize % ids.len().max(1)) {
                    view.change_highlight(*id, a, b);
                }
            }
            Op::Scroll(y) => {
                view.scroll_to(y);
            }
            Op::Blink => {
                view.blink_tick();
            }
            Op::Render => {
                view.render_damaged(&mut renderer);
            }
        }
        let dot = view.caret().dot();
        assert!((0..=len).contains(&dot.index));
        if dot.index == 0 {
            assert_eq!(dot.bias, Bias::Backward);
        }
        if let Some(row) = dot.visual_row(i64::from(input.bytes_per_row)) {
            assert!(row < view.row_count());
        }
    }
});
