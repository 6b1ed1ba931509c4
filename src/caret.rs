//! Caret, mark, and selection state.
//!
//! The caret is a pair of between-byte positions: the *dot* (where the caret
//! is drawn) and the *mark* (the other end of the selection). When both have
//! the same index there is no selection.
//!
//! Every index handed to the model is saturated into
//! `[0, last_possible_caret_index]`; there is no error path. Two positions are
//! canonicalised to `Backward` bias because they can only be drawn one way:
//! index 0, and the end of the data when it falls exactly on a row boundary.
//!
//! # Examples
//!
//! ```
//! use hexview_rust::caret::CaretModel;
//! use hexview_rust::position::Bias;
//! use hexview_rust::range::ByteRange;
//!
//! let mut caret = CaretModel::new(32, 16);
//! caret.set_selection(10, 4);
//! assert_eq!(caret.selection(), ByteRange::new(4, 10));
//!
//! caret.set_dot(99, Bias::Forward);
//! assert_eq!(caret.dot().index, 32);
//! assert_eq!(caret.dot().bias, Bias::Backward);
//! assert!(!caret.has_selection());
//! ```

use crate::area::AreaId;
use crate::position::{Bias, IndexPosition};
use crate::range::ByteRange;

/// Old and new caret state of a single transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretChange {
    pub old_dot: IndexPosition,
    pub old_mark: IndexPosition,
    pub dot: IndexPosition,
    pub mark: IndexPosition,
}

impl CaretChange {
    /// Whether nothing changed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.old_dot == self.dot && self.old_mark == self.mark
    }

    /// Selection before the transition.
    #[must_use]
    pub fn old_selection(&self) -> ByteRange {
        selection_between(self.old_dot, self.old_mark)
    }

    /// Selection after the transition.
    #[must_use]
    pub fn selection(&self) -> ByteRange {
        selection_between(self.dot, self.mark)
    }

    /// Whether the selected bytes differ.
    #[must_use]
    pub fn selection_changed(&self) -> bool {
        self.old_selection() != self.selection()
    }
}

/// Selected bytes between two positions; empty at the lower index when both
/// indices coincide.
fn selection_between(dot: IndexPosition, mark: IndexPosition) -> ByteRange {
    let lo = dot.index.min(mark.index);
    let hi = dot.index.max(mark.index);
    ByteRange::new(lo, hi - 1)
}

/// Caret visibility toggled by the host's periodic timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretBlink {
    visible: bool,
    interval_ms: u64,
}

impl CaretBlink {
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            visible: true,
            interval_ms: interval_ms.max(1),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Half-period the host timer should fire at.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    /// Force the caret visible, restarting the blink cycle.
    pub fn reset(&mut self) {
        self.visible = true;
    }

    /// Advance one timer period. The caret only blinks without a selection;
    /// with one it stays visible. Returns whether visibility changed.
    pub fn tick(&mut self, has_selection: bool) -> bool {
        if has_selection {
            let changed = !self.visible;
            self.visible = true;
            return changed;
        }
        self.visible = !self.visible;
        true
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(500)
    }
}

/// Dot/mark pair over a byte source of known length.
#[derive(Clone, Debug)]
pub struct CaretModel {
    dot: IndexPosition,
    mark: IndexPosition,
    data_len: i64,
    bytes_per_row: i64,
    drag_origin: Option<AreaId>,
    blink: CaretBlink,
}

impl CaretModel {
    /// Create a caret at index 0.
    #[must_use]
    pub fn new(data_len: i64, bytes_per_row: i64) -> Self {
        let origin = IndexPosition::backward(0);
        Self {
            dot: origin,
            mark: origin,
            data_len: data_len.max(0),
            bytes_per_row: bytes_per_row.max(0),
            drag_origin: None,
            blink: CaretBlink::default(),
        }
    }

    #[must_use]
    pub fn dot(&self) -> IndexPosition {
        self.dot
    }

    #[must_use]
    pub fn mark(&self) -> IndexPosition {
        self.mark
    }

    /// One past the last byte.
    #[must_use]
    pub fn last_possible_caret_index(&self) -> i64 {
        self.data_len
    }

    #[must_use]
    pub fn bytes_per_row(&self) -> i64 {
        self.bytes_per_row
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.dot.index != self.mark.index
    }

    /// Selected bytes, or an empty range positioned at the caret.
    #[must_use]
    pub fn selection(&self) -> ByteRange {
        selection_between(self.dot, self.mark)
    }

    /// First selected byte, if any.
    #[must_use]
    pub fn selection_start(&self) -> Option<i64> {
        self.has_selection()
            .then(|| self.dot.index.min(self.mark.index))
    }

    /// Last selected byte (inclusive), if any.
    #[must_use]
    pub fn selection_end(&self) -> Option<i64> {
        self.has_selection()
            .then(|| self.dot.index.max(self.mark.index) - 1)
    }

    #[must_use]
    pub fn blink(&self) -> &CaretBlink {
        &self.blink
    }

    pub fn blink_mut(&mut self) -> &mut CaretBlink {
        &mut self.blink
    }

    /// Saturate a position into the valid caret range and canonicalise its
    /// bias.
    #[must_use]
    pub fn sanitize(&self, index: i64, bias: Bias) -> IndexPosition {
        let index = index.clamp(0, self.data_len);
        let at_wrapped_end = index == self.data_len
            && index > 0
            && self.bytes_per_row > 0
            && index % self.bytes_per_row == 0;
        let bias = if index == 0 || at_wrapped_end {
            Bias::Backward
        } else {
            bias
        };
        IndexPosition::new(index, bias)
    }

    fn transition(&mut self, dot: IndexPosition, mark: IndexPosition) -> CaretChange {
        let change = CaretChange {
            old_dot: self.dot,
            old_mark: self.mark,
            dot,
            mark,
        };
        self.dot = dot;
        self.mark = mark;
        self.blink.reset();
        change
    }

    /// Move both dot and mark, clearing any selection.
    pub fn set_dot(&mut self, index: i64, bias: Bias) -> CaretChange {
        let pos = self.sanitize(index, bias);
        self.transition(pos, pos)
    }

    /// Move the dot only, creating or resizing the selection against the
    /// current mark.
    pub fn move_dot(&mut self, index: i64, bias: Bias) -> CaretChange {
        let pos = self.sanitize(index, bias);
        let mark = self.mark;
        self.transition(pos, mark)
    }

    /// Select the inclusive byte range between `start` and `end`.
    ///
    /// The dot ends up at `end`: after it when `start <= end`, before it
    /// otherwise, so the caret is drawn at the end the user extended to.
    pub fn set_selection(&mut self, start: i64, end: i64) -> CaretChange {
        if self.data_len == 0 {
            return self.set_dot(0, Bias::Backward);
        }
        let last_byte = self.data_len - 1;
        let start = start.clamp(0, last_byte);
        let end = end.clamp(0, last_byte);
        let (mark, dot) = if start <= end {
            (
                self.sanitize(start, Bias::Forward),
                self.sanitize(end + 1, Bias::Backward),
            )
        } else {
            (
                self.sanitize(start + 1, Bias::Backward),
                self.sanitize(end, Bias::Forward),
            )
        };
        self.transition(dot, mark)
    }

    /// Forget the data: the caret returns to index 0 and any drag ends.
    pub fn reset(&mut self, data_len: i64) -> CaretChange {
        self.data_len = data_len.max(0);
        self.drag_origin = None;
        self.set_dot(0, Bias::Backward)
    }

    /// Adopt a new row width, re-canonicalising both positions.
    pub fn set_bytes_per_row(&mut self, bytes_per_row: i64) -> CaretChange {
        self.bytes_per_row = bytes_per_row.max(0);
        let dot = self.sanitize(self.dot.index, self.dot.bias);
        let mark = self.sanitize(self.mark.index, self.mark.bias);
        self.transition(dot, mark)
    }

    // ============================================
    // Drag sessions
    // ============================================

    /// Area a drag started in, while a drag is active.
    #[must_use]
    pub fn drag_origin(&self) -> Option<AreaId> {
        self.drag_origin
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Start a drag at `position` in `area`, placing the caret there.
    ///
    /// With `extend` the mark stays put so the press extends the current
    /// selection instead.
    pub fn begin_drag(
        &mut self,
        area: AreaId,
        position: IndexPosition,
        extend: bool,
    ) -> CaretChange {
        self.drag_origin = Some(area);
        if extend {
            self.move_dot(position.index, position.bias)
        } else {
            self.set_dot(position.index, position.bias)
        }
    }

    /// Continue a drag. Ignored unless a drag started in the same area.
    pub fn drag_to(&mut self, area: AreaId, position: IndexPosition) -> Option<CaretChange> {
        if self.drag_origin != Some(area) {
            return None;
        }
        Some(self.move_dot(position.index, position.bias))
    }

    /// End the current drag, if any.
    pub fn end_drag(&mut self) -> bool {
        self.drag_origin.take().is_some()
    }
}
