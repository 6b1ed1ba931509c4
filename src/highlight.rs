//! Byte-range highlights and the selection highlight.
//!
//! Highlights are painted in insertion order. The selection is not stored in
//! the list: it is derived from the caret on every paint and drawn either
//! before all highlights or after them.

use std::fmt;
use std::sync::Arc;

use crate::area::AreaId;
use crate::geometry::Rect;
use crate::range::ByteRange;

/// Draws a highlight. Implemented by the host; the core only hands over
/// geometry.
pub trait HighlightPainter: fmt::Debug {
    /// Paint `bytes` (already clipped to the visible rows) of `area`, covered
    /// by `rects` in area coordinates.
    fn paint(&self, area: AreaId, bytes: ByteRange, rects: &[Rect]);
}

/// Stable handle for a highlight in a [`HighlightRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HighlightId(u64);

impl HighlightId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// An inclusive byte range with an optional painter.
#[derive(Clone, Debug)]
pub struct Highlight {
    pub start: i64,
    pub end: i64,
    pub painter: Option<Arc<dyn HighlightPainter>>,
}

impl Highlight {
    /// Create a highlight, ordering the endpoints and clamping them at 0.
    #[must_use]
    pub fn new(start: i64, end: i64, painter: Option<Arc<dyn HighlightPainter>>) -> Self {
        let (start, end) = ordered(start, end);
        Self {
            start,
            end,
            painter,
        }
    }

    #[must_use]
    pub fn range(&self) -> ByteRange {
        ByteRange::new(self.start, self.end)
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    (a.min(b).max(0), a.max(b).max(0))
}

/// A highlight clipped to the visible bytes, ready to paint.
#[derive(Clone, Debug)]
pub struct VisibleHighlight<'a> {
    /// `None` for the selection.
    pub id: Option<HighlightId>,
    pub bytes: ByteRange,
    pub painter: Option<&'a Arc<dyn HighlightPainter>>,
}

impl VisibleHighlight<'_> {
    #[must_use]
    pub fn is_selection(&self) -> bool {
        self.id.is_none()
    }
}

/// Ordered collection of highlights.
#[derive(Debug, Default)]
pub struct HighlightRegistry {
    highlights: Vec<(HighlightId, Highlight)>,
    next_id: u64,
    selection_painter: Option<Arc<dyn HighlightPainter>>,
    selection_in_front: bool,
}

impl HighlightRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a highlight painted after every existing one.
    pub fn add_highlight(
        &mut self,
        start: i64,
        end: i64,
        painter: Option<Arc<dyn HighlightPainter>>,
    ) -> HighlightId {
        let id = HighlightId(self.next_id);
        self.next_id += 1;
        self.highlights.push((id, Highlight::new(start, end, painter)));
        id
    }

    pub fn remove_highlight(&mut self, id: HighlightId) -> Option<Highlight> {
        let pos = self.highlights.iter().position(|(hid, _)| *hid == id)?;
        Some(self.highlights.remove(pos).1)
    }

    /// Remove several highlights at once, returning those that existed.
    pub fn remove_highlights(&mut self, ids: &[HighlightId]) -> Vec<(HighlightId, Highlight)> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.highlights)
            .into_iter()
            .partition(|(id, _)| ids.contains(id));
        self.highlights = kept;
        removed
    }

    /// Remove every highlight.
    pub fn remove_all(&mut self) -> Vec<(HighlightId, Highlight)> {
        std::mem::take(&mut self.highlights)
    }

    /// Change a highlight's range in place, keeping its paint order.
    /// Returns the old and new ranges.
    pub fn change_highlight(
        &mut self,
        id: HighlightId,
        start: i64,
        end: i64,
    ) -> Option<(ByteRange, ByteRange)> {
        let (_, highlight) = self.highlights.iter_mut().find(|(hid, _)| *hid == id)?;
        let old = highlight.range();
        let (start, end) = ordered(start, end);
        highlight.start = start;
        highlight.end = end;
        Some((old, highlight.range()))
    }

    #[must_use]
    pub fn get(&self, id: HighlightId) -> Option<&Highlight> {
        self.highlights
            .iter()
            .find(|(hid, _)| *hid == id)
            .map(|(_, h)| h)
    }

    /// Highlights in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (HighlightId, &Highlight)> {
        self.highlights.iter().map(|(id, h)| (*id, h))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }

    #[must_use]
    pub fn selection_in_front(&self) -> bool {
        self.selection_in_front
    }

    pub fn set_selection_in_front(&mut self, in_front: bool) {
        self.selection_in_front = in_front;
    }

    #[must_use]
    pub fn selection_painter(&self) -> Option<&Arc<dyn HighlightPainter>> {
        self.selection_painter.as_ref()
    }

    pub fn set_selection_painter(&mut self, painter: Option<Arc<dyn HighlightPainter>>) {
        self.selection_painter = painter;
    }

    /// Highlights intersecting `visible`, clipped to it, in paint order.
    ///
    /// `selection` is included when non-empty, first or last depending on
    /// [`selection_in_front`](Self::selection_in_front). Highlights outside
    /// the visible bytes are skipped entirely.
    #[must_use]
    pub fn visible_highlights(
        &self,
        visible: ByteRange,
        selection: ByteRange,
    ) -> Vec<VisibleHighlight<'_>> {
        if !visible.is_valid() || visible.is_empty() {
            return Vec::new();
        }
        let clip = |range: ByteRange| {
            if !range.is_valid() || range.is_empty() {
                return None;
            }
            let clipped = range.intersection(&visible);
            (clipped.is_valid() && !clipped.is_empty()).then_some(clipped)
        };

        let selection_item = clip(selection).map(|bytes| VisibleHighlight {
            id: None,
            bytes,
            painter: self.selection_painter.as_ref(),
        });

        let mut items = Vec::with_capacity(self.highlights.len() + 1);
        if !self.selection_in_front {
            items.extend(selection_item.clone());
        }
        for (id, highlight) in &self.highlights {
            if let Some(bytes) = clip(highlight.range()) {
                items.push(VisibleHighlight {
                    id: Some(*id),
                    bytes,
                    painter: highlight.painter.as_ref(),
                });
            }
        }
        if self.selection_in_front {
            items.extend(selection_item);
        }
        items
    }
}
