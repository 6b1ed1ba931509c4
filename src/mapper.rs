//! Conversions between byte indices, grid cells, and pixel rectangles.
//!
//! A [`CoordinateMapper`] answers every geometric question about one area:
//! which row and column a byte lives in, where a byte or caret is drawn, and
//! which byte a pixel hits. Coordinates are *area coordinates*: `x` already
//! includes the area's horizontal offset inside the widget, and `y` grows
//! from the top of row 0 (scrolling is applied by the caller).

use std::sync::Arc;

use crate::geometry::Rect;
use crate::layout::RowTemplate;
use crate::position::{Bias, IndexPosition};
use crate::range::{ByteRange, RowRange};

/// Result of mapping a horizontal pixel to an element of the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementHitInfo {
    /// Element (column) index within the row.
    pub index: usize,
    /// The pixel lies on the element's leading half, so it maps to the gap
    /// before the element rather than the gap after it.
    pub is_leading_edge: bool,
    /// The pixel lies inside the element itself rather than in a caret slot,
    /// group gap, or past either end of the row.
    pub was_inside: bool,
}

impl ElementHitInfo {
    /// Between-byte column the hit resolves to: the element index for a
    /// leading hit, one past it for a trailing hit.
    #[must_use]
    pub fn insertion_column(&self) -> i64 {
        if self.is_leading_edge {
            self.index as i64
        } else {
            self.index as i64 + 1
        }
    }

    /// Bias of the position the hit resolves to.
    #[must_use]
    pub fn bias(&self) -> Bias {
        if self.is_leading_edge {
            Bias::Forward
        } else {
            Bias::Backward
        }
    }
}

/// Number of rows needed to show `len` bytes. Always at least one so an
/// empty source still has a row for the caret.
#[must_use]
pub fn rows_for_length(len: i64, bytes_per_row: i64) -> i64 {
    if bytes_per_row <= 0 || len <= 0 {
        return 1;
    }
    len / bytes_per_row + i64::from(len % bytes_per_row != 0)
}

/// Geometry of one area, derived from its row template.
#[derive(Clone, Debug)]
pub struct CoordinateMapper {
    template: Arc<RowTemplate>,
    bytes_per_row: i64,
    row_count: i64,
    x_offset: i64,
}

impl CoordinateMapper {
    /// Create a mapper for an area showing `data_len` bytes.
    #[must_use]
    pub fn new(
        template: Arc<RowTemplate>,
        bytes_per_row: i64,
        data_len: i64,
        x_offset: i64,
    ) -> Self {
        let bytes_per_row = bytes_per_row.max(0);
        Self {
            template,
            bytes_per_row,
            row_count: rows_for_length(data_len, bytes_per_row),
            x_offset,
        }
    }

    #[must_use]
    pub fn template(&self) -> &Arc<RowTemplate> {
        &self.template
    }

    #[must_use]
    pub fn bytes_per_row(&self) -> i64 {
        self.bytes_per_row
    }

    #[must_use]
    pub fn row_count(&self) -> i64 {
        self.row_count
    }

    #[must_use]
    pub fn x_offset(&self) -> i64 {
        self.x_offset
    }

    #[must_use]
    pub fn row_height(&self) -> i64 {
        i64::from(self.template.row_height())
    }

    #[must_use]
    pub fn row_width(&self) -> i64 {
        i64::from(self.template.row_width())
    }

    /// Recompute the row count after the data length changed.
    pub fn set_data_len(&mut self, data_len: i64) {
        self.row_count = rows_for_length(data_len, self.bytes_per_row);
    }

    /// Move the area horizontally.
    pub fn set_x_offset(&mut self, x_offset: i64) {
        self.x_offset = x_offset;
    }

    /// Bounds of the whole area, all rows included.
    #[must_use]
    pub fn area_bounds(&self) -> Rect {
        Rect::new(
            self.x_offset,
            0,
            self.row_width(),
            self.row_count.saturating_mul(self.row_height()),
        )
    }

    // ============================================
    // Index arithmetic
    // ============================================

    #[must_use]
    pub fn byte_index_to_row(&self, index: i64) -> Option<i64> {
        (index >= 0 && self.bytes_per_row > 0).then(|| index / self.bytes_per_row)
    }

    #[must_use]
    pub fn byte_index_to_column(&self, index: i64) -> Option<i64> {
        (index >= 0 && self.bytes_per_row > 0).then(|| index % self.bytes_per_row)
    }

    #[must_use]
    pub fn row_to_first_byte_index(&self, row: i64) -> Option<i64> {
        if row < 0 {
            return None;
        }
        row.checked_mul(self.bytes_per_row)
    }

    /// Bytes shown by a range of rows, whether or not the data reaches that
    /// far.
    #[must_use]
    pub fn visible_bytes(&self, rows: RowRange) -> ByteRange {
        if !rows.is_valid() || rows.is_empty() {
            return ByteRange::INVALID;
        }
        match (
            self.row_to_first_byte_index(rows.start),
            self.row_to_first_byte_index(rows.end),
        ) {
            (Some(first), Some(last)) => ByteRange::new(first, last + self.bytes_per_row - 1),
            _ => ByteRange::INVALID,
        }
    }

    /// Rows touched by a byte range, clamped to the existing rows.
    ///
    /// An empty byte range yields an empty row range at the row of its
    /// position.
    #[must_use]
    pub fn rows_of(&self, bytes: ByteRange) -> RowRange {
        if !bytes.is_valid() || self.bytes_per_row == 0 {
            return RowRange::INVALID;
        }
        let last_row = self.row_count - 1;
        let first = (bytes.start / self.bytes_per_row).min(last_row);
        if bytes.is_empty() {
            return RowRange::empty_at(first);
        }
        let last = (bytes.end / self.bytes_per_row).min(last_row);
        RowRange::new(first, last)
    }

    // ============================================
    // Pixel rectangles
    // ============================================

    /// Full-width rectangle of one row.
    #[must_use]
    pub fn row_rect(&self, row: i64) -> Rect {
        let height = self.row_height();
        Rect::new(self.x_offset, row.saturating_mul(height), self.row_width(), height)
    }

    /// Rectangle spanning a range of rows.
    #[must_use]
    pub fn rows_rect(&self, rows: RowRange) -> Option<Rect> {
        if !rows.is_valid() || rows.is_empty() {
            return None;
        }
        let top = self.row_rect(rows.start);
        Some(Rect::new(
            top.x,
            top.y,
            top.width,
            rows.len().saturating_mul(self.row_height()),
        ))
    }

    /// Rectangle of the element at `column` in `row`.
    #[must_use]
    pub fn element_rect(&self, row: i64, column: usize) -> Option<Rect> {
        if row < 0 {
            return None;
        }
        let element = self.template.element(column)?;
        Some(
            element
                .rect()
                .translate(self.x_offset, row.saturating_mul(self.row_height())),
        )
    }

    /// Rectangle of the cell showing byte `index`.
    #[must_use]
    pub fn byte_rect(&self, index: i64) -> Option<Rect> {
        let row = self.byte_index_to_row(index)?;
        let column = self.byte_index_to_column(index)?;
        self.element_rect(row, column as usize)
    }

    /// Rectangle of the caret slot for a position.
    ///
    /// The caret sits in the slot before the element at the position's
    /// column. A `Backward` position in column 0 sits in the trailing slot of
    /// the previous row instead.
    #[must_use]
    pub fn caret_rect(&self, position: IndexPosition) -> Option<Rect> {
        let caret = i64::from(self.template.caret_width());
        let row = position.visual_row(self.bytes_per_row)?;
        let (x, element) = if position.wraps_to_previous_row(self.bytes_per_row) {
            let last = self.template.elements().last()?;
            (i64::from(last.right()), last)
        } else {
            let column = self.byte_index_to_column(position.index)? as usize;
            let element = self.template.element(column)?;
            (i64::from(element.x) - caret, element)
        };
        Some(Rect::new(
            self.x_offset + x,
            row.saturating_mul(self.row_height()) + i64::from(element.y),
            caret,
            i64::from(element.height),
        ))
    }

    /// Rectangles covering a byte range: a partial head row, a block of full
    /// middle rows, and a partial tail row. Each rectangle spans the row's
    /// full height and runs from the first to the last covered element.
    #[must_use]
    pub fn range_rects(&self, bytes: ByteRange) -> Vec<Rect> {
        let (Some(first), Some(last)) = (
            self.template.elements().first(),
            self.template.elements().last(),
        ) else {
            return Vec::new();
        };
        if !bytes.is_valid() || bytes.is_empty() || self.bytes_per_row == 0 {
            return Vec::new();
        }

        let bpr = self.bytes_per_row;
        let height = self.row_height();
        let row_left = i64::from(first.x);
        let row_right = i64::from(last.right());
        let span = |row: i64, rows: i64, left: i64, right: i64| {
            Rect::new(
                self.x_offset + left,
                row.saturating_mul(height),
                right - left,
                rows.saturating_mul(height),
            )
        };
        let left_of = |col: i64| {
            self.template
                .element(col as usize)
                .map_or(row_left, |e| i64::from(e.x))
        };
        let right_of = |col: i64| {
            self.template
                .element(col as usize)
                .map_or(row_right, |e| i64::from(e.right()))
        };

        let (start_row, start_col) = (bytes.start / bpr, bytes.start % bpr);
        let (end_row, end_col) = (bytes.end / bpr, bytes.end % bpr);

        if start_row == end_row {
            return vec![span(start_row, 1, left_of(start_col), right_of(end_col))];
        }

        let mut rects = Vec::with_capacity(3);
        let mut middle_start = start_row;
        if start_col != 0 {
            rects.push(span(start_row, 1, left_of(start_col), row_right));
            middle_start += 1;
        }
        let mut middle_end = end_row;
        if end_col != bpr - 1 {
            middle_end -= 1;
        }
        if middle_end >= middle_start {
            rects.push(span(middle_start, middle_end - middle_start + 1, row_left, row_right));
        }
        if end_col != bpr - 1 {
            rects.push(span(end_row, 1, row_left, right_of(end_col)));
        }
        rects
    }

    // ============================================
    // Hit testing
    // ============================================

    /// Map a horizontal pixel to the element owning it.
    ///
    /// Each element owns the half-open span `[previous.right, right)`, so
    /// caret slots and group gaps belong to the element that follows them.
    /// Pixels before the first element map to element 0 and pixels at or past
    /// the last element's right edge map to the last element, both with
    /// `was_inside == false`. Returns `None` for a row without elements.
    #[must_use]
    pub fn hit_test(&self, px: i64) -> Option<ElementHitInfo> {
        let elements = self.template.elements();
        let first = elements.first()?;
        let local = px.saturating_sub(self.x_offset);

        if local < i64::from(first.x) {
            return Some(ElementHitInfo {
                index: 0,
                is_leading_edge: true,
                was_inside: false,
            });
        }

        let index = elements.partition_point(|e| i64::from(e.right()) <= local);
        if index == elements.len() {
            return Some(ElementHitInfo {
                index: elements.len() - 1,
                is_leading_edge: false,
                was_inside: false,
            });
        }

        let element = &elements[index];
        let right = i64::from(element.right());
        Some(ElementHitInfo {
            index,
            is_leading_edge: local < right - i64::from(element.width / 2),
            was_inside: local >= i64::from(element.x),
        })
    }

    /// Row under a vertical pixel, or `None` outside `[0, row_count)`.
    #[must_use]
    pub fn vertical_location_to_row_index(&self, py: i64) -> Option<i64> {
        if py < 0 {
            return None;
        }
        let row = py / self.row_height();
        (row < self.row_count).then_some(row)
    }

    /// Rows intersecting a pixel rectangle.
    ///
    /// A rectangle extending below the last row is clamped to the last row;
    /// one lying entirely outside the content yields [`RowRange::INVALID`].
    #[must_use]
    pub fn row_range(&self, viewport: Rect) -> RowRange {
        let content_bottom = self.row_count.saturating_mul(self.row_height());
        if viewport.is_empty() || viewport.bottom() <= 0 || viewport.y >= content_bottom {
            return RowRange::INVALID;
        }
        let height = self.row_height();
        let first = viewport.y.max(0) / height;
        let last = ((viewport.bottom() - 1) / height).min(self.row_count - 1);
        RowRange::new(first, last)
    }

    /// Position nearest to a pixel, for pointer interaction.
    ///
    /// The point is first clamped to the area bounds, so dragging past an
    /// edge still yields the nearest position on the boundary row.
    #[must_use]
    pub fn position_at(&self, px: i64, py: i64) -> Option<IndexPosition> {
        let (px, py) = self.area_bounds().clamp_point(px, py);
        let row = self.vertical_location_to_row_index(py)?;
        let hit = self.hit_test(px)?;
        let first = self.row_to_first_byte_index(row)?;
        Some(IndexPosition::new(first + hit.insertion_column(), hit.bias()))
    }
}
