//! Immutable per-row layout.

use crate::error::{Error, Result};
use crate::geometry::Rect;

/// One character or byte cell of a row, in row-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Element {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Element {
    /// Create a new element.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Check if `px` lies in `[x, x + width)`.
    #[must_use]
    pub const fn contains_x(&self, px: i32) -> bool {
        px >= self.x && px < self.right()
    }

    /// Whether `px` falls on the leading half of the element.
    #[must_use]
    pub const fn is_leading_half(&self, px: i32) -> bool {
        px < self.right() - self.width / 2
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(
            self.x as i64,
            self.y as i64,
            self.width as i64,
            self.height as i64,
        )
    }
}

/// Layout of a single row, shared by every row of an area.
///
/// A template never changes after construction. When the font or the row
/// configuration changes a new template is built and swapped in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowTemplate {
    elements: Vec<Element>,
    row_width: i32,
    row_height: i32,
    ascent: i32,
    caret_width: i32,
}

impl RowTemplate {
    /// Create a template, validating the element layout.
    ///
    /// Elements must be non-empty, have non-negative sizes, appear in strictly
    /// increasing `x` without overlapping, and fit inside the row.
    pub fn new(
        elements: Vec<Element>,
        row_width: i32,
        row_height: i32,
        ascent: i32,
        caret_width: i32,
    ) -> Result<Self> {
        if elements.is_empty() {
            return Err(Error::EmptyTemplate);
        }
        Self::check_metrics(row_width, row_height, ascent, caret_width)?;

        for (i, element) in elements.iter().enumerate() {
            if element.width < 0 || element.height < 0 {
                return Err(Error::config(
                    "elements",
                    format!("element {i} has negative size {}x{}", element.width, element.height),
                ));
            }
            if element.x < 0 || element.right() > row_width {
                return Err(Error::config(
                    "elements",
                    format!(
                        "element {i} spans {}..{} outside row width {row_width}",
                        element.x,
                        element.right()
                    ),
                ));
            }
        }
        for (i, pair) in elements.windows(2).enumerate() {
            if pair[1].x <= pair[0].x || pair[0].right() > pair[1].x {
                return Err(Error::config(
                    "elements",
                    format!("element {} overlaps or precedes element {i}", i + 1),
                ));
            }
        }

        Ok(Self {
            elements,
            row_width,
            row_height,
            ascent,
            caret_width,
        })
    }

    /// A row with no elements. Used for byte areas configured with zero
    /// bytes per row, where the row still occupies space.
    pub(crate) fn blank(
        row_width: i32,
        row_height: i32,
        ascent: i32,
        caret_width: i32,
    ) -> Result<Self> {
        Self::check_metrics(row_width, row_height, ascent, caret_width)?;
        Ok(Self {
            elements: Vec::new(),
            row_width,
            row_height,
            ascent,
            caret_width,
        })
    }

    fn check_metrics(row_width: i32, row_height: i32, ascent: i32, caret_width: i32) -> Result<()> {
        if row_width < 1 {
            return Err(Error::config("row_width", format!("must be >= 1, got {row_width}")));
        }
        if row_height < 1 {
            return Err(Error::config("row_height", format!("must be >= 1, got {row_height}")));
        }
        if ascent < 0 {
            return Err(Error::config("ascent", format!("must be >= 0, got {ascent}")));
        }
        if caret_width < 0 {
            return Err(Error::config("caret_width", format!("must be >= 0, got {caret_width}")));
        }
        Ok(())
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Number of elements in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn row_width(&self) -> i32 {
        self.row_width
    }

    #[must_use]
    pub fn row_height(&self) -> i32 {
        self.row_height
    }

    /// Baseline offset from the top of the row.
    #[must_use]
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    #[must_use]
    pub fn caret_width(&self) -> i32 {
        self.caret_width
    }

    /// Space before the first element, including its caret slot.
    #[must_use]
    pub fn left_inset(&self) -> i32 {
        self.elements.first().map_or(0, |e| e.x)
    }

    /// Space after the last element, including the trailing caret slot.
    #[must_use]
    pub fn right_inset(&self) -> i32 {
        self.elements
            .last()
            .map_or(self.row_width, |e| self.row_width - e.right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_cells() -> Vec<Element> {
        vec![
            Element::new(2, 0, 10, 12),
            Element::new(14, 0, 10, 12),
            Element::new(30, 0, 10, 12),
        ]
    }

    #[test]
    fn test_template_insets() {
        let t = RowTemplate::new(three_cells(), 46, 12, 9, 2).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.left_inset(), 2);
        assert_eq!(t.right_inset(), 6);
        assert_eq!(t.ascent(), 9);
    }

    #[test]
    fn test_template_rejects_empty() {
        assert_eq!(RowTemplate::new(Vec::new(), 10, 10, 0, 0), Err(Error::EmptyTemplate));
    }

    #[test]
    fn test_template_rejects_overlap() {
        let elements = vec![Element::new(0, 0, 10, 12), Element::new(9, 0, 10, 12)];
        assert!(RowTemplate::new(elements, 40, 12, 0, 0).is_err());
    }

    #[test]
    fn test_template_rejects_unordered() {
        let elements = vec![Element::new(20, 0, 5, 12), Element::new(0, 0, 5, 12)];
        assert!(RowTemplate::new(elements, 40, 12, 0, 0).is_err());
    }

    #[test]
    fn test_template_rejects_outside_row() {
        assert!(RowTemplate::new(three_cells(), 39, 12, 0, 0).is_err());
    }

    #[test]
    fn test_template_rejects_bad_metrics() {
        assert!(RowTemplate::new(three_cells(), 46, 0, 0, 0).is_err());
        assert!(RowTemplate::new(three_cells(), 46, 12, -1, 0).is_err());
        assert!(RowTemplate::new(three_cells(), 46, 12, 0, -1).is_err());
    }

    #[test]
    fn test_element_leading_half() {
        let e = Element::new(10, 0, 10, 12);
        assert!(e.is_leading_half(10));
        assert!(e.is_leading_half(14));
        assert!(!e.is_leading_half(15));
        assert!(!e.is_leading_half(19));
    }

    #[test]
    fn test_blank_template() {
        let t = RowTemplate::blank(8, 12, 9, 2).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.left_inset(), 0);
        assert_eq!(t.right_inset(), 8);
    }
}
