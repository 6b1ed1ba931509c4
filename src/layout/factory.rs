//! Building row templates from font metrics and a row configuration.

use crate::config::RowConfig;
use crate::error::{Error, Result};
use crate::layout::template::{Element, RowTemplate};

/// Character cell metrics of the active (monospaced) font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontMetrics {
    pub char_width: i32,
    pub char_height: i32,
    pub ascent: i32,
    pub descent: i32,
}

impl FontMetrics {
    /// Create metrics, rejecting an empty cell or negative baseline values.
    pub fn new(char_width: i32, char_height: i32, ascent: i32, descent: i32) -> Result<Self> {
        let metrics = Self {
            char_width,
            char_height,
            ascent,
            descent,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    pub fn validate(&self) -> Result<()> {
        if self.char_width < 1 || self.char_height < 1 {
            return Err(Error::InvalidMetrics {
                char_width: self.char_width,
                char_height: self.char_height,
            });
        }
        if self.ascent < 0 || self.descent < 0 {
            return Err(Error::config(
                "metrics",
                format!("ascent/descent must be >= 0, got {}/{}", self.ascent, self.descent),
            ));
        }
        Ok(())
    }
}

/// Strategy for laying out the rows of the three areas.
pub trait RowTemplateFactory {
    /// Template for the offset area: one element `chars` cells wide.
    fn create_offset_template(
        &self,
        config: &RowConfig,
        metrics: &FontMetrics,
        chars: usize,
    ) -> Result<RowTemplate>;

    /// Template for the hex area: one element per byte.
    fn create_hex_template(&self, config: &RowConfig, metrics: &FontMetrics)
    -> Result<RowTemplate>;

    /// Template for the text area: one element per byte.
    fn create_text_template(
        &self,
        config: &RowConfig,
        metrics: &FontMetrics,
    ) -> Result<RowTemplate>;
}

/// Fixed-pitch layout: hex cells are two characters wide, text cells one,
/// and group gaps only separate hex cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonospaceTemplateFactory {
    /// Characters drawn per byte in the hex area.
    pub hex_chars_per_byte: i32,
    /// Apply `group_gap` in the text area as well.
    pub group_text: bool,
}

impl Default for MonospaceTemplateFactory {
    fn default() -> Self {
        Self {
            hex_chars_per_byte: 2,
            group_text: false,
        }
    }
}

fn overflow(field: &'static str) -> Error {
    Error::config(field, "row layout exceeds the pixel coordinate range")
}

/// Shared row geometry derived from insets and metrics.
fn row_height_and_ascent(config: &RowConfig, metrics: &FontMetrics) -> Result<(i32, i32)> {
    let insets = config.insets;
    let height = insets
        .top
        .checked_add(metrics.char_height)
        .and_then(|h| h.checked_add(insets.bottom))
        .ok_or_else(|| overflow("insets"))?;
    let ascent = insets
        .top
        .checked_add(metrics.ascent)
        .ok_or_else(|| overflow("insets"))?;
    Ok((height, ascent))
}

/// Lay out `bytes_per_row` elements of `element_width` pixels.
///
/// Each element is preceded by a caret slot; every full group except the
/// last is followed by `group_gap`. A trailing caret slot lets the caret sit
/// after the final element.
pub fn layout_byte_row(
    config: &RowConfig,
    metrics: &FontMetrics,
    element_width: i32,
    group_gap: i32,
) -> Result<RowTemplate> {
    config.validate()?;
    metrics.validate()?;
    if element_width < 1 {
        return Err(Error::config(
            "element_width",
            format!("must be >= 1, got {element_width}"),
        ));
    }

    let (row_height, ascent) = row_height_and_ascent(config, metrics)?;
    let caret = config.caret_width;
    let count = config.bytes_per_row;
    let mut elements = Vec::with_capacity(count as usize);
    let mut x = config.insets.left;

    for i in 0..count {
        x = x.checked_add(caret).ok_or_else(|| overflow("caret_width"))?;
        elements.push(Element::new(x, config.insets.top, element_width, metrics.char_height));
        x = x
            .checked_add(element_width)
            .ok_or_else(|| overflow("bytes_per_row"))?;
        let placed = i + 1;
        // gaps separate groups; none after the last one
        if placed % config.bytes_per_group == 0 && placed < count {
            x = x.checked_add(group_gap).ok_or_else(|| overflow("group_gap"))?;
        }
    }

    let row_width = x
        .checked_add(caret)
        .and_then(|w| w.checked_add(config.insets.right))
        .ok_or_else(|| overflow("insets"))?
        .max(1);

    if elements.is_empty() {
        RowTemplate::blank(row_width, row_height, ascent, caret)
    } else {
        RowTemplate::new(elements, row_width, row_height, ascent, caret)
    }
}

impl RowTemplateFactory for MonospaceTemplateFactory {
    fn create_offset_template(
        &self,
        config: &RowConfig,
        metrics: &FontMetrics,
        chars: usize,
    ) -> Result<RowTemplate> {
        config.validate()?;
        metrics.validate()?;
        let chars = i32::try_from(chars.max(1)).map_err(|_| overflow("offset"))?;
        let width = metrics
            .char_width
            .checked_mul(chars)
            .ok_or_else(|| overflow("offset"))?;
        let (row_height, ascent) = row_height_and_ascent(config, metrics)?;
        let x = config.insets.left;
        let row_width = x
            .checked_add(width)
            .and_then(|w| w.checked_add(config.insets.right))
            .ok_or_else(|| overflow("insets"))?;
        let element = Element::new(x, config.insets.top, width, metrics.char_height);
        RowTemplate::new(vec![element], row_width, row_height, ascent, 0)
    }

    fn create_hex_template(
        &self,
        config: &RowConfig,
        metrics: &FontMetrics,
    ) -> Result<RowTemplate> {
        let width = metrics
            .char_width
            .checked_mul(self.hex_chars_per_byte)
            .ok_or_else(|| overflow("hex_chars_per_byte"))?;
        layout_byte_row(config, metrics, width, config.group_gap)
    }

    fn create_text_template(
        &self,
        config: &RowConfig,
        metrics: &FontMetrics,
    ) -> Result<RowTemplate> {
        let gap = if self.group_text { config.group_gap } else { 0 };
        layout_byte_row(config, metrics, metrics.char_width, gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowInsets;

    fn metrics() -> FontMetrics {
        FontMetrics::new(8, 14, 11, 3).unwrap()
    }

    fn config(bytes_per_row: i64, bytes_per_group: i64) -> RowConfig {
        RowConfig::new(
            bytes_per_row,
            bytes_per_group,
            6,
            RowInsets::new(4, 5, 1, 2).unwrap(),
            2,
        )
        .unwrap()
    }

    // ============================================
    // Hex Rows
    // ============================================

    #[test]
    fn test_hex_row_positions() {
        let factory = MonospaceTemplateFactory::default();
        let t = factory.create_hex_template(&config(4, 2), &metrics()).unwrap();
        let xs: Vec<i32> = t.elements().iter().map(|e| e.x).collect();
        // left 4, caret 2 -> 6; +16 +2 -> 24; +16 + gap 6 + 2 -> 48; +16 +2 -> 66
        assert_eq!(xs, vec![6, 24, 48, 66]);
        assert!(t.elements().iter().all(|e| e.width == 16 && e.y == 1));
        // 66 + 16 + caret 2 + right 5
        assert_eq!(t.row_width(), 89);
        assert_eq!(t.row_height(), 17);
        assert_eq!(t.ascent(), 12);
        assert_eq!(t.left_inset(), 6);
        assert_eq!(t.right_inset(), 7);
    }

    #[test]
    fn test_no_gap_after_last_group() {
        let factory = MonospaceTemplateFactory::default();
        let t = factory.create_hex_template(&config(4, 4), &metrics()).unwrap();
        let last = t.elements().last().unwrap();
        assert_eq!(t.row_width() - last.right(), 2 + 5);
    }

    #[test]
    fn test_text_row_ignores_gap() {
        let factory = MonospaceTemplateFactory::default();
        let t = factory.create_text_template(&config(4, 2), &metrics()).unwrap();
        let xs: Vec<i32> = t.elements().iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![6, 16, 26, 36]);
    }

    #[test]
    fn test_text_row_grouped() {
        let factory = MonospaceTemplateFactory {
            group_text: true,
            ..MonospaceTemplateFactory::default()
        };
        let t = factory.create_text_template(&config(4, 2), &metrics()).unwrap();
        let xs: Vec<i32> = t.elements().iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![6, 16, 32, 42]);
    }

    #[test]
    fn test_zero_bytes_per_row() {
        let factory = MonospaceTemplateFactory::default();
        let t = factory.create_hex_template(&config(0, 1), &metrics()).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.row_width(), 4 + 2 + 5);
    }

    // ============================================
    // Offset Rows
    // ============================================

    #[test]
    fn test_offset_row_single_element() {
        let factory = MonospaceTemplateFactory::default();
        let t = factory
            .create_offset_template(&config(16, 4), &metrics(), 9)
            .unwrap();
        assert_eq!(t.len(), 1);
        let e = t.elements()[0];
        assert_eq!((e.x, e.width), (4, 72));
        assert_eq!(t.row_width(), 4 + 72 + 5);
        assert_eq!(t.caret_width(), 0);
    }

    // ============================================
    // Validation
    // ============================================

    #[test]
    fn test_rejects_invalid_config() {
        let factory = MonospaceTemplateFactory::default();
        let bad = RowConfig {
            bytes_per_group: 0,
            ..RowConfig::default()
        };
        assert!(factory.create_hex_template(&bad, &metrics()).is_err());
    }

    #[test]
    fn test_rejects_empty_cell() {
        assert!(matches!(
            FontMetrics::new(0, 14, 11, 3),
            Err(Error::InvalidMetrics { .. })
        ));
        assert!(FontMetrics::new(8, 14, -1, 3).is_err());
    }

    #[test]
    fn test_rejects_overflowing_row() {
        let huge = FontMetrics::new(i32::MAX / 2, 14, 11, 3).unwrap();
        let factory = MonospaceTemplateFactory::default();
        assert!(factory.create_hex_template(&config(16, 4), &huge).is_err());
    }
}
