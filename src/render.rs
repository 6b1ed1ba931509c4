//! The seam to the host's glyph renderer.

use crate::area::AreaId;
use crate::config::ViewConfig;
use crate::format::row_cells;
use crate::geometry::Rect;
use crate::layout::RowTemplate;
use crate::source::ByteSource;

/// Everything needed to draw one row of one area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowData {
    pub row: i64,
    /// Index of the first byte shown in the row.
    pub first_byte: i64,
    /// Raw bytes of the row; shorter than a full row on the last row.
    pub bytes: Vec<u8>,
    /// One string per template element that has content.
    pub cells: Vec<String>,
}

impl RowData {
    /// Read and format row `row` of `area`.
    #[must_use]
    pub fn load<S: ByteSource + ?Sized>(
        area: AreaId,
        config: &ViewConfig,
        source: &S,
        row: i64,
    ) -> Self {
        let bpr = config.row.bytes_per_row;
        let first_byte = row.saturating_mul(bpr);
        let mut bytes = Vec::with_capacity(bpr.max(0) as usize);
        source.read_into(first_byte, bpr, &mut bytes);
        let cells = row_cells(area, config, first_byte, &bytes, source.size());
        Self {
            row,
            first_byte,
            bytes,
            cells,
        }
    }
}

/// Draws the glyphs of a row. Implemented by the host.
///
/// `cells[i]` belongs in `template.elements()[i]`, offset vertically by the
/// row's position; the template's ascent gives the baseline.
pub trait RowRenderer {
    fn paint_row(&mut self, area: AreaId, template: &RowTemplate, row: &RowData);

    /// Draw the caret. Only called while the caret is in its visible blink
    /// phase and its row is being repainted.
    fn paint_caret(&mut self, _area: AreaId, _rect: Rect) {}
}

impl<F: FnMut(AreaId, &RowTemplate, &RowData)> RowRenderer for F {
    fn paint_row(&mut self, area: AreaId, template: &RowTemplate, row: &RowData) {
        self(area, template, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_last_row() {
        let config = ViewConfig::default();
        let data: Vec<u8> = (0..20).collect();
        let row = RowData::load(AreaId::Hex, &config, &data, 1);
        assert_eq!(row.first_byte, 16);
        assert_eq!(row.bytes, vec![16, 17, 18, 19]);
        assert_eq!(row.cells, vec!["10", "11", "12", "13"]);
    }

    #[test]
    fn test_load_offset_row() {
        let config = ViewConfig::default();
        let data = vec![0u8; 40];
        let row = RowData::load(AreaId::Offset, &config, &data, 2);
        assert_eq!(row.cells, vec!["00000020:"]);
    }

    #[test]
    fn test_closure_renderer() {
        let config = ViewConfig::default();
        let data = vec![b'x'; 4];
        let template = RowTemplate::blank(10, 14, 11, 0).unwrap();
        let mut rows = Vec::new();
        let mut renderer = |area: AreaId, _: &RowTemplate, row: &RowData| {
            rows.push((area, row.cells.clone()));
        };
        let row = RowData::load(AreaId::Text, &config, &data, 0);
        renderer.paint_row(AreaId::Text, &template, &row);
        assert_eq!(rows, vec![(AreaId::Text, vec!["x".to_string(); 4])]);
    }
}
