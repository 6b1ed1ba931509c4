//! The three side-by-side columns of a hex view.

use std::fmt;
use std::sync::Arc;

use crate::geometry::Rect;
use crate::layout::RowTemplate;
use crate::mapper::CoordinateMapper;

/// Identifies one of the columns of a hex view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AreaId {
    /// Row offsets.
    Offset,
    /// Bytes as hex digit pairs.
    Hex,
    /// Bytes as characters.
    Text,
}

impl AreaId {
    /// All areas, left to right.
    pub const ALL: [AreaId; 3] = [AreaId::Offset, AreaId::Hex, AreaId::Text];

    /// Areas with one element per byte, which take part in caret placement,
    /// selection, and highlighting.
    pub const BYTE_AREAS: [AreaId; 2] = [AreaId::Hex, AreaId::Text];

    #[must_use]
    pub fn is_byte_area(self) -> bool {
        matches!(self, AreaId::Hex | AreaId::Text)
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            AreaId::Offset => 0,
            AreaId::Hex => 1,
            AreaId::Text => 2,
        }
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AreaId::Offset => "offset",
            AreaId::Hex => "hex",
            AreaId::Text => "text",
        };
        f.write_str(name)
    }
}

/// One column: its identity and geometry.
#[derive(Clone, Debug)]
pub struct Area {
    id: AreaId,
    mapper: CoordinateMapper,
}

impl Area {
    #[must_use]
    pub fn new(
        id: AreaId,
        template: Arc<RowTemplate>,
        bytes_per_row: i64,
        data_len: i64,
        x_offset: i64,
    ) -> Self {
        Self {
            id,
            mapper: CoordinateMapper::new(template, bytes_per_row, data_len, x_offset),
        }
    }

    #[must_use]
    pub fn id(&self) -> AreaId {
        self.id
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut CoordinateMapper {
        &mut self.mapper
    }

    #[must_use]
    pub fn template(&self) -> &Arc<RowTemplate> {
        self.mapper.template()
    }

    /// Bounds of the whole column, all rows included.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.mapper.area_bounds()
    }

    /// Whether the column spans the horizontal pixel `px`.
    #[must_use]
    pub fn contains_x(&self, px: i64) -> bool {
        self.bounds().contains_x(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Element;

    #[test]
    fn test_area_ids() {
        assert!(!AreaId::Offset.is_byte_area());
        assert!(AreaId::Hex.is_byte_area());
        assert!(AreaId::Text.is_byte_area());
        assert_eq!(AreaId::Text.index(), 2);
        assert_eq!(AreaId::Hex.to_string(), "hex");
    }

    #[test]
    fn test_area_bounds() {
        let template = RowTemplate::new(vec![Element::new(0, 0, 10, 10)], 12, 10, 8, 0).unwrap();
        let area = Area::new(AreaId::Offset, Arc::new(template), 16, 40, 30);
        assert_eq!(area.bounds(), Rect::new(30, 0, 12, 30));
        assert!(area.contains_x(30));
        assert!(!area.contains_x(42));
    }
}
