//! Repaint regions after state changes.
//!
//! Damage is expressed per area, either as a pixel rectangle or as a range
//! of rows, in content coordinates. Only changes that invalidate the geometry
//! itself (new data, new configuration, scrolling) damage everything.

use crate::area::{Area, AreaId};
use crate::caret::CaretChange;
use crate::event::ChangeEvent;
use crate::geometry::Rect;
use crate::mapper::CoordinateMapper;
use crate::position::IndexPosition;
use crate::range::{ByteRange, RowRange};

/// A region that must be repainted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Damage {
    /// A pixel rectangle of one area.
    Rect { area: AreaId, rect: Rect },
    /// Whole rows of one area.
    Rows { area: AreaId, rows: RowRange },
    /// Everything.
    All,
}

impl Damage {
    /// Area this damage is confined to, `None` for [`Damage::All`].
    #[must_use]
    pub fn area(&self) -> Option<AreaId> {
        match self {
            Self::Rect { area, .. } | Self::Rows { area, .. } => Some(*area),
            Self::All => None,
        }
    }

    /// Pixel bounds of the damage within its area.
    #[must_use]
    pub fn bounds(&self, mapper: &CoordinateMapper) -> Option<Rect> {
        match self {
            Self::Rect { rect, .. } => Some(*rect),
            Self::Rows { rows, .. } => mapper.rows_rect(*rows),
            Self::All => Some(mapper.area_bounds()),
        }
    }
}

/// Receives damage from the core; the host schedules the actual repaint.
pub trait DamageSink {
    fn damage(&mut self, damage: Damage);
}

impl DamageSink for Vec<Damage> {
    fn damage(&mut self, damage: Damage) {
        self.push(damage);
    }
}

/// Adapts a closure into a [`DamageSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(Damage)> DamageSink for FnSink<F> {
    fn damage(&mut self, damage: Damage) {
        (self.0)(damage);
    }
}

/// Accumulated damage between two paints.
///
/// [`Damage::All`] absorbs everything; otherwise entries are kept as
/// reported, with exact duplicates dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DamageSet {
    all: bool,
    regions: Vec<Damage>,
}

impl DamageSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.all
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.all && self.regions.is_empty()
    }

    #[must_use]
    pub fn regions(&self) -> &[Damage] {
        &self.regions
    }

    /// Take the accumulated damage, leaving the set empty.
    pub fn take(&mut self) -> DamageSet {
        std::mem::take(self)
    }

    /// Rows of `area` touched by the accumulated damage, ascending and
    /// merged where they overlap or touch.
    #[must_use]
    pub fn dirty_rows(&self, area: &Area) -> Vec<RowRange> {
        let mapper = area.mapper();
        if self.all {
            return vec![RowRange::new(0, mapper.row_count() - 1)];
        }
        let mut rows: Vec<RowRange> = self
            .regions
            .iter()
            .filter(|d| d.area() == Some(area.id()))
            .filter_map(|d| match d {
                Damage::Rows { rows, .. } => Some(*rows),
                Damage::Rect { rect, .. } => Some(mapper.row_range(*rect)),
                Damage::All => None,
            })
            .filter(|r| r.is_valid() && !r.is_empty())
            .collect();
        coalesce(&mut rows);
        rows
    }
}

impl DamageSink for DamageSet {
    fn damage(&mut self, damage: Damage) {
        if self.all {
            return;
        }
        if damage == Damage::All {
            self.all = true;
            self.regions.clear();
            return;
        }
        if !self.regions.contains(&damage) {
            self.regions.push(damage);
        }
    }
}

/// Sort row ranges and merge those that overlap or touch.
fn coalesce(rows: &mut Vec<RowRange>) {
    rows.sort_by_key(|r| r.start);
    let mut merged: Vec<RowRange> = Vec::with_capacity(rows.len());
    for r in rows.drain(..) {
        match merged.last_mut() {
            Some(last) if r.start <= last.end + 1 => *last = last.union(&r),
            _ => merged.push(r),
        }
    }
    *rows = merged;
}

/// Stateless damage rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamageComputer;

impl DamageComputer {
    /// Row rectangles of the old and new caret: one rectangle when both sit
    /// on the same row, two otherwise.
    #[must_use]
    pub fn caret_moved(
        &self,
        mapper: &CoordinateMapper,
        old: IndexPosition,
        new: IndexPosition,
    ) -> Vec<Rect> {
        let bpr = mapper.bytes_per_row();
        let last_row = mapper.row_count() - 1;
        let rows: Vec<i64> = [old, new]
            .iter()
            .filter_map(|p| p.visual_row(bpr))
            .map(|r| r.min(last_row))
            .collect();
        match rows.as_slice() {
            [a, b] if a == b => vec![mapper.row_rect(*a)],
            _ => rows.iter().map(|r| mapper.row_rect(*r)).collect(),
        }
    }

    /// Rows touched by either range. Overlapping or adjacent row spans are
    /// merged; distant ones are reported separately.
    #[must_use]
    pub fn range_changed(
        &self,
        mapper: &CoordinateMapper,
        old: ByteRange,
        new: ByteRange,
    ) -> Vec<RowRange> {
        let mut rows: Vec<RowRange> = [old, new]
            .iter()
            .filter(|r| r.is_valid() && !r.is_empty())
            .map(|r| mapper.rows_of(*r))
            .filter(|r| r.is_valid() && !r.is_empty())
            .collect();
        coalesce(&mut rows);
        rows
    }

    /// Rows touched by bytes covered by exactly one of the ranges. An
    /// invalid range stands for "no highlight" (added or removed).
    #[must_use]
    pub fn range_delta(
        &self,
        mapper: &CoordinateMapper,
        old: ByteRange,
        new: ByteRange,
    ) -> Vec<RowRange> {
        let pieces = match (old.is_valid(), new.is_valid()) {
            (true, true) => old.symmetric_difference(&new),
            (true, false) => vec![old],
            (false, true) => vec![new],
            (false, false) => Vec::new(),
        };
        let mut rows: Vec<RowRange> = pieces
            .into_iter()
            .filter(|r| !r.is_empty())
            .map(|r| mapper.rows_of(r))
            .filter(|r| r.is_valid() && !r.is_empty())
            .collect();
        coalesce(&mut rows);
        rows
    }

    /// Damage for a caret transition: the caret rows plus, when the selected
    /// bytes changed, the rows of bytes selected before or after but not both.
    #[must_use]
    pub fn caret_change(&self, area: &Area, change: &CaretChange) -> Vec<Damage> {
        let id = area.id();
        let mapper = area.mapper();
        let mut damage: Vec<Damage> = self
            .caret_moved(mapper, change.old_dot, change.dot)
            .into_iter()
            .map(|rect| Damage::Rect { area: id, rect })
            .collect();
        if change.selection_changed() {
            damage.extend(
                self.range_delta(mapper, change.old_selection(), change.selection())
                    .into_iter()
                    .map(|rows| Damage::Rows { area: id, rows }),
            );
        }
        damage
    }

    /// Damage an event causes in the given areas.
    #[must_use]
    pub fn compute(&self, event: &ChangeEvent, areas: &[Area], dot: IndexPosition) -> Vec<Damage> {
        if event.damages_all() {
            return vec![Damage::All];
        }
        let byte_areas = areas.iter().filter(|a| a.id().is_byte_area());
        match event {
            ChangeEvent::CaretMoved(change) => byte_areas
                .flat_map(|area| self.caret_change(area, change))
                .collect(),
            ChangeEvent::HighlightChanged { old, new, .. } => byte_areas
                .flat_map(|area| {
                    self.range_delta(area.mapper(), *old, *new)
                        .into_iter()
                        .map(move |rows| Damage::Rows {
                            area: area.id(),
                            rows,
                        })
                })
                .collect(),
            ChangeEvent::CaretBlinked { .. } => byte_areas
                .filter_map(|area| {
                    area.mapper()
                        .caret_rect(dot)
                        .map(|rect| Damage::Rect { area: area.id(), rect })
                })
                .collect(),
            ChangeEvent::ConfigChanged
            | ChangeEvent::DataReplaced { .. }
            | ChangeEvent::Scrolled { .. } => vec![Damage::All],
        }
    }
}
