//! The hex view controller.
//!
//! [`HexView`] ties a byte source to the three areas, the caret, and the
//! highlights. Host input goes in through the pointer and keyboard methods;
//! what comes out is damage (accumulated until [`HexView::render_damaged`]
//! or forwarded to a [`DamageSink`]) and [`ChangeEvent`]s for listeners.
//!
//! Pointer coordinates are content coordinates: `(0, 0)` is the top-left of
//! the first row of the offset area, regardless of scrolling.

use std::sync::Arc;

use bitflags::bitflags;

use crate::area::{Area, AreaId};
use crate::caret::{CaretChange, CaretModel};
use crate::config::ViewConfig;
use crate::damage::{Damage, DamageComputer, DamageSet, DamageSink};
use crate::error::Result;
use crate::event::{ChangeEvent, ChangeListener, LogLevel, emit_log};
use crate::format::offset_chars;
use crate::geometry::Rect;
use crate::highlight::{HighlightId, HighlightPainter, HighlightRegistry};
use crate::layout::{FontMetrics, MonospaceTemplateFactory, RowTemplateFactory};
use crate::position::{Bias, IndexPosition};
use crate::range::{ByteRange, RowRange};
use crate::render::{RowData, RowRenderer};
use crate::source::ByteSource;

bitflags! {
    /// Modifier keys held during pointer input.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Modifiers: u8 {
        /// Extend the selection instead of starting a new one.
        const SHIFT = 0x01;
        const CTRL  = 0x02;
        const ALT   = 0x04;
    }
}

/// Keyboard caret motions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    /// Before the first byte of the caret's row.
    RowStart,
    /// After the last byte of the caret's row.
    RowEnd,
    PageUp,
    PageDown,
    DocumentStart,
    DocumentEnd,
}

/// Areas laid out left to right, separated by `gap` pixels.
fn build_areas(
    factory: &dyn RowTemplateFactory,
    config: &ViewConfig,
    metrics: &FontMetrics,
    data_len: i64,
) -> Result<Vec<Area>> {
    let row = &config.row;
    let offset =
        factory.create_offset_template(row, metrics, offset_chars(&config.offset, data_len))?;
    let hex = factory.create_hex_template(row, metrics)?;
    let text = factory.create_text_template(row, metrics)?;

    let gap = i64::from(config.area_gap);
    let mut x = 0;
    let mut areas = Vec::with_capacity(AreaId::ALL.len());
    for (id, template) in AreaId::ALL.into_iter().zip([offset, hex, text]) {
        let width = i64::from(template.row_width());
        areas.push(Area::new(id, Arc::new(template), row.bytes_per_row, data_len, x));
        x += width + gap;
    }
    Ok(areas)
}

/// A hex view over a byte source.
pub struct HexView<S: ByteSource = Vec<u8>> {
    config: ViewConfig,
    metrics: FontMetrics,
    factory: Box<dyn RowTemplateFactory>,
    source: S,
    areas: Vec<Area>,
    caret: CaretModel,
    highlights: HighlightRegistry,
    scroll_y: i64,
    viewport_height: i64,
    damage: DamageSet,
    sink: Option<Box<dyn DamageSink>>,
    listeners: Vec<ChangeListener>,
    computer: DamageComputer,
}

impl<S: ByteSource> HexView<S> {
    /// Create a view with the fixed-pitch layout.
    pub fn new(source: S, config: ViewConfig, metrics: FontMetrics) -> Result<Self> {
        Self::with_factory(source, config, metrics, Box::new(MonospaceTemplateFactory::default()))
    }

    /// Create a view with a custom row layout.
    pub fn with_factory(
        source: S,
        config: ViewConfig,
        metrics: FontMetrics,
        factory: Box<dyn RowTemplateFactory>,
    ) -> Result<Self> {
        config.validate()?;
        metrics.validate()?;
        let data_len = source.size();
        let areas = build_areas(factory.as_ref(), &config, &metrics, data_len)?;
        let mut caret = CaretModel::new(data_len, config.row.bytes_per_row);
        caret.blink_mut().set_interval_ms(config.blink_interval_ms);
        let mut highlights = HighlightRegistry::new();
        highlights.set_selection_in_front(config.selection_in_front);

        let mut damage = DamageSet::new();
        damage.damage(Damage::All);
        Ok(Self {
            config,
            metrics,
            factory,
            source,
            areas,
            caret,
            highlights,
            scroll_y: 0,
            viewport_height: 0,
            damage,
            sink: None,
            listeners: Vec::new(),
            computer: DamageComputer,
        })
    }

    // ============================================
    // Accessors
    // ============================================

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn data_len(&self) -> i64 {
        self.source.size()
    }

    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    #[must_use]
    pub fn area(&self, id: AreaId) -> &Area {
        &self.areas[id.index()]
    }

    #[must_use]
    pub fn caret(&self) -> &CaretModel {
        &self.caret
    }

    #[must_use]
    pub fn highlights(&self) -> &HighlightRegistry {
        &self.highlights
    }

    #[must_use]
    pub fn row_count(&self) -> i64 {
        self.area(AreaId::Hex).mapper().row_count()
    }

    /// Size of the laid-out content in pixels.
    #[must_use]
    pub fn content_size(&self) -> (i64, i64) {
        let width = self.areas.iter().map(|a| a.bounds().right()).max().unwrap_or(0);
        let height = self.areas.iter().map(|a| a.bounds().height).max().unwrap_or(0);
        (width, height)
    }

    #[must_use]
    pub fn scroll_y(&self) -> i64 {
        self.scroll_y
    }

    #[must_use]
    pub fn viewport_height(&self) -> i64 {
        self.viewport_height
    }

    /// Visible part of the content.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        Rect::new(0, self.scroll_y, self.content_size().0, self.viewport_height)
    }

    /// Rows intersecting the viewport.
    #[must_use]
    pub fn visible_rows(&self) -> RowRange {
        let mapper = self.area(AreaId::Hex).mapper();
        let viewport = Rect::new(
            mapper.x_offset(),
            self.scroll_y,
            mapper.row_width(),
            self.viewport_height,
        );
        mapper.row_range(viewport)
    }

    /// Damage accumulated since the last paint.
    #[must_use]
    pub fn pending_damage(&self) -> &DamageSet {
        &self.damage
    }

    /// Take the accumulated damage without painting.
    pub fn take_damage(&mut self) -> DamageSet {
        self.damage.take()
    }

    // ============================================
    // Notification
    // ============================================

    pub fn add_listener(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Forward every damage region to `sink` as it is computed.
    pub fn set_damage_sink(&mut self, sink: Option<Box<dyn DamageSink>>) {
        self.sink = sink;
    }

    fn push_damage(&mut self, damage: Damage) {
        if let Some(sink) = self.sink.as_mut() {
            sink.damage(damage);
        }
        self.damage.damage(damage);
    }

    fn emit(&mut self, event: ChangeEvent) {
        let damage = self.computer.compute(&event, &self.areas, self.caret.dot());
        for d in damage {
            self.push_damage(d);
        }
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Report a caret transition: scroll, damage, then blink state.
    fn caret_changed(&mut self, change: CaretChange, was_visible: bool) {
        if change.is_noop() {
            if !was_visible && self.caret.blink().is_visible() {
                self.emit(ChangeEvent::CaretBlinked { visible: true });
            }
            return;
        }
        self.ensure_caret_visible();
        self.emit(ChangeEvent::CaretMoved(change));
        if !was_visible {
            emit_log(LogLevel::Debug, "caret forced visible after move");
        }
    }

    // ============================================
    // Data and configuration
    // ============================================

    /// Replace the byte source, returning the old one.
    ///
    /// The caret returns to index 0, highlights are dropped, and the view
    /// scrolls to the top.
    pub fn replace_data(&mut self, source: S) -> Result<S> {
        let new_len = source.size();
        let areas = build_areas(self.factory.as_ref(), &self.config, &self.metrics, new_len)?;
        let old = std::mem::replace(&mut self.source, source);
        let old_len = old.size();
        self.areas = areas;
        self.caret.reset(new_len);
        self.highlights.remove_all();
        self.scroll_y = 0;
        emit_log(
            LogLevel::Debug,
            &format!("data replaced: {old_len} -> {new_len} bytes"),
        );
        self.emit(ChangeEvent::DataReplaced { old_len, new_len });
        Ok(old)
    }

    /// Apply a new configuration. On error the view is unchanged.
    pub fn set_config(&mut self, config: ViewConfig) -> Result<()> {
        let areas = config
            .validate()
            .and_then(|()| {
                build_areas(self.factory.as_ref(), &config, &self.metrics, self.data_len())
            });
        let areas = match areas {
            Ok(areas) => areas,
            Err(err) => {
                emit_log(LogLevel::Warn, &format!("configuration rejected: {err}"));
                return Err(err);
            }
        };
        self.areas = areas;
        self.caret.set_bytes_per_row(config.row.bytes_per_row);
        self.caret.blink_mut().set_interval_ms(config.blink_interval_ms);
        self.highlights.set_selection_in_front(config.selection_in_front);
        self.config = config;
        self.clamp_scroll();
        emit_log(
            LogLevel::Debug,
            &format!("templates rebuilt: {} bytes per row", self.config.row.bytes_per_row),
        );
        self.emit(ChangeEvent::ConfigChanged);
        Ok(())
    }

    /// Apply new font metrics. On error the view is unchanged.
    pub fn set_metrics(&mut self, metrics: FontMetrics) -> Result<()> {
        let areas = metrics
            .validate()
            .and_then(|()| {
                build_areas(self.factory.as_ref(), &self.config, &metrics, self.data_len())
            });
        let areas = match areas {
            Ok(areas) => areas,
            Err(err) => {
                emit_log(LogLevel::Warn, &format!("font metrics rejected: {err}"));
                return Err(err);
            }
        };
        self.areas = areas;
        self.metrics = metrics;
        self.clamp_scroll();
        emit_log(LogLevel::Debug, "templates rebuilt for new font metrics");
        self.emit(ChangeEvent::ConfigChanged);
        Ok(())
    }

    /// Replace the row layout strategy. On error the view is unchanged.
    pub fn set_factory(&mut self, factory: Box<dyn RowTemplateFactory>) -> Result<()> {
        let areas = build_areas(factory.as_ref(), &self.config, &self.metrics, self.data_len())?;
        self.areas = areas;
        self.factory = factory;
        self.clamp_scroll();
        self.emit(ChangeEvent::ConfigChanged);
        Ok(())
    }

    // ============================================
    // Scrolling
    // ============================================

    fn max_scroll(&self) -> i64 {
        (self.content_size().1 - self.viewport_height).max(0)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_y = self.scroll_y.clamp(0, self.max_scroll());
    }

    /// Set the height of the visible part of the content.
    pub fn set_viewport_height(&mut self, height: i64) {
        let height = height.max(0);
        if height == self.viewport_height {
            return;
        }
        self.viewport_height = height;
        let old = self.scroll_y;
        self.clamp_scroll();
        if old == self.scroll_y {
            self.push_damage(Damage::All);
        } else {
            self.emit(ChangeEvent::Scrolled { old, new: self.scroll_y });
        }
    }

    /// Scroll so the content pixel `y` is at the top of the viewport.
    /// Returns whether the scroll offset changed.
    pub fn scroll_to(&mut self, y: i64) -> bool {
        let new = y.clamp(0, self.max_scroll());
        if new == self.scroll_y {
            return false;
        }
        let old = std::mem::replace(&mut self.scroll_y, new);
        emit_log(LogLevel::Debug, &format!("scrolled {old} -> {new}"));
        self.emit(ChangeEvent::Scrolled { old, new });
        true
    }

    /// Scroll the minimum amount needed to show `row`.
    pub fn scroll_row_into_view(&mut self, row: i64) -> bool {
        if self.viewport_height <= 0 {
            return false;
        }
        let rect = self.area(AreaId::Hex).mapper().row_rect(row);
        if rect.y < self.scroll_y {
            self.scroll_to(rect.y)
        } else if rect.bottom() > self.scroll_y + self.viewport_height {
            self.scroll_to(rect.bottom() - self.viewport_height)
        } else {
            false
        }
    }

    /// Scroll the caret's row into view.
    ///
    /// A caret drawn after the last byte of a row (column 0, backward bias)
    /// keeps that row in view, not the one it wraps to.
    pub fn ensure_caret_visible(&mut self) -> bool {
        let Some(row) = self.caret.dot().visual_row(self.config.row.bytes_per_row) else {
            return false;
        };
        let row = row.min(self.row_count() - 1);
        self.scroll_row_into_view(row)
    }

    // ============================================
    // Caret and selection
    // ============================================

    /// Place the caret, clearing any selection.
    pub fn set_caret(&mut self, index: i64, bias: Bias) {
        let was_visible = self.caret.blink().is_visible();
        let change = self.caret.set_dot(index, bias);
        self.caret_changed(change, was_visible);
    }

    /// Move the caret, keeping the mark where it is.
    pub fn extend_caret(&mut self, index: i64, bias: Bias) {
        let was_visible = self.caret.blink().is_visible();
        let change = self.caret.move_dot(index, bias);
        self.caret_changed(change, was_visible);
    }

    /// Select the inclusive byte range between `start` and `end`.
    pub fn set_selection(&mut self, start: i64, end: i64) {
        let was_visible = self.caret.blink().is_visible();
        let change = self.caret.set_selection(start, end);
        self.caret_changed(change, was_visible);
    }

    pub fn select_all(&mut self) {
        let len = self.data_len();
        if len > 0 {
            self.set_selection(0, len - 1);
        }
    }

    fn rows_per_page(&self) -> i64 {
        let row_height = self.area(AreaId::Hex).mapper().row_height().max(1);
        (self.viewport_height / row_height).max(1)
    }

    /// Target of a keyboard motion from the current dot.
    #[must_use]
    pub fn motion_target(&self, motion: Motion) -> IndexPosition {
        let dot = self.caret.dot();
        let bpr = self.config.row.bytes_per_row;
        let len = self.data_len();
        let row = dot
            .visual_row(bpr)
            .map_or(0, |r| r.min(self.row_count() - 1));
        let page = self.rows_per_page().saturating_mul(bpr);
        match motion {
            Motion::Left => IndexPosition::forward(dot.index - 1),
            Motion::Right => IndexPosition::forward(dot.index + 1),
            Motion::Up => IndexPosition::new(dot.index - bpr, dot.bias),
            Motion::Down => IndexPosition::new(dot.index.saturating_add(bpr), dot.bias),
            Motion::RowStart => IndexPosition::forward(row.saturating_mul(bpr)),
            Motion::RowEnd => IndexPosition::backward((row + 1).saturating_mul(bpr).min(len)),
            Motion::PageUp => IndexPosition::new(dot.index.saturating_sub(page), dot.bias),
            Motion::PageDown => IndexPosition::new(dot.index.saturating_add(page), dot.bias),
            Motion::DocumentStart => IndexPosition::backward(0),
            Motion::DocumentEnd => IndexPosition::backward(len),
        }
    }

    /// Apply a keyboard motion, extending the selection when `extend` is set.
    pub fn move_caret(&mut self, motion: Motion, extend: bool) {
        let target = self.motion_target(motion);
        if matches!(motion, Motion::PageUp | Motion::PageDown) {
            let row_height = self.area(AreaId::Hex).mapper().row_height();
            let delta = self.rows_per_page().saturating_mul(row_height);
            let y = if motion == Motion::PageUp {
                self.scroll_y - delta
            } else {
                self.scroll_y + delta
            };
            self.scroll_to(y);
        }
        if extend {
            self.extend_caret(target.index, target.bias);
        } else {
            self.set_caret(target.index, target.bias);
        }
    }

    // ============================================
    // Pointer input
    // ============================================

    fn byte_area_at(&self, x: i64) -> Option<AreaId> {
        AreaId::BYTE_AREAS
            .into_iter()
            .find(|id| self.area(*id).contains_x(x))
    }

    /// Start a drag session at a content pixel. Presses outside the hex and
    /// text areas are ignored.
    pub fn mouse_pressed(&mut self, x: i64, y: i64, modifiers: Modifiers) -> bool {
        let Some(id) = self.byte_area_at(x) else {
            return false;
        };
        let Some(position) = self.area(id).mapper().position_at(x, y) else {
            return false;
        };
        let was_visible = self.caret.blink().is_visible();
        let change = self
            .caret
            .begin_drag(id, position, modifiers.contains(Modifiers::SHIFT));
        self.caret_changed(change, was_visible);
        true
    }

    /// Continue the drag session. The point is clamped to the area the drag
    /// started in, so dragging past its edges keeps extending the selection.
    pub fn mouse_dragged(&mut self, x: i64, y: i64) -> bool {
        let Some(id) = self.caret.drag_origin() else {
            return false;
        };
        let Some(position) = self.area(id).mapper().position_at(x, y) else {
            return false;
        };
        let was_visible = self.caret.blink().is_visible();
        match self.caret.drag_to(id, position) {
            Some(change) => {
                self.caret_changed(change, was_visible);
                true
            }
            None => false,
        }
    }

    /// End the drag session.
    pub fn mouse_released(&mut self) -> bool {
        self.caret.end_drag()
    }

    // ============================================
    // Highlights
    // ============================================

    pub fn add_highlight(
        &mut self,
        start: i64,
        end: i64,
        painter: Option<Arc<dyn HighlightPainter>>,
    ) -> HighlightId {
        let id = self.highlights.add_highlight(start, end, painter);
        let new = self
            .highlights
            .get(id)
            .map_or(ByteRange::INVALID, |h| h.range());
        self.emit(ChangeEvent::HighlightChanged {
            id,
            old: ByteRange::INVALID,
            new,
        });
        id
    }

    pub fn remove_highlight(&mut self, id: HighlightId) -> bool {
        let Some(removed) = self.highlights.remove_highlight(id) else {
            return false;
        };
        self.emit(ChangeEvent::HighlightChanged {
            id,
            old: removed.range(),
            new: ByteRange::INVALID,
        });
        true
    }

    /// Remove several highlights, returning how many existed.
    pub fn remove_highlights(&mut self, ids: &[HighlightId]) -> usize {
        let removed = self.highlights.remove_highlights(ids);
        let count = removed.len();
        for (id, highlight) in removed {
            self.emit(ChangeEvent::HighlightChanged {
                id,
                old: highlight.range(),
                new: ByteRange::INVALID,
            });
        }
        count
    }

    pub fn remove_all_highlights(&mut self) -> usize {
        let ids: Vec<HighlightId> = self.highlights.iter().map(|(id, _)| id).collect();
        self.remove_highlights(&ids)
    }

    /// Resize a highlight in place. Only the bytes entering or leaving it
    /// are damaged.
    pub fn change_highlight(&mut self, id: HighlightId, start: i64, end: i64) -> bool {
        let Some((old, new)) = self.highlights.change_highlight(id, start, end) else {
            return false;
        };
        if old != new {
            self.emit(ChangeEvent::HighlightChanged { id, old, new });
        }
        true
    }

    pub fn set_selection_painter(&mut self, painter: Option<Arc<dyn HighlightPainter>>) {
        self.highlights.set_selection_painter(painter);
        self.damage_selection();
    }

    pub fn set_selection_in_front(&mut self, in_front: bool) {
        if self.highlights.selection_in_front() == in_front {
            return;
        }
        self.highlights.set_selection_in_front(in_front);
        self.config.selection_in_front = in_front;
        self.damage_selection();
    }

    fn damage_selection(&mut self) {
        if !self.caret.has_selection() {
            return;
        }
        let selection = self.caret.selection();
        let mut damage = Vec::new();
        for area in self.areas.iter().filter(|a| a.id().is_byte_area()) {
            for rows in self.computer.range_changed(area.mapper(), selection, selection) {
                damage.push(Damage::Rows { area: area.id(), rows });
            }
        }
        for d in damage {
            self.push_damage(d);
        }
    }

    // ============================================
    // Blink and painting
    // ============================================

    /// Advance the caret blink; call from the host timer at
    /// `config().blink_interval_ms`. Returns whether the caret must be
    /// repainted.
    pub fn blink_tick(&mut self) -> bool {
        let has_selection = self.caret.has_selection();
        if !self.caret.blink_mut().tick(has_selection) {
            return false;
        }
        let visible = self.caret.blink().is_visible();
        self.emit(ChangeEvent::CaretBlinked { visible });
        true
    }

    /// Paint the damaged rows inside the viewport: highlights first, then
    /// row content, then the caret. Returns the number of rows painted.
    pub fn render_damaged(&mut self, renderer: &mut dyn RowRenderer) -> usize {
        let damage = self.damage.take();
        if damage.is_empty() {
            return 0;
        }
        let mut painted = 0;
        let data_len = self.data_len();
        let data = if data_len > 0 {
            ByteRange::new(0, data_len - 1)
        } else {
            ByteRange::INVALID
        };
        let dot = self.caret.dot();
        let caret_visible = self.caret.blink().is_visible();
        let selection = self.caret.selection();

        for area in &self.areas {
            let mapper = area.mapper();
            let viewport = Rect::new(
                mapper.x_offset(),
                self.scroll_y,
                mapper.row_width(),
                self.viewport_height,
            );
            let visible = mapper.row_range(viewport);
            if !visible.is_valid() || visible.is_empty() {
                continue;
            }
            for rows in damage.dirty_rows(area) {
                let rows = rows.intersection(&visible);
                if !rows.is_valid() || rows.is_empty() {
                    continue;
                }
                if area.id().is_byte_area() && data.is_valid() {
                    let bytes = mapper.visible_bytes(rows).intersection(&data);
                    if bytes.is_valid() && !bytes.is_empty() {
                        for item in self.highlights.visible_highlights(bytes, selection) {
                            if let Some(painter) = item.painter {
                                let rects = mapper.range_rects(item.bytes);
                                painter.paint(area.id(), item.bytes, &rects);
                            }
                        }
                    }
                }
                for row in rows.start..=rows.end {
                    let row_data = RowData::load(area.id(), &self.config, &self.source, row);
                    renderer.paint_row(area.id(), mapper.template(), &row_data);
                    painted += 1;
                }
                if area.id().is_byte_area() && caret_visible {
                    let caret_row = dot.visual_row(mapper.bytes_per_row());
                    if caret_row.is_some_and(|r| rows.contains(r)) {
                        if let Some(rect) = mapper.caret_rect(dot) {
                            renderer.paint_caret(area.id(), rect);
                        }
                    }
                }
            }
        }
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RowConfig, RowInsets};

    fn config() -> ViewConfig {
        ViewConfig {
            row: RowConfig::new(16, 4, 8, RowInsets::zero(), 2).unwrap(),
            area_gap: 10,
            ..ViewConfig::default()
        }
    }

    fn metrics() -> FontMetrics {
        FontMetrics::new(8, 14, 11, 3).unwrap()
    }

    fn view(len: usize) -> HexView {
        let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let mut view = HexView::new(data, config(), metrics()).unwrap();
        view.set_viewport_height(14 * 4);
        view.take_damage();
        view
    }

    // ============================================
    // Layout
    // ============================================

    #[test]
    fn test_areas_left_to_right() {
        let v = view(64);
        let offset = v.area(AreaId::Offset).bounds();
        let hex = v.area(AreaId::Hex).bounds();
        let text = v.area(AreaId::Text).bounds();
        assert_eq!(offset.x, 0);
        assert_eq!(hex.x, offset.right() + 10);
        assert_eq!(text.x, hex.right() + 10);
        assert_eq!(v.row_count(), 4);
        assert_eq!(v.content_size(), (text.right(), 4 * 14));
    }

    #[test]
    fn test_new_view_damages_all() {
        let v = HexView::new(vec![0u8; 4], config(), metrics()).unwrap();
        assert!(v.pending_damage().is_all());
    }

    // ============================================
    // Keyboard
    // ============================================

    #[test]
    fn test_motion_left_right() {
        let mut v = view(64);
        v.move_caret(Motion::Right, false);
        assert_eq!(v.caret().dot(), IndexPosition::forward(1));
        v.move_caret(Motion::Left, false);
        assert_eq!(v.caret().dot(), IndexPosition::backward(0));
        v.move_caret(Motion::Left, false);
        assert_eq!(v.caret().dot(), IndexPosition::backward(0));
    }

    #[test]
    fn test_motion_row_end_wraps_backward() {
        let mut v = view(64);
        v.set_caret(20, Bias::Forward);
        v.move_caret(Motion::RowEnd, false);
        assert_eq!(v.caret().dot(), IndexPosition::backward(32));
        v.move_caret(Motion::RowStart, false);
        assert_eq!(v.caret().dot(), IndexPosition::forward(16));
    }

    #[test]
    fn test_motion_down_saturates() {
        let mut v = view(40);
        v.set_caret(30, Bias::Forward);
        v.move_caret(Motion::Down, false);
        assert_eq!(v.caret().dot().index, 40);
        v.move_caret(Motion::DocumentStart, true);
        assert!(v.caret().has_selection());
        assert_eq!(v.caret().selection(), ByteRange::new(0, 39));
    }

    #[test]
    fn test_select_all() {
        let mut v = view(20);
        v.select_all();
        assert_eq!(v.caret().selection_start(), Some(0));
        assert_eq!(v.caret().selection_end(), Some(19));
        let mut empty = view(0);
        empty.select_all();
        assert!(!empty.caret().has_selection());
    }

    // ============================================
    // Scrolling
    // ============================================

    #[test]
    fn test_caret_scrolls_into_view() {
        let mut v = view(16 * 20);
        v.set_caret(16 * 10 + 3, Bias::Forward);
        assert_eq!(v.scroll_y(), 11 * 14 - 4 * 14);
        assert_eq!(v.visible_rows(), RowRange::new(7, 10));
    }

    #[test]
    fn test_wrapped_caret_keeps_previous_row() {
        let mut v = view(16 * 20);
        v.set_caret(16 * 4, Bias::Backward);
        assert_eq!(v.scroll_y(), 0);
        v.set_caret(16 * 4, Bias::Forward);
        assert_eq!(v.scroll_y(), 14);
    }

    #[test]
    fn test_scroll_clamped() {
        let mut v = view(16 * 10);
        assert!(!v.scroll_to(-5));
        assert!(v.scroll_to(10_000));
        assert_eq!(v.scroll_y(), 6 * 14);
        assert!(v.pending_damage().is_all());
    }

    // ============================================
    // Configuration
    // ============================================

    #[test]
    fn test_rejected_config_leaves_view_unchanged() {
        let mut v = view(64);
        let mut bad = config();
        bad.row.bytes_per_group = 0;
        assert!(v.set_config(bad).is_err());
        assert_eq!(v.config().row.bytes_per_group, 4);
        assert!(v.pending_damage().is_empty());
    }

    #[test]
    fn test_config_change_recomputes_rows() {
        let mut v = view(64);
        v.set_caret(64, Bias::Forward);
        let mut narrow = config();
        narrow.row = RowConfig::new(8, 4, 8, RowInsets::zero(), 2).unwrap();
        v.set_config(narrow).unwrap();
        assert_eq!(v.row_count(), 8);
        assert_eq!(v.caret().dot(), IndexPosition::backward(64));
        assert!(v.pending_damage().is_all());
    }

    #[test]
    fn test_replace_data_resets() {
        let mut v = view(64);
        v.set_selection(3, 9);
        v.add_highlight(0, 4, None);
        let old = v.replace_data(vec![1, 2, 3]).unwrap();
        assert_eq!(old.len(), 64);
        assert_eq!(v.caret().dot(), IndexPosition::backward(0));
        assert!(v.highlights().is_empty());
        assert_eq!(v.row_count(), 1);
        assert!(v.pending_damage().is_all());
    }

    // ============================================
    // Blink
    // ============================================

    #[test]
    fn test_blink_tick_damages_caret() {
        let mut v = view(64);
        assert!(v.blink_tick());
        assert!(!v.caret().blink().is_visible());
        let damage = v.take_damage();
        assert_eq!(damage.regions().len(), 2);
        v.set_caret(0, Bias::Backward);
        assert!(v.caret().blink().is_visible());
        assert!(!v.take_damage().is_empty());
    }
}
