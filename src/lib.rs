//! `hexview` - Layout, coordinate mapping, and caret engine for hex viewers
//!
//! Lays out rows of byte cells for synchronized offset / hex / text columns,
//! converts between byte indices, row/column positions, and pixels, tracks a
//! biased caret and selection, and computes the minimal repaint regions after
//! each change. Drawing, windowing, and data loading stay with the host.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow AreaId, RowRange etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod area;
pub mod caret;
pub mod config;
pub mod damage;
pub mod error;
pub mod event;
pub mod format;
pub mod geometry;
pub mod highlight;
pub mod layout;
pub mod mapper;
pub mod position;
pub mod range;
pub mod render;
pub mod source;
pub mod view;

// Re-export core types at crate root
pub use area::{Area, AreaId};
pub use caret::{CaretBlink, CaretChange, CaretModel};
pub use config::{OffsetFormat, RowConfig, RowInsets, ViewConfig};
pub use damage::{Damage, DamageComputer, DamageSet, DamageSink, FnSink};
pub use error::{Error, Result};
pub use event::{
    ChangeEvent, ChangeListener, LogLevel, clear_log_callback, emit_log, set_log_callback,
};
pub use geometry::Rect;
pub use highlight::{Highlight, HighlightId, HighlightPainter, HighlightRegistry};
pub use layout::{Element, FontMetrics, MonospaceTemplateFactory, RowTemplate, RowTemplateFactory};
pub use mapper::{CoordinateMapper, ElementHitInfo};
pub use position::{Bias, IndexPosition};
pub use range::{ByteRange, RowRange};
pub use render::{RowData, RowRenderer};
pub use source::ByteSource;
pub use view::{HexView, Modifiers, Motion};
