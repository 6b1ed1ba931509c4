//! Row layout: immutable row templates and the factories that build them.
//!
//! Every area of a hex view (offset, hex, text) draws all of its rows from a
//! single [`RowTemplate`]. The template lists the pixel bounds of each
//! element (a byte cell, or the whole offset string) relative to the row's
//! top-left corner. A caret slot of `caret_width` pixels sits in front of
//! every byte element and once more after the last one.
//!
//! # Examples
//!
//! ```
//! use hexview_rust::layout::{FontMetrics, MonospaceTemplateFactory, RowTemplateFactory};
//! use hexview_rust::config::RowConfig;
//!
//! let metrics = FontMetrics::new(8, 14, 11, 3).unwrap();
//! let template = MonospaceTemplateFactory::default()
//!     .create_hex_template(&RowConfig::default(), &metrics)
//!     .unwrap();
//! assert_eq!(template.len(), 16);
//! ```

mod factory;
mod template;

pub use factory::{FontMetrics, MonospaceTemplateFactory, RowTemplateFactory, layout_byte_row};
pub use template::{Element, RowTemplate};
