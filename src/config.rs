//! Row and view configuration records.
//!
//! Every record is a plain struct with public fields. Construction through
//! `new` validates eagerly; records assembled field-by-field (or loaded from
//! disk with the `serde` feature) should be checked with `validate` before
//! they reach the layout code.

use crate::error::{Error, Result};
use unicode_width::UnicodeWidthChar;

/// Largest accepted bytes-per-row value.
pub const MAX_BYTES_PER_ROW: i64 = 4096;

/// Pixel padding around the elements of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowInsets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl RowInsets {
    /// Create insets, rejecting negative values.
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Result<Self> {
        let insets = Self {
            left,
            right,
            top,
            bottom,
        };
        insets.validate()?;
        Ok(insets)
    }

    /// Insets of zero on every side.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            left: 0,
            right: 0,
            top: 0,
            bottom: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("insets.left", self.left),
            ("insets.right", self.right),
            ("insets.top", self.top),
            ("insets.bottom", self.bottom),
        ] {
            if value < 0 {
                return Err(Error::config(field, format!("must be >= 0, got {value}")));
            }
        }
        Ok(())
    }
}

impl Default for RowInsets {
    fn default() -> Self {
        Self {
            left: 4,
            right: 4,
            top: 1,
            bottom: 1,
        }
    }
}

/// Layout parameters shared by the hex and text areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowConfig {
    /// Bytes shown per row. Zero yields rows with no byte elements.
    pub bytes_per_row: i64,
    /// Bytes between two group gaps.
    pub bytes_per_group: i64,
    /// Extra pixels inserted after every full group.
    pub group_gap: i32,
    pub insets: RowInsets,
    /// Width of the caret slot placed before each element.
    pub caret_width: i32,
}

impl RowConfig {
    /// Create a validated row configuration.
    pub fn new(
        bytes_per_row: i64,
        bytes_per_group: i64,
        group_gap: i32,
        insets: RowInsets,
        caret_width: i32,
    ) -> Result<Self> {
        let config = Self {
            bytes_per_row,
            bytes_per_group,
            group_gap,
            insets,
            caret_width,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_BYTES_PER_ROW).contains(&self.bytes_per_row) {
            return Err(Error::config(
                "bytes_per_row",
                format!(
                    "must be within 0..={MAX_BYTES_PER_ROW}, got {}",
                    self.bytes_per_row
                ),
            ));
        }
        if self.bytes_per_group < 1 {
            return Err(Error::config(
                "bytes_per_group",
                format!("must be at least 1, got {}", self.bytes_per_group),
            ));
        }
        if self.group_gap < 0 {
            return Err(Error::config(
                "group_gap",
                format!("must be >= 0, got {}", self.group_gap),
            ));
        }
        if self.caret_width < 0 {
            return Err(Error::config(
                "caret_width",
                format!("must be >= 0, got {}", self.caret_width),
            ));
        }
        self.insets.validate()
    }
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            bytes_per_row: 16,
            bytes_per_group: 4,
            group_gap: 8,
            insets: RowInsets::default(),
            caret_width: 2,
        }
    }
}

/// Decoration and digit count of the offset column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetFormat {
    pub prefix: String,
    pub suffix: String,
    /// Minimum number of hex digits; more are used when the data needs them.
    pub min_digits: u32,
    pub uppercase: bool,
}

impl OffsetFormat {
    /// Maximum digits needed to print any 64-bit offset.
    pub const MAX_DIGITS: u32 = 16;

    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::MAX_DIGITS).contains(&self.min_digits) {
            return Err(Error::config(
                "offset.min_digits",
                format!("must be within 1..={}, got {}", Self::MAX_DIGITS, self.min_digits),
            ));
        }
        if self.prefix.contains(['\n', '\r']) || self.suffix.contains(['\n', '\r']) {
            return Err(Error::config("offset", "decoration must be a single line"));
        }
        Ok(())
    }
}

impl Default for OffsetFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: ":".to_string(),
            min_digits: 8,
            uppercase: true,
        }
    }
}

/// Complete configuration of a hex view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    pub row: RowConfig,
    pub offset: OffsetFormat,
    /// Print hex digits A-F in upper case.
    pub uppercase_hex: bool,
    /// Glyph shown in the text area for non-printable bytes.
    pub text_placeholder: char,
    /// Horizontal pixels between the offset, hex, and text areas.
    pub area_gap: i32,
    /// Paint the selection after ordinary highlights instead of before them.
    pub selection_in_front: bool,
    /// Caret blink half-period in milliseconds.
    pub blink_interval_ms: u64,
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        self.row.validate()?;
        self.offset.validate()?;
        if self.area_gap < 0 {
            return Err(Error::config(
                "area_gap",
                format!("must be >= 0, got {}", self.area_gap),
            ));
        }
        if self.text_placeholder.width() != Some(1) {
            return Err(Error::config(
                "text_placeholder",
                format!("{:?} does not occupy exactly one cell", self.text_placeholder),
            ));
        }
        if self.blink_interval_ms == 0 {
            return Err(Error::config("blink_interval_ms", "must be positive"));
        }
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            row: RowConfig::default(),
            offset: OffsetFormat::default(),
            uppercase_hex: true,
            text_placeholder: '.',
            area_gap: 12,
            selection_in_front: false,
            blink_interval_ms: 500,
        }
    }
}
