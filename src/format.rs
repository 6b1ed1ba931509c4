//! Strings shown in the offset, hex, and text areas.

use unicode_width::UnicodeWidthStr;

use crate::area::AreaId;
use crate::config::{OffsetFormat, ViewConfig};

const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Two hex digits for `byte`.
#[must_use]
pub fn hex_pair(byte: u8, uppercase: bool) -> [char; 2] {
    let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
    [
        digits[(byte >> 4) as usize] as char,
        digits[(byte & 0x0f) as usize] as char,
    ]
}

/// Character shown for `byte` in the text area.
///
/// Printable ASCII (graphic characters and space) is shown as is; anything
/// else becomes `placeholder`.
#[inline]
#[must_use]
pub fn text_cell(byte: u8, placeholder: char) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        placeholder
    }
}

/// Hex digits needed to print every offset of `data_len` bytes, never fewer
/// than `format.min_digits`.
#[must_use]
pub fn offset_digits(format: &OffsetFormat, data_len: i64) -> u32 {
    let last = data_len.saturating_sub(1).max(0) as u64;
    let needed = if last == 0 {
        1
    } else {
        (u64::BITS - last.leading_zeros()).div_ceil(4)
    };
    needed.max(format.min_digits).min(OffsetFormat::MAX_DIGITS)
}

/// Offset label: prefix, zero-padded hex, suffix.
#[must_use]
pub fn format_offset(format: &OffsetFormat, offset: i64, digits: u32) -> String {
    let width = digits as usize;
    let value = offset.max(0);
    let hex = if format.uppercase {
        format!("{value:0width$X}")
    } else {
        format!("{value:0width$x}")
    };
    let mut out = String::with_capacity(format.prefix.len() + hex.len() + format.suffix.len());
    out.push_str(&format.prefix);
    out.push_str(&hex);
    out.push_str(&format.suffix);
    out
}

/// Display cells occupied by an offset label for `data_len` bytes.
#[must_use]
pub fn offset_chars(format: &OffsetFormat, data_len: i64) -> usize {
    format.prefix.width() + offset_digits(format, data_len) as usize + format.suffix.width()
}

/// Per-element strings of one row of `area`.
///
/// The offset area yields a single label; byte areas yield one string per
/// byte.
#[must_use]
pub fn row_cells(
    area: AreaId,
    config: &ViewConfig,
    first_byte: i64,
    bytes: &[u8],
    data_len: i64,
) -> Vec<String> {
    match area {
        AreaId::Offset => {
            let digits = offset_digits(&config.offset, data_len);
            vec![format_offset(&config.offset, first_byte, digits)]
        }
        AreaId::Hex => bytes
            .iter()
            .map(|&b| hex_pair(b, config.uppercase_hex).iter().collect())
            .collect(),
        AreaId::Text => bytes
            .iter()
            .map(|&b| text_cell(b, config.text_placeholder).to_string())
            .collect(),
    }
}
