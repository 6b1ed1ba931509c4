//! Error types for hexview.

use std::fmt;

/// Result type alias for hexview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hexview operations.
///
/// Only construction can fail. Navigation and hit-testing saturate into
/// valid positions instead of reporting errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A configuration field holds a value the layout cannot honor.
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    /// Font metrics with an empty character cell.
    InvalidMetrics { char_width: i32, char_height: i32 },
    /// A row template was built without any elements.
    EmptyTemplate,
}

impl Error {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration for `{field}`: {reason}")
            }
            Self::InvalidMetrics {
                char_width,
                char_height,
            } => {
                write!(f, "invalid font metrics: cell {char_width}x{char_height}")
            }
            Self::EmptyTemplate => write!(f, "row template has no elements"),
        }
    }
}

impl std::error::Error for Error {}
