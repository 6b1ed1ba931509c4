//! Log callback and typed change notifications.

use std::sync::{Mutex, OnceLock};

use crate::caret::CaretChange;
use crate::highlight::HighlightId;
use crate::range::ByteRange;

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// A state change of a hex view, carrying what damage computation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Dot and/or mark moved.
    CaretMoved(CaretChange),
    /// A highlight was added (`old` invalid), removed (`new` invalid), or
    /// resized.
    HighlightChanged {
        id: HighlightId,
        old: ByteRange,
        new: ByteRange,
    },
    /// Row configuration, offset format, or font metrics changed.
    ConfigChanged,
    /// The byte source was replaced.
    DataReplaced { old_len: i64, new_len: i64 },
    /// The vertical scroll offset changed.
    Scrolled { old: i64, new: i64 },
    /// The blink timer toggled caret visibility.
    CaretBlinked { visible: bool },
}

impl ChangeEvent {
    /// Whether this change invalidates every row of every area.
    #[must_use]
    pub fn damages_all(&self) -> bool {
        matches!(
            self,
            Self::ConfigChanged | Self::DataReplaced { .. } | Self::Scrolled { .. }
        )
    }
}

/// Listener for [`ChangeEvent`]s.
pub type ChangeListener = Box<dyn FnMut(&ChangeEvent)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_callback() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        set_log_callback(move |level, msg| {
            if msg == "hello" {
                assert_eq!(level, LogLevel::Info);
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Info, "hello");
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_damages_all() {
        assert!(ChangeEvent::ConfigChanged.damages_all());
        assert!(ChangeEvent::DataReplaced { old_len: 1, new_len: 2 }.damages_all());
        assert!(!ChangeEvent::CaretBlinked { visible: false }.damages_all());
    }
}
