//! Per-case console/log capture
//!
//! An [`OutputCapture`] is a cloneable handle over a shared line buffer.
//! Case closures capture a clone at suite-build time and write into it; the
//! runner drains the buffer after each case and attaches the lines to that
//! case's report.

// Poisoning means a test already panicked; failing fast here is the right
// behavior for a capture buffer, so expect() is allowed file-wide.
#![allow(clippy::expect_used)]

use std::fmt;
use std::sync::{Arc, Mutex};

type SharedLines = Arc<Mutex<Vec<String>>>;

/// Cloneable buffer collecting a case's console/log lines
///
/// # Examples
///
/// ```
/// use sitkit_harness::OutputCapture;
///
/// let capture = OutputCapture::new();
/// let handle = capture.clone();
/// handle.write("first");
/// handle.write("second");
///
/// assert_eq!(capture.drain(), vec!["first".to_string(), "second".to_string()]);
/// assert!(capture.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct OutputCapture {
    lines: SharedLines,
}

impl OutputCapture {
    /// Create an empty capture buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line
    pub fn write(&self, line: impl Into<String>) {
        self.lines.lock().expect("capture mutex poisoned").push(line.into());
    }

    /// Take all buffered lines, leaving the buffer empty
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().expect("capture mutex poisoned"))
    }

    /// Snapshot the buffered lines without clearing them
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("capture mutex poisoned").clone()
    }

    /// Discard all buffered lines
    pub fn clear(&self) {
        self.lines.lock().expect("capture mutex poisoned").clear();
    }

    /// Whether the buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().expect("capture mutex poisoned").is_empty()
    }
}

impl fmt::Debug for OutputCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.lines.lock().expect("capture mutex poisoned").len();
        f.debug_struct("OutputCapture").field("lines", &len).finish()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for output capture.
    use super::*;

    /// Validates that clones share one buffer.
    ///
    /// Assertions:
    /// - Confirms lines written through a clone are visible on the original.
    #[test]
    fn test_clones_share_buffer() {
        let capture = OutputCapture::new();
        let handle = capture.clone();

        handle.write("via clone");
        assert_eq!(capture.lines(), vec!["via clone".to_string()]);
    }

    /// Validates `drain` empties the buffer.
    ///
    /// Assertions:
    /// - Confirms drained lines come back in write order.
    /// - Ensures the buffer is empty afterwards.
    #[test]
    fn test_drain_empties_buffer() {
        let capture = OutputCapture::new();
        capture.write("a");
        capture.write("b");

        assert_eq!(capture.drain(), vec!["a".to_string(), "b".to_string()]);
        assert!(capture.is_empty());
        assert!(capture.drain().is_empty());
    }

    /// Validates `clear` discards buffered lines.
    ///
    /// Assertions:
    /// - Ensures the buffer is empty after `clear`.
    #[test]
    fn test_clear() {
        let capture = OutputCapture::new();
        capture.write("stale");
        capture.clear();
        assert!(capture.is_empty());
    }
}
