//! Clipboard sink.

use std::fmt;
use std::thread;
use std::time::Duration;

use thiserror::Error;

/// Delay between copy attempts used by the binary.
pub const RETRY_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Somewhere converted text can be placed for pasting.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                log::warn!("failed to open clipboard: {e}");
                ClipboardError::Unavailable(e.to_string())
            })?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable("not initialized".to_string())),
        }
    }
}

/// Tries `sink.set_text(text)` up to `attempts` times, sleeping `delay`
/// between failures. Returns the attempt number that succeeded, or the
/// last error.
pub fn copy_with_retry(
    sink: &mut dyn ClipboardSink,
    text: &str,
    attempts: u32,
    delay: Duration,
) -> Result<u32, ClipboardError> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match sink.set_text(text) {
            Ok(()) => return Ok(attempt),
            Err(err) if attempt >= attempts => return Err(err),
            Err(err) => {
                log::debug!("copy attempt {attempt}/{attempts} failed: {err}");
                attempt += 1;
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fails the first `failures` writes, then records the text.
    struct Flaky {
        failures: u32,
        calls: u32,
        contents: Option<String>,
    }

    impl ClipboardSink for Flaky {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.calls += 1;
            if self.calls <= self.failures {
                return Err(ClipboardError::Write(format!("busy #{}", self.calls)));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn flaky(failures: u32) -> Flaky {
        Flaky {
            failures,
            calls: 0,
            contents: None,
        }
    }

    #[test]
    fn test_first_try() {
        let mut sink = flaky(0);
        assert_eq!(copy_with_retry(&mut sink, "x", 3, Duration::ZERO), Ok(1));
        assert_eq!(sink.contents.as_deref(), Some("x"));
    }

    #[test]
    fn test_succeeds_on_last_attempt() {
        let mut sink = flaky(2);
        assert_eq!(copy_with_retry(&mut sink, "x", 3, Duration::ZERO), Ok(3));
        assert_eq!(sink.calls, 3);
    }

    #[test]
    fn test_gives_up_with_last_error() {
        let mut sink = flaky(5);
        let err = copy_with_retry(&mut sink, "x", 3, Duration::ZERO).unwrap_err();
        assert_eq!(err, ClipboardError::Write("busy #3".to_string()));
        assert_eq!(sink.calls, 3);
        assert_eq!(sink.contents, None);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let mut sink = flaky(0);
        assert_eq!(copy_with_retry(&mut sink, "x", 0, Duration::ZERO), Ok(1));
    }
}
