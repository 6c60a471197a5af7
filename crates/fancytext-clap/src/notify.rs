//! User-facing notifications.
//!
//! Notifications are queued while a command runs and handed, oldest
//! first, to a single consumer afterwards. The queue is bounded: pushing
//! into a full queue drops the oldest entry.

use std::collections::VecDeque;
use std::fmt;

use console::Style;
use serde::Serialize;

/// Queue size used by the binary.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ⓘ",
        }
    }

    fn style(self) -> Style {
        match self {
            Severity::Success => Style::new().green(),
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().yellow(),
            Severity::Info => Style::new().cyan(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Formats as `"<icon> <message>"`, colored by severity when `use_color` is set.
    pub fn render(&self, use_color: bool) -> String {
        let line = self.to_string();
        if use_color {
            self.severity
                .style()
                .force_styling(true)
                .apply_to(line)
                .to_string()
        } else {
            line
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.icon(), self.message)
    }
}

/// Bounded FIFO of pending notifications.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a queue holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Enqueues `notification`, returning the entry dropped to make room, if any.
    pub fn push(&mut self, notification: Notification) -> Option<Notification> {
        let dropped = if self.pending.len() == self.capacity {
            self.pending.pop_front()
        } else {
            None
        };
        if let Some(old) = &dropped {
            log::debug!("notification queue full, dropping \"{}\"", old.message);
        }
        self.pending.push_back(notification);
        dropped
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, Severity::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, Severity::Error));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, Severity::Warning));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, Severity::Info));
    }

    /// Hands every pending notification to `sink`, oldest first, and
    /// returns how many were delivered.
    pub fn drain<F>(&mut self, mut sink: F) -> usize
    where
        F: FnMut(Notification),
    {
        let mut delivered = 0;
        while let Some(notification) = self.pending.pop_front() {
            sink(notification);
            delivered += 1;
        }
        delivered
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
