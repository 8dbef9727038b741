//! # Interaction Log
//!
//! Append-only record of significant user actions, shown at the bottom of
//! the list screen. Owned by the controller for its whole lifetime; entries
//! are never removed and never written to disk.
//!
//! This is separate from diagnostics: fetch errors go to `tracing`, not here.

use chrono::{DateTime, Local};
use std::fmt;

/// One timestamped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    message: String,
}

impl LogEntry {
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.message
        )
    }
}

/// Append-only interaction log
#[derive(Debug, Clone, Default)]
pub struct InteractionLog {
    entries: Vec<LogEntry>,
}

impl InteractionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current local time
    pub fn log<S: Into<String>>(&mut self, message: S) {
        let entry = LogEntry {
            timestamp: Local::now(),
            message: message.into(),
        };
        tracing::debug!("interaction: {}", entry.message);
        self.entries.push(entry);
    }

    /// All entries formatted for display, oldest first
    pub fn logs(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Raw entries, oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The last `count` entries, oldest first
    pub fn tail(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
