//! Bounded, timestamped audit log.
//!
//! Entries are held newest-first. The log is a pure observer: nothing in the
//! system reads it to make decisions, and it works the same in both security
//! modes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;
use uuid::Uuid;

/// Maximum number of retained entries. Appending beyond this silently drops
/// the oldest entry; overflow is not an error.
pub const AUDIT_LOG_CAPACITY: usize = 100;

/// Unique identifier for a log entry. UUID v7, so ids sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntryId(Uuid);

impl LogEntryId {
    /// Creates a new entry id with the current timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for LogEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LogEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Info,
    Warning,
    Error,
}

/// A single audit record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: LogEntryId,
    pub message: String,
    pub category: LogCategory,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    fn new(message: impl Into<String>, category: LogCategory) -> Self {
        Self {
            id: LogEntryId::new(),
            message: message.into(),
            category,
            timestamp: Utc::now(),
        }
    }
}

/// Bounded event record, newest entry first.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Mutex<VecDeque<LogEntry>>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry at the front, evicting the oldest entry once the
    /// log is at capacity. Returns the created entry.
    pub fn append(&self, message: impl Into<String>, category: LogCategory) -> LogEntry {
        let entry = LogEntry::new(message, category);
        let mut entries = self.entries.lock().unwrap();
        entries.push_front(entry.clone());
        entries.truncate(AUDIT_LOG_CAPACITY);
        entry
    }

    /// Replaces the contents with a single synthetic entry announcing the
    /// reset.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.clear();
        entries.push_front(LogEntry::new("[System] Console cleared.", LogCategory::Info));
    }

    /// Returns a snapshot of the entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// True when nothing has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
