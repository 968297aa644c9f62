use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One executed external-process invocation, kept as the literal command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLogEntry {
    pub command: String,
}

impl CommandLogEntry {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

/// Position of an entry in the owner's oldest-first log.
///
/// Stays attached to the same entry while the log only grows, which is the
/// only mutation the owner performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub duration: Duration,
    pub kind: NotificationKind,
    pub message: String,
}
