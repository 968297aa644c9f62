use crate::catalog::EMPTY_LOG_PLACEHOLDER;
use crate::host::Translate;
use crate::types::{CommandLogEntry, EntryKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntry<'a> {
    pub key: EntryKey,
    pub command: &'a str,
}

/// Walks the log newest-first without touching the owner's slice.
pub fn display_entries(
    log: &[CommandLogEntry],
) -> impl DoubleEndedIterator<Item = DisplayEntry<'_>> + ExactSizeIterator {
    log.iter()
        .enumerate()
        .rev()
        .map(|(index, entry)| DisplayEntry {
            key: EntryKey(index),
            command: &entry.command,
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogView<'a> {
    Placeholder(String),
    Entries(Vec<DisplayEntry<'a>>),
}

impl<'a> LogView<'a> {
    pub fn build<T: Translate + ?Sized>(log: &'a [CommandLogEntry], translator: &T) -> Self {
        if log.is_empty() {
            Self::Placeholder(translator.translate(EMPTY_LOG_PLACEHOLDER))
        } else {
            Self::Entries(display_entries(log).collect())
        }
    }
}

/// Highlighted log entry, tracked by key so that appends leave it in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSelection {
    key: Option<EntryKey>,
}

impl LogSelection {
    /// The highlighted entry, defaulting to the newest one.
    pub fn current(&self, log: &[CommandLogEntry]) -> Option<EntryKey> {
        match self.key {
            Some(EntryKey(index)) if index < log.len() => self.key,
            _ => log.len().checked_sub(1).map(EntryKey),
        }
    }

    /// Moves one step towards the top of the displayed list.
    pub fn select_newer(&mut self, log: &[CommandLogEntry]) {
        if let Some(EntryKey(index)) = self.current(log) {
            self.key = Some(EntryKey((index + 1).min(log.len() - 1)));
        }
    }

    /// Moves one step towards the bottom of the displayed list.
    pub fn select_older(&mut self, log: &[CommandLogEntry]) {
        if let Some(EntryKey(index)) = self.current(log) {
            self.key = Some(EntryKey(index.saturating_sub(1)));
        }
    }

    pub fn select(&mut self, key: EntryKey) {
        self.key = Some(key);
    }

    pub fn reset(&mut self) {
        self.key = None;
    }

    /// Row of the highlighted entry in newest-first order.
    pub fn display_position(&self, log: &[CommandLogEntry]) -> Option<usize> {
        self.current(log)
            .map(|EntryKey(index)| log.len() - 1 - index)
    }
}
