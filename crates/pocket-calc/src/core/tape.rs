//! Tape of completed operations
//!
//! Visual feedback: views show the last few `a op b = result` lines. The tape
//! is read-only; nothing is ever replayed from it.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::format::format_number;
use super::Operator;

/// One completed binary operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// Left operand
    pub left: f64,
    /// Operator applied
    pub operator: Operator,
    /// Right operand
    pub right: f64,
    /// Result of the operation
    pub result: f64,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub fn new(left: f64, operator: Operator, right: f64, result: f64) -> Self {
        Self {
            left,
            operator,
            right,
            result,
        }
    }

    /// Returns a formatted line such as `7 + 3 = 10`
    #[must_use]
    pub fn display(&self, precision: u32) -> String {
        let fmt = |v: f64| format_number(v, precision).unwrap_or_else(|| v.to_string());
        format!(
            "{} {} {} = {}",
            fmt(self.left),
            self.operator,
            fmt(self.right),
            fmt(self.result)
        )
    }
}

/// Bounded record of completed operations (oldest first)
#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum number of entries
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a tape with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a tape holding at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Adds an entry, dropping the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a completed operation
    pub fn record(&mut self, left: f64, operator: Operator, right: f64, result: f64) {
        self.push(TapeEntry::new(left, operator, right, result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Serializes the tape to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Formats every entry, one per line
    #[must_use]
    pub fn export_formatted(&self, precision: u32) -> String {
        self.entries
            .iter()
            .map(|entry| entry.display(precision))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
