//! Append-only notification log with a storage cap.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationLog {
    entries:  VecDeque<String>,
    capacity: usize,
    /// Total ever pushed, including entries dropped by the cap.
    total:    u64,
}

impl NotificationLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries:  VecDeque::new(),
            capacity: capacity.max(1),
            total:    0,
        }
    }

    /// Append a message, dropping the oldest if the cap is reached.
    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
        self.total += 1;
    }

    /// The last `n` messages, most recent first.
    pub fn recent(&self, n: usize) -> Vec<String> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    /// Stored messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_pushed(&self) -> u64 {
        self.total
    }
}
