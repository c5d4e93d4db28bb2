//! Result history
//!
//! Only fully successful evaluations are recorded. The log lives for the
//! length of the session and is never written to disk.

use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:.6}", self.expression, self.result)
    }
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// A history that keeps only the newest `limit` entries
    pub fn with_limit(limit: usize) -> Self {
        History {
            entries: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn record(&mut self, expression: impl Into<String>, result: f64) {
        self.entries.push_back(HistoryEntry {
            expression: expression.into(),
            result,
        });
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    /// Entries from oldest to newest
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Numbered listing, one line per entry, starting at 1
    pub fn render(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {}", i + 1, entry))
            .collect()
    }
}
