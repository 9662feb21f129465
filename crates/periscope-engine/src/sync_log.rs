//! Bounded in-memory log of sync and poll outcomes, surfaced in the global
//! snapshot as the panel's sync history.

use std::collections::VecDeque;

use chrono::Utc;
use periscope_core::constants::HISTORY_LIMIT;
use periscope_core::models::{HistoryEntry, SyncOutcome};

/// Recent sync attempts, oldest evicted first once the cap is reached.
#[derive(Debug, Default)]
pub struct SyncLog {
    entries: VecDeque<HistoryEntry>,
}

impl SyncLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attempt's outcome.
    pub fn record(&mut self, outcome: SyncOutcome, detail: impl Into<String>) {
        self.entries.push_back(HistoryEntry {
            at: Utc::now(),
            outcome,
            detail: detail.into(),
        });
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    /// Entries newest first, for rendering.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
