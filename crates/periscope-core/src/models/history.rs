//! Sync history entries surfaced in the global snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one sync or poll attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOutcome {
    Success,
    Failed,
}

/// One entry in the reconciler's bounded history of sync attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub at: DateTime<Utc>,
    pub outcome: SyncOutcome,
    pub detail: String,
}
