//! Derived status records: the per-collection verdict and the reconciled
//! global snapshot. Both are pure projections, recomputed on every request
//! and never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::collection::{CollectionRef, LocalState, RemoteState};
use super::environment::{ApiVersion, Environment};
use super::history::HistoryEntry;

/// Per-collection synchronization verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStatus {
    pub collection: CollectionRef,
    pub remote_timestamp: i64,
    pub local_timestamp: Option<i64>,
    pub record_count: u64,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub up_to_date: bool,
}

impl SyncStatus {
    /// Merge one collection's remote and local state. A collection is up to
    /// date only when it has synced at least once and its last applied
    /// revision matches the server's current one.
    pub fn derive(collection: CollectionRef, remote: &RemoteState, local: &LocalState) -> Self {
        Self {
            collection,
            remote_timestamp: remote.remote_timestamp,
            local_timestamp: local.local_timestamp,
            record_count: local.record_count,
            last_checked_at: local.last_checked_at,
            up_to_date: local.local_timestamp == Some(remote.remote_timestamp),
        }
    }
}

/// The reconciled snapshot rendered by the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSyncState {
    pub environment: Environment,
    pub api_version: ApiVersion,
    pub server_url: String,
    pub polling_endpoint: String,
    /// The server's inventory timestamp, in milliseconds since epoch.
    pub server_timestamp: i64,
    /// True when a user-requested server override did not take effect.
    pub server_setting_ignored: bool,
    /// True if any collection has signature verification enabled.
    pub signatures_enabled: bool,
    pub collections: Vec<SyncStatus>,
    pub history: Vec<HistoryEntry>,
}
