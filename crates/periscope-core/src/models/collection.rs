//! Collection identity and per-collection remote/local state.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies one remotely synchronized dataset. `(bucket, collection)` pairs
/// are unique within one environment's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionRef {
    pub bucket: String,
    pub collection: String,
}

impl CollectionRef {
    pub fn new(bucket: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            collection: collection.into(),
        }
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.collection)
    }
}

/// What the server currently reports for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteState {
    /// Timestamp of the latest accepted revision, in milliseconds since
    /// epoch. Monotonically non-decreasing per collection.
    pub remote_timestamp: i64,
    /// Whether the client verifies signatures for this collection.
    pub signature_verification: bool,
}

/// What the local cache holds for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalState {
    /// Timestamp of the last successfully applied remote revision, in
    /// milliseconds since epoch. `None` if never synced.
    pub local_timestamp: Option<i64>,
    /// Number of locally cached records.
    pub record_count: u64,
    /// Wall-clock time of the last poll attempt. `None` if never attempted.
    pub last_checked_at: Option<DateTime<Utc>>,
}

impl LocalState {
    /// The state of a collection that has never been synced — also what a
    /// collection reads as after its cache is deleted.
    pub fn never_synced() -> Self {
        Self {
            local_timestamp: None,
            record_count: 0,
            last_checked_at: None,
        }
    }
}
