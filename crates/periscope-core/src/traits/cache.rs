//! The local cache service: per-collection persisted snapshots.

use crate::errors::PeriscopeResult;
use crate::models::{CollectionRef, LocalState};

/// Per-collection access to the locally persisted snapshot. The backing
/// store is a single shared resource per environment; callers must not issue
/// concurrent writes against it.
#[allow(async_fn_in_trait)]
pub trait LocalCache: Send + Sync {
    /// Read the collection's local state. Fails with a storage error if the
    /// backing store is inaccessible or locked.
    async fn local_state(&self, collection: &CollectionRef) -> PeriscopeResult<LocalState>;

    /// Remove the collection's records, local timestamp, last-checked marker,
    /// and attachment bookkeeping. Afterwards the collection reads as never
    /// synced, not as synced-to-zero.
    async fn clear(&self, collection: &CollectionRef) -> PeriscopeResult<()>;
}
