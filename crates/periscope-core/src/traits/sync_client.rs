//! The polling trigger: asks the host's sync machinery to refresh one
//! collection's local cache.

use crate::errors::PeriscopeResult;
use crate::models::CollectionRef;

/// Per-collection sync trigger. Polling cadence, reconciliation, and
/// signature validation all live behind this seam; the reconciler only
/// sequences calls and reports outcomes.
#[allow(async_fn_in_trait)]
pub trait SyncClient: Send + Sync {
    /// Refresh one collection's local cache from the server.
    async fn sync_collection(&self, collection: &CollectionRef) -> PeriscopeResult<()>;

    /// Enable or disable signature verification for one collection.
    async fn set_signature_verification(
        &self,
        collection: &CollectionRef,
        enabled: bool,
    ) -> PeriscopeResult<()>;
}
