//! Read-only access to the server's inventory of synchronized collections.

use serde::{Deserialize, Serialize};

use crate::errors::PeriscopeResult;
use crate::models::{CollectionRef, RemoteState};

/// One collection as reported by the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCollectionState {
    pub collection: CollectionRef,
    /// Timestamp of the latest accepted revision, in milliseconds since epoch.
    pub remote_timestamp: i64,
    /// Whether the client verifies signatures for this collection.
    pub signature_verification: bool,
}

impl RemoteCollectionState {
    pub fn remote_state(&self) -> RemoteState {
        RemoteState {
            remote_timestamp: self.remote_timestamp,
            signature_verification: self.signature_verification,
        }
    }
}

/// Snapshot of the remote side, fetched in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectReport {
    /// The resolved server root the client is actually talking to.
    pub server_url: String,
    /// Whether the client is reading preview variants of the buckets.
    pub preview_mode: bool,
    /// The inventory's own timestamp, in milliseconds since epoch.
    pub server_timestamp: i64,
    /// Absolute URL of the inventory monitor endpoint.
    pub polling_endpoint: String,
    pub collections: Vec<RemoteCollectionState>,
}

/// The remote inventory service. Mutation of server state is out of scope;
/// this seam is read-only.
#[allow(async_fn_in_trait)]
pub trait RemoteInventory: Send + Sync {
    /// Fetch the current inventory. Fails as a whole on network or payload
    /// errors — no partial report is ever returned.
    async fn inspect(&self) -> PeriscopeResult<InspectReport>;
}
