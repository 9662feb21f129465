//! # periscope-remote
//!
//! HTTP adapters over the settings server. [`HttpInventory`] reads the
//! server's changes monitor to enumerate collections; [`HttpSyncClient`]
//! refreshes one collection's local cache from its changeset endpoint.
//!
//! These are diagnostic adapters: polling cadence, conflict resolution, and
//! signature validation belong to the host's sync machinery. The signature
//! verification flag is stored and surfaced, never enforced here.

pub mod http;
pub mod inventory;
pub mod protocol;
pub mod sync_client;

pub use http::{HttpClient, HttpClientConfig};
pub use inventory::HttpInventory;
pub use sync_client::HttpSyncClient;

use chrono::Utc;
use periscope_core::constants::{CACHE_BUST_BASE, CACHE_BUST_SPAN};

/// Synthetic `_expected` value used to punch through CDN caching on
/// changeset reads.
pub(crate) fn cache_bust() -> i64 {
    let micros = i64::from(Utc::now().timestamp_subsec_micros());
    CACHE_BUST_BASE + (micros % CACHE_BUST_SPAN)
}
