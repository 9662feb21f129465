//! Collaborator capability traits.
//!
//! The reconciler performs no network or storage I/O itself; it orchestrates
//! these four seams. One implementation per backing technology — no attempt
//! is made to accommodate structurally different legacy shapes.

pub mod cache;
pub mod inventory;
pub mod prefs;
pub mod sync_client;

pub use cache::LocalCache;
pub use inventory::{InspectReport, RemoteCollectionState, RemoteInventory};
pub use prefs::{PrefStore, PrefValue};
pub use sync_client::SyncClient;
