//! # periscope-engine
//!
//! The sync status reconciler. Combines one remote inventory fetch and N
//! local cache reads into a [`periscope_core::models::GlobalSyncState`], and
//! drives the sync, delete, environment, and signature operations against
//! the collaborator seams defined in `periscope-core`.
//!
//! The reconciler owns no persistent state beyond a bounded history of sync
//! outcomes; every snapshot is recomputed on demand.

pub mod engine;
pub mod notify;
pub mod reconcile;
pub mod sync_log;

pub use engine::{Reconciler, SyncReport};
pub use notify::Notifier;
pub use sync_log::SyncLog;
