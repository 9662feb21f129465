//! Data model: environments, collections, per-collection state, and the
//! reconciled global snapshot.

pub mod collection;
pub mod environment;
pub mod history;
pub mod status;

pub use collection::{CollectionRef, LocalState, RemoteState};
pub use environment::{ApiVersion, Environment, EnvironmentName};
pub use history::{HistoryEntry, SyncOutcome};
pub use status::{GlobalSyncState, SyncStatus};
