//! # periscope-store
//!
//! Persistence for the Periscope inspector: the SQLite-backed local
//! settings cache, per-collection client settings, and the preference
//! stores (in-memory and JSON-file backed).

pub mod cache;
pub mod connection;
pub mod prefs;
pub mod schema;
pub mod settings;

pub use cache::{CachedRecord, SettingsCache};
pub use connection::StoreConnection;
pub use prefs::{JsonPrefs, MemoryPrefs};
pub use settings::CollectionSettings;

use periscope_core::errors::{PeriscopeError, StorageError};

pub(crate) fn storage_err(e: rusqlite::Error) -> PeriscopeError {
    StorageError::Sqlite {
        message: e.to_string(),
    }
    .into()
}
