//! # periscope-core
//!
//! Foundation crate for the Periscope settings inspector.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod trace;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EnvironmentTable;
pub use errors::{PeriscopeError, PeriscopeResult};
pub use models::{
    ApiVersion, CollectionRef, Environment, EnvironmentName, GlobalSyncState, LocalState,
    SyncStatus,
};
