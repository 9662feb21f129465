//! Error taxonomy for the workspace.
//!
//! Collection-scoped failures travel as [`CollectionError`] so the panel can
//! localize them to one row; everything else surfaces through the umbrella
//! [`PeriscopeError`].

pub mod collection_error;
pub mod remote_error;
pub mod storage_error;

pub use collection_error::CollectionError;
pub use remote_error::RemoteError;
pub use storage_error::StorageError;

/// Umbrella error for all Periscope operations.
#[derive(Debug, thiserror::Error)]
pub enum PeriscopeError {
    #[error("remote error: {0}")]
    RemoteError(#[from] RemoteError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("sync error: {0}")]
    SyncError(#[from] CollectionError),

    #[error("unrecognized environment: {name}")]
    InvalidEnvironment { name: String },

    #[error("invalid environment table: {reason}")]
    InvalidConfig { reason: String },
}

pub type PeriscopeResult<T> = Result<T, PeriscopeError>;
