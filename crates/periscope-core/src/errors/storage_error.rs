/// Local cache and preference store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    Sqlite { message: String },

    #[error("local store is locked: {path}")]
    Locked { path: String },

    #[error("io error: {message}")]
    Io { message: String },

    #[error("preference store error: {message}")]
    Prefs { message: String },
}
