//! Single write connection behind `tokio::sync::Mutex`.
//! The cache is a single shared resource per environment; serializing access
//! keeps concurrent writers out of the backing store.

use std::path::Path;

use rusqlite::Connection;
use tokio::sync::Mutex;

use periscope_core::errors::PeriscopeResult;

use crate::schema;
use crate::storage_err;

/// A single SQLite connection protected by an async mutex.
pub struct StoreConnection {
    conn: Mutex<Connection>,
}

impl StoreConnection {
    /// Open (and if necessary create) the cache database at the given path.
    pub fn open(path: &Path) -> PeriscopeResult<Self> {
        let conn = Connection::open(path).map_err(storage_err)?;
        schema::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> PeriscopeResult<Self> {
        let conn = Connection::open_in_memory().map_err(storage_err)?;
        schema::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and execute a closure with the connection.
    pub async fn with_conn<F, T>(&self, f: F) -> PeriscopeResult<T>
    where
        F: FnOnce(&Connection) -> PeriscopeResult<T>,
    {
        let guard = self.conn.lock().await;
        f(&guard)
    }
}
