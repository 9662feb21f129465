//! Per-collection client settings.

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use periscope_core::errors::PeriscopeResult;
use periscope_core::models::CollectionRef;

use crate::connection::StoreConnection;
use crate::storage_err;

/// Signature verification flags, one per collection. Verification defaults
/// to enabled for collections that were never toggled.
#[derive(Clone)]
pub struct CollectionSettings {
    conn: Arc<StoreConnection>,
}

impl CollectionSettings {
    pub fn new(conn: Arc<StoreConnection>) -> Self {
        Self { conn }
    }

    pub async fn verify_signature(&self, collection: &CollectionRef) -> PeriscopeResult<bool> {
        let bucket = collection.bucket.clone();
        let name = collection.collection.clone();
        self.conn
            .with_conn(move |conn| {
                let flag: Option<bool> = conn
                    .query_row(
                        "SELECT verify_signature FROM collection_settings
                         WHERE bucket = ?1 AND collection = ?2",
                        params![bucket, name],
                        |row| row.get(0),
                    )
                    .optional()
                    .map_err(storage_err)?;
                Ok(flag.unwrap_or(true))
            })
            .await
    }

    pub async fn set_verify_signature(
        &self,
        collection: &CollectionRef,
        enabled: bool,
    ) -> PeriscopeResult<()> {
        let bucket = collection.bucket.clone();
        let name = collection.collection.clone();
        self.conn
            .with_conn(move |conn| {
                conn.execute(
                    "INSERT INTO collection_settings (bucket, collection, verify_signature)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT (bucket, collection)
                     DO UPDATE SET verify_signature = excluded.verify_signature",
                    params![bucket, name, enabled],
                )
                .map_err(storage_err)?;
                Ok(())
            })
            .await
    }
}
