//! SQLite-backed implementation of the local cache service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use periscope_core::errors::PeriscopeResult;
use periscope_core::models::{CollectionRef, LocalState};
use periscope_core::traits::LocalCache;

use crate::connection::StoreConnection;
use crate::storage_err;

/// One locally cached record.
#[derive(Debug, Clone)]
pub struct CachedRecord {
    pub id: String,
    pub payload: serde_json::Value,
    pub last_modified: i64,
}

/// The local settings cache. Cheap to clone; all clones share one
/// serialized write connection.
#[derive(Clone)]
pub struct SettingsCache {
    conn: Arc<StoreConnection>,
}

impl SettingsCache {
    pub fn new(conn: Arc<StoreConnection>) -> Self {
        Self { conn }
    }

    /// Replace the collection's records with a freshly fetched changeset and
    /// advance its local timestamp.
    pub async fn apply_changeset(
        &self,
        collection: &CollectionRef,
        records: &[CachedRecord],
        timestamp: i64,
    ) -> PeriscopeResult<()> {
        let bucket = collection.bucket.clone();
        let name = collection.collection.clone();
        let rows: Vec<(String, String, i64, Option<(String, i64)>)> = records
            .iter()
            .map(|r| {
                // Attachment pointers are tracked so a wipe prunes them
                // together with the records.
                let attachment = r.payload.get("attachment").map(|a| {
                    (
                        a.get("location")
                            .and_then(|v| v.as_str())
                            .unwrap_or_default()
                            .to_string(),
                        a.get("size").and_then(|v| v.as_i64()).unwrap_or_default(),
                    )
                });
                (r.id.clone(), r.payload.to_string(), r.last_modified, attachment)
            })
            .collect();

        self.conn
            .with_conn(move |conn| {
                let tx = conn.unchecked_transaction().map_err(storage_err)?;
                tx.execute(
                    "DELETE FROM records WHERE bucket = ?1 AND collection = ?2",
                    params![bucket, name],
                )
                .map_err(storage_err)?;
                tx.execute(
                    "DELETE FROM attachments WHERE bucket = ?1 AND collection = ?2",
                    params![bucket, name],
                )
                .map_err(storage_err)?;
                for (id, payload, last_modified, attachment) in &rows {
                    tx.execute(
                        "INSERT INTO records (bucket, collection, id, payload, last_modified)
                         VALUES (?1, ?2, ?3, ?4, ?5)",
                        params![bucket, name, id, payload, last_modified],
                    )
                    .map_err(storage_err)?;
                    if let Some((location, size)) = attachment {
                        tx.execute(
                            "INSERT INTO attachments (bucket, collection, record_id, location, size)
                             VALUES (?1, ?2, ?3, ?4, ?5)",
                            params![bucket, name, id, location, size],
                        )
                        .map_err(storage_err)?;
                    }
                }
                tx.execute(
                    "INSERT INTO collection_meta (bucket, collection, local_timestamp)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT (bucket, collection)
                     DO UPDATE SET local_timestamp = excluded.local_timestamp",
                    params![bucket, name, timestamp],
                )
                .map_err(storage_err)?;
                tx.commit().map_err(storage_err)?;
                Ok(())
            })
            .await?;

        tracing::debug!(collection = %collection, records = records.len(), timestamp, "changeset applied");
        Ok(())
    }

    /// Record a poll attempt without touching the applied timestamp.
    pub async fn record_last_check(
        &self,
        collection: &CollectionRef,
        at: DateTime<Utc>,
    ) -> PeriscopeResult<()> {
        let bucket = collection.bucket.clone();
        let name = collection.collection.clone();
        let millis = at.timestamp_millis();
        self.conn
            .with_conn(move |conn| {
                conn.execute(
                    "INSERT INTO collection_meta (bucket, collection, last_checked_at)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT (bucket, collection)
                     DO UPDATE SET last_checked_at = excluded.last_checked_at",
                    params![bucket, name, millis],
                )
                .map_err(storage_err)?;
                Ok(())
            })
            .await
    }
}

impl LocalCache for SettingsCache {
    async fn local_state(&self, collection: &CollectionRef) -> PeriscopeResult<LocalState> {
        let bucket = collection.bucket.clone();
        let name = collection.collection.clone();
        self.conn
            .with_conn(move |conn| {
                let record_count: i64 = conn
                    .query_row(
                        "SELECT COUNT(*) FROM records WHERE bucket = ?1 AND collection = ?2",
                        params![bucket, name],
                        |row| row.get(0),
                    )
                    .map_err(storage_err)?;

                let meta: Option<(Option<i64>, Option<i64>)> = conn
                    .query_row(
                        "SELECT local_timestamp, last_checked_at FROM collection_meta
                         WHERE bucket = ?1 AND collection = ?2",
                        params![bucket, name],
                        |row| Ok((row.get(0)?, row.get(1)?)),
                    )
                    .optional()
                    .map_err(storage_err)?;

                let (local_timestamp, last_checked_millis) = meta.unwrap_or((None, None));
                Ok(LocalState {
                    local_timestamp,
                    record_count: record_count as u64,
                    last_checked_at: last_checked_millis
                        .and_then(DateTime::from_timestamp_millis),
                })
            })
            .await
    }

    async fn clear(&self, collection: &CollectionRef) -> PeriscopeResult<()> {
        let bucket = collection.bucket.clone();
        let name = collection.collection.clone();
        self.conn
            .with_conn(move |conn| {
                let tx = conn.unchecked_transaction().map_err(storage_err)?;
                tx.execute(
                    "DELETE FROM records WHERE bucket = ?1 AND collection = ?2",
                    params![bucket, name],
                )
                .map_err(storage_err)?;
                tx.execute(
                    "DELETE FROM attachments WHERE bucket = ?1 AND collection = ?2",
                    params![bucket, name],
                )
                .map_err(storage_err)?;
                tx.execute(
                    "DELETE FROM collection_meta WHERE bucket = ?1 AND collection = ?2",
                    params![bucket, name],
                )
                .map_err(storage_err)?;
                tx.commit().map_err(storage_err)?;
                Ok(())
            })
            .await?;

        tracing::debug!(collection = %collection, "local cache cleared");
        Ok(())
    }
}
