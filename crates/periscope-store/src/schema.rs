//! Schema of the local settings cache.

use rusqlite::Connection;

use periscope_core::errors::PeriscopeResult;

use crate::storage_err;

/// Apply pragmas and create the tables if they do not exist yet.
pub fn init(conn: &Connection) -> PeriscopeResult<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA busy_timeout = 5000;
         PRAGMA foreign_keys = ON;

         CREATE TABLE IF NOT EXISTS records (
             bucket        TEXT NOT NULL,
             collection    TEXT NOT NULL,
             id            TEXT NOT NULL,
             payload       TEXT NOT NULL,
             last_modified INTEGER NOT NULL,
             PRIMARY KEY (bucket, collection, id)
         );

         CREATE TABLE IF NOT EXISTS collection_meta (
             bucket          TEXT NOT NULL,
             collection      TEXT NOT NULL,
             local_timestamp INTEGER,
             last_checked_at INTEGER,
             PRIMARY KEY (bucket, collection)
         );

         CREATE TABLE IF NOT EXISTS collection_settings (
             bucket           TEXT NOT NULL,
             collection       TEXT NOT NULL,
             verify_signature INTEGER NOT NULL DEFAULT 1,
             PRIMARY KEY (bucket, collection)
         );

         CREATE TABLE IF NOT EXISTS attachments (
             bucket     TEXT NOT NULL,
             collection TEXT NOT NULL,
             record_id  TEXT NOT NULL,
             location   TEXT NOT NULL,
             size       INTEGER NOT NULL DEFAULT 0,
             PRIMARY KEY (bucket, collection, record_id)
         );",
    )
    .map_err(storage_err)
}
