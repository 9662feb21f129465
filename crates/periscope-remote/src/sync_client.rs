//! Changeset-based refresh client.
//!
//! Fetches a collection's changeset and replaces the locally cached records
//! with it. Every attempt, failed or not, stamps the collection's
//! last-checked marker.

use chrono::Utc;

use periscope_core::errors::{CollectionError, PeriscopeResult};
use periscope_core::models::CollectionRef;
use periscope_core::traits::SyncClient;
use periscope_store::{CachedRecord, CollectionSettings, SettingsCache};

use crate::cache_bust;
use crate::http::HttpClient;
use crate::protocol::{ChangesetRecord, ChangesetResponse};

pub struct HttpSyncClient {
    client: HttpClient,
    cache: SettingsCache,
    settings: CollectionSettings,
}

impl HttpSyncClient {
    pub fn new(client: HttpClient, cache: SettingsCache, settings: CollectionSettings) -> Self {
        Self {
            client,
            cache,
            settings,
        }
    }
}

impl SyncClient for HttpSyncClient {
    async fn sync_collection(&self, collection: &CollectionRef) -> PeriscopeResult<()> {
        self.cache.record_last_check(collection, Utc::now()).await?;

        let path = format!(
            "/buckets/{}/collections/{}/changeset?_expected={}",
            collection.bucket,
            collection.collection,
            cache_bust()
        );
        let changeset: ChangesetResponse<ChangesetRecord> = self
            .client
            .get_json(&path)
            .await
            .map_err(|e| CollectionError::new(collection, e.to_string()))?;

        let records: Vec<CachedRecord> = changeset
            .changes
            .iter()
            .map(|record| CachedRecord {
                id: record.id.clone(),
                payload: record.payload(),
                last_modified: record.last_modified,
            })
            .collect();

        self.cache
            .apply_changeset(collection, &records, changeset.timestamp)
            .await?;

        tracing::info!(collection = %collection, records = records.len(), "collection refreshed");
        Ok(())
    }

    async fn set_signature_verification(
        &self,
        collection: &CollectionRef,
        enabled: bool,
    ) -> PeriscopeResult<()> {
        self.settings.set_verify_signature(collection, enabled).await
    }
}
