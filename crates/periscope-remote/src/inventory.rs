//! HTTP implementation of the remote inventory service.

use periscope_core::constants::{MONITOR_BUCKET, MONITOR_COLLECTION};
use periscope_core::errors::PeriscopeResult;
use periscope_core::models::CollectionRef;
use periscope_core::traits::{InspectReport, RemoteCollectionState, RemoteInventory};
use periscope_store::CollectionSettings;

use crate::cache_bust;
use crate::http::HttpClient;
use crate::protocol::{ChangesetResponse, MonitorEntry};

/// Reads the server's changes monitor and reports the collections relevant
/// to the active mode. In preview mode only `*-preview` buckets are listed;
/// otherwise they are filtered out.
pub struct HttpInventory {
    client: HttpClient,
    preview_mode: bool,
    settings: CollectionSettings,
}

impl HttpInventory {
    pub fn new(client: HttpClient, preview_mode: bool, settings: CollectionSettings) -> Self {
        Self {
            client,
            preview_mode,
            settings,
        }
    }

    fn monitor_path(&self) -> String {
        format!("/buckets/{MONITOR_BUCKET}/collections/{MONITOR_COLLECTION}/changeset")
    }
}

impl RemoteInventory for HttpInventory {
    async fn inspect(&self) -> PeriscopeResult<InspectReport> {
        let path = format!("{}?_expected={}", self.monitor_path(), cache_bust());
        let monitor: ChangesetResponse<MonitorEntry> = self.client.get_json(&path).await?;

        let mut collections = Vec::new();
        for entry in monitor.changes {
            let is_preview_bucket = entry.bucket.ends_with("-preview");
            if is_preview_bucket != self.preview_mode {
                continue;
            }
            let collection = CollectionRef::new(entry.bucket, entry.collection);
            let signature_verification = self.settings.verify_signature(&collection).await?;
            collections.push(RemoteCollectionState {
                collection,
                remote_timestamp: entry.last_modified,
                signature_verification,
            });
        }

        Ok(InspectReport {
            server_url: self.client.base_url().to_string(),
            preview_mode: self.preview_mode,
            server_timestamp: monitor.timestamp,
            polling_endpoint: format!("{}{}", self.client.base_url(), self.monitor_path()),
            collections,
        })
    }
}
