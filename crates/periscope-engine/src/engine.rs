//! Reconciler — orchestrates the remote inventory, local cache, sync client,
//! and preference store behind the diagnostic panel's operations.

use tokio::sync::Mutex;

use periscope_core::config::EnvironmentTable;
use periscope_core::constants::{PREF_PREVIEW_ENABLED, PREF_PUSH_SERVER, PREF_SERVER};
use periscope_core::errors::{CollectionError, PeriscopeError, PeriscopeResult};
use periscope_core::models::{
    ApiVersion, CollectionRef, Environment, GlobalSyncState, LocalState, SyncOutcome,
};
use periscope_core::traits::{LocalCache, PrefStore, RemoteInventory, SyncClient};

use crate::notify::Notifier;
use crate::reconcile;
use crate::sync_log::SyncLog;

/// Summary of one sync or delete pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Collections processed successfully.
    pub completed: usize,
    /// Per-collection failures; the pass continued past each one.
    pub failures: Vec<CollectionError>,
}

/// The sync status reconciler. Stateless between calls apart from the
/// bounded history log; every snapshot is recomputed from the collaborators.
pub struct Reconciler<I, C, S, P> {
    inventory: I,
    cache: C,
    sync: S,
    prefs: P,
    table: EnvironmentTable,
    notifier: Notifier,
    log: Mutex<SyncLog>,
}

impl<I, C, S, P> Reconciler<I, C, S, P>
where
    I: RemoteInventory,
    C: LocalCache,
    S: SyncClient,
    P: PrefStore,
{
    pub fn new(inventory: I, cache: C, sync: S, prefs: P, table: EnvironmentTable) -> Self {
        Self {
            inventory,
            cache,
            sync,
            prefs,
            table,
            notifier: Notifier::new(),
            log: Mutex::new(SyncLog::new()),
        }
    }

    /// The three notification channels exposed to the presentation layer.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Build a fresh snapshot of the global sync state.
    ///
    /// Fails as a whole if the remote inventory is unreachable. An
    /// individual collection whose local read fails is reported as never
    /// synced rather than hiding the status of all the others.
    pub async fn compute_state(&self) -> PeriscopeResult<GlobalSyncState> {
        let report = self.inventory.inspect().await?;

        let mut locals = Vec::with_capacity(report.collections.len());
        for remote in &report.collections {
            match self.cache.local_state(&remote.collection).await {
                Ok(state) => locals.push(state),
                Err(e) => {
                    tracing::warn!(
                        collection = %remote.collection,
                        error = %e,
                        "local read failed, reporting collection as never synced"
                    );
                    locals.push(LocalState::never_synced());
                }
            }
        }

        let manual_server = self.prefs.get_string(PREF_SERVER);
        let manual_preview = self.prefs.get_bool(PREF_PREVIEW_ENABLED);
        let history = self.log.lock().await.snapshot();

        Ok(reconcile::merge(
            &self.table,
            &report,
            &locals,
            manual_server.as_deref(),
            manual_preview,
            history,
        ))
    }

    /// Force a sync of one collection, or of every known collection when
    /// `target` is `None`. The all-collections form processes collections
    /// strictly one after another: the local cache is a single shared
    /// resource and must not see concurrent writers.
    ///
    /// Fires the state-changed channel once the pass completes, success or
    /// failure.
    pub async fn request_sync(&self, target: Option<&CollectionRef>) -> PeriscopeResult<SyncReport> {
        let outcome = match target {
            Some(collection) => self.sync_one(collection).await,
            None => self.sync_all().await,
        };
        self.notifier.state_changed();
        outcome
    }

    async fn sync_one(&self, collection: &CollectionRef) -> PeriscopeResult<SyncReport> {
        match self.sync.sync_collection(collection).await {
            Ok(()) => {
                self.log
                    .lock()
                    .await
                    .record(SyncOutcome::Success, format!("synced {collection}"));
                Ok(SyncReport {
                    completed: 1,
                    failures: Vec::new(),
                })
            }
            Err(e) => {
                let error = attribute(collection, e);
                self.log
                    .lock()
                    .await
                    .record(SyncOutcome::Failed, error.to_string());
                self.notifier.sync_error(error.clone());
                Ok(SyncReport {
                    completed: 0,
                    failures: vec![error],
                })
            }
        }
    }

    async fn sync_all(&self) -> PeriscopeResult<SyncReport> {
        let report = match self.inventory.inspect().await {
            Ok(report) => report,
            Err(e) => {
                self.log
                    .lock()
                    .await
                    .record(SyncOutcome::Failed, format!("poll failed: {e}"));
                self.notifier.global_error(e.to_string());
                return Err(e);
            }
        };

        let mut summary = SyncReport::default();
        for remote in &report.collections {
            // One collection at a time; the next write must not begin until
            // the previous one has completed.
            match self.sync.sync_collection(&remote.collection).await {
                Ok(()) => summary.completed += 1,
                Err(e) => {
                    let error = attribute(&remote.collection, e);
                    self.notifier.sync_error(error.clone());
                    summary.failures.push(error);
                }
            }
        }

        let mut log = self.log.lock().await;
        if summary.failures.is_empty() {
            log.record(
                SyncOutcome::Success,
                format!("synced {} collections", summary.completed),
            );
        } else {
            log.record(
                SyncOutcome::Failed,
                format!(
                    "{} of {} collections failed",
                    summary.failures.len(),
                    report.collections.len()
                ),
            );
        }
        Ok(summary)
    }

    /// Wipe the local cache of one collection, or of every known collection
    /// when `target` is `None` (sequential, like `request_sync`). After
    /// deletion the affected collections read as never synced.
    pub async fn delete_local(&self, target: Option<&CollectionRef>) -> PeriscopeResult<SyncReport> {
        let outcome = match target {
            Some(collection) => self.delete_one(collection).await,
            None => self.delete_all().await,
        };
        self.notifier.state_changed();
        outcome
    }

    async fn delete_one(&self, collection: &CollectionRef) -> PeriscopeResult<SyncReport> {
        match self.cache.clear(collection).await {
            Ok(()) => Ok(SyncReport {
                completed: 1,
                failures: Vec::new(),
            }),
            Err(e) => {
                let error = attribute(collection, e);
                self.notifier.sync_error(error.clone());
                Ok(SyncReport {
                    completed: 0,
                    failures: vec![error],
                })
            }
        }
    }

    async fn delete_all(&self) -> PeriscopeResult<SyncReport> {
        let report = match self.inventory.inspect().await {
            Ok(report) => report,
            Err(e) => {
                self.notifier.global_error(e.to_string());
                return Err(e);
            }
        };

        let mut summary = SyncReport::default();
        for remote in &report.collections {
            match self.cache.clear(&remote.collection).await {
                Ok(()) => summary.completed += 1,
                Err(e) => {
                    let error = attribute(&remote.collection, e);
                    self.notifier.sync_error(error.clone());
                    summary.failures.push(error);
                }
            }
        }
        Ok(summary)
    }

    /// Point the client at another environment by updating the preference
    /// store. Validation happens before any write: an unrecognized name
    /// leaves the store completely untouched.
    ///
    /// Does not trigger a sync; callers recompute state (and optionally
    /// request a sync) afterwards.
    pub fn switch_environment(&self, name: &str, api: ApiVersion) -> PeriscopeResult<()> {
        let env: Environment = name.parse()?;
        let endpoints =
            self.table
                .endpoints(env.name)
                .ok_or_else(|| PeriscopeError::InvalidEnvironment {
                    name: name.to_string(),
                })?;

        let server = format!(
            "{}/{}",
            endpoints.server_root.trim_end_matches('/'),
            api.as_str()
        );
        self.prefs.set_string(PREF_SERVER, &server)?;
        match &endpoints.push_endpoint {
            Some(url) => self.prefs.set_string(PREF_PUSH_SERVER, url)?,
            None => self.prefs.clear(PREF_PUSH_SERVER)?,
        }
        self.prefs.set_bool(PREF_PREVIEW_ENABLED, env.preview)?;

        tracing::info!(environment = %env, server = %server, "switched environment");
        self.notifier.state_changed();
        Ok(())
    }

    /// Enable or disable signature verification on every known collection.
    pub async fn set_signature_verification(&self, enabled: bool) -> PeriscopeResult<()> {
        let report = self.inventory.inspect().await?;
        for remote in &report.collections {
            self.sync
                .set_signature_verification(&remote.collection, enabled)
                .await?;
        }
        tracing::info!(enabled, "signature verification toggled");
        self.notifier.state_changed();
        Ok(())
    }
}

/// Scope an operation failure to the collection it happened on. Errors that
/// already carry a collection pass through unchanged.
fn attribute(collection: &CollectionRef, error: PeriscopeError) -> CollectionError {
    match error {
        PeriscopeError::SyncError(error) => error,
        other => CollectionError::new(collection, other.to_string()),
    }
}
