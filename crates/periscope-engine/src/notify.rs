//! Notification channels for state changes and errors.
//!
//! Three independent channels, not one multiplexed bus, so the presentation
//! layer can tell "collection X failed" (row-level update) apart from
//! "everything failed" (banner-level update) without filtering by topic.

use periscope_core::errors::CollectionError;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// The reconciler's notification channels. Subscribing returns a receiver
/// handle; dropping the receiver unsubscribes.
#[derive(Debug)]
pub struct Notifier {
    state_changed: broadcast::Sender<()>,
    sync_errors: broadcast::Sender<CollectionError>,
    global_errors: broadcast::Sender<String>,
}

impl Notifier {
    pub fn new() -> Self {
        let (state_changed, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (sync_errors, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (global_errors, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            state_changed,
            sync_errors,
            global_errors,
        }
    }

    /// State-change notifications carry no payload; subscribers re-run
    /// `compute_state` to obtain the fresh snapshot.
    pub fn subscribe_state_changed(&self) -> broadcast::Receiver<()> {
        self.state_changed.subscribe()
    }

    /// Structured per-collection sync and delete failures.
    pub fn subscribe_sync_errors(&self) -> broadcast::Receiver<CollectionError> {
        self.sync_errors.subscribe()
    }

    /// Failures with no natural collection scope, e.g. total network loss.
    pub fn subscribe_global_errors(&self) -> broadcast::Receiver<String> {
        self.global_errors.subscribe()
    }

    pub(crate) fn state_changed(&self) {
        // A send error only means nobody is listening.
        let _ = self.state_changed.send(());
    }

    pub(crate) fn sync_error(&self, error: CollectionError) {
        tracing::warn!(collection = %error.collection_ref(), error = %error.message, "sync error");
        let _ = self.sync_errors.send(error);
    }

    pub(crate) fn global_error(&self, message: String) {
        tracing::error!(error = %message, "global error");
        let _ = self.global_errors.send(message);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
