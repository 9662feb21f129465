//! Pure merge of one inventory report and the per-collection local reads.
//!
//! No I/O happens here; `merge` is a function of its inputs, which is what
//! makes repeated `compute_state` calls with unchanged collaborators yield
//! identical snapshots.

use periscope_core::config::EnvironmentTable;
use periscope_core::models::{ApiVersion, GlobalSyncState, HistoryEntry, LocalState, SyncStatus};
use periscope_core::traits::InspectReport;

/// Merge the remote report and local reads into the global snapshot.
/// `locals` is parallel to `report.collections`; a collection whose local
/// read failed arrives here as [`LocalState::never_synced`].
pub fn merge(
    table: &EnvironmentTable,
    report: &InspectReport,
    locals: &[LocalState],
    manual_server: Option<&str>,
    manual_preview: Option<bool>,
    history: Vec<HistoryEntry>,
) -> GlobalSyncState {
    debug_assert_eq!(report.collections.len(), locals.len());

    let environment = table.classify(&report.server_url, report.preview_mode);
    let api_version = ApiVersion::from_server_url(&report.server_url);

    // A manual override that did not take effect: the user pinned a server
    // (or requested preview) but the resolved configuration disagrees.
    let server_ignored = manual_server.is_some_and(|url| url != report.server_url);
    let preview_ignored = manual_preview == Some(true) && !report.preview_mode;

    let collections: Vec<SyncStatus> = report
        .collections
        .iter()
        .zip(locals)
        .map(|(remote, local)| {
            SyncStatus::derive(remote.collection.clone(), &remote.remote_state(), local)
        })
        .collect();

    // If one collection has signature verification enabled, report it as
    // enabled overall. Collections are not expected to disagree in normal
    // operation; see DESIGN.md.
    let signatures_enabled = report
        .collections
        .iter()
        .any(|c| c.signature_verification);

    GlobalSyncState {
        environment,
        api_version,
        server_url: report.server_url.clone(),
        polling_endpoint: report.polling_endpoint.clone(),
        server_timestamp: report.server_timestamp,
        server_setting_ignored: server_ignored || preview_ignored,
        signatures_enabled,
        collections,
        history,
    }
}
