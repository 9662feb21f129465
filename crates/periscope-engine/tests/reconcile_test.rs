//! Tests for the pure merge step, driven with hand-built inventory reports.

use periscope_core::config::EnvironmentTable;
use periscope_core::models::{ApiVersion, CollectionRef, EnvironmentName, LocalState};
use periscope_core::traits::{InspectReport, RemoteCollectionState};
use periscope_engine::reconcile::merge;

fn report(server_url: &str, collections: Vec<RemoteCollectionState>) -> InspectReport {
    InspectReport {
        server_url: server_url.to_string(),
        preview_mode: false,
        server_timestamp: 9000,
        polling_endpoint: format!("{server_url}/buckets/monitor/collections/changes/changeset"),
        collections,
    }
}

fn remote(bucket: &str, name: &str, ts: i64, verify: bool) -> RemoteCollectionState {
    RemoteCollectionState {
        collection: CollectionRef::new(bucket, name),
        remote_timestamp: ts,
        signature_verification: verify,
    }
}

fn synced(ts: i64) -> LocalState {
    LocalState {
        local_timestamp: Some(ts),
        record_count: 1,
        last_checked_at: None,
    }
}

#[test]
fn up_to_date_requires_exact_timestamp_match() {
    let table = EnvironmentTable::default();
    let report = report(
        "https://settings.elsewhere.example/v1",
        vec![
            remote("main", "exact", 1000, true),
            remote("main", "behind", 2000, true),
            remote("main", "never", 3000, true),
        ],
    );
    let locals = [synced(1000), synced(1999), LocalState::never_synced()];

    let state = merge(&table, &report, &locals, None, None, Vec::new());

    assert!(state.collections[0].up_to_date);
    assert!(!state.collections[1].up_to_date);
    assert!(!state.collections[2].up_to_date);
}

#[test]
fn zero_timestamps_still_compare_exactly() {
    let table = EnvironmentTable::default();
    let report = report(
        "https://settings.elsewhere.example/v1",
        vec![remote("main", "empty", 0, true)],
    );

    let state = merge(&table, &report, &[synced(0)], None, None, Vec::new());
    assert!(state.collections[0].up_to_date, "synced at zero is synced");

    let state = merge(
        &table,
        &report,
        &[LocalState::never_synced()],
        None,
        None,
        Vec::new(),
    );
    assert!(
        !state.collections[0].up_to_date,
        "never synced is not synced-to-zero"
    );
}

#[test]
fn signatures_enabled_is_a_disjunction() {
    let table = EnvironmentTable::default();
    let report_mixed = report(
        "https://settings.elsewhere.example/v1",
        vec![
            remote("main", "a", 1, false),
            remote("main", "b", 2, true),
        ],
    );
    let locals = [LocalState::never_synced(), LocalState::never_synced()];
    let state = merge(&table, &report_mixed, &locals, None, None, Vec::new());
    assert!(state.signatures_enabled, "one enabled collection is enough");

    let report_none = report(
        "https://settings.elsewhere.example/v1",
        vec![remote("main", "a", 1, false)],
    );
    let state = merge(
        &table,
        &report_none,
        &[LocalState::never_synced()],
        None,
        None,
        Vec::new(),
    );
    assert!(!state.signatures_enabled);
}

#[test]
fn unknown_server_classifies_as_custom() {
    let table = EnvironmentTable::default();
    let state = merge(
        &table,
        &report("https://settings.elsewhere.example/v1", Vec::new()),
        &[],
        None,
        None,
        Vec::new(),
    );
    assert_eq!(state.environment.name, EnvironmentName::Custom);
}

#[test]
fn api_version_comes_from_the_resolved_url() {
    let table = EnvironmentTable::default();
    let url = format!("{}/v2", table.dev.server_root);
    let state = merge(&table, &report(&url, Vec::new()), &[], None, None, Vec::new());
    assert_eq!(state.api_version, ApiVersion::V2);
    assert_eq!(state.environment.name, EnvironmentName::Dev);
}

#[test]
fn preview_flag_comes_from_the_report() {
    let table = EnvironmentTable::default();
    let mut rep = report(&format!("{}/v1", table.prod.server_root), Vec::new());
    rep.preview_mode = true;
    let state = merge(&table, &rep, &[], None, None, Vec::new());
    assert_eq!(state.environment.label(), "prod-preview");
}

#[test]
fn manual_preview_request_without_effect_is_flagged() {
    let table = EnvironmentTable::default();
    let rep = report(&format!("{}/v1", table.prod.server_root), Vec::new());

    let state = merge(&table, &rep, &[], None, Some(true), Vec::new());
    assert!(state.server_setting_ignored);

    // An explicit "preview off" matching reality is not an override.
    let state = merge(&table, &rep, &[], None, Some(false), Vec::new());
    assert!(!state.server_setting_ignored);
}
