//! Plain-text rendering of the reconciled snapshot.

use chrono::{DateTime, Utc};

use periscope_core::models::{GlobalSyncState, SyncOutcome, SyncStatus};

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

fn human_millis(ts: Option<i64>) -> String {
    match ts.and_then(DateTime::from_timestamp_millis) {
        Some(dt) => dt.format(TIME_FORMAT).to_string(),
        None => "—".to_string(),
    }
}

fn human_instant(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(dt) => dt.format(TIME_FORMAT).to_string(),
        None => "—".to_string(),
    }
}

pub fn print_state(state: &GlobalSyncState) {
    println!(
        "Environment : {} (api {})",
        state.environment.label(),
        state.api_version
    );
    println!("Server      : {}", state.server_url);
    println!("Monitor     : {}", state.polling_endpoint);
    println!(
        "Server time : {}",
        human_millis(Some(state.server_timestamp))
    );
    println!(
        "Signatures  : {}",
        if state.signatures_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    if state.server_setting_ignored {
        println!("WARNING     : the configured server setting is ignored by the host");
    }

    println!();
    println!(
        "{:<40} {:>8}  {:<20} {:<20} {:<20} {}",
        "COLLECTION", "RECORDS", "REMOTE", "LOCAL", "LAST CHECK", "STATUS"
    );
    for status in &state.collections {
        print_row(status);
    }

    if !state.history.is_empty() {
        println!();
        println!("Recent syncs:");
        for entry in state.history.iter().take(10) {
            let outcome = match entry.outcome {
                SyncOutcome::Success => "success",
                SyncOutcome::Failed => "failed",
            };
            println!(
                "  {}  {:<7} {}",
                entry.at.format(TIME_FORMAT),
                outcome,
                entry.detail
            );
        }
    }
}

fn print_row(status: &SyncStatus) {
    let verdict = if status.up_to_date {
        "up-to-date"
    } else {
        "out-of-sync"
    };
    println!(
        "{:<40} {:>8}  {:<20} {:<20} {:<20} {}",
        status.collection.to_string(),
        status.record_count,
        human_millis(Some(status.remote_timestamp)),
        human_millis(status.local_timestamp),
        human_instant(status.last_checked_at),
        verdict
    );
}
