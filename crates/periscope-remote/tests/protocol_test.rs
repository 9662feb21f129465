use periscope_remote::protocol::{ChangesetRecord, ChangesetResponse, MonitorEntry};

#[test]
fn monitor_changeset_deserializes() {
    let payload = r#"{
        "metadata": {},
        "timestamp": 1700000001234,
        "changes": [
            {
                "id": "abc-1",
                "bucket": "main",
                "collection": "search-config",
                "last_modified": 1700000001234
            },
            {
                "id": "abc-2",
                "bucket": "main-preview",
                "collection": "search-config",
                "last_modified": 1700000009999
            }
        ]
    }"#;

    let monitor: ChangesetResponse<MonitorEntry> =
        serde_json::from_str(payload).expect("valid monitor changeset");
    assert_eq!(monitor.timestamp, 1_700_000_001_234);
    assert_eq!(monitor.changes.len(), 2);
    assert_eq!(monitor.changes[0].bucket, "main");
    assert_eq!(monitor.changes[1].bucket, "main-preview");
}

#[test]
fn monitor_changeset_without_metadata_still_parses() {
    let payload = r#"{ "timestamp": 42, "changes": [] }"#;
    let monitor: ChangesetResponse<MonitorEntry> =
        serde_json::from_str(payload).expect("metadata is optional");
    assert_eq!(monitor.timestamp, 42);
    assert!(monitor.changes.is_empty());
}

#[test]
fn collection_changeset_keeps_unknown_fields() {
    let payload = r#"{
        "metadata": { "signature": { "signature": "…", "x5u": "…" } },
        "timestamp": 1000,
        "changes": [
            {
                "id": "rec-1",
                "last_modified": 900,
                "enabled": true,
                "filter_expression": "env.channel == 'release'"
            }
        ]
    }"#;

    let changeset: ChangesetResponse<ChangesetRecord> =
        serde_json::from_str(payload).expect("valid changeset");
    let record = &changeset.changes[0];
    assert_eq!(record.id, "rec-1");
    assert_eq!(record.last_modified, 900);
    assert_eq!(
        record.fields.get("enabled"),
        Some(&serde_json::Value::Bool(true))
    );
}

#[test]
fn record_payload_round_trips_id_and_timestamp() {
    let record = ChangesetRecord {
        id: "rec-9".into(),
        last_modified: 777,
        fields: serde_json::from_str(r#"{ "enabled": false }"#).expect("fields"),
    };

    let payload = record.payload();
    assert_eq!(payload["id"], "rec-9");
    assert_eq!(payload["last_modified"], 777);
    assert_eq!(payload["enabled"], false);
}
