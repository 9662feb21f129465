//! Wire types for the settings server's changeset endpoints.
//!
//! Record payloads are opaque JSON; only the envelope fields the panel
//! needs are modeled.

use serde::{Deserialize, Serialize};

/// Response of a `GET .../changeset` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangesetResponse<R> {
    /// Collection metadata (signature material lives here; opaque to us).
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// The collection's current timestamp, in milliseconds since epoch.
    pub timestamp: i64,
    pub changes: Vec<R>,
}

/// One record of an ordinary collection changeset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangesetRecord {
    pub id: String,
    pub last_modified: i64,
    /// The remaining record fields, kept verbatim.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl ChangesetRecord {
    /// Rebuild the full record payload, id and timestamp included.
    pub fn payload(&self) -> serde_json::Value {
        let mut fields = self.fields.clone();
        fields.insert("id".into(), serde_json::Value::String(self.id.clone()));
        fields.insert("last_modified".into(), self.last_modified.into());
        serde_json::Value::Object(fields)
    }
}

/// One entry of the changes monitor: a pointer to a collection that has
/// published at least one revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorEntry {
    pub id: String,
    pub bucket: String,
    pub collection: String,
    pub last_modified: i64,
}
