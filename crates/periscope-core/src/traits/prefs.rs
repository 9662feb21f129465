//! The configuration store: typed key-value preferences.

use serde::{Deserialize, Serialize};

use crate::errors::PeriscopeResult;

/// A preference value. Untagged so a JSON prefs file reads naturally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Text(String),
}

/// Key-value store for environment selection and override detection.
/// Getters return `None` for keys the user never set, which is what
/// distinguishes a default from a manual override.
pub trait PrefStore: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_string(&self, key: &str, value: &str) -> PeriscopeResult<()>;
    fn set_bool(&self, key: &str, value: bool) -> PeriscopeResult<()>;
    fn clear(&self, key: &str) -> PeriscopeResult<()>;

    /// Whether the user explicitly set this key.
    fn has_user_value(&self, key: &str) -> bool {
        self.get_string(key).is_some() || self.get_bool(key).is_some()
    }
}
