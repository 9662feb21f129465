//! Preference stores: in-memory for tests and embedding, JSON-file backed
//! for the standalone panel.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use periscope_core::errors::{PeriscopeResult, StorageError};
use periscope_core::traits::{PrefStore, PrefValue};

type PrefMap = HashMap<String, PrefValue>;

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: RwLock<PrefMap>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get_string(&self, key: &str) -> Option<String> {
        match self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            Some(PrefValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn set_string(&self, key: &str, value: &str) -> PeriscopeResult<()> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), PrefValue::Text(value.to_string()));
        Ok(())
    }

    fn set_bool(&self, key: &str, value: bool) -> PeriscopeResult<()> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), PrefValue::Bool(value));
        Ok(())
    }

    fn clear(&self, key: &str) -> PeriscopeResult<()> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// JSON-file backed preference store. Every mutation rewrites the file
/// atomically (write to a temp file, then rename over the original).
#[derive(Debug)]
pub struct JsonPrefs {
    path: PathBuf,
    values: RwLock<PrefMap>,
}

impl JsonPrefs {
    /// Load preferences from the given file, or start empty if it does not
    /// exist yet.
    pub fn load(path: impl Into<PathBuf>) -> PeriscopeResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;
            serde_json::from_str(&text).map_err(|e| StorageError::Prefs {
                message: format!("{}: {e}", path.display()),
            })?
        } else {
            PrefMap::new()
        };
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    fn persist(&self, values: &PrefMap) -> PeriscopeResult<()> {
        let text = serde_json::to_string_pretty(values).map_err(|e| StorageError::Prefs {
            message: e.to_string(),
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| StorageError::Io {
            message: e.to_string(),
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Io {
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn mutate(&self, f: impl FnOnce(&mut PrefMap)) -> PeriscopeResult<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut values);
        self.persist(&values)
    }
}

impl PrefStore for JsonPrefs {
    fn get_string(&self, key: &str) -> Option<String> {
        match self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            Some(PrefValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn set_string(&self, key: &str, value: &str) -> PeriscopeResult<()> {
        self.mutate(|values| {
            values.insert(key.to_string(), PrefValue::Text(value.to_string()));
        })
    }

    fn set_bool(&self, key: &str, value: bool) -> PeriscopeResult<()> {
        self.mutate(|values| {
            values.insert(key.to_string(), PrefValue::Bool(value));
        })
    }

    fn clear(&self, key: &str) -> PeriscopeResult<()> {
        self.mutate(|values| {
            values.remove(key);
        })
    }
}
