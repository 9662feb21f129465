//! The closed table of recognized environments and their endpoints.

use serde::{Deserialize, Serialize};

use crate::constants::{
    PUSH_STAGE, SERVER_DEV, SERVER_LOCAL, SERVER_PROD, SERVER_STAGE,
};
use crate::errors::{PeriscopeError, PeriscopeResult};
use crate::models::{Environment, EnvironmentName};

/// Endpoints of one named environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentEndpoints {
    /// Server root, without the API version path segment.
    pub server_root: String,
    /// Push broker endpoint to activate when switching here, if any.
    #[serde(default)]
    pub push_endpoint: Option<String>,
}

impl EnvironmentEndpoints {
    fn new(server_root: &str, push_endpoint: Option<&str>) -> Self {
        Self {
            server_root: server_root.to_string(),
            push_endpoint: push_endpoint.map(str::to_string),
        }
    }
}

/// The recognized environments. Deployments override individual entries via
/// a TOML file; anything not in this table classifies as `custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentTable {
    pub prod: EnvironmentEndpoints,
    pub stage: EnvironmentEndpoints,
    pub dev: EnvironmentEndpoints,
    pub local: EnvironmentEndpoints,
}

impl Default for EnvironmentTable {
    fn default() -> Self {
        Self {
            prod: EnvironmentEndpoints::new(SERVER_PROD, None),
            stage: EnvironmentEndpoints::new(SERVER_STAGE, Some(PUSH_STAGE)),
            dev: EnvironmentEndpoints::new(SERVER_DEV, None),
            local: EnvironmentEndpoints::new(SERVER_LOCAL, None),
        }
    }
}

impl EnvironmentTable {
    /// Parse a table from TOML. Missing entries keep their defaults.
    pub fn from_toml(text: &str) -> PeriscopeResult<Self> {
        toml::from_str(text).map_err(|e| PeriscopeError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Endpoints for a named environment. `None` for `Custom`, which has no
    /// configured endpoints by definition.
    pub fn endpoints(&self, name: EnvironmentName) -> Option<&EnvironmentEndpoints> {
        match name {
            EnvironmentName::Prod => Some(&self.prod),
            EnvironmentName::Stage => Some(&self.stage),
            EnvironmentName::Dev => Some(&self.dev),
            EnvironmentName::Local => Some(&self.local),
            EnvironmentName::Custom => None,
        }
    }

    /// Classify a resolved server URL into a named environment. The URL
    /// carries an API version path segment, so matching is by prefix.
    pub fn classify(&self, server_url: &str, preview: bool) -> Environment {
        let name = if server_url.starts_with(&self.prod.server_root) {
            EnvironmentName::Prod
        } else if server_url.starts_with(&self.stage.server_root) {
            EnvironmentName::Stage
        } else if server_url.starts_with(&self.dev.server_root) {
            EnvironmentName::Dev
        } else if server_url.starts_with(&self.local.server_root) {
            EnvironmentName::Local
        } else {
            EnvironmentName::Custom
        };
        Environment::new(name, preview)
    }
}
