//! The closed set of named server targets and their preview variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PeriscopeError;

/// Named server targets. `Custom` is synthetic: it is assigned when the
/// resolved server root matches none of the known environments, and is never
/// accepted as a switch target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentName {
    Prod,
    Stage,
    Dev,
    Local,
    Custom,
}

impl EnvironmentName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Stage => "stage",
            Self::Dev => "dev",
            Self::Local => "local",
            Self::Custom => "custom",
        }
    }
}

/// An active environment: a named target plus its preview variant flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: EnvironmentName,
    pub preview: bool,
}

impl Environment {
    pub fn new(name: EnvironmentName, preview: bool) -> Self {
        Self { name, preview }
    }

    /// Human-facing label, e.g. `"stage-preview"`.
    pub fn label(&self) -> String {
        if self.preview {
            format!("{}-preview", self.name.as_str())
        } else {
            self.name.as_str().to_string()
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Environment {
    type Err = PeriscopeError;

    /// Parses `"stage"`, `"stage-preview"`, etc. Rejects `"custom"` and any
    /// unrecognized name — switching to an unknown target must fail before
    /// any preference is touched.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, preview) = match s.strip_suffix("-preview") {
            Some(base) => (base, true),
            None => (s, false),
        };
        let name = match base {
            "prod" => EnvironmentName::Prod,
            "stage" => EnvironmentName::Stage,
            "dev" => EnvironmentName::Dev,
            "local" => EnvironmentName::Local,
            _ => {
                return Err(PeriscopeError::InvalidEnvironment {
                    name: s.to_string(),
                })
            }
        };
        Ok(Environment { name, preview })
    }
}

/// Server API version, detected from the server root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Detect the version from a resolved server root, e.g.
    /// `https://settings.example/v2` reports `V2`.
    pub fn from_server_url(url: &str) -> Self {
        if url.trim_end_matches('/').ends_with("v2") {
            Self::V2
        } else {
            Self::V1
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            other => Err(format!("unknown api version: {other}")),
        }
    }
}
