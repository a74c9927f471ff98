//! Cache behaviour options with TOML support.
//!
//! Options serialize to/from TOML so an application can ship them next to
//! its other renderer settings. All fields use `#[serde(default)]`, so a
//! partial file only overrides what it names.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StateCacheError;

/// Tunables for a [`StateCache`](crate::StateCache).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "State Cache")]
#[serde(default)]
pub struct CacheOptions {
    /// Elide calls whose value matches the cached one. When off, every
    /// call is forwarded but the mirror is still kept current.
    #[schemars(title = "Caching")]
    pub caching: bool,
    /// Poll the driver for an error after each forwarded call and log it.
    #[schemars(title = "Check Driver Errors")]
    pub check_errors: bool,
    /// Log every forwarded call at `trace` level.
    #[schemars(title = "Trace Calls")]
    pub trace_calls: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            caching: true,
            check_errors: false,
            trace_calls: false,
        }
    }
}

impl CacheOptions {
    /// Options that forward every call (no elision).
    #[must_use]
    pub fn passthrough() -> Self {
        Self {
            caching: false,
            ..Self::default()
        }
    }

    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CacheOptions)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, StateCacheError> {
        toml::from_str(content)
            .map_err(|e| StateCacheError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StateCacheError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StateCacheError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StateCacheError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(StateCacheError::Io)
    }
}
