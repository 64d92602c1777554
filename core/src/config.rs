//! Namespace settings: which history key, if any, to scope to.
//!
//! Settings come from a YAML file, the `DOTM_HISTORY_KEY` environment
//! variable, or both merged.

use std::env::VarError;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::NamespaceError;
use crate::namespace::DotmNamespace;


/// Environment variable holding the history key.
pub const HISTORY_KEY_ENV: &str = "DOTM_HISTORY_KEY";


/// Settings for building a [`DotmNamespace`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceConfig {
    /// History scope. Absent or empty means live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_key: Option<String>,
}

impl NamespaceConfig {
    pub fn with_history_key(key: impl Into<String>) -> Self {
        NamespaceConfig {
            history_key: Some(key.into()),
        }
    }

    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self, NamespaceError> {
        let content = std::fs::read_to_string(path).map_err(|source| NamespaceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), history_key = ?config.history_key, "loaded namespace config");
        Ok(config)
    }

    /// Parse settings from a YAML string. An empty document is the default.
    pub fn parse(content: &str) -> Result<Self, NamespaceError> {
        if content.trim().is_empty() {
            return Ok(NamespaceConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Settings from `DOTM_HISTORY_KEY`. Unset, empty or non-UTF-8 gives the
    /// default; non-UTF-8 is logged.
    pub fn from_env() -> Self {
        let history_key = match std::env::var(HISTORY_KEY_ENV) {
            Ok(key) => Some(key).filter(|k| !k.is_empty()),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                warn!(value = ?raw, "{} is not valid UTF-8, ignoring it", HISTORY_KEY_ENV);
                None
            }
        };
        if let Some(key) = &history_key {
            debug!(history_key = %key, "history key from environment");
        }
        NamespaceConfig { history_key }
    }

    /// Overlay `other` on top of `self`; a non-empty key in `other` wins.
    pub fn merge(self, other: NamespaceConfig) -> Self {
        match other.history_key.filter(|k| !k.is_empty()) {
            Some(key) => {
                debug!(history_key = %key, "history key overridden");
                NamespaceConfig {
                    history_key: Some(key),
                }
            }
            None => self,
        }
    }

    /// Build the namespace these settings describe.
    pub fn namespace(&self) -> DotmNamespace {
        DotmNamespace::new(self.history_key.as_deref())
    }
}
