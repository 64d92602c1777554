//! Error types for category lookup and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the namespace builder. Building a namespace itself
/// cannot fail.
#[derive(Debug, Error)]
pub enum NamespaceError {
    /// A category name did not match any known category.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// The config file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for `NamespaceConfig`.
    #[error("invalid namespace config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
