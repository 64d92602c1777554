//! Key categories and their canonical names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamespaceError;


/// One prefix within a [`DotmNamespace`](super::DotmNamespace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Category {
    /// dotm::queue — pending work, always live
    Queue,
    /// dotm::history — ledger of recorded history keys, always live
    History,
    /// dotm::config — runtime configuration, always live
    Config,
    /// dotm::state — current system state, always live
    State,
    /// discovered nodes
    Nodes,
    /// connections between nodes
    Connections,
    /// services running on nodes
    Services,
    /// resolver cache
    Resolver,
    /// health-check results, parent of the two below
    Checks,
    /// per-node check results
    NodesChecks,
    /// per-service check results
    ServicesChecks,
}

impl Category {
    /// Every category, in the order the namespace declares them.
    pub const ALL: [Category; 11] = [
        Category::Queue,
        Category::History,
        Category::Config,
        Category::State,
        Category::Nodes,
        Category::Connections,
        Category::Services,
        Category::Resolver,
        Category::Checks,
        Category::NodesChecks,
        Category::ServicesChecks,
    ];

    /// Canonical name, identical to the namespace field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Queue => "queue",
            Category::History => "history",
            Category::Config => "config",
            Category::State => "state",
            Category::Nodes => "nodes",
            Category::Connections => "connections",
            Category::Services => "services",
            Category::Resolver => "resolver",
            Category::Checks => "checks",
            Category::NodesChecks => "nodes_checks",
            Category::ServicesChecks => "services_checks",
        }
    }

    /// True if this category lives under the history prefix.
    ///
    /// Queue, history, config and state always address current values, so
    /// a history key never applies to them.
    pub fn is_history_scoped(&self) -> bool {
        !matches!(
            self,
            Category::Queue | Category::History | Category::Config | Category::State
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_category(s)
    }
}

impl TryFrom<String> for Category {
    type Error = NamespaceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        resolve_category(&s)
    }
}


/// Parse a category name. Accepts `-` in place of `_`.
pub fn resolve_category(s: &str) -> Result<Category, NamespaceError> {
    let normalized = s.trim().replace('-', "_");
    Category::ALL
        .iter()
        .copied()
        .find(|c| c.as_str() == normalized)
        .ok_or_else(|| NamespaceError::UnknownCategory(s.to_string()))
}
