//! The DOTM namespace: every key prefix for one view of the store.
//!
//! ```text
//! dotm::queue                      live
//! dotm::history                    live
//! dotm::config                     live
//! dotm::state                      live
//! <history_key>::dotm::nodes       scoped when a history key is given
//! <history_key>::dotm::checks::nodes
//! ```

use serde::Serialize;

use super::category::Category;


/// Base prefix shared by every key.
pub const PREFIX: &str = "dotm";

/// Separator between key path components.
pub const SEPARATOR: &str = "::";

/// Version of the key layout. Bump whenever a prefix changes.
pub const VERSION: &str = "0.2.0";


/// Key prefixes for one view of the DOTM store.
///
/// All fields are computed once in [`DotmNamespace::new`] and never change.
/// Serializes to a flat map keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DotmNamespace {
    #[serde(skip)]
    history_key: Option<String>,

    prefix: String,

    queue: String,
    history: String,
    config: String,
    state: String,

    history_prefix: String,

    nodes: String,
    connections: String,
    services: String,
    resolver: String,

    checks: String,
    nodes_checks: String,
    services_checks: String,
}

impl DotmNamespace {
    /// Build the namespace, optionally scoped to `history_key`.
    ///
    /// The key is used verbatim. An empty key counts as no key.
    pub fn new(history_key: Option<&str>) -> Self {
        let history_key = history_key.filter(|k| !k.is_empty());
        let prefix = PREFIX.to_string();

        // Never history prefixed: these always address current values.
        let queue = join(&prefix, "queue");
        let history = join(&prefix, "history");
        let config = join(&prefix, "config");
        let state = join(&prefix, "state");

        let history_prefix = match history_key {
            Some(key) => join(key, &prefix),
            None => prefix.clone(),
        };

        let nodes = join(&history_prefix, "nodes");
        let connections = join(&history_prefix, "connections");
        let services = join(&history_prefix, "services");
        let resolver = join(&history_prefix, "resolver");

        let checks = join(&history_prefix, "checks");
        let nodes_checks = join(&checks, "nodes");
        let services_checks = join(&checks, "services");

        DotmNamespace {
            history_key: history_key.map(str::to_string),
            prefix,
            queue,
            history,
            config,
            state,
            history_prefix,
            nodes,
            connections,
            services,
            resolver,
            checks,
            nodes_checks,
            services_checks,
        }
    }

    /// The live namespace, with no history scope.
    pub fn live() -> Self {
        Self::new(None)
    }

    /// The history key this namespace is scoped to, if any.
    pub fn history_key(&self) -> Option<&str> {
        self.history_key.as_deref()
    }

    pub fn is_history_scoped(&self) -> bool {
        self.history_key.is_some()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// `prefix`, or `<history_key>::<prefix>` when scoped.
    pub fn history_prefix(&self) -> &str {
        &self.history_prefix
    }

    pub fn nodes(&self) -> &str {
        &self.nodes
    }

    pub fn connections(&self) -> &str {
        &self.connections
    }

    pub fn services(&self) -> &str {
        &self.services
    }

    pub fn resolver(&self) -> &str {
        &self.resolver
    }

    pub fn checks(&self) -> &str {
        &self.checks
    }

    pub fn nodes_checks(&self) -> &str {
        &self.nodes_checks
    }

    pub fn services_checks(&self) -> &str {
        &self.services_checks
    }

    /// Look up a prefix by category.
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Queue => &self.queue,
            Category::History => &self.history,
            Category::Config => &self.config,
            Category::State => &self.state,
            Category::Nodes => &self.nodes,
            Category::Connections => &self.connections,
            Category::Services => &self.services,
            Category::Resolver => &self.resolver,
            Category::Checks => &self.checks,
            Category::NodesChecks => &self.nodes_checks,
            Category::ServicesChecks => &self.services_checks,
        }
    }

    /// `(category, prefix)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Default for DotmNamespace {
    fn default() -> Self {
        Self::live()
    }
}


fn join(head: &str, tail: &str) -> String {
    let mut out = String::with_capacity(head.len() + SEPARATOR.len() + tail.len());
    out.push_str(head);
    out.push_str(SEPARATOR);
    out.push_str(tail);
    out
}
