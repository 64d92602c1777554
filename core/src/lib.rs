//! DOTM key namespace layout.
//!
//! Computes the Redis key prefixes the DOTM monitoring system uses to keep
//! its data categories apart in a shared store. Live data (queue, history
//! ledger, config, state) always sits under `dotm::`. Node, connection,
//! service, resolver and check data can additionally be scoped to a history
//! key, giving `<history_key>::dotm::...`.

pub mod config;
pub mod error;
pub mod namespace;

pub use config::NamespaceConfig;
pub use error::NamespaceError;
pub use namespace::{resolve_category, Category, DotmNamespace, PREFIX, SEPARATOR, VERSION};
