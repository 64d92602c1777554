//! Namespace builder and category lookup.
//!
//! A [`DotmNamespace`] holds every key prefix for one view of the store,
//! either live or scoped to a history key. [`Category`] names each prefix so
//! callers can look them up by name.

pub mod builder;
pub mod category;

pub use builder::{DotmNamespace, PREFIX, SEPARATOR, VERSION};
pub use category::{resolve_category, Category};
