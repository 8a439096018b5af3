//! The hash-map used for edge bookkeeping.

pub use std::collections::hash_map::Entry;

/// The hash-map type used throughout this crate.
pub type HashMap<K, V> = std::collections::HashMap<K, V>;
