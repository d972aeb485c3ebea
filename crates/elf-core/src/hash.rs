//! Fast hash map and hash set type aliases.
//!
//! The registry and the parsers key everything by short tag-name strings, a
//! case the Fx hash algorithm from `rustc-hash` handles faster than the
//! standard library's SipHash. No denial-of-service resistance is needed since
//! keys come from the static registry table and local source files.

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;
