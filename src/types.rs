//! Container aliases used throughout the crate.

type BuildHasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Hash map preserving insertion order.
pub type Map<K, V> = indexmap::IndexMap<K, V, BuildHasher>;

/// Hash set preserving insertion order.
pub type Set<T> = indexmap::IndexSet<T, BuildHasher>;
