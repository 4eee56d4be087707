// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Bidirectional lookup table.
//!
//! Backs the small fixed tables (letter offsets, accidental deltas,
//! interval sizes) where both directions of the mapping are needed.

use std::hash::Hash;

use indexmap::IndexMap;

/// A map that can be queried from key to value and from value to key.
///
/// Built once from an ordered list of pairs and immutable afterwards.
/// Duplicate keys or values overwrite earlier entries, and every iterator
/// yields entries in insertion order.
#[derive(Debug, Clone)]
pub struct TwoWayMap<K, V> {
    forward: IndexMap<K, V>,
    reverse: IndexMap<V, K>,
}

impl<K, V> TwoWayMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Create a map from ordered `(key, value)` pairs
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut forward = IndexMap::new();
        let mut reverse = IndexMap::new();
        // an existing key keeps its first position and takes the new value
        for (key, value) in pairs {
            forward.insert(key.clone(), value.clone());
            reverse.insert(value, key);
        }
        Self { forward, reverse }
    }

    /// Get the value stored for a key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    /// Get the key stored for a value
    pub fn get_rev(&self, value: &V) -> Option<&K> {
        self.reverse.get(value)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Keys of the key -> value map
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.forward.keys()
    }

    /// Values of the key -> value map
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.forward.values()
    }

    /// Entries of the key -> value map
    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.forward.iter()
    }

    /// Keys of the value -> key map
    pub fn rev_keys(&self) -> impl Iterator<Item = &V> + '_ {
        self.reverse.keys()
    }

    /// Values of the value -> key map
    pub fn rev_values(&self) -> impl Iterator<Item = &K> + '_ {
        self.reverse.values()
    }

    /// Entries of the value -> key map
    pub fn rev_entries(&self) -> impl Iterator<Item = (&V, &K)> + '_ {
        self.reverse.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for TwoWayMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
