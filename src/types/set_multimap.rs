use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::multimap::MultiMap;

/// A multimap backed by a `HashSet` per key. Re-inserting an equal value
/// under the same key is a no-op, and retrieval order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMultiMap<K: Eq + Hash, V: Eq + Hash> {
    map: HashMap<K, HashSet<V>>,
}

impl<K: Eq + Hash, V: Eq + Hash> SetMultiMap<K, V> {
    pub fn new() -> Self {
        SetMultiMap::default()
    }

    /// Flattened iterator over every `(key, value)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map
            .iter()
            .flat_map(|(key, bucket)| bucket.iter().map(move |value| (key, value)))
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Default for SetMultiMap<K, V> {
    fn default() -> Self {
        SetMultiMap {
            map: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: Eq + Hash> MultiMap<K, V> for SetMultiMap<K, V> {
    type Bucket = HashSet<V>;

    fn clear(&mut self) {
        self.map.clear();
    }

    fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn contains_value(&self, value: &V) -> bool {
        self.map.values().any(|bucket| bucket.contains(value))
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect_vec()
    }

    fn get(&self, key: &K) -> Option<&HashSet<V>> {
        self.map.get(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.map.entry(key).or_default().insert(value);
    }

    fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn keys(&self) -> HashSet<&K> {
        self.map.keys().collect()
    }

    fn len(&self) -> usize {
        self.map.values().map(HashSet::len).sum()
    }

    fn remove(&mut self, key: &K) -> Option<HashSet<V>> {
        self.map.remove(key)
    }

    fn values(&self) -> Vec<&V> {
        self.map.values().flatten().collect_vec()
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Extend<(K, V)> for SetMultiMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.extend_entries(iter);
    }
}

impl<K: Eq + Hash, V: Eq + Hash> FromIterator<(K, V)> for SetMultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SetMultiMap::new();
        map.extend_entries(iter);
        map
    }
}

impl<K: Eq + Hash + Display, V: Eq + Hash + Display> Display for SetMultiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (key, bucket) in &self.map {
            writeln!(f, "\t{}: {}", key, bucket.iter().join(", "))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod set_multimap_tests {
    use std::collections::HashSet;

    use crate::types::{MultiMap, SetMultiMap};

    #[test]
    fn test_insert_is_idempotent_per_value() {
        let mut map = SetMultiMap::new();
        map.insert("k", 1);
        map.insert("k", 1);
        map.insert("k", 2);

        assert_eq!(2, map.len());
        assert_eq!(
            Some(&HashSet::from_iter([1, 2])),
            map.get(&"k")
        );
    }

    #[test]
    fn test_same_value_under_different_keys() {
        let mut map = SetMultiMap::new();
        map.insert("a", 1);
        map.insert("b", 1);

        assert_eq!(2, map.len());
        assert!(map.contains_value(&1));
    }

    #[test]
    fn test_remove_returns_bucket() {
        let mut map = SetMultiMap::new();
        map.insert("a", 1);
        map.insert("a", 2);

        assert_eq!(Some(HashSet::from_iter([1, 2])), map.remove(&"a"));
        assert_eq!(None, map.remove(&"a"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_iterator_collapses_duplicates() {
        let map: SetMultiMap<_, _> = vec![("a", 1), ("a", 1), ("a", 2)].into_iter().collect();

        assert_eq!(2, map.len());
    }

    #[test]
    fn test_display_single_value() {
        let mut map = SetMultiMap::new();
        map.insert("a", 1);

        assert_eq!("{\n\ta: 1\n}", map.to_string());
    }
}
