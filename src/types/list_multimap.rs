use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::multimap::MultiMap;

/// A multimap backed by a `Vec` per key. Duplicate values under one key are
/// kept, and each bucket retains its insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMultiMap<K: Eq + Hash, V> {
    map: HashMap<K, Vec<V>>,
}

impl<K: Eq + Hash, V> ListMultiMap<K, V> {
    pub fn new() -> Self {
        ListMultiMap::default()
    }

    /// Flattened iterator over every `(key, value)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map
            .iter()
            .flat_map(|(key, bucket)| bucket.iter().map(move |value| (key, value)))
    }
}

impl<K: Eq + Hash, V> Default for ListMultiMap<K, V> {
    fn default() -> Self {
        ListMultiMap {
            map: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: Eq + Hash> MultiMap<K, V> for ListMultiMap<K, V> {
    type Bucket = Vec<V>;

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

    fn get(&self, key: &K) -> Option<&Vec<V>> {
        self.map.get(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.map.entry(key).or_default().push(value);
    }

    fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn keys(&self) -> HashSet<&K> {
        self.map.keys().collect()
    }

    fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    fn remove(&mut self, key: &K) -> Option<Vec<V>> {
        self.map.remove(key)
    }

    fn values(&self) -> Vec<&V> {
        self.map.values().flatten().collect_vec()
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Extend<(K, V)> for ListMultiMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.extend_entries(iter);
    }
}

impl<K: Eq + Hash, V: Eq + Hash> FromIterator<(K, V)> for ListMultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ListMultiMap::new();
        map.extend_entries(iter);
        map
    }
}

impl<K: Eq + Hash + Display, V: Display> Display for ListMultiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (key, bucket) in &self.map {
            writeln!(f, "\t{}: {}", key, bucket.iter().join(", "))?;
        }
        write!(f, "}}")
    }
}
