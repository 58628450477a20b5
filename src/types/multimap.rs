use std::collections::HashSet;
use std::hash::Hash;

/// Shared contract for maps that associate each key with a collection of
/// values. A key that is present always holds a non-empty bucket: `insert`
/// creates buckets lazily and `remove` takes the whole bucket out, so no
/// operation can leave an empty one behind.
pub trait MultiMap<K: Eq + Hash, V: Eq + Hash> {
    /// The per-key backing collection.
    type Bucket;

    /// Empties the map of all keys and values.
    fn clear(&mut self);

    fn contains_key(&self, key: &K) -> bool;

    /// Scans every bucket, O(total values).
    fn contains_value(&self, value: &V) -> bool;

    /// Every `(key, value)` pair in the map, flattened across keys.
    fn entries(&self) -> Vec<(&K, &V)>;

    /// The values stored under `key`, or `None` if the key is unknown.
    /// The reference is a read view, not a handle for mutation.
    fn get(&self, key: &K) -> Option<&Self::Bucket>;

    /// Adds a value under `key`, creating the bucket if the key is new.
    fn insert(&mut self, key: K, value: V);

    fn is_empty(&self) -> bool;

    fn keys(&self) -> HashSet<&K>;

    /// Total value count across all keys, not the key count.
    fn len(&self) -> usize;

    /// Removes `key`, returning the values it held.
    fn remove(&mut self, key: &K) -> Option<Self::Bucket>;

    /// Every value in the map, flattened across keys.
    fn values(&self) -> Vec<&V>;

    /// Merges `(key, value)` pairs entry by entry, so the duplicate policy of
    /// this map governs rather than the source's. Any map or multimap that
    /// iterates as pairs can feed it.
    fn extend_entries<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        Self: Sized,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}
