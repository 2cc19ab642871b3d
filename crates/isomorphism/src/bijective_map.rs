//! Finite partial one-to-one correspondence with inverse lookup.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A partial bijection between a domain `K` and a range `V`.
///
/// `forward[k] == v` iff `inverse[v] == k` at all times. [`BijectiveMap::put`]
/// does not validate: callers check [`BijectiveMap::conflicts_with`] first.
#[derive(Clone)]
pub struct BijectiveMap<K, V> {
    forward: HashMap<K, V>,
    inverse: HashMap<V, K>,
}

impl<K, V> Default for BijectiveMap<K, V> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            inverse: HashMap::new(),
        }
    }
}

impl<K, V> BijectiveMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `k -> v` in both directions.
    pub fn put(&mut self, k: K, v: V) {
        self.inverse.insert(v.clone(), k.clone());
        self.forward.insert(k, v);
    }

    #[must_use]
    pub fn get(&self, k: &K) -> Option<&V> {
        self.forward.get(k)
    }

    /// The domain element mapped to `v`.
    #[must_use]
    pub fn get_inverse(&self, v: &V) -> Option<&K> {
        self.inverse.get(v)
    }

    /// Remove `k` and the inverse entry of its image.
    pub fn remove(&mut self, k: &K) -> Option<V> {
        let v = self.forward.remove(k)?;
        self.inverse.remove(&v);
        Some(v)
    }

    #[must_use]
    pub fn contains_key(&self, k: &K) -> bool {
        self.forward.contains_key(k)
    }

    #[must_use]
    pub fn contains_value(&self, v: &V) -> bool {
        self.inverse.contains_key(v)
    }

    /// True if `k` already maps to something other than `v`, or `v` is
    /// already the image of something other than `k`.
    #[must_use]
    pub fn conflicts_with(&self, k: &K, v: &V) -> bool {
        self.forward.get(k).is_some_and(|image| image != v)
            || self.inverse.get(v).is_some_and(|source| source != k)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

// The inverse is determined by the forward map.
impl<K: Eq + Hash, V: Eq + Hash> PartialEq for BijectiveMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Eq for BijectiveMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BijectiveMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_and_inverse() {
        let mut m = BijectiveMap::new();
        m.put("x", 1);
        m.put("y", 2);
        assert_eq!(m.get(&"x"), Some(&1));
        assert_eq!(m.get_inverse(&2), Some(&"y"));
        assert!(m.contains_key(&"x"));
        assert!(m.contains_value(&1));
        assert!(!m.contains_value(&3));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn remove_drops_both_directions() {
        let mut m = BijectiveMap::new();
        m.put("x", 1);
        assert_eq!(m.remove(&"x"), Some(1));
        assert!(!m.contains_key(&"x"));
        assert!(!m.contains_value(&1));
        assert!(m.is_empty());
        assert_eq!(m.remove(&"x"), None);
    }

    #[test]
    fn conflicts() {
        let mut m = BijectiveMap::new();
        m.put("x", 1);
        assert!(!m.conflicts_with(&"x", &1));
        assert!(m.conflicts_with(&"x", &2));
        assert!(m.conflicts_with(&"y", &1));
        assert!(!m.conflicts_with(&"y", &2));
    }

    #[test]
    fn put_same_pair_twice_is_idempotent() {
        let mut m = BijectiveMap::new();
        m.put("x", 1);
        m.put("x", 1);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&"x"), Some(&1));
    }
}
