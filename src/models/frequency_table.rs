// src/models/frequency_table.rs
use indexmap::IndexMap;
use std::hash::Hash;

/// A counter that remembers the order in which keys were first seen.
///
/// Ranking sorts the entries by count with a stable sort, so equal counts
/// keep their first-seen order instead of falling back to key order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: IndexMap<K, u64>,
}

impl<K> Default for FrequencyTable<K> {
    #[inline]
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<K: Eq + Hash> FrequencyTable<K> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `key`.
    #[inline]
    pub fn add(&mut self, key: K) {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[inline]
    pub fn add_all<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.add(key);
        }
    }

    /// Count for `key`, zero when it was never seen.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }

    /// Entries in first-insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// The `n` highest counts, descending, ties in first-insertion order.
    #[inline]
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&K, u64)> {
        let mut ranked: Vec<(&K, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
