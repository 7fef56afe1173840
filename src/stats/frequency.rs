//! Value counting and mode selection.

use std::collections::BTreeMap;

/// Occurrence counts for the values of one column.
///
/// Keys are kept ordered so ties always resolve to the lowest value, both for
/// [`mode`](Self::mode) and for the ordering of [`by_count`](Self::by_count).
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: BTreeMap<K, usize>,
}

impl<K: Ord> FrequencyTable<K> {
    /// Count every value yielded by `values`.
    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Most frequent value and its count; lowest value wins ties.
    pub fn mode(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, &count) in &self.counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((key, count));
            }
        }
        best
    }

    /// Highest count among all distinct values.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Total number of counted values.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Values sorted by descending count, ties by ascending value.
    pub fn by_count(&self) -> Vec<(&K, usize)> {
        let mut entries: Vec<(&K, usize)> = self.counts.iter().map(|(k, &c)| (k, c)).collect();
        // Stable sort keeps ascending key order within equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Ord> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
