//! Grouping results produced by [`group_by`](crate::query::group_by).
//!
//! A `Grouping` maps each derived key to the records that produced it. Keys
//! iterate in order of first occurrence in the input and every group keeps
//! the relative order of its records. A key is only ever present with at
//! least one record behind it.

use std::fmt;
use std::hash::{BuildHasherDefault, Hash};

use indexmap::IndexMap;
use itertools::Itertools;
use rustc_hash::FxHasher;
use serde::Serialize;

/// Insertion-ordered map hashed with `FxHasher`.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Grouping<K: Hash + Eq, V> {
    groups: FxIndexMap<K, Vec<V>>,
}

impl<K: Hash + Eq, V> Grouping<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Grouping {
            groups: FxIndexMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Appends `value` to the group for `key`, opening the group on first sight.
    pub(crate) fn push(&mut self, key: K, value: V) {
        self.groups.entry(key).or_default().push(value);
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(key, group)| (key, group.as_slice()))
    }

    /// Number of records per key (GROUP BY ... COUNT(*)).
    pub fn group_sizes(&self) -> FxIndexMap<K, usize>
    where
        K: Clone,
    {
        self.map_values(|group| group.len())
    }

    /// Applies `projection` to every group, keeping keys and their order.
    pub fn map_values<U, F>(&self, projection: F) -> FxIndexMap<K, U>
    where
        K: Clone,
        F: Fn(&[V]) -> U,
    {
        self.groups
            .iter()
            .map(|(key, group)| (key.clone(), projection(group)))
            .collect()
    }

    /// Concatenates the groups in key order, then in-group order.
    pub fn into_flattened(self) -> Vec<V> {
        self.groups.into_values().flatten().collect()
    }

    pub fn into_inner(self) -> FxIndexMap<K, Vec<V>> {
        self.groups
    }
}

/// Groupings are equal when they hold the same groups in the same key order.
impl<K: Hash + Eq, V: PartialEq> PartialEq for Grouping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.groups.iter().eq(other.groups.iter())
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Grouping<K, V> {}

impl<K: Hash + Eq, V> IntoIterator for Grouping<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = indexmap::map::IntoIter<K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a Grouping<K, V> {
    type Item = (&'a K, &'a Vec<V>);
    type IntoIter = indexmap::map::Iter<'a, K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Renders as `{31=[Alice, Carol], 29=[Bob]}`.
impl<K, V> fmt::Display for Grouping<K, V>
where
    K: Hash + Eq + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.groups.iter().format_with(", ", |(key, group), emit| {
            emit(&format_args!("{}=[{}]", key, group.iter().format(", ")))
        });
        write!(f, "{{{}}}", body)
    }
}
