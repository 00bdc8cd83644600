//! Pattern 1-4: Declarative Sequence Queries
//!
//! Free functions over slices. Every call is a single fresh pass over its
//! input, leaves the input untouched and returns a new value. Pipelines are
//! built by feeding one call's output into the next:
//!
//! ```
//! use sequence_queries::query::{filter, map};
//! use sequence_queries::record::Person;
//!
//! let people = vec![Person::new("Alice", 29), Person::new("Bob", 31)];
//! let names = map(&filter(&people, |p| p.age > 30), |p| p.name.clone());
//! assert_eq!(names, vec!["Bob".to_string()]);
//! ```

use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::grouping::Grouping;

/// Ordered subsequence of elements satisfying `predicate`.
pub fn filter<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    seq.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// One output per input, in input order.
pub fn map<T, U, F>(seq: &[T], projection: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    seq.iter().map(projection).collect()
}

/// Same keys in the same order, each value replaced by `projection(value)`.
pub fn map_values<K, V, U, S, F>(mapping: &IndexMap<K, V, S>, projection: F) -> IndexMap<K, U, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Default,
    F: Fn(&V) -> U,
{
    mapping
        .iter()
        .map(|(key, value)| (key.clone(), projection(value)))
        .collect()
}

/// True iff every element satisfies `predicate`. Stops at the first failure.
pub fn all<T, F>(seq: &[T], predicate: F) -> bool
where
    F: Fn(&T) -> bool,
{
    seq.iter().all(predicate)
}

/// True iff some element satisfies `predicate`. Stops at the first match.
pub fn any<T, F>(seq: &[T], predicate: F) -> bool
where
    F: Fn(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// Number of matching elements, without collecting them.
pub fn count<T, F>(seq: &[T], predicate: F) -> usize
where
    F: Fn(&T) -> bool,
{
    seq.iter().filter(|item| predicate(*item)).count()
}

/// Earliest element satisfying `predicate`.
pub fn find<T, F>(seq: &[T], predicate: F) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    seq.iter().find(|item| predicate(*item))
}

/// Partition `seq` by `key_fn` in a single pass.
///
/// Groups appear in order of each key's first occurrence and keep the
/// relative order of their elements.
pub fn group_by<T, K, F>(seq: &[T], key_fn: F) -> Grouping<K, T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let grouping = seq.iter().fold(Grouping::with_capacity(0), |mut grouping, item| {
        grouping.push(key_fn(item), item.clone());
        grouping
    });
    tracing::trace!(input = seq.len(), groups = grouping.len(), "group_by");
    grouping
}

/// Concatenation of `projection(element)` for every element, in order.
/// Duplicates are kept.
pub fn flat_map<T, I, F>(seq: &[T], projection: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: Fn(&T) -> I,
{
    seq.iter().flat_map(projection).collect()
}

/// Concatenates nested sequences in order.
pub fn flatten<T, S>(seqs: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    seqs.iter()
        .flat_map(|inner| inner.as_ref().iter().cloned())
        .collect()
}

/// Deduplicated elements. Accepts anything that iterates by reference, so
/// sets can be fed back in.
pub fn to_set<'a, T, I>(seq: I) -> FxHashSet<T>
where
    T: Clone + Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    seq.into_iter().cloned().collect()
}

/// Element with the greatest key. Ties go to the earliest element.
pub fn max_by<T, K, F>(seq: &[T], key_fn: F) -> Option<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut iter = seq.iter();
    let first = iter.next()?;
    let (best, _) = iter.fold((first, key_fn(first)), |(best, best_key), item| {
        let key = key_fn(item);
        // strictly greater: an equal key never displaces the earlier element
        if key > best_key {
            (item, key)
        } else {
            (best, best_key)
        }
    });
    Some(best)
}
