//! Extension trait putting the queries in method position.
//!
//! ```
//! use sequence_queries::SliceQueryExt;
//!
//! let squares = [1, 2, 3, 4].filtered(|x| x % 2 == 0).mapped(|x| x * x);
//! assert_eq!(squares, vec![4, 16]);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::grouping::Grouping;
use crate::query;

pub trait SliceQueryExt<T> {
    fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> bool;

    fn mapped<U, F>(&self, projection: F) -> Vec<U>
    where
        F: Fn(&T) -> U;

    fn all_match<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool;

    fn any_match<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool;

    fn count_matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool;

    fn first_match<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool;

    fn grouped_by<K, F>(&self, key_fn: F) -> Grouping<K, T>
    where
        T: Clone,
        K: Hash + Eq,
        F: Fn(&T) -> K;

    fn flat_mapped<I, F>(&self, projection: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: Fn(&T) -> I;

    fn distinct(&self) -> FxHashSet<T>
    where
        T: Clone + Eq + Hash;

    fn max_by_first<K, F>(&self, key_fn: F) -> Option<&T>
    where
        K: Ord,
        F: Fn(&T) -> K;
}

impl<T> SliceQueryExt<T> for [T] {
    fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> bool,
    {
        query::filter(self, predicate)
    }

    fn mapped<U, F>(&self, projection: F) -> Vec<U>
    where
        F: Fn(&T) -> U,
    {
        query::map(self, projection)
    }

    fn all_match<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        query::all(self, predicate)
    }

    fn any_match<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        query::any(self, predicate)
    }

    fn count_matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        query::count(self, predicate)
    }

    fn first_match<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        query::find(self, predicate)
    }

    fn grouped_by<K, F>(&self, key_fn: F) -> Grouping<K, T>
    where
        T: Clone,
        K: Hash + Eq,
        F: Fn(&T) -> K,
    {
        query::group_by(self, key_fn)
    }

    fn flat_mapped<I, F>(&self, projection: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: Fn(&T) -> I,
    {
        query::flat_map(self, projection)
    }

    fn distinct(&self) -> FxHashSet<T>
    where
        T: Clone + Eq + Hash,
    {
        query::to_set(self)
    }

    fn max_by_first<K, F>(&self, key_fn: F) -> Option<&T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        query::max_by(self, key_fn)
    }
}
