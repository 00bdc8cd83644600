//! Pattern 6: Parallel Evaluation with Rayon
//!
//! Parallel counterparts of the sequential queries. Each returns exactly
//! what the sequential version returns: order is preserved, `par_find`
//! reports the earliest match and `par_max_by` the earliest of tied maxima.
//! Callables run on several threads at once, so they must be `Sync + Send`
//! and should be free of side effects.

use rayon::prelude::*;

pub fn par_filter<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Sync + Send,
{
    tracing::trace!(input = seq.len(), threads = rayon::current_num_threads(), "par_filter");
    seq.par_iter().filter(|item| predicate(*item)).cloned().collect()
}

pub fn par_map<T, U, F>(seq: &[T], projection: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    seq.par_iter().map(projection).collect()
}

pub fn par_count<T, F>(seq: &[T], predicate: F) -> usize
where
    T: Sync,
    F: Fn(&T) -> bool + Sync + Send,
{
    seq.par_iter().filter(|item| predicate(*item)).count()
}

pub fn par_all<T, F>(seq: &[T], predicate: F) -> bool
where
    T: Sync,
    F: Fn(&T) -> bool + Sync + Send,
{
    seq.par_iter().all(predicate)
}

pub fn par_any<T, F>(seq: &[T], predicate: F) -> bool
where
    T: Sync,
    F: Fn(&T) -> bool + Sync + Send,
{
    seq.par_iter().any(predicate)
}

/// Earliest match in sequence order (`find_first`, not `find_any`).
pub fn par_find<T, F>(seq: &[T], predicate: F) -> Option<&T>
where
    T: Sync,
    F: Fn(&T) -> bool + Sync + Send,
{
    seq.par_iter().find_first(|item| predicate(*item))
}

/// Greatest key, earliest element on ties.
pub fn par_max_by<T, K, F>(seq: &[T], key_fn: F) -> Option<&T>
where
    T: Sync,
    K: Ord + Send,
    F: Fn(&T) -> K + Sync + Send,
{
    seq.par_iter()
        .map(|item| (key_fn(item), item))
        // reduce keeps left-to-right order, so `left` is always the earlier run
        .reduce_with(|left, right| if right.0 > left.0 { right } else { left })
        .map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query;

    fn numbers() -> Vec<i64> {
        (0..10_000).map(|x| (x * 7919) % 1013).collect()
    }

    #[test]
    fn test_par_filter_matches_sequential() {
        let data = numbers();
        let even = |x: &i64| x % 2 == 0;
        assert_eq!(par_filter(&data, even), query::filter(&data, even));
    }

    #[test]
    fn test_par_map_preserves_order() {
        let data = numbers();
        let squared = |x: &i64| x * x;
        assert_eq!(par_map(&data, squared), query::map(&data, squared));
    }

    #[test]
    fn test_par_count_all_any() {
        let data = numbers();
        assert_eq!(
            par_count(&data, |x| *x > 500),
            query::count(&data, |x| *x > 500)
        );
        assert!(par_all(&data, |x| *x >= 0));
        assert!(!par_any(&data, |x| *x > 1013));
        assert!(par_all(&Vec::<i64>::new(), |_| false));
        assert!(!par_any(&Vec::<i64>::new(), |_| true));
    }

    #[test]
    fn test_par_find_is_earliest() {
        let data = numbers();
        let found = par_find(&data, |x| *x > 1000).unwrap();
        let expected = query::find(&data, |x| *x > 1000).unwrap();
        assert!(std::ptr::eq(found, expected));
    }

    #[test]
    fn test_par_max_by_first_of_ties() {
        let data = numbers();
        let best = par_max_by(&data, |x| *x).unwrap();
        let expected = query::max_by(&data, |x| *x).unwrap();
        assert!(std::ptr::eq(best, expected));
        assert_eq!(par_max_by(&Vec::<i64>::new(), |x| *x), None);
    }
}
