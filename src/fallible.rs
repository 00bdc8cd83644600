//! Pattern 5: Fallible Callables
//!
//! The same queries for predicates and projections that can fail. The first
//! `Err` stops the pass and is handed back unchanged; no element after it is
//! evaluated.

use std::hash::Hash;

use crate::grouping::Grouping;

pub fn try_filter<T, E, F>(seq: &[T], predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: Fn(&T) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for item in seq {
        if predicate(item)? {
            kept.push(item.clone());
        }
    }
    Ok(kept)
}

pub fn try_map<T, U, E, F>(seq: &[T], projection: F) -> Result<Vec<U>, E>
where
    F: Fn(&T) -> Result<U, E>,
{
    seq.iter().map(projection).collect()
}

pub fn try_all<T, E, F>(seq: &[T], predicate: F) -> Result<bool, E>
where
    F: Fn(&T) -> Result<bool, E>,
{
    for item in seq {
        if !predicate(item)? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn try_any<T, E, F>(seq: &[T], predicate: F) -> Result<bool, E>
where
    F: Fn(&T) -> Result<bool, E>,
{
    for item in seq {
        if predicate(item)? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn try_count<T, E, F>(seq: &[T], predicate: F) -> Result<usize, E>
where
    F: Fn(&T) -> Result<bool, E>,
{
    seq.iter()
        .try_fold(0, |n, item| Ok(if predicate(item)? { n + 1 } else { n }))
}

/// Earliest match. An error raised before the match wins over the match.
pub fn try_find<T, E, F>(seq: &[T], predicate: F) -> Result<Option<&T>, E>
where
    F: Fn(&T) -> Result<bool, E>,
{
    for item in seq {
        if predicate(item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

pub fn try_group_by<T, K, E, F>(seq: &[T], key_fn: F) -> Result<Grouping<K, T>, E>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> Result<K, E>,
{
    let mut grouping = Grouping::with_capacity(0);
    for item in seq {
        grouping.push(key_fn(item)?, item.clone());
    }
    Ok(grouping)
}

pub fn try_flat_map<T, I, E, F>(seq: &[T], projection: F) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    F: Fn(&T) -> Result<I, E>,
{
    let mut out = Vec::new();
    for item in seq {
        out.extend(projection(item)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use thiserror::Error;

    #[derive(Error, Debug, PartialEq)]
    enum CheckError {
        #[error("negative value: {0}")]
        Negative(i32),
    }

    fn is_even(x: &i32) -> Result<bool, CheckError> {
        if *x < 0 {
            return Err(CheckError::Negative(*x));
        }
        Ok(x % 2 == 0)
    }

    #[test]
    fn test_try_filter_ok() {
        assert_eq!(try_filter(&[1, 2, 3, 4], is_even), Ok(vec![2, 4]));
    }

    #[test]
    fn test_try_filter_surfaces_first_error() {
        assert_eq!(
            try_filter(&[2, -1, -3], is_even),
            Err(CheckError::Negative(-1))
        );
    }

    #[test]
    fn test_error_stops_evaluation() {
        let calls = Cell::new(0);
        let result = try_map(&[1, -2, 3, 4], |x| {
            calls.set(calls.get() + 1);
            is_even(x)
        });
        assert_eq!(result, Err(CheckError::Negative(-2)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_try_all_and_any() {
        assert_eq!(try_all(&[2, 4], is_even), Ok(true));
        assert_eq!(try_all(&[2, 3, -1], is_even), Ok(false));
        assert_eq!(try_any(&[1, 3], is_even), Ok(false));
        assert_eq!(try_any(&[1, -5, 2], is_even), Err(CheckError::Negative(-5)));
        assert_eq!(try_all(&Vec::<i32>::new(), is_even), Ok(true));
        assert_eq!(try_any(&Vec::<i32>::new(), is_even), Ok(false));
    }

    #[test]
    fn test_try_count() {
        assert_eq!(try_count(&[1, 2, 3, 4, 6], is_even), Ok(3));
        assert_eq!(try_count(&[1, -2], is_even), Err(CheckError::Negative(-2)));
    }

    #[test]
    fn test_try_find() {
        assert_eq!(try_find(&[1, 4, 6], is_even), Ok(Some(&4)));
        assert_eq!(try_find(&[1, 3], is_even), Ok(None));
        assert_eq!(try_find(&[-1, 4], is_even), Err(CheckError::Negative(-1)));
    }

    #[test]
    fn test_try_group_by() {
        let grouping = try_group_by(&[1, 2, 3, 4], is_even).unwrap();
        let keys: Vec<bool> = grouping.keys().copied().collect();
        assert_eq!(keys, vec![false, true]);
        assert_eq!(grouping.get(&false), Some(&[1, 3][..]));
        assert!(try_group_by(&[1, -1], is_even).is_err());
    }

    #[test]
    fn test_try_flat_map() {
        let out = try_flat_map(&[1, 2], |&x| Ok::<_, CheckError>(vec![x; x as usize]));
        assert_eq!(out, Ok(vec![1, 2, 2]));
    }
}
