//! Sortedness checks for merge results.

use segsort_common::{Result, error::Error};

/// Returns the first position `i` such that `values[i + 1] < values[i]`.
pub fn first_unsorted<T: Ord>(values: &[T]) -> Option<usize> {
    values.windows(2).position(|w| w[1] < w[0])
}

pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    first_unsorted(values).is_none()
}

/// Fails with `ErrorKind::Unsorted` at the first descent in `values`.
pub fn verify_sorted<T: Ord>(values: &[T]) -> Result<()> {
    match first_unsorted(values) {
        Some(position) => Err(Error::unsorted(position)),
        None => Ok(()),
    }
}
