//! Natural run detection.
//!
//! A run is a maximal contiguous span of the input that is already monotonic:
//! either non-decreasing (`a[i] <= a[i + 1]`) or strictly decreasing
//! (`a[i] > a[i + 1]`). Runs are produced left-to-right and cover every index
//! of the input exactly once.
//!
//! Descending runs are strictly decreasing, so reversing one never reorders
//! equal elements.

use std::iter::FusedIterator;

/// Order of a run's elements in original index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A maximal monotonic span `[start, end]` (inclusive) of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub direction: Direction,
}

impl Run {
    pub fn new(start: usize, end: usize, direction: Direction) -> Run {
        assert!(start <= end, "run bounds out of order: {start} > {end}");
        Run {
            start,
            end,
            direction,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A run always holds at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_descending(&self) -> bool {
        self.direction == Direction::Descending
    }

    /// Index holding the run's smallest element: where an ascending-order
    /// cursor starts.
    ///
    /// This is `start` for ascending runs and `end` for descending ones.
    #[inline]
    pub fn head(&self) -> usize {
        match self.direction {
            Direction::Ascending => self.start,
            Direction::Descending => self.end,
        }
    }

    /// Index holding the run's largest element: the last position an
    /// ascending-order cursor visits.
    #[inline]
    pub fn tail(&self) -> usize {
        match self.direction {
            Direction::Ascending => self.end,
            Direction::Descending => self.start,
        }
    }
}

/// Lazy left-to-right scan of a slice into its natural runs.
pub struct Runs<'a, T> {
    values: &'a [T],
    pos: usize,
}

impl<'a, T: Ord> Runs<'a, T> {
    pub fn new(values: &'a [T]) -> Self {
        Runs { values, pos: 0 }
    }
}

impl<T: Ord> Iterator for Runs<'_, T> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let n = self.values.len();
        let start = self.pos;
        if start >= n {
            return None;
        }

        let v = self.values;
        let direction = if start + 1 < n && v[start] > v[start + 1] {
            Direction::Descending
        } else {
            Direction::Ascending
        };

        let mut end = start;
        while end + 1 < n {
            let continues = match direction {
                Direction::Ascending => v[end] <= v[end + 1],
                Direction::Descending => v[end] > v[end + 1],
            };
            if !continues {
                break;
            }
            end += 1;
        }

        self.pos = end + 1;
        Some(Run::new(start, end, direction))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.pos.min(self.values.len());
        ((remaining != 0) as usize, Some(remaining))
    }
}

impl<T: Ord> FusedIterator for Runs<'_, T> {}

/// Partitions `values` into its natural runs, in index order.
///
/// An empty slice yields no runs; a single element yields one ascending run.
pub fn detect_runs<T: Ord>(values: &[T]) -> Vec<Run> {
    Runs::new(values).collect()
}
