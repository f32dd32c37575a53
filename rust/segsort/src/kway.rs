//! K-way heap merging over all natural runs at once.
//!
//! Every run gets a head cursor positioned at its smallest element. A binary
//! min-heap holds one entry per unexhausted run; popping the minimum yields
//! the next output element and the run's cursor advances by one position.
//! Descending runs are walked backwards from their last index, so no run is
//! ever copied or reversed.
//!
//! Ties between equal values in different runs are broken by run id, the
//! earlier run first. Combined with the in-run order this makes the merge
//! stable.

use std::{cmp::Ordering, collections::BinaryHeap, iter::FusedIterator};

use crate::run::{Direction, Run, detect_runs};

/// Read position within a run, moving in ascending value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadCursor {
    pub pos: usize,
    pub direction: Direction,
}

impl HeadCursor {
    /// Cursor at the run's smallest element.
    pub fn start(run: &Run) -> HeadCursor {
        HeadCursor {
            pos: run.head(),
            direction: run.direction,
        }
    }

    /// Steps one position towards the run's tail, or returns `None` when the
    /// cursor already sits on it.
    #[inline]
    pub fn advance(self, run: &Run) -> Option<HeadCursor> {
        debug_assert_eq!(self.direction, run.direction);
        debug_assert!((run.start..=run.end).contains(&self.pos));
        if self.pos == run.tail() {
            return None;
        }
        let pos = match self.direction {
            Direction::Ascending => self.pos + 1,
            Direction::Descending => self.pos - 1,
        };
        Some(HeadCursor { pos, ..self })
    }
}

/// Snapshot of a run's current head, ordered for `BinaryHeap` so that the
/// smallest `(value, run_id)` pair is at the top.
struct HeapEntry<'a, T> {
    value: &'a T,
    run_id: usize,
    cursor: HeadCursor,
}

impl<T: Ord> PartialEq for HeapEntry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for HeapEntry<'_, T> {}

impl<T: Ord> PartialOrd for HeapEntry<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for HeapEntry<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .value
            .cmp(self.value)
            .then_with(|| other.run_id.cmp(&self.run_id))
    }
}

/// Lazy ascending iterator over a borrowed slice.
///
/// Construction detects the runs (one O(n) pass) and seeds the heap with one
/// entry per run. Each subsequent element costs O(log r), where r is the
/// number of runs, which makes the iterator suitable for extracting only the
/// smallest few elements.
pub struct KWayMerge<'a, T> {
    values: &'a [T],
    runs: Vec<Run>,
    heap: BinaryHeap<HeapEntry<'a, T>>,
    remaining: usize,
}

impl<'a, T: Ord> KWayMerge<'a, T> {
    pub fn new(values: &'a [T]) -> Self {
        let runs = detect_runs(values);
        let mut heap = BinaryHeap::with_capacity(runs.len());
        for (run_id, run) in runs.iter().enumerate() {
            let cursor = HeadCursor::start(run);
            heap.push(HeapEntry {
                value: &values[cursor.pos],
                run_id,
                cursor,
            });
        }

        KWayMerge {
            values,
            runs,
            heap,
            remaining: values.len(),
        }
    }

    /// Number of natural runs detected in the input.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of elements not yet yielded.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Yields up to `k` of the next smallest elements.
    pub fn next_batch(&mut self, k: usize) -> Vec<&'a T> {
        self.by_ref().take(k).collect()
    }
}

impl<'a, T: Ord> Iterator for KWayMerge<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let entry = self.heap.pop()?;
        let values = self.values;
        if let Some(cursor) = entry.cursor.advance(&self.runs[entry.run_id]) {
            self.heap.push(HeapEntry {
                value: &values[cursor.pos],
                run_id: entry.run_id,
                cursor,
            });
        }
        self.remaining -= 1;
        Some(entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for KWayMerge<'_, T> {}

impl<T: Ord> FusedIterator for KWayMerge<'_, T> {}

/// Sorts `values` in place with the k-way heap merger. Stable.
///
/// The merged order is collected into a fresh buffer and cloned back.
///
/// Complexity
/// - O(n log r) comparisons for r runs; O(n) for a single run.
/// - O(r) heap entries plus the O(n) output buffer.
pub fn sort_kway_heap<T: Ord + Clone>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }

    let merge = KWayMerge::new(values);
    log::debug!(
        "k-way heap sort: {} elements in {} runs",
        values.len(),
        merge.run_count()
    );
    let sorted: Vec<T> = merge.cloned().collect();
    values.clone_from_slice(&sorted);
}

/// Sorts an owned vector with the k-way heap merger.
pub fn into_sorted_kway_heap<T: Ord + Clone>(mut values: Vec<T>) -> Vec<T> {
    sort_kway_heap(&mut values);
    values
}

/// Returns the `k` smallest elements of `values` in ascending order, without
/// sorting the rest.
pub fn smallest_k<T: Ord + Clone>(values: &[T], k: usize) -> Vec<T> {
    KWayMerge::new(values).take(k).cloned().collect()
}
