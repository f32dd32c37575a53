//! Block merging of runs inside the input slice.
//!
//! Runs are detected left-to-right and descending runs are reversed in place.
//! Run bounds (not copies) go on a stack collapsed by the same rule as
//! [`crate::stack`]: merge while the incoming run is at least as long as the
//! top. Adjacent runs are merged in place through a bounded scratch buffer;
//! when both halves are longer than the buffer, a rotation splits the merge
//! into two smaller ones until one side fits.
//!
//! Auxiliary space is the stack of ranges plus a buffer of about `sqrt(n)`
//! elements, clamped to [`MIN_BUFFER_LEN`]..=[`MAX_BUFFER_LEN`].

use std::ops::Range;

use crate::run::Runs;

pub const MIN_BUFFER_LEN: usize = 256;
pub const MAX_BUFFER_LEN: usize = 4096;

/// Scratch buffer length used for sorting `n` elements.
pub fn buffer_len(n: usize) -> usize {
    n.isqrt().clamp(MIN_BUFFER_LEN, MAX_BUFFER_LEN)
}

/// In-place merger of adjacent ascending ranges with a bounded buffer.
#[derive(Debug)]
pub struct BlockMerger<T> {
    buffer: Vec<T>,
    capacity: usize,
    peak: usize,
    rotations: usize,
}

impl<T: Ord + Clone> BlockMerger<T> {
    /// Creates a merger that never buffers more than `capacity` elements.
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert_ne!(capacity, 0, "block merge buffer must hold at least one element");
        BlockMerger {
            buffer: Vec::with_capacity(capacity),
            capacity,
            peak: 0,
            rotations: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest number of elements held in the buffer so far.
    pub fn peak_buffer_len(&self) -> usize {
        self.peak
    }

    /// Number of rotation splits performed so far.
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// Merges the ascending ranges `values[first..middle]` and
    /// `values[middle..last]` into one ascending range. Stable: equal elements
    /// of the left range stay ahead of those of the right range.
    ///
    /// Contracts
    /// - `first <= middle <= last <= values.len()`, both halves ascending.
    ///
    /// Complexity
    /// - Linear when either half fits the buffer; otherwise O(n log n)
    ///   element moves from the rotations.
    pub fn merge(&mut self, values: &mut [T], first: usize, middle: usize, last: usize) {
        debug_assert!(first <= middle && middle <= last && last <= values.len());
        if first >= middle || middle >= last {
            return;
        }
        if values[middle - 1] <= values[middle] {
            return;
        }

        if middle - first <= self.capacity {
            self.merge_buffering_left(values, first, middle, last);
            return;
        }
        if last - middle <= self.capacity {
            self.merge_buffering_right(values, first, middle, last);
            return;
        }

        // Split around the left half's midpoint: right elements smaller than
        // the pivot rotate in front of it, leaving two independent merges.
        let mid1 = first + (middle - first) / 2;
        let mid2 = middle + values[middle..last].partition_point(|v| *v < values[mid1]);
        values[mid1..mid2].rotate_left(middle - mid1);
        self.rotations += 1;

        let pivot = mid1 + (mid2 - middle);
        self.merge(values, first, mid1, pivot);
        self.merge(values, pivot + 1, mid2, last);
    }

    fn fill_buffer(&mut self, source: &[T]) {
        debug_assert!(source.len() <= self.capacity);
        self.buffer.clear();
        self.buffer.extend_from_slice(source);
        self.peak = self.peak.max(source.len());
    }

    /// Forward merge with the left half copied out.
    fn merge_buffering_left(&mut self, values: &mut [T], first: usize, middle: usize, last: usize) {
        self.fill_buffer(&values[first..middle]);

        let (mut i, mut j, mut k) = (0, middle, first);
        while i < self.buffer.len() && j < last {
            if self.buffer[i] <= values[j] {
                values[k] = self.buffer[i].clone();
                i += 1;
            } else {
                values[k] = values[j].clone();
                j += 1;
            }
            k += 1;
        }
        let rest = &self.buffer[i..];
        values[k..k + rest.len()].clone_from_slice(rest);
    }

    /// Backward merge with the right half copied out.
    fn merge_buffering_right(
        &mut self,
        values: &mut [T],
        first: usize,
        middle: usize,
        last: usize,
    ) {
        self.fill_buffer(&values[middle..last]);

        let (mut i, mut j, mut k) = (middle, self.buffer.len(), last);
        while i > first && j > 0 {
            if values[i - 1] > self.buffer[j - 1] {
                values[k - 1] = values[i - 1].clone();
                i -= 1;
            } else {
                values[k - 1] = self.buffer[j - 1].clone();
                j -= 1;
            }
            k -= 1;
        }
        values[first..first + j].clone_from_slice(&self.buffer[..j]);
    }
}

/// Sorts `values` in place with block merging. Stable.
///
/// Complexity
/// - O(n) for a single (ascending or descending) run.
/// - O(log n) stack entries plus a buffer of at most [`MAX_BUFFER_LEN`]
///   elements.
pub fn sort_block_merge<T: Ord + Clone>(values: &mut [T]) {
    let n = values.len();
    if n <= 1 {
        return;
    }

    let mut merger = BlockMerger::with_capacity(buffer_len(n));
    let mut stack: Vec<Range<usize>> = Vec::new();
    let mut runs = 0;
    let mut pos = 0;
    while pos < n {
        let Some(run) = Runs::new(&values[pos..]).next() else {
            break;
        };
        let mut current = pos + run.start..pos + run.end + 1;
        if run.is_descending() {
            values[current.clone()].reverse();
        }
        pos = current.end;
        runs += 1;

        while let Some(top) = stack.pop_if(|top| current.len() >= top.len()) {
            merger.merge(values, top.start, current.start, current.end);
            current = top.start..current.end;
        }
        stack.push(current);
    }

    while let Some(upper) = stack.pop() {
        let Some(lower) = stack.pop() else {
            break;
        };
        merger.merge(values, lower.start, upper.start, upper.end);
        stack.push(lower.start..upper.end);
    }

    log::debug!(
        "block merge sort: {} elements in {} runs, buffer {}, {} rotations",
        n,
        runs,
        merger.capacity(),
        merger.rotations()
    );
}

/// Sorts an owned vector with block merging.
pub fn into_sorted_block_merge<T: Ord + Clone>(mut values: Vec<T>) -> Vec<T> {
    sort_block_merge(&mut values);
    values
}
