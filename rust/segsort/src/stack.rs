//! Balanced stack merging of materialized runs.
//!
//! Runs are copied out of the input as ascending segments and pushed onto an
//! explicit stack. Before a segment is pushed, it absorbs every segment on top
//! of the stack that is no longer than itself. Segments on the stack therefore
//! cover adjacent, increasing index ranges from bottom to top, and their
//! lengths strictly decrease towards the top.

use crate::{
    merge::merge_two_arrays,
    run::{Run, Runs, detect_runs},
};

/// Stack of owned ascending segments, collapsed by the
/// "merge while the new segment is at least as long as the top" rule.
#[derive(Debug)]
pub struct BalancedStackMerger<T> {
    stack: Vec<Vec<T>>,
    max_depth: usize,
    merges: usize,
}

impl<T: Ord> BalancedStackMerger<T> {
    pub fn new() -> Self {
        BalancedStackMerger {
            stack: Vec::new(),
            max_depth: 0,
            merges: 0,
        }
    }

    /// Pushes the next ascending segment, in input order.
    ///
    /// While the stack is non-empty and `segment` is at least as long as the
    /// top, the top is popped and merged in front of it (the top covers
    /// smaller indices, so it is the left operand). The result is pushed.
    ///
    /// Empty segments are ignored.
    pub fn push_segment(&mut self, segment: Vec<T>) {
        if segment.is_empty() {
            return;
        }
        debug_assert!(segment.is_sorted(), "segment must be ascending");

        let mut current = segment;
        while self
            .stack
            .last()
            .is_some_and(|top| current.len() >= top.len())
        {
            let Some(top) = self.stack.pop() else {
                break;
            };
            log::trace!(
                "collapsing stack segment of {} with {} elements",
                top.len(),
                current.len()
            );
            current = merge_two_arrays(top, current);
            self.merges += 1;
        }

        self.stack.push(current);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    /// Number of segments currently on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Largest number of segments held at once so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of pairwise merges performed so far.
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Collapses the remaining stack into a single ascending vector.
    ///
    /// The two topmost segments are merged repeatedly, the lower (earlier)
    /// one as the left operand. Returns an empty vector if nothing was pushed.
    pub fn finish(mut self) -> Vec<T> {
        while let Some(upper) = self.stack.pop() {
            match self.stack.pop() {
                Some(lower) => {
                    self.stack.push(merge_two_arrays(lower, upper));
                    self.merges += 1;
                }
                None => {
                    log::debug!(
                        "stack merge finished: {} elements, {} merges, max depth {}",
                        upper.len(),
                        self.merges,
                        self.max_depth
                    );
                    return upper;
                }
            }
        }
        Vec::new()
    }
}

impl<T: Ord> Default for BalancedStackMerger<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `run` out of `values` as an ascending segment.
pub fn materialize<T: Clone>(values: &[T], run: Run) -> Vec<T> {
    let mut segment = values[run.start..=run.end].to_vec();
    if run.is_descending() {
        segment.reverse();
    }
    segment
}

/// Sorts `values` in place with the balanced stack merger.
///
/// Runs are detected lazily and merged as they are found; the merged result
/// is cloned back into `values`. Stable.
///
/// Complexity
/// - O(n log n) comparisons in the worst case, O(n) for a single run.
/// - O(log n) stack slots; merge buffers total O(n).
pub fn sort_stack_balanced<T: Ord + Clone>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }

    let mut merger = BalancedStackMerger::new();
    for run in Runs::new(values) {
        merger.push_segment(materialize(values, run));
    }

    let sorted = merger.finish();
    assert_eq!(sorted.len(), values.len());
    values.clone_from_slice(&sorted);
}

/// Sorts an owned vector with the balanced stack merger, moving elements
/// instead of cloning them. Stable.
pub fn into_sorted_stack_balanced<T: Ord>(values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }

    let runs = detect_runs(&values);
    log::debug!(
        "stack-balanced sort: {} elements in {} runs",
        values.len(),
        runs.len()
    );

    let mut rest = values.into_iter();
    let mut merger = BalancedStackMerger::new();
    for run in runs {
        let mut segment: Vec<T> = rest.by_ref().take(run.len()).collect();
        if run.is_descending() {
            segment.reverse();
        }
        merger.push_segment(segment);
    }
    merger.finish()
}
