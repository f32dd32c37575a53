//! Adaptive merge sorting over natural runs.
//!
//! The input is scanned once into maximal monotonic runs (descending runs are
//! consumed in reverse), which are then merged by one of two interchangeable
//! strategies:
//!
//! - **Balanced stack merge** ([`sort_stack_balanced`]): runs are copied out as
//!   ascending segments and merged pairwise on a stack whose segment lengths
//!   stay strictly decreasing, bounding its depth logarithmically.
//! - **K-way heap merge** ([`sort_kway_heap`]): all runs are merged at once
//!   through a min-heap of run heads, reading the input in place. The lazy
//!   form, [`KWayMerge`], yields elements one at a time.
//! - **Block merge** ([`sort_block_merge`]): descending runs are reversed in
//!   place and adjacent runs are merged within the input through a buffer of
//!   about `sqrt(n)` elements, under the same stack rule as the balanced merge.
//!
//! All strategies are stable, so they produce identical results even for
//! elements that compare equal but are distinguishable.
//!
//! ```
//! let mut values = vec![5, 3, 2, 4, 6, 8, 7, 19, 10, 12, 13, 14, 17, 18];
//! segsort::sort_stack_balanced(&mut values);
//! assert_eq!(values, [2, 3, 4, 5, 6, 7, 8, 10, 12, 13, 14, 17, 18, 19]);
//! ```

pub mod block;
pub mod kway;
pub mod merge;
pub mod run;
pub mod stack;
pub mod strategy;
pub mod verify;

pub use block::{BlockMerger, into_sorted_block_merge, sort_block_merge};
pub use kway::{KWayMerge, into_sorted_kway_heap, smallest_k, sort_kway_heap};
pub use run::{Direction, Run, Runs, detect_runs};
pub use stack::{BalancedStackMerger, into_sorted_stack_balanced, sort_stack_balanced};
pub use strategy::Strategy;

#[cfg(test)]
mod tests;
