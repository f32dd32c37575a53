use std::{fmt, str::FromStr};

use segsort_common::error::Error;

use crate::{block, kway, stack};

/// Merge algorithm used to combine the natural runs of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Pairwise merging of materialized runs on a size-balanced stack.
    StackBalanced,
    /// Lazy k-way merging of all runs through a min-heap of run heads.
    KWayHeap,
    /// In-place merging of adjacent runs through a bounded buffer.
    BlockMerge,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::StackBalanced,
        Strategy::KWayHeap,
        Strategy::BlockMerge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::StackBalanced => "stack-balanced",
            Strategy::KWayHeap => "kway-heap",
            Strategy::BlockMerge => "block-merge",
        }
    }

    /// Sorts `values` in place.
    pub fn sort<T: Ord + Clone>(&self, values: &mut [T]) {
        match self {
            Strategy::StackBalanced => stack::sort_stack_balanced(values),
            Strategy::KWayHeap => kway::sort_kway_heap(values),
            Strategy::BlockMerge => block::sort_block_merge(values),
        }
    }

    /// Sorts an owned vector and returns it.
    pub fn sorted<T: Ord + Clone>(&self, values: Vec<T>) -> Vec<T> {
        match self {
            Strategy::StackBalanced => stack::into_sorted_stack_balanced(values),
            Strategy::KWayHeap => kway::into_sorted_kway_heap(values),
            Strategy::BlockMerge => block::into_sorted_block_merge(values),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stack" | "stack-balanced" | "balanced" => Ok(Strategy::StackBalanced),
            "kway" | "kway-heap" | "heap" => Ok(Strategy::KWayHeap),
            "block" | "block-merge" => Ok(Strategy::BlockMerge),
            _ => Err(Error::invalid_arg(
                "strategy",
                format!("unknown strategy '{s}', expected one of: stack-balanced, kway-heap, block-merge"),
            )),
        }
    }
}
