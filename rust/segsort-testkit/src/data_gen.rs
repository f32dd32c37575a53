//! Data generation utilities for testing and benchmarking.
//!
//! Every generator takes an explicit [`fastrand::Rng`] so that a dataset is
//! fully determined by its kind, length and seed. Values fall in
//! `[MIN_VALUE, MAX_VALUE]` unless stated otherwise.

use std::{fmt, str::FromStr};

use segsort_common::error::Error;

pub const MIN_VALUE: i32 = 0;
pub const MAX_VALUE: i32 = 1000;

/// Number of distinct levels used by [`few_unique`].
pub const FEW_UNIQUE_LEVELS: i32 = 10;

/// Length of each constant block produced by [`plateau`].
pub const PLATEAU_LEN: usize = 100;

/// Shape of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Random,
    Sorted,
    Reverse,
    KSorted,
    NearlySorted,
    FewUnique,
    Plateau,
    Segmented,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 8] = [
        DatasetKind::Random,
        DatasetKind::Sorted,
        DatasetKind::Reverse,
        DatasetKind::KSorted,
        DatasetKind::NearlySorted,
        DatasetKind::FewUnique,
        DatasetKind::Plateau,
        DatasetKind::Segmented,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Random => "random",
            DatasetKind::Sorted => "sorted",
            DatasetKind::Reverse => "reverse",
            DatasetKind::KSorted => "ksorted",
            DatasetKind::NearlySorted => "nearly-sorted",
            DatasetKind::FewUnique => "few-unique",
            DatasetKind::Plateau => "plateau",
            DatasetKind::Segmented => "segmented",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_arg("dataset", format!("unknown dataset kind '{s}'")))
    }
}

/// Generates a dataset of the given kind and length from `seed`.
pub fn generate(kind: DatasetKind, len: usize, seed: u64) -> Vec<i32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    match kind {
        DatasetKind::Random => random(&mut rng, len),
        DatasetKind::Sorted => sorted(len),
        DatasetKind::Reverse => reverse(len),
        DatasetKind::KSorted => k_sorted(&mut rng, len, len / 10),
        DatasetKind::NearlySorted => nearly_sorted(&mut rng, len, (len / 100).max(1)),
        DatasetKind::FewUnique => few_unique(&mut rng, len),
        DatasetKind::Plateau => plateau(len, PLATEAU_LEN),
        DatasetKind::Segmented => segmented(len),
    }
}

/// Uniform values in `[MIN_VALUE, MAX_VALUE]`.
pub fn random(rng: &mut fastrand::Rng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.i32(MIN_VALUE..=MAX_VALUE)).collect()
}

fn ramp_value(i: usize, len: usize) -> i32 {
    let span = (MAX_VALUE - MIN_VALUE) as i64;
    MIN_VALUE + (span * i as i64 / len as i64) as i32
}

/// Evenly spaced non-decreasing ramp over the value range.
pub fn sorted(len: usize) -> Vec<i32> {
    (0..len).map(|i| ramp_value(i, len)).collect()
}

/// Evenly spaced non-increasing ramp over the value range.
pub fn reverse(len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| MAX_VALUE - (ramp_value(i, len) - MIN_VALUE))
        .collect()
}

/// Sorted ramp where every element is swapped with one at most `k` positions
/// to its right.
pub fn k_sorted(rng: &mut fastrand::Rng, len: usize, k: usize) -> Vec<i32> {
    let mut values = sorted(len);
    for i in 0..len {
        let upper = (i + k + 1).min(len);
        let j = rng.usize(i..upper);
        values.swap(i, j);
    }
    values
}

/// Sorted ramp with `swaps` random transpositions.
pub fn nearly_sorted(rng: &mut fastrand::Rng, len: usize, swaps: usize) -> Vec<i32> {
    let mut values = sorted(len);
    if len == 0 {
        return values;
    }
    for _ in 0..swaps {
        let i = rng.usize(..len);
        let j = rng.usize(..len);
        values.swap(i, j);
    }
    values
}

/// Values drawn from [`FEW_UNIQUE_LEVELS`] evenly spaced levels.
pub fn few_unique(rng: &mut fastrand::Rng, len: usize) -> Vec<i32> {
    let step = (MAX_VALUE - MIN_VALUE) / FEW_UNIQUE_LEVELS;
    (0..len)
        .map(|_| MIN_VALUE + rng.i32(0..FEW_UNIQUE_LEVELS) * step)
        .collect()
}

/// Consecutive constant blocks of `block_len` values, increasing block to
/// block.
pub fn plateau(len: usize, block_len: usize) -> Vec<i32> {
    assert_ne!(block_len, 0);
    let blocks = len.div_ceil(block_len).max(1);
    (0..len)
        .map(|i| ramp_value(i / block_len, blocks))
        .collect()
}

/// Blocks of consecutive integers (about 20 blocks, at least 10 elements
/// each), alternating ascending and descending.
pub fn segmented(len: usize) -> Vec<i32> {
    let block_len = (len / 20).max(10);
    let mut values: Vec<i32> = (1..=value_count(len)).collect();
    for (i, block) in values.chunks_mut(block_len).enumerate() {
        if i % 2 == 1 {
            block.reverse();
        }
    }
    values
}

/// Converts an element count to the largest value of a `1..=len` dataset.
///
/// Panics if `len` does not fit in `i32`.
fn value_count(len: usize) -> i32 {
    i32::try_from(len).expect("dataset length exceeds i32::MAX")
}
