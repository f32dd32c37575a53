use segsort_testkit::{
    data_gen::{self, DatasetKind},
    tagged::{tagged, untag},
};

use crate::block::{
    BlockMerger, MAX_BUFFER_LEN, MIN_BUFFER_LEN, buffer_len, into_sorted_block_merge,
    sort_block_merge,
};

#[test]
fn test_buffer_len_is_clamped_sqrt() {
    assert_eq!(buffer_len(0), MIN_BUFFER_LEN);
    assert_eq!(buffer_len(1000), MIN_BUFFER_LEN);
    assert_eq!(buffer_len(1_000_000), 1000);
    assert_eq!(buffer_len(100_000_000), MAX_BUFFER_LEN);
}

#[test]
#[should_panic]
fn test_zero_capacity_is_rejected() {
    let _ = BlockMerger::<i32>::with_capacity(0);
}

#[test]
fn test_merge_buffering_left_half() {
    let mut values = vec![2, 4, 9, 1, 3, 5, 7, 8];
    let mut merger = BlockMerger::with_capacity(3);
    merger.merge(&mut values, 0, 3, 8);
    assert_eq!(values, [1, 2, 3, 4, 5, 7, 8, 9]);
    assert_eq!(merger.peak_buffer_len(), 3);
    assert_eq!(merger.rotations(), 0);
}

#[test]
fn test_merge_buffering_right_half() {
    let mut values = vec![1, 3, 5, 7, 8, 2, 6];
    let mut merger = BlockMerger::with_capacity(2);
    merger.merge(&mut values, 0, 5, 7);
    assert_eq!(values, [1, 2, 3, 5, 6, 7, 8]);
    assert_eq!(merger.peak_buffer_len(), 2);
    assert_eq!(merger.rotations(), 0);
}

#[test]
fn test_merge_skips_ordered_halves() {
    let mut values = vec![1, 2, 3, 3, 4];
    let mut merger = BlockMerger::with_capacity(1);
    merger.merge(&mut values, 0, 3, 5);
    assert_eq!(values, [1, 2, 3, 3, 4]);
    assert_eq!(merger.peak_buffer_len(), 0);
}

#[test]
fn test_merge_rotates_when_both_halves_exceed_buffer() {
    let evens: Vec<i32> = (0..40).map(|v| v * 2).collect();
    let odds: Vec<i32> = (0..40).map(|v| v * 2 + 1).collect();
    let mut values = [evens, odds].concat();

    let mut merger = BlockMerger::with_capacity(4);
    merger.merge(&mut values, 0, 40, 80);
    assert_eq!(values, (0..80).collect::<Vec<_>>());
    assert!(merger.rotations() > 0);
    assert!(merger.peak_buffer_len() <= 4);
}

#[test]
fn test_rotating_merge_is_stable() {
    let mut rng = fastrand::Rng::with_seed(41);
    for _ in 0..50 {
        let mut left: Vec<i32> = (0..rng.usize(0..60)).map(|_| rng.i32(0..8)).collect();
        let mut right: Vec<i32> = (0..rng.usize(0..60)).map(|_| rng.i32(0..8)).collect();
        left.sort();
        right.sort();
        let middle = left.len();
        let mut values = tagged(&[left, right].concat());
        let mut expected = values.clone();
        expected.sort();

        let mut merger = BlockMerger::with_capacity(3);
        let len = values.len();
        merger.merge(&mut values, 0, middle, len);
        assert_eq!(untag(&values), untag(&expected));
    }
}

#[test]
fn test_sort_block_merge_descending_run() {
    let mut values = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
    sort_block_merge(&mut values);
    assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_sort_block_merge_large_runs() {
    // Runs far longer than the buffer force the rotation path.
    for kind in [DatasetKind::Segmented, DatasetKind::Random, DatasetKind::Plateau] {
        let input = data_gen::generate(kind, 200_000, 8);
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(into_sorted_block_merge(input), expected, "{kind}");
    }
}

#[test]
fn test_two_long_interleaved_runs() {
    let n = 50_000;
    let mut values: Vec<i32> = (0..n).map(|v| v * 2).chain((0..n).map(|v| v * 2 + 1)).collect();
    sort_block_merge(&mut values);
    assert_eq!(values, (0..2 * n).collect::<Vec<_>>());
}
