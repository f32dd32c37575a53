mod block_tests;
mod sort_tests;
mod strategy_tests;

/// Literal `(input, expected)` cases shared by both strategies.
pub(crate) fn literal_cases() -> Vec<(Vec<i32>, Vec<i32>)> {
    vec![
        (vec![], vec![]),
        (vec![42], vec![42]),
        (vec![1, 2, 3, 4, 5, 6, 7, 8, 9], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
        (vec![9, 8, 7, 6, 5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
        (vec![3, 3, 3, 3, 3], vec![3, 3, 3, 3, 3]),
        (vec![5, 3, 8, 3, 5, 1, 8], vec![1, 3, 3, 5, 5, 8, 8]),
        (
            vec![5, 3, 2, 4, 6, 8, 7, 19, 10, 12, 13, 14, 17, 18],
            vec![2, 3, 4, 5, 6, 7, 8, 10, 12, 13, 14, 17, 18, 19],
        ),
        (vec![-5, 3, -8, 0, -1, 10], vec![-8, -5, -1, 0, 3, 10]),
        (
            vec![10, -2, 5, -2, 0, 5, 10, -8],
            vec![-8, -2, -2, 0, 5, 5, 10, 10],
        ),
        (
            vec![31, 41, 59, 26, 53, 58, 97, 93, 23, 84],
            vec![23, 26, 31, 41, 53, 58, 59, 84, 93, 97],
        ),
    ]
}

/// Random small-range values, so that duplicates and short runs are common.
pub(crate) fn random_values(rng: &mut fastrand::Rng, max_len: usize) -> Vec<i32> {
    let len = rng.usize(..=max_len);
    (0..len).map(|_| rng.i32(-20..20)).collect()
}
