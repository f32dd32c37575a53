//! Two-way merge of ascending sequences.

/// Merges two ascending vectors into a new ascending vector holding the
/// elements of both.
///
/// Elements are moved, not cloned. When `left` and `right` hold equal
/// elements, the ones from `left` are emitted first, so merging adjacent
/// segments in index order (earlier segment as `left`) is stable.
///
/// Complexity
/// - O(left.len() + right.len()) time, at most `left.len() + right.len() - 1`
///   comparisons.
pub fn merge_two_arrays<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }

    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            _ => break,
        };
        result.extend(if take_left { left.next() } else { right.next() });
    }

    result.extend(left);
    result.extend(right);
    result
}
