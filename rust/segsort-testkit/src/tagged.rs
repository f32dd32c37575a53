//! Values carrying their original position, for stability checks.

use std::cmp::Ordering;

/// A value paired with its index in the unsorted input.
///
/// Ordering and equality consider `key` only, so two elements with the same
/// key compare equal but remain distinguishable by `index`.
#[derive(Debug, Clone, Copy)]
pub struct Tagged<K> {
    pub key: K,
    pub index: usize,
}

impl<K: Ord> PartialEq for Tagged<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord> Eq for Tagged<K> {}

impl<K: Ord> PartialOrd for Tagged<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for Tagged<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Tags every value with its position.
pub fn tagged<K: Clone>(values: &[K]) -> Vec<Tagged<K>> {
    values
        .iter()
        .enumerate()
        .map(|(index, key)| Tagged {
            key: key.clone(),
            index,
        })
        .collect()
}

/// Flattens tagged values into `(key, index)` pairs for exact comparison.
pub fn untag<K: Clone>(values: &[Tagged<K>]) -> Vec<(K, usize)> {
    values.iter().map(|t| (t.key.clone(), t.index)).collect()
}
