//! Sorting: directions, keys, and the row comparator.
//!
//! Keys are extracted once per row, then row indices are sorted with a
//! stable sort so ties keep collection order.

mod compare;
mod key;
mod order;

use std::cmp::Ordering;

pub use compare::*;
pub use key::*;
pub use order::*;

use crate::model::Row;
use crate::model::Value;

/// Returns a comparator for two rows under the given specification.
///
/// Each key is tried in order and the first non-equal result wins.
/// Keys are re-extracted on every call; prefer [`sort_rows`] for whole
/// collections.
pub fn sorter<T: Row>(sort_by: &SortBy<T>, order: SortOrder) -> impl Fn(&T, &T) -> Ordering + '_ {
    let keys = sort_by.keys();
    move |left, right| {
        for key in keys {
            let ordering = order.apply(compare(&key.extract(left), &key.extract(right)));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Returns a sorted copy of `rows`.
pub fn sort_rows<T: Row + Clone>(rows: &[T], sort_by: &SortBy<T>, order: SortOrder) -> Vec<T> {
    sorted_indices(rows, sort_by, order)
        .into_iter()
        .map(|i| rows[i].clone())
        .collect()
}

/// Returns row indices in sorted order.
///
/// An empty specification returns the identity permutation.
pub(crate) fn sorted_indices<T: Row>(
    rows: &[T],
    sort_by: &SortBy<T>,
    order: SortOrder,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    if sort_by.is_empty() {
        return indices;
    }

    let keys = sort_by.keys();
    let extracted: Vec<Vec<Value>> = rows
        .iter()
        .map(|row| keys.iter().map(|key| key.extract(row)).collect())
        .collect();

    indices.sort_by(|&a, &b| compare_extracted(&extracted[a], &extracted[b], order));
    indices
}

fn compare_extracted(left: &[Value], right: &[Value], order: SortOrder) -> Ordering {
    for (a, b) in left.iter().zip(right) {
        let ordering = order.apply(compare(a, b));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
