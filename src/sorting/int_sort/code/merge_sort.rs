//! Top-down merge sort.
//!
//! This is the only non-mutating and the only stable routine in the set.
//! Every merge level allocates a fresh vector, so the extra space is O(n).

use std::borrow::Cow;

/// Return a sorted copy of `arr`.
///
/// Slices of length 0 or 1 are already sorted and come back borrowed,
/// pointing at the input.
///
/// # Example
/// ```
/// use sort_bench::sorting::int_sort::merge_sort;
///
/// let v = [5, 3, 4, 1, 2];
/// assert_eq!(&*merge_sort(&v), &[1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Cow<'_, [T]> {
    if arr.len() <= 1 {
        return Cow::Borrowed(arr);
    }

    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);

    Cow::Owned(merge(&left, &right))
}

/// Merge two sorted slices. Ties are taken from `left` first.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
