//! Quicksort with median-of-three pivot selection.
//!
//! Partitioning is a single forward scan (Lomuto style). Small sub-slices
//! are finished by insertion sort, which is cheaper than another round of
//! partitioning at that size.

use super::insertion_sort::insertion_sort;

/// Sub-slices of this length or shorter are handed to insertion sort.
pub const INSERTION_THRESHOLD: usize = 5;

/// Sort a slice in place in O(n log n) on average.
///
/// # Example
/// ```
/// use sort_bench::sorting::int_sort::quicksort;
///
/// let mut v = [5, 3, 4, 1, 2];
/// quicksort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn quicksort<T: Ord>(mut arr: &mut [T]) {
    // Recurse into the shorter side and loop on the longer one, so the
    // stack depth stays O(log n) even when every key is equal.
    while arr.len() > INSERTION_THRESHOLD {
        let p = partition(arr);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(p);
        // right[0] is the pivot, already in its final place
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left);
            arr = right;
        } else {
            quicksort(right);
            arr = left;
        }
    }

    insertion_sort(arr);
}

/// Partition `arr` around a median-of-three pivot.
///
/// Returns the pivot's final index `k`: everything before `k` is strictly
/// less than `arr[k]`, everything after is greater or equal.
///
/// # Panics
/// Panics if `arr` is empty.
pub fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let end = arr.len() - 1;
    let p = choose_pivot(arr);
    arr.swap(p, end);

    let mut k = 0;
    for i in 0..end {
        if arr[i] < arr[end] {
            arr.swap(i, k);
            k += 1;
        }
    }

    arr.swap(k, end);
    k
}

/// Pick the index of the median among the first, middle and last elements.
///
/// # Panics
/// Panics if `arr` is empty.
pub fn choose_pivot<T: Ord>(arr: &[T]) -> usize {
    let end = arr.len() - 1;
    let mid = arr.len() / 2;
    let (first, middle, last) = (&arr[0], &arr[mid], &arr[end]);

    if first < last {
        if first >= middle {
            0
        } else if middle < last {
            mid
        } else {
            end
        }
    } else if last >= middle {
        end
    } else if middle < first {
        mid
    } else {
        0
    }
}
