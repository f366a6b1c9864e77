//! Bubble sort that shrinks its scan range to the last swap of each pass.

/// Sort a slice in place in O(n^2).
///
/// Everything past the last swap of a pass is already in its final place,
/// so the next pass stops there. A pass without swaps ends the sort.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut n = arr.len();

    while n != 0 {
        let mut last_swap = 0;
        for i in 1..n {
            if arr[i] < arr[i - 1] {
                arr.swap(i - 1, i);
                last_swap = i;
            }
        }
        n = last_swap;
    }
}
