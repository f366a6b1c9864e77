//! In-place heapsort over an implicit binary max-heap.

/// Sort a slice in place in O(n log n).
pub fn heapsort<T: Ord>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }

    heapify(arr);

    let mut end = arr.len() - 1;
    while end > 0 {
        // Root holds the current maximum
        arr.swap(0, end);
        end -= 1;
        sift_down(arr, 0, end);
    }
}

/// Arrange the whole slice into a max-heap, from the last non-leaf up to the root.
pub fn heapify<T: Ord>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }

    let end = arr.len() - 1;
    for start in (0..=(arr.len() - 2) / 2).rev() {
        sift_down(arr, start, end);
    }
}

/// Restore heap order below `start`, treating `end` as the last heap index (inclusive).
///
/// # Panics
/// Panics if `end >= arr.len()` and `start` has a child at or past `arr.len()`.
pub fn sift_down<T: Ord>(arr: &mut [T], start: usize, end: usize) {
    let mut root = start;

    while root * 2 + 1 <= end {
        let child = root * 2 + 1;
        let mut swap = root;

        if arr[swap] < arr[child] {
            swap = child;
        }
        if child < end && arr[swap] < arr[child + 1] {
            swap = child + 1;
        }
        if swap == root {
            return;
        }

        arr.swap(root, swap);
        root = swap;
    }
}
