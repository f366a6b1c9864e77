//! Integer sort implementations.
//!
//! Each routine is generic over `T: Ord`; the registry instantiates them for `i64`.

mod bubble_sort;
mod heapsort;
mod insertion_sort;
mod merge_sort;
mod quicksort;

pub use bubble_sort::bubble_sort;
pub use heapsort::{heapify, heapsort, sift_down};
pub use insertion_sort::insertion_sort;
pub use merge_sort::{merge, merge_sort};
pub use quicksort::{choose_pivot, partition, quicksort, INSERTION_THRESHOLD};

use crate::utils::VariantInfo;
use std::borrow::Cow;

/// Signature of a sort that rearranges its input.
pub type InPlaceSortFn = fn(&mut [i64]);

/// Signature of a sort that leaves its input alone and hands back a sorted view.
pub type CopyingSortFn = for<'a> fn(&'a [i64]) -> Cow<'a, [i64]>;

/// How a variant consumes its input.
#[derive(Clone, Copy)]
pub enum SortFn {
    InPlace(InPlaceSortFn),
    Copying(CopyingSortFn),
}

impl SortFn {
    /// Sort a copy of `input`, whatever the calling convention.
    pub fn sorted(self, input: &[i64]) -> Vec<i64> {
        match self {
            SortFn::InPlace(sort) => {
                let mut scratch = input.to_vec();
                sort(&mut scratch);
                scratch
            }
            SortFn::Copying(sort) => sort(input).into_owned(),
        }
    }
}

/// All variants, in report order.
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    vec![
        VariantInfo {
            name: "quicksort",
            label: "QuickSort",
            description: "Median-of-three quicksort, insertion sort below 6 elements",
            function: SortFn::InPlace(quicksort::<i64>),
        },
        VariantInfo {
            name: "heapsort",
            label: "HeapSort",
            description: "In-place heapsort over a binary max-heap",
            function: SortFn::InPlace(heapsort::<i64>),
        },
        VariantInfo {
            name: "merge_sort",
            label: "MergeSort",
            description: "Stable top-down merge sort into fresh buffers",
            function: SortFn::Copying(merge_sort::<i64>),
        },
        VariantInfo {
            name: "insertion_sort",
            label: "InsertionSort",
            description: "Swap-based insertion sort",
            function: SortFn::InPlace(insertion_sort::<i64>),
        },
        VariantInfo {
            name: "bubble_sort",
            label: "BubbleSort",
            description: "Bubble sort bounded by the last swap of each pass",
            function: SortFn::InPlace(bubble_sort::<i64>),
        },
    ]
}
