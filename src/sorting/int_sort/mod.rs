//! # Integer Sorts
//!
//! Five classic comparison sorts over `i64` slices:
//!
//! - **Quicksort**: median-of-three pivot, insertion sort for short partitions
//! - **Heapsort**: in-place binary max-heap
//! - **Merge sort**: non-mutating and stable, O(n) extra space
//! - **Insertion sort**: O(n^2), fast on short or nearly-sorted input
//! - **Bubble sort**: O(n^2), scan range shrinks to the last swap
//!
//! All of them order by strict less-than and produce the same multiset as
//! their input in non-decreasing order.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::BenchError;
use crate::registry::{AlgorithmRunner, VariantClosure};

/// Runner for the integer sorts
pub struct IntSortRunner;

impl AlgorithmRunner for IntSortRunner {
    fn name(&self) -> &'static str {
        "int_sort"
    }

    fn description(&self) -> &'static str {
        "Sorts a random integer array with five classic algorithms"
    }

    fn category(&self) -> &'static str {
        "sorting"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, input: &'a [i64]) -> Vec<VariantClosure<'a>> {
        bench::variant_closures(input)
    }

    fn verify(&self) -> Result<(), BenchError> {
        test::verify_all()
    }
}
