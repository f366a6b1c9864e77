//! # Sort-Bench
//!
//! Classic in-memory sorting algorithms and a harness that times them
//! against each other on the same random dataset.

pub mod config;
pub mod error;
pub mod registry;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::BenchError;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::error::BenchError;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::sorting::int_sort::{
        bubble_sort, heapsort, insertion_sort, merge_sort, quicksort,
    };
}
