//! Shared benchmark utilities.
//!
//! Measurements are wall-clock durations from the monotonic clock
//! ([`std::time::Instant`]).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Measurement value type
pub type Measurement = Duration;

/// Read the monotonic clock
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Time elapsed since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Time an expression, yielding `(elapsed, value)`.
///
/// ```
/// let (elapsed, sum) = sort_bench::measure!((1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// assert!(elapsed.as_secs() < 1);
/// ```
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $body;
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, result)
    }};
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Generate `size` integers drawn uniformly from `[0, range)`.
///
/// # Panics
/// Panics if `range` is not positive.
pub fn random_dataset<R: Rng + ?Sized>(size: usize, range: i64, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(0..range)).collect()
}

/// Build a shuffled schedule with `samples` entries for each of `variants` indices.
pub fn shuffled_schedule(variants: usize, samples: usize, seed: u64) -> Vec<usize> {
    let mut tasks: Vec<usize> = (0..variants)
        .flat_map(|v| (0..samples).map(move |_| v))
        .collect();
    tasks.shuffle(&mut StdRng::seed_from_u64(seed));
    tasks
}
