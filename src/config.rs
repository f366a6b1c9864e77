//! Fixed benchmark constants.
//!
//! The run is not configurable from the outside: every knob lives here.

use crate::utils::bench::time_seed;
use crate::utils::timer::{PinStrategy, TimingConfig};

/// Number of elements in the generated dataset.
pub const ARR_SIZE: usize = 10_000;

/// Values are drawn uniformly from `[0, NUMBER_RANGE)`.
pub const NUMBER_RANGE: i64 = 1_000;

/// Samples collected per variant in table mode.
pub const RUNS_PER_VARIANT: usize = 10;

/// Unmeasured runs per variant before table mode starts sampling.
pub const WARMUP_RUNS: usize = 1;

/// Everything a benchmark run needs to know.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub array_size: usize,
    pub number_range: i64,
    /// Seed for dataset generation and schedule shuffling
    pub seed: u64,
    pub timing: TimingConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            array_size: ARR_SIZE,
            number_range: NUMBER_RANGE,
            seed: time_seed(),
            timing: TimingConfig {
                runs_per_variant: RUNS_PER_VARIANT,
                warmup_iterations: WARMUP_RUNS,
                pin_strategy: PinStrategy::PerExecution,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_constants() {
        let config = BenchConfig::default();
        assert_eq!(config.array_size, 10_000);
        assert_eq!(config.number_range, 1_000);
        assert_eq!(config.timing.runs_per_variant, RUNS_PER_VARIANT);
        assert_eq!(config.timing.warmup_iterations, WARMUP_RUNS);
        assert_eq!(config.timing.pin_strategy, PinStrategy::PerExecution);
    }
}
