//! Drives the registered algorithms over one shared dataset.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::bench::random_dataset;
use super::timer::{measure_variants, Variant};
use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::registry::{AlgorithmRunner, BenchmarkResult};

/// Elapsed time of one variant in a single pass
#[derive(Clone, Debug)]
pub struct PassTiming {
    pub label: &'static str,
    pub elapsed: Duration,
}

/// Generate the dataset described by `config`.
pub fn generate_dataset(config: &BenchConfig) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let data = random_dataset(config.array_size, config.number_range, &mut rng);
    tracing::info!(
        seed = config.seed,
        size = config.array_size,
        range = config.number_range,
        "generated dataset"
    );
    data
}

/// Run every variant exactly once, in registration order.
pub fn run_single_pass(variants: Vec<Variant>) -> Vec<PassTiming> {
    variants
        .into_iter()
        .map(|mut variant| {
            tracing::debug!(variant = variant.name, "running");
            let (elapsed, _) = (variant.run)();
            tracing::debug!(variant = variant.name, ?elapsed, "finished");
            PassTiming {
                label: variant.label,
                elapsed,
            }
        })
        .collect()
}

/// Time one pass of `algo` over `input`.
pub fn run_algorithm_once(
    algo: &dyn AlgorithmRunner,
    input: &[i64],
) -> Result<Vec<PassTiming>, BenchError> {
    let variants = algo.get_variant_closures(input);
    if variants.is_empty() {
        return Err(BenchError::NoVariants {
            algorithm: algo.name(),
        });
    }
    Ok(run_single_pass(variants))
}

/// Measure `algo` over `input` repeatedly and reduce to statistics.
pub fn run_algorithm_table(
    algo: &dyn AlgorithmRunner,
    input: &[i64],
    config: &BenchConfig,
) -> Result<Vec<BenchmarkResult>, BenchError> {
    let variants = algo.get_variant_closures(input);
    if variants.is_empty() {
        return Err(BenchError::NoVariants {
            algorithm: algo.name(),
        });
    }
    tracing::debug!(
        algorithm = algo.name(),
        runs = config.timing.runs_per_variant,
        "measuring variants"
    );
    Ok(measure_variants(variants, &config.timing, config.seed))
}
