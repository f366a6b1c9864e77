//! Timing system for the sort benchmarks.
//!
//! This module provides:
//! - Optional CPU core pinning for stable measurements
//! - Randomized, interleaved variant execution to avoid ordering bias
//! - Reduction of raw samples into summary statistics

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffled_schedule, Measurement};
pub use super::cpu_affinity::CpuPinGuard;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Never pin
    None,
    /// Pin once before all measurements (minimal overhead).
    /// The fixed config uses `PerExecution`; this stays for callers that
    /// build their own `TimingConfig`.
    Global,
    /// Pin/unpin around each execution
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup runs per variant before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Label used in the single-pass report (e.g. "QuickSort")
    pub label: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs the variant once - returns (measurement, optional fingerprint).
    /// Timing happens inside the closure so setup work stays unmeasured.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    /// Name of the variant
    pub name: String,
    /// Description of the variant
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    /// Sample standard deviation
    pub std_dev: Duration,
    /// Number of samples the statistics were computed from
    pub runs: usize,
    /// Fingerprint of the last output, for cross-variant comparison
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Creates a shuffled task schedule from `seed`
/// 3. Measures each task, pinned according to the config
/// 4. Returns results in the order the variants were given
pub fn measure_variants(
    mut variants: Vec<Variant>,
    config: &TimingConfig,
    seed: u64,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let tasks = shuffled_schedule(variants.len(), samples, seed);

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for variant_idx in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            compute_variant_result(
                variant.name,
                variant.description,
                &times,
                result_samples[idx].take(),
            )
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: &[Measurement],
    result_sample: Option<f64>,
) -> VariantResult {
    if measurements.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            runs: 0,
            result_sample: None,
        };
    }

    let mut sorted = measurements.to_vec();
    sorted.sort();

    let total: Duration = measurements.iter().sum();
    let avg = total / measurements.len() as u32;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: avg,
        median_time: sorted[sorted.len() / 2],
        min_time: sorted[0],
        max_time: sorted[sorted.len() - 1],
        std_dev: calculate_std_dev(measurements, avg),
        runs: measurements.len(),
        result_sample,
    }
}

/// Sample standard deviation of a list of durations around `mean`
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}
