//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Every benchmarked algorithm implements [`AlgorithmRunner`] and is added
//! to the registry in [`build_registry`]; the CLI only talks to the trait.

use crate::error::BenchError;
use crate::utils::timer::VariantResult;

/// Result from measuring a variant (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A closure that runs one variant once; the same type the timer consumes.
pub use crate::utils::timer::Variant as VariantClosure;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "int_sort")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "sorting")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, all reading the same `input`.
    /// Each call of a closure is ONE timed execution; the caller decides
    /// how often and in which order to call them.
    fn get_variant_closures<'a>(&'a self, input: &'a [i64]) -> Vec<VariantClosure<'a>>;

    /// Verify correctness of all variants against a reference
    fn verify(&self) -> Result<(), BenchError>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::sorting::int_sort::IntSortRunner);

    registry
}
