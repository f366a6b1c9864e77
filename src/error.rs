//! Error types for the benchmark harness.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// A variant disagreed with the reference sort.
    #[error("variant '{variant}' of '{algorithm}' failed verification on case '{case}'")]
    VariantMismatch {
        algorithm: &'static str,
        variant: &'static str,
        case: String,
    },

    #[error("algorithm '{algorithm}' has no variants to run")]
    NoVariants { algorithm: &'static str },
}
