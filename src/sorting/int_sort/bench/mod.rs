//! Benchmark closures for the integer sorts.

use super::code::{available_variants, SortFn};
use crate::registry::VariantClosure;
use std::hint::black_box;

/// Position-weighted checksum of a sorted output: `Σ (i + 1) * v[i]`.
///
/// Two variants that sorted the same input must agree on it, so the
/// results table can show divergence as a relative error.
pub fn fingerprint(sorted: &[i64]) -> f64 {
    sorted
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64 + 1.0) * v as f64)
        .sum()
}

/// Build one closure per variant, each sorting `input` once per call.
///
/// In-place variants get a fresh copy of `input` on every call; the copy is
/// made before the clock starts. The copying variant reads `input` directly.
pub fn variant_closures(input: &[i64]) -> Vec<VariantClosure<'_>> {
    available_variants()
        .into_iter()
        .map(|v| {
            let sort = v.function;

            VariantClosure {
                name: v.name,
                label: v.label,
                description: v.description,
                run: Box::new(move || match sort {
                    SortFn::InPlace(f) => {
                        let mut scratch = input.to_vec();
                        let (elapsed, _) = crate::measure!(f(black_box(scratch.as_mut_slice())));
                        (elapsed, Some(fingerprint(&scratch)))
                    }
                    SortFn::Copying(f) => {
                        let (elapsed, sorted) = crate::measure!(f(black_box(input)));
                        (elapsed, Some(fingerprint(&sorted)))
                    }
                }),
            }
        })
        .collect()
}
