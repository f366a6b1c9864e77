//! Verification of the integer sorts against the standard library.

use super::code::available_variants;
use crate::error::BenchError;
use crate::utils::bench::random_dataset;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Named inputs every variant must sort like `slice::sort` does.
fn verification_cases() -> Vec<(&'static str, Vec<i64>)> {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    vec![
        ("empty", vec![]),
        ("single", vec![42]),
        ("example", vec![5, 3, 4, 1, 2]),
        ("all_equal", vec![1, 1, 1]),
        ("negatives", vec![0, -3, 7, -3, i64::MIN, i64::MAX, 2]),
        ("sorted", (0..64).collect()),
        ("reversed", (0..64).rev().collect()),
        // Non power of two, with plenty of duplicates
        ("random", random_dataset(1023, 100, &mut rng)),
    ]
}

/// Verify every variant produces the reference ordering on every case.
pub fn verify_all() -> Result<(), BenchError> {
    let variants = available_variants();
    if variants.is_empty() {
        return Err(BenchError::NoVariants {
            algorithm: "int_sort",
        });
    }

    for (case, input) in verification_cases() {
        let mut expected = input.clone();
        expected.sort();

        for variant in &variants {
            if variant.function.sorted(&input) != expected {
                return Err(BenchError::VariantMismatch {
                    algorithm: "int_sort",
                    variant: variant.name,
                    case: case.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::int_sort::code::*;
    use std::borrow::Cow;
    use std::cmp::Ordering;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_example_input() {
        for variant in available_variants() {
            assert_eq!(
                variant.function.sorted(&[5, 3, 4, 1, 2]),
                vec![1, 2, 3, 4, 5],
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_duplicates() {
        for variant in available_variants() {
            assert_eq!(variant.function.sorted(&[1, 1, 1]), vec![1, 1, 1], "{}", variant.name);
        }
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: [i64; 0] = [];
        let mut single = [7i64];

        quicksort(&mut empty);
        heapsort(&mut empty);
        insertion_sort(&mut empty);
        bubble_sort(&mut empty);
        assert!(merge_sort(&empty).is_empty());

        quicksort(&mut single);
        heapsort(&mut single);
        insertion_sort(&mut single);
        bubble_sort(&mut single);
        assert_eq!(single, [7]);
        assert_eq!(&*merge_sort(&single), &[7]);
    }

    #[test]
    fn test_merge_sort_aliases_trivial_input() {
        let empty: [i64; 0] = [];
        let single = [3i64];

        match merge_sort(&empty) {
            Cow::Borrowed(out) => assert!(std::ptr::eq(out, &empty[..])),
            Cow::Owned(_) => panic!("empty input should come back borrowed"),
        }
        match merge_sort(&single) {
            Cow::Borrowed(out) => assert!(std::ptr::eq(out, &single[..])),
            Cow::Owned(_) => panic!("single element should come back borrowed"),
        }
        assert!(matches!(merge_sort(&[2i64, 1]), Cow::Owned(_)));
    }

    /// Orders by `key` only, so equal keys with different tags are "equal".
    #[derive(Clone, Debug)]
    struct Keyed {
        key: u8,
        tag: usize,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let keys = [3u8, 1, 2, 1, 3, 2, 1, 0, 2, 3];
        let input: Vec<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| Keyed { key, tag })
            .collect();

        let sorted = merge_sort(&input);
        for pair in sorted.windows(2) {
            assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                assert!(pair[0].tag < pair[1].tag, "equal keys reordered: {:?}", pair);
            }
        }
    }

    #[test]
    fn test_merge_prefers_left_on_ties() {
        let left = [Keyed { key: 1, tag: 0 }];
        let right = [Keyed { key: 1, tag: 1 }];
        let merged = merge(&left, &right);
        assert_eq!(merged[0].tag, 0);
        assert_eq!(merged[1].tag, 1);
    }

    #[test]
    fn test_choose_pivot_picks_median() {
        // first, middle, last
        assert_eq!(choose_pivot(&[2, 9, 1, 9, 3]), 0);
        assert_eq!(choose_pivot(&[1, 9, 2, 9, 3]), 2);
        assert_eq!(choose_pivot(&[1, 9, 5, 9, 3]), 4);
        assert_eq!(choose_pivot(&[5, 9, 1, 9, 3]), 4);
        assert_eq!(choose_pivot(&[3, 9, 5, 9, 1]), 0);
        // sorted and reverse-sorted input both pick the middle
        assert_eq!(choose_pivot(&[1, 2, 3, 4, 5, 6, 7]), 3);
        assert_eq!(choose_pivot(&[7, 6, 5, 4, 3, 2, 1]), 3);
    }

    #[test]
    fn test_partition_splits_around_pivot() {
        let mut v = vec![8, 3, 5, 3, 9, 1, 5, 7, 2, 5, 6];
        let p = partition(&mut v);

        assert!(v[..p].iter().all(|x| *x < v[p]));
        assert!(v[p + 1..].iter().all(|x| *x >= v[p]));
    }

    #[test]
    fn test_partition_single_element() {
        let mut v = [4];
        assert_eq!(partition(&mut v), 0);
    }

    #[test]
    fn test_quicksort_small_input_below_threshold() {
        let mut v = [4, 2, 5, 1, 3];
        assert!(v.len() <= INSERTION_THRESHOLD);
        quicksort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_heapify_builds_max_heap() {
        let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        heapify(&mut v);

        for i in 1..v.len() {
            let parent = (i - 1) / 2;
            assert!(v[parent] >= v[i], "heap order broken at {}", i);
        }
        assert_eq!(v[0], 9);
    }

    #[test]
    fn test_quicksort_all_equal_keys_on_small_stack() {
        // Equal keys always partition at index 0; recursing on both sides
        // would nest once per element and overflow this stack.
        let handle = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let mut v = vec![7i64; 10_000];
                quicksort(&mut v);
                v
            })
            .expect("spawn sorting thread");

        let v = handle.join().expect("sorting thread panicked");
        assert_eq!(v.len(), 10_000);
        assert!(v.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_quicksort_large_sorted_and_reversed() {
        let expected: Vec<i64> = (0..20_000).collect();

        let mut ascending = expected.clone();
        quicksort(&mut ascending);
        assert_eq!(ascending, expected);

        let mut descending: Vec<i64> = (0..20_000).rev().collect();
        quicksort(&mut descending);
        assert_eq!(descending, expected);
    }

    #[test]
    fn test_sift_down_respects_end() {
        // Root is out of place, but the larger child lies past `end`
        let mut v = [1, 0, 9];
        sift_down(&mut v, 0, 1);
        assert_eq!(v, [1, 0, 9]);

        sift_down(&mut v, 0, 2);
        assert_eq!(v, [9, 0, 1]);
    }

    #[test]
    fn test_bubble_sort_reversed() {
        let mut v: Vec<i64> = (0..100).rev().collect();
        bubble_sort(&mut v);
        assert_eq!(v, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let sorted: Vec<i64> = vec![-5, -1, 0, 0, 2, 3, 3, 10];
        for variant in available_variants() {
            assert_eq!(variant.function.sorted(&sorted), sorted, "{}", variant.name);
        }
    }

    #[test]
    fn test_variant_order_matches_report() {
        let labels: Vec<_> = available_variants().iter().map(|v| v.label).collect();
        assert_eq!(
            labels,
            ["QuickSort", "HeapSort", "MergeSort", "InsertionSort", "BubbleSort"]
        );
    }
}
