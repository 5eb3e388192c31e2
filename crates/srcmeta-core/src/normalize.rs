//! # Deterministic Set Normalization
//!
//! Generated build files must not churn between runs, so every string set
//! that ends up in one is deduplicated and sorted before emission. Sorting
//! is plain byte-wise `Ord` on `String` — no locale, no case folding.

/// Deduplicate and sort a list of strings, ascending by byte-wise
/// comparison.
///
/// Empty input is returned unchanged. The transform is idempotent:
/// normalizing already-normalized input yields an equal sequence.
pub fn dedupe_and_sort(mut items: Vec<String>) -> Vec<String> {
    if items.is_empty() {
        return items;
    }

    items.sort();
    items.dedup();
    items
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing twice equals normalizing once.
        #[test]
        fn idempotent(items in prop::collection::vec("[a-zA-Z0-9/._-]{0,12}", 0..16)) {
            let once = dedupe_and_sort(items);
            let twice = dedupe_and_sort(once.clone());
            prop_assert_eq!(twice, once);
        }

        /// Output is strictly ascending, hence sorted and duplicate-free.
        #[test]
        fn output_strictly_ascending(
            items in prop::collection::vec("[a-zA-Z0-9/._-]{0,12}", 0..16),
        ) {
            let normalized = dedupe_and_sort(items);
            for pair in normalized.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        /// Every input value survives, and nothing else appears.
        #[test]
        fn same_value_set(items in prop::collection::vec("[a-z]{0,6}", 0..16)) {
            let normalized = dedupe_and_sort(items.clone());
            for item in &items {
                prop_assert!(normalized.contains(item));
            }
            for item in &normalized {
                prop_assert!(items.contains(item));
            }
        }
    }
}
