//! Property-based tests for the size selectors
//!
//! These tests generate random candidate sets and verify the binary
//! search against a brute-force linear scan, and the aspect scan
//! against its tolerance and fallback contract.

use crate::selector::{best_by_area, best_by_aspect, Target, ASPECT_TOLERANCE};
use crate::size::Size;
use proptest::prelude::*;

fn arb_size() -> impl Strategy<Value = Size> {
    (1u32..=8192, 1u32..=8192).prop_map(|(w, h)| Size::new(w, h))
}

fn arb_candidates() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec(arb_size(), 1..40)
}

/// Minimum achievable area distance over the whole candidate set
fn brute_force_min_distance(candidates: &[Size], target_area: u64) -> u64 {
    candidates
        .iter()
        .map(|size| target_area.abs_diff(size.area()))
        .min()
        .expect("non-empty candidates")
}

proptest! {
    #[test]
    fn prop_area_result_is_near_optimal(
        candidates in arb_candidates(),
        (w, h) in (1u32..=4096, 1u32..=4096),
    ) {
        let target = Target::new(w, h).unwrap();
        let chosen = best_by_area(&candidates, target).unwrap();
        let optimal = brute_force_min_distance(&candidates, target.area());
        prop_assert_eq!(target.area().abs_diff(chosen.area()), optimal);
    }

    #[test]
    fn prop_area_exact_match_is_found(
        candidates in arb_candidates(),
        index in any::<prop::sample::Index>(),
    ) {
        // Use one candidate's own dimensions as the target
        let picked = candidates[index.index(candidates.len())];
        let target = Target::new(picked.width, picked.height).unwrap();
        let chosen = best_by_area(&candidates, target).unwrap();
        prop_assert_eq!(chosen.area(), picked.area());
    }

    #[test]
    fn prop_area_is_idempotent(
        candidates in arb_candidates(),
        (w, h) in (1u32..=4096, 1u32..=4096),
    ) {
        let target = Target::new(w, h).unwrap();
        let first = best_by_area(&candidates, target).unwrap();
        let second = best_by_area(&candidates, target).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_area_does_not_mutate_candidates(
        candidates in arb_candidates(),
        (w, h) in (1u32..=4096, 1u32..=4096),
    ) {
        let target = Target::new(w, h).unwrap();
        let original = candidates.clone();
        best_by_area(&candidates, target).unwrap();
        prop_assert_eq!(candidates, original);
    }

    #[test]
    fn prop_aspect_tolerance_is_respected(
        candidates in arb_candidates(),
        (w, h) in (1u32..=4096, 1u32..=4096),
    ) {
        let target = Target::new(w, h).unwrap();
        let chosen = best_by_aspect(&candidates, target).unwrap();

        let in_tolerance = |size: &Size| {
            (size.aspect_ratio() - target.aspect_ratio()).abs() <= ASPECT_TOLERANCE
        };

        // An out-of-shape result is only legal when nothing matches the shape
        if !in_tolerance(&chosen) {
            prop_assert!(!candidates.iter().any(in_tolerance));
        }
    }

    #[test]
    fn prop_aspect_height_is_minimal_within_pass(
        candidates in arb_candidates(),
        (w, h) in (1u32..=4096, 1u32..=4096),
    ) {
        let target = Target::new(w, h).unwrap();
        let chosen = best_by_aspect(&candidates, target).unwrap();

        let in_tolerance = |size: &Size| {
            (size.aspect_ratio() - target.aspect_ratio()).abs() <= ASPECT_TOLERANCE
        };

        // Within whichever pass produced the result, no candidate gets
        // closer to the target height
        let pool: Vec<Size> = if candidates.iter().any(in_tolerance) {
            candidates.iter().copied().filter(|s| in_tolerance(s)).collect()
        } else {
            candidates.clone()
        };
        let best_height_diff = pool
            .iter()
            .map(|size| size.height.abs_diff(target.height()))
            .min()
            .expect("pool is non-empty");
        prop_assert_eq!(chosen.height.abs_diff(target.height()), best_height_diff);
    }

    #[test]
    fn prop_single_candidate_always_wins(
        size in arb_size(),
        (w, h) in (1u32..=4096, 1u32..=4096),
    ) {
        let target = Target::new(w, h).unwrap();
        let only = [size];
        prop_assert_eq!(best_by_area(&only, target).unwrap(), size);
        prop_assert_eq!(best_by_aspect(&only, target), Some(size));
    }
}
