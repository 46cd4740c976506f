//! Property-Based Tests for SkinTUI
//!
//! Uses proptest for testing invariants and edge cases:
//! - Enum string round-trips (parse → to_string → parse)
//! - Routine matcher invariants over generated catalogs

use proptest::prelude::*;
use strum::IntoEnumIterator;

use skintui::catalog::{Catalog, Product};
use skintui::routine::{generate_routine, SkinProfile};
use skintui::types::{AgeRange, RoutineStep, SkinType};

// =============================================================================
// Enum Property Tests
// =============================================================================

fn skin_type_strategy() -> impl Strategy<Value = SkinType> {
    prop_oneof![
        Just(SkinType::Normal),
        Just(SkinType::Oily),
        Just(SkinType::Dry),
        Just(SkinType::Combination),
        Just(SkinType::Sensitive),
    ]
}

fn age_range_strategy() -> impl Strategy<Value = AgeRange> {
    prop_oneof![
        Just(AgeRange::Teens),
        Just(AgeRange::Twenties),
        Just(AgeRange::Thirties),
        Just(AgeRange::Forties),
        Just(AgeRange::FiftyPlus),
    ]
}

fn routine_step_strategy() -> impl Strategy<Value = RoutineStep> {
    prop_oneof![
        Just(RoutineStep::Cleanser),
        Just(RoutineStep::Toner),
        Just(RoutineStep::Serum),
        Just(RoutineStep::Moisturizer),
        Just(RoutineStep::Spf),
    ]
}

proptest! {
    /// SkinType: to_string → parse round-trip is identity
    #[test]
    fn skin_type_roundtrip(skin_type in skin_type_strategy()) {
        let s = skin_type.to_string();
        let parsed: SkinType = s.parse().expect("Should parse");
        prop_assert_eq!(skin_type, parsed);
    }

    /// SkinType: Display output is non-empty lowercase
    #[test]
    fn skin_type_display_is_valid(skin_type in skin_type_strategy()) {
        let s = skin_type.to_string();
        prop_assert!(!s.is_empty());
        let lowercase = s.to_lowercase();
        prop_assert_eq!(s, lowercase);
    }

    /// AgeRange: to_string → parse round-trip is identity
    #[test]
    fn age_range_roundtrip(age_range in age_range_strategy()) {
        let s = age_range.to_string();
        let parsed: AgeRange = s.parse().expect("Should parse");
        prop_assert_eq!(age_range, parsed);
    }

    /// RoutineStep: to_string → parse round-trip is identity
    #[test]
    fn routine_step_roundtrip(step in routine_step_strategy()) {
        let s = step.to_string();
        let parsed: RoutineStep = s.parse().expect("Should parse");
        prop_assert_eq!(step, parsed);
    }

    /// RoutineStep: serde form matches the Display form
    #[test]
    fn routine_step_serde_matches_display(step in routine_step_strategy()) {
        let json = serde_json::to_string(&step).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", step));
    }
}

// =============================================================================
// Routine Matcher Property Tests
// =============================================================================

/// Concern keywords the generated catalogs draw from.
const CONCERN_POOL: &[&str] = &["acne", "redness", "dryness", "aging", "dullness"];

fn concern_subset() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(CONCERN_POOL.to_vec()).prop_map(|s| s.to_string()),
        0..3,
    )
}

fn skin_type_subset() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        skin_type_strategy().prop_map(|s| s.to_string()),
        0..3,
    )
}

fn age_range_subset() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        age_range_strategy().prop_map(|a| a.to_string()),
        0..3,
    )
}

prop_compose! {
    fn product_strategy()(
        step in routine_step_strategy(),
        skin_types in skin_type_subset(),
        age_ranges in age_range_subset(),
        concerns in concern_subset(),
        index in 0..1000u32,
    ) -> Product {
        Product {
            name: format!("Product #{}", index),
            step,
            skin_types,
            age_ranges,
            concerns,
            image: None,
            description: String::new(),
        }
    }
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(product_strategy(), 0..25).prop_map(Catalog::new)
}

fn profile_strategy() -> impl Strategy<Value = SkinProfile> {
    (
        skin_type_strategy(),
        age_range_strategy(),
        prop::collection::vec(prop::sample::select(CONCERN_POOL.to_vec()), 1..3),
    )
        .prop_map(|(skin_type, age_range, concerns)| {
            SkinProfile::new(skin_type, format!("I have {}", concerns.join(" and ")), age_range)
        })
}

proptest! {
    /// Routine steps appear in the fixed order with no duplicates, and
    /// the routine never exceeds one product per step.
    #[test]
    fn routine_steps_are_ordered_and_unique(
        catalog in catalog_strategy(),
        profile in profile_strategy(),
    ) {
        let routine = generate_routine(&catalog, &profile);
        prop_assert!(routine.len() <= 5);

        let step_order: Vec<RoutineStep> = RoutineStep::iter().collect();
        let positions: Vec<usize> = routine
            .iter()
            .map(|p| step_order.iter().position(|s| *s == p.step).unwrap())
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(&positions, &sorted, "steps out of order or duplicated");
    }

    /// Every matched product satisfies all three filters.
    #[test]
    fn routine_entries_satisfy_all_filters(
        catalog in catalog_strategy(),
        profile in profile_strategy(),
    ) {
        let routine = generate_routine(&catalog, &profile);
        let concerns_text = profile.concerns.to_lowercase();
        let skin_type = profile.skin_type.to_string();
        let age_range = profile.age_range.to_string();

        for product in routine.iter() {
            prop_assert!(product.skin_types.contains(&skin_type));
            prop_assert!(product.age_ranges.contains(&age_range));
            prop_assert!(product
                .concerns
                .iter()
                .any(|c| concerns_text.contains(c.as_str())));
        }
    }

    /// The first satisfying product in catalog order wins its step.
    #[test]
    fn routine_picks_first_match_per_step(
        catalog in catalog_strategy(),
        profile in profile_strategy(),
    ) {
        let routine = generate_routine(&catalog, &profile);
        let concerns_text = profile.concerns.to_lowercase();
        let skin_type = profile.skin_type.to_string();
        let age_range = profile.age_range.to_string();

        for matched in routine.iter() {
            let first = catalog.iter().find(|p| {
                p.step == matched.step
                    && p.skin_types.contains(&skin_type)
                    && p.age_ranges.contains(&age_range)
                    && p.concerns.iter().any(|c| concerns_text.contains(c.as_str()))
            });
            prop_assert_eq!(first, Some(matched));
        }
    }

    /// A concerns text that mentions no catalog keyword yields an empty
    /// routine, whatever the catalog holds.
    #[test]
    fn unrelated_concerns_yield_empty_routine(catalog in catalog_strategy()) {
        let profile = SkinProfile::new(
            SkinType::Oily,
            "nothing relevant here",
            AgeRange::Twenties,
        );
        let routine = generate_routine(&catalog, &profile);
        prop_assert!(routine.is_empty());
    }

    /// An empty catalog always yields an empty routine.
    #[test]
    fn empty_catalog_yields_empty_routine(profile in profile_strategy()) {
        let routine = generate_routine(&Catalog::default(), &profile);
        prop_assert!(routine.is_empty());
    }
}
