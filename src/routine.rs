//! Routine matching.
//!
//! The one real algorithm in the system: map a validated skin profile
//! against the catalog to an ordered routine, at most one product per
//! step. This is a guarded linear scan; catalog sizes are tens of items,
//! so no indexing structure is warranted.

use strum::IntoEnumIterator;

use crate::catalog::{Catalog, Product};
use crate::types::{AgeRange, RoutineStep, SkinType};

/// Validated user inputs for routine matching.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinProfile {
    pub skin_type: SkinType,
    pub concerns: String,
    pub age_range: AgeRange,
}

impl SkinProfile {
    pub fn new(skin_type: SkinType, concerns: impl Into<String>, age_range: AgeRange) -> Self {
        Self {
            skin_type,
            concerns: concerns.into(),
            age_range,
        }
    }
}

/// An ordered routine: at most one product per step, in step order.
///
/// Steps with no matching product are omitted, so the list shrinks
/// rather than padding with placeholders. Length is therefore ≤ 5.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Routine {
    products: Vec<Product>,
}

impl Routine {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Build a routine for the given profile.
///
/// For each step in fixed order, the FIRST product in catalog order wins
/// that satisfies all three filters:
/// - the product is for this step;
/// - its skin types contain the profile's skin type (exact match);
/// - its age ranges contain the profile's age range (exact match);
/// - at least one of its concern keywords appears as a substring of the
///   lower-cased concerns text.
pub fn generate_routine(catalog: &Catalog, profile: &SkinProfile) -> Routine {
    let concerns_text = profile.concerns.to_lowercase();
    let skin_type = profile.skin_type.to_string();
    let age_range = profile.age_range.to_string();

    let products = RoutineStep::iter()
        .filter_map(|step| {
            catalog.iter().find(|product| {
                product.step == step
                    && product.skin_types.iter().any(|s| *s == skin_type)
                    && product.age_ranges.iter().any(|a| *a == age_range)
                    && product
                        .concerns
                        .iter()
                        .any(|c| concerns_text.contains(c.as_str()))
            })
        })
        .cloned()
        .collect();

    Routine { products }
}
